//! Data models
//!
//! Mirrors of the backend resources. All IDs are `i64`; dates are
//! `NaiveDate` (`YYYY-MM-DD`), times of day stay strings as sent.

pub mod guest;
pub mod meal;
pub mod staff;
pub mod user;

// Re-exports
pub use guest::*;
pub use meal::*;
pub use staff::*;
pub use user::*;
