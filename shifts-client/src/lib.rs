//! Shifts Client - HTTP client for the shifts backend
//!
//! Typed REST wrappers for users, staff, guests and meal orders, a
//! persisted bearer token, observable state stores and the route table.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod router;
pub mod store;
pub mod token;

pub use app::AppState;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use router::{Resolved, RouteRecord, Router, View};
pub use store::{GuestStore, MealStore, StaffStore, UserStore};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
pub use shared::{ApiResponse, models};
