//! Shared types for the shifts service
//!
//! Wire types used by the client: entity models, submit payloads,
//! the response envelope and auth DTOs.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use response::{API_CODE_CREATED, API_CODE_SUCCESS, ApiResponse};
pub use serde::{Deserialize, Serialize};
