//! Shared types for the MinReview client
//!
//! Wire types mirrored from the MinReview backend: the `{code, msg, data}`
//! envelope, list queries and the catalog/account models.

pub mod client;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use request::{DishQuery, DEFAULT_PAGE_SIZE};
pub use response::{ApiResponse, PageResult, API_CODE_SUCCESS};
