//! Catalog and account models
//!
//! Mirrored from the MinReview server schema. The client never owns or
//! validates these records beyond their shape: every list is refetched on
//! navigation or selection change. All IDs are `i64`, wire names are camelCase.

pub mod account;
pub mod campus;
pub mod canteen;
pub mod category;
pub mod comment;
pub mod dish;
pub mod floor;

// Re-exports
pub use account::*;
pub use campus::*;
pub use canteen::*;
pub use category::*;
pub use comment::*;
pub use dish::*;
pub use floor::*;

/// Status value the backend uses for enabled records
pub const STATUS_ENABLED: i32 = 1;

/// Status value the backend uses for disabled records
pub const STATUS_DISABLED: i32 = 0;

/// Status change body shared by the `/status/{id}` admin endpoints
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct StatusUpdate {
    pub status: i32,
}
