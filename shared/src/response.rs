//! API Response types
//!
//! The MinReview backend wraps every payload in the same envelope:
//! ```json
//! {
//!     "code": 1,
//!     "msg": "success",
//!     "data": { ... }
//! }
//! ```
//! `code == 1` marks success; anything else is an application failure whose
//! `msg` is meant to be shown to the user verbatim.

use serde::{Deserialize, Serialize};

/// Envelope code marking a successful call
pub const API_CODE_SUCCESS: i32 = 1;

/// Envelope code the backend uses for application failures
pub const API_CODE_ERROR: i32 = 0;

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (1 = success, others = error)
    pub code: i32,
    /// Human-readable message, may be null on success
    #[serde(default)]
    pub msg: Option<String>,
    /// Response data, absent for write operations
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS,
            msg: Some("success".to_string()),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: API_CODE_ERROR,
            msg: Some(msg.into()),
            data: None,
        }
    }

    /// Whether the envelope carries the success code
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }

    /// Server message, empty when absent
    pub fn message(&self) -> &str {
        self.msg.as_deref().unwrap_or_default()
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult<T> {
    /// Total number of matching records across all pages
    pub total: u64,
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            total: 0,
            list: Vec::new(),
        }
    }
}

impl<T> PageResult<T> {
    /// Number of pages for the given page size
    pub fn total_pages(&self, page_size: u32) -> u32 {
        if page_size == 0 {
            0
        } else {
            self.total.div_ceil(page_size as u64) as u32
        }
    }
}
