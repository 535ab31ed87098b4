//! Client-related types shared between server and client
//!
//! Auth request/response bodies for the user site and the admin back-office.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// User site
// =============================================================================

/// User login/register request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCredentials {
    pub name: String,
    pub password: String,
}

/// User login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginResponse {
    pub token: String,
    #[serde(default)]
    pub user_info: UserInfo,
}

// =============================================================================
// Admin back-office
// =============================================================================

/// Admin login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Admin login response data, persisted as-is as the admin profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub id: i64,
    pub username: String,
    pub name: String,
}

/// Uploaded file location returned by the image upload endpoint
pub type UploadedUrl = String;
