//! Comment Model

use serde::{Deserialize, Serialize};

/// Comment on a dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub dish_id: i64,
    pub content: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub like_count: u32,
    /// Author display name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

/// New comment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreate {
    pub dish_id: i64,
    pub user_id: i64,
    pub content: String,
    pub avatar_url: String,
    pub user_name: String,
}
