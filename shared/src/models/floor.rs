//! Floor Model

use serde::{Deserialize, Serialize};

/// Floor entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: i64,
    pub name: String,
    pub canteen_id: i64,
    #[serde(default)]
    pub canteen_name: Option<String>,
    #[serde(default)]
    pub floor_number: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dish_count: u32,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

/// Create floor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorCreate {
    pub name: String,
    pub canteen_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
