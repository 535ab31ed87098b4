//! User and admin account models

use serde::{Deserialize, Serialize};

/// Site user as listed by the admin back-office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub gender: i32,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub update_time: Option<String>,
}

/// Profile of the logged-in user, persisted next to the session token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub gender: Option<i32>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Back-office administrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i64,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub update_time: Option<String>,
}

/// Add admin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreate {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Rename admin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminNameUpdate {
    pub name: String,
}

/// Change admin password payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
    pub old_password: String,
    pub new_password: String,
}
