//! Resource API modules
//!
//! Typed wrappers over the backend's REST paths. `UserApi` speaks for the
//! user-facing site, `AdminApi` for the back-office; both are thin and hold
//! no state besides their HTTP client.

pub mod admin;
pub mod captcha;
pub mod user;

pub use admin::AdminApi;
pub use user::UserApi;
