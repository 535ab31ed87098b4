//! Client-side state containers
//!
//! Each store is an explicit value owned by whoever renders the screens that
//! need it; all mutation goes through the store's methods.

pub mod admin;
pub mod dish;
pub mod session;

pub use admin::AdminSessionStore;
pub use dish::{CatalogSource, DishStore};
pub use session::{SessionStore, UserSession};
