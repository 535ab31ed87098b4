//! MinReview Client - client side of the campus canteen review platform
//!
//! Typed access to the MinReview REST API for both the user-facing site and
//! the admin back-office, plus the client-side state built on top of it:
//! the cascading campus → canteen → floor → dish selection, the persisted
//! sessions, the page routing tables and the comment profanity filter.

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod logger;
pub mod router;
pub mod storage;
pub mod store;

pub use api::{AdminApi, UserApi};
pub use config::{ApiFlavor, ClientConfig};
pub use error::{ClientError, ClientResult};
pub use filter::ContentFilter;
pub use http::{HttpClient, NetworkHttpClient};
pub use router::{Navigation, Router, View};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{AdminSessionStore, CatalogSource, DishStore, SessionStore, UserSession};

// Re-export shared types for convenience
pub use shared::{ApiResponse, DishQuery, PageResult};
