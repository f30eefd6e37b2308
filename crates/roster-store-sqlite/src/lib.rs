//! SQLite backend for the roster user store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod rows;
mod schema;
mod store;

pub mod error;
pub mod query;

pub use error::{Error, Result};
pub use store::SqliteStore;
