//! Core types and trait definitions for the roster user store.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! and the HTTP layer both depend on it.

pub mod error;
pub mod query;
pub mod store;
pub mod user;

pub use error::{Error, Result};
