//! JSON/HTTP API for the roster user store.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::store::UserStore`].
//! Transport concerns (listening, tracing layers, shutdown) are the caller's
//! responsibility.

pub mod error;
pub mod response;
pub mod show;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use roster_core::store::UserStore;

pub use error::ApiError;
pub use response::Envelope;

/// Build the API router for `store`.
///
/// The store is shared by every handler; it is constructed once by the
/// caller and passed in here.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: UserStore + 'static,
{
  Router::new()
    .route("/insert", post(users::insert::<S>))
    .route("/paginate", post(users::paginate::<S>))
    .route("/users", get(users::list::<S>))
    .route("/show", get(show::handler::<S>))
    .with_state(store)
}
