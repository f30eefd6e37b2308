//! The `UserStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  query::{FilterSpec, OrderSpec, PageWindow, RetrieveOptions},
  user::{NewUser, User},
};

/// Abstraction over a user store backend.
///
/// Users are only ever inserted and read. All methods return `Send` futures
/// so the trait can be used behind `axum` on a multi-threaded runtime.
pub trait UserStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new user and return it with its store-assigned id.
  fn insert(
    &self,
    user: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Every user, in whatever order the backend yields them.
  fn retrieve_all(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// Unpaginated retrieval with optional membership filters, a single
  /// ordering key and a row cap.
  fn retrieve<'a>(
    &'a self,
    options: &'a RetrieveOptions,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + 'a;

  /// One page of users matching `filters`, ordered by `order`.
  ///
  /// The window is not validated here; callers reject non-positive pages and
  /// sizes before calling.
  fn paginate<'a>(
    &'a self,
    window: PageWindow,
    order: &'a OrderSpec,
    filters: &'a FilterSpec,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + 'a;
}
