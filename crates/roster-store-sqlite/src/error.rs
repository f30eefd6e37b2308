//! Error type for `roster-store-sqlite`.
//!
//! Display strings never include the engine error. It stays reachable through
//! [`std::error::Error::source`] so callers can log it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("could not open db file")]
  Open(#[source] tokio_rusqlite::Error),

  #[error("could not create table")]
  Create(#[source] tokio_rusqlite::Error),

  #[error("could not close db file")]
  Close(#[source] tokio_rusqlite::Error),

  #[error("could not insert user")]
  Insert(#[source] tokio_rusqlite::Error),

  #[error("could not retrieve users")]
  Retrieve(#[source] tokio_rusqlite::Error),

  /// A row did not have the shape of a user.
  #[error("could not decode user row")]
  Decode(#[source] rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
