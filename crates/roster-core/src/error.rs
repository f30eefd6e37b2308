//! Error types for `roster-core`.

use thiserror::Error;

/// Validation failures raised while building request value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid order direction: {0:?}")]
  InvalidOrderDirection(String),

  #[error("invalid order column: {0:?}")]
  InvalidOrderColumn(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
