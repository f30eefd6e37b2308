//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::Envelope;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The store failed. Only `message` reaches the client; `source` is logged.
  #[error("store error: {message}")]
  Store {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  pub fn store<E>(message: &'static str, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store { message, source: Box::new(source) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::BadRequest(message) => {
        Envelope::message(StatusCode::BAD_REQUEST, message).into_response()
      }
      ApiError::Store { message, source } => {
        tracing::error!(error = ?source, "{message}");
        Envelope::message(StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
      }
    }
  }
}
