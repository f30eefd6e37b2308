//! The JSON envelope every endpoint except `/show` answers with.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::user::User;
use serde::{Deserialize, Serialize};

/// `{"status_code": 200, "message": "...", "data": [...]}`; `message` and
/// `data` are omitted when absent. A successful read always carries `data`,
/// so an empty page is `"data": []`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
  pub status_code: u16,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data:        Option<Vec<User>>,
}

impl Envelope {
  pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code: status.as_u16(),
      message:     Some(message.into()),
      data:        None,
    }
  }

  pub fn data(message: impl Into<String>, data: Vec<User>) -> Self {
    Self {
      data: Some(data),
      ..Self::message(StatusCode::OK, message)
    }
  }
}

impl IntoResponse for Envelope {
  fn into_response(self) -> Response {
    let status = StatusCode::from_u16(self.status_code)
      .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(self)).into_response()
  }
}
