//! Handlers for the user endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/insert` | Body: [`NewUser`]; any `id` is ignored |
//! | `POST` | `/paginate` | Body: [`PaginateBody`] |
//! | `GET`  | `/users` | Optional `limit`, `status`, `country`, `order_by`, `order` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
};
use roster_core::{
  query::{FilterSpec, OrderSpec, PageWindow, RetrieveOptions, null_as_default},
  store::UserStore,
  user::NewUser,
};
use serde::Deserialize;

use crate::{error::ApiError, response::Envelope};

// ─── Insert ───────────────────────────────────────────────────────────────────

/// `POST /insert`
pub async fn insert<S>(
  State(store): State<Arc<S>>,
  payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<Envelope, ApiError>
where
  S: UserStore,
{
  let Json(new_user) = payload
    .map_err(|e| ApiError::BadRequest(format!("Could not decode JSON: {}", e.body_text())))?;

  let user = store
    .insert(new_user)
    .await
    .map_err(|e| ApiError::store("Failed to insert user", e))?;

  tracing::info!(id = user.id, "inserted user");
  Ok(Envelope::message(StatusCode::OK, "User inserted successfully"))
}

// ─── Paginate ─────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /paginate`.
///
/// `pageSize` and `page` default to 0 when absent or `null`, which is
/// rejected. A missing or `null` `orderBy` / `filters` means no constraint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginateBody {
  #[serde(default, deserialize_with = "null_as_default")]
  pub page_size: i64,
  #[serde(default, deserialize_with = "null_as_default")]
  pub page:      i64,
  #[serde(default, deserialize_with = "null_as_default")]
  pub order_by:  OrderSpec,
  #[serde(default, deserialize_with = "null_as_default")]
  pub filters:   FilterSpec,
}

impl PaginateBody {
  /// The page window, once both numbers are known to be at least 1.
  pub fn window(&self) -> Result<PageWindow, ApiError> {
    require_positive("pageSize", self.page_size)?;
    require_positive("page", self.page)?;
    Ok(PageWindow::new(self.page, self.page_size))
  }
}

fn require_positive(field: &str, value: i64) -> Result<(), ApiError> {
  match value {
    0 => Err(ApiError::BadRequest(format!("{field} must be specified"))),
    v if v < 0 => Err(ApiError::BadRequest(format!("{field} must be at least 1"))),
    _ => Ok(()),
  }
}

/// `POST /paginate`
pub async fn paginate<S>(
  State(store): State<Arc<S>>,
  payload: Result<Json<PaginateBody>, JsonRejection>,
) -> Result<Envelope, ApiError>
where
  S: UserStore,
{
  let Json(body) = payload
    .map_err(|e| ApiError::BadRequest(format!("Invalid request payload: {}", e.body_text())))?;
  let window = body.window()?;

  let users = store
    .paginate(window, &body.order_by, &body.filters)
    .await
    .map_err(|e| ApiError::store("Failed to retrieve users", e))?;

  Ok(Envelope::data("Sent data successfully!", users))
}

// ─── Retrieve ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub limit:    Option<i64>,
  /// Comma-separated statuses.
  pub status:   Option<String>,
  /// Comma-separated countries.
  pub country:  Option<String>,
  pub order_by: Option<String>,
  /// `asc` or `desc`; only applied together with `order_by`.
  pub order:    Option<String>,
}

impl ListParams {
  pub fn into_options(self) -> Result<RetrieveOptions, ApiError> {
    let mut options = RetrieveOptions::new()
      .with_statuses(split_list(self.status.as_deref()))
      .with_countries(split_list(self.country.as_deref()));
    if let Some(limit) = self.limit {
      options = options.with_limit(limit);
    }
    if let (Some(column), Some(direction)) = (&self.order_by, &self.order) {
      options = options
        .order_by(column, direction)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }
    Ok(options)
  }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
  raw
    .map(|s| {
      s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
    })
    .unwrap_or_default()
}

/// `GET /users[?limit=..][&status=a,b][&country=x,y][&order_by=age&order=desc]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Envelope, ApiError>
where
  S: UserStore,
{
  let Query(params) =
    params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let options = params.into_options()?;

  let users = store
    .retrieve(&options)
    .await
    .map_err(|e| ApiError::store("Failed to retrieve users", e))?;

  Ok(Envelope::data("Sent data successfully!", users))
}
