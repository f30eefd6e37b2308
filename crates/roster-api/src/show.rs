//! Handler for `GET /show` and the plain-text table it renders.

use std::sync::Arc;

use axum::extract::State;
use comfy_table::{CellAlignment, Table, presets::ASCII_FULL};
use roster_core::{store::UserStore, user::User};

use crate::error::ApiError;

const HEADER: [&str; 7] = ["ID", "Name", "Age", "Country", "Degree", "Status", "Site"];

/// Render `users` as an uncoloured ASCII table, one row per user. Missing
/// optional fields render as empty cells.
pub fn render_table(users: &[User]) -> String {
  let mut table = Table::new();
  table.load_preset(ASCII_FULL).set_header(HEADER);

  for user in users {
    table.add_row(vec![
      user.id.to_string(),
      user.name.clone(),
      user.age.to_string(),
      user.country.clone(),
      user.degree.clone().unwrap_or_default(),
      user.status.clone().unwrap_or_default(),
      user.site.clone().unwrap_or_default(),
    ]);
  }

  // ID and Age are numeric.
  for index in [0, 2] {
    if let Some(column) = table.column_mut(index) {
      column.set_cell_alignment(CellAlignment::Right);
    }
  }

  table.to_string()
}

/// `GET /show` — every user as a text table.
pub async fn handler<S>(State(store): State<Arc<S>>) -> Result<String, ApiError>
where
  S: UserStore,
{
  let users = store
    .retrieve_all()
    .await
    .map_err(|e| ApiError::store("Failed to retrieve users", e))?;
  Ok(render_table(&users))
}
