//! Decoding `users` rows into [`User`] values.

use roster_core::user::User;
use rusqlite::{Row, Rows};

use crate::{Error, Result};

/// Decode one row laid out as [`SELECT_USERS`](crate::query::SELECT_USERS).
fn decode_user(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:      row.get(0)?,
    name:    row.get(1)?,
    age:     row.get(2)?,
    country: row.get(3)?,
    degree:  row.get(4)?,
    status:  row.get(5)?,
    site:    row.get(6)?,
  })
}

/// Drain `rows` into users.
///
/// All-or-nothing: the first bad row fails the whole call. The cursor is
/// borrowed from its statement, so it is released when the caller's
/// statement drops, whichever way this returns.
pub fn collect_users(mut rows: Rows<'_>) -> Result<Vec<User>> {
  let mut users = Vec::new();
  while let Some(row) = rows.next().map_err(|e| Error::Retrieve(e.into()))? {
    users.push(decode_user(row).map_err(Error::Decode)?);
  }
  Ok(users)
}
