//! [`SqliteStore`] — the SQLite implementation of [`UserStore`].

use std::path::Path;

use roster_core::{
  query::{FilterSpec, OrderSpec, PageWindow, RetrieveOptions},
  store::UserStore,
  user::{NewUser, User},
};

use crate::{
  query::{self, BuiltQuery},
  rows::collect_users,
  schema::{INSERT_USER, SCHEMA},
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A user store backed by a single SQLite file.
///
/// Cloning is cheap — clones share one background connection. No locking is
/// layered on top; SQLite serialises access itself.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and create the `users` table if it
  /// does not exist yet.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::Open)?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened user store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::Open)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(Error::Create)
  }

  /// Close the underlying connection. Any clone still around fails every
  /// later call.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await.map_err(Error::Close)
  }

  #[cfg(test)]
  pub(crate) fn connection(&self) -> &tokio_rusqlite::Connection { &self.conn }

  /// Run a built query and decode every row.
  async fn fetch(&self, query: BuiltQuery) -> Result<Vec<User>> {
    tracing::debug!(sql = %query.sql, args = query.args.len(), "querying users");
    let BuiltQuery { sql, args } = query;

    self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query(rusqlite::params_from_iter(args.iter()))?;
        // `rows` borrows `stmt`; both drop when the closure returns.
        Ok(collect_users(rows))
      })
      .await
      .map_err(Error::Retrieve)?
  }
}

// ─── UserStore impl ──────────────────────────────────────────────────────────

impl UserStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, user: NewUser) -> Result<User> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          INSERT_USER,
          rusqlite::params![
            user.name,
            user.age,
            user.country,
            user.degree,
            user.status,
            user.site,
          ],
        )?;
        Ok(user.into_user(conn.last_insert_rowid()))
      })
      .await
      .map_err(Error::Insert)
  }

  async fn retrieve_all(&self) -> Result<Vec<User>> {
    self.fetch(query::all_users()).await
  }

  async fn retrieve(&self, options: &RetrieveOptions) -> Result<Vec<User>> {
    self.fetch(query::retrieve_query(options)).await
  }

  async fn paginate(
    &self,
    window: PageWindow,
    order: &OrderSpec,
    filters: &FilterSpec,
  ) -> Result<Vec<User>> {
    self.fetch(query::page_query(filters, order, window)).await
  }
}
