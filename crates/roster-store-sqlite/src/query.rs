//! SQL text assembly for user reads.
//!
//! Only allow-listed identifiers reach the SQL text: column names are
//! `&'static str` literals from this module or come from
//! [`SortColumn::as_sql`], directions from [`SortDirection::as_sql`]. Every
//! filter value is pushed onto [`BuiltQuery::args`] and bound positionally.
//! The page window is the one numeric exception and is rendered verbatim.

use roster_core::query::{
  FilterSpec, OrderSpec, PageWindow, RetrieveOptions, SortColumn, SortDirection,
};
use rusqlite::types::Value;

/// Projection shared by every read; column order matches the row mapper.
pub const SELECT_USERS: &str =
  "SELECT id, name, age, country, degree, status, site FROM users";

/// SQL text plus the values for its `?` placeholders, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
  pub sql:  String,
  pub args: Vec<Value>,
}

impl BuiltQuery {
  /// `WHERE 1=1` lets every filter be appended uniformly as `AND ...`.
  fn filtered() -> Self {
    Self {
      sql:  format!("{SELECT_USERS} WHERE 1=1"),
      args: Vec::new(),
    }
  }

  fn and_equals_ci(&mut self, column: &'static str, value: &str) {
    self.sql.push_str(&format!(" AND LOWER({column}) = LOWER(?)"));
    self.args.push(Value::Text(value.to_owned()));
  }

  fn and_equals(&mut self, column: &'static str, value: i64) {
    self.sql.push_str(&format!(" AND {column} = ?"));
    self.args.push(Value::Integer(value));
  }

  fn and_in_ci(&mut self, column: &'static str, values: &[String]) {
    if values.is_empty() {
      return;
    }
    let placeholders = vec!["LOWER(?)"; values.len()].join(", ");
    self
      .sql
      .push_str(&format!(" AND LOWER({column}) IN ({placeholders})"));
    self
      .args
      .extend(values.iter().map(|v| Value::Text(v.clone())));
  }

  fn order_by<I>(&mut self, keys: I)
  where
    I: IntoIterator<Item = (SortColumn, SortDirection)>,
  {
    let clauses: Vec<String> = keys
      .into_iter()
      .map(|(column, direction)| format!("{} {}", column.as_sql(), direction.as_sql()))
      .collect();
    if !clauses.is_empty() {
      self.sql.push_str(" ORDER BY ");
      self.sql.push_str(&clauses.join(", "));
    }
  }
}

/// Every user, no filters and no implicit ordering.
pub fn all_users() -> BuiltQuery {
  BuiltQuery {
    sql:  SELECT_USERS.to_owned(),
    args: Vec::new(),
  }
}

/// The paginated query.
///
/// Filters are always applied in the order status, countries, age, degree;
/// ordering keys in the order id, age, name; the page window comes last.
pub fn page_query(
  filters: &FilterSpec,
  order: &OrderSpec,
  window: PageWindow,
) -> BuiltQuery {
  let mut query = BuiltQuery::filtered();

  if let Some(status) = filters.status() {
    query.and_equals_ci("status", status);
  }
  query.and_in_ci("country", filters.countries());
  if let Some(age) = filters.age() {
    query.and_equals("age", age);
  }
  if let Some(degree) = filters.degree() {
    query.and_equals_ci("degree", degree);
  }

  query.order_by(order.keys());

  query.sql.push_str(&format!(
    " LIMIT {} OFFSET {}",
    window.page_size,
    window.offset()
  ));

  query
}

/// The unpaginated read path: status and country membership, one ordering
/// key, and a bound row cap.
pub fn retrieve_query(options: &RetrieveOptions) -> BuiltQuery {
  let mut query = BuiltQuery::filtered();

  query.and_in_ci("status", &options.statuses);
  query.and_in_ci("country", &options.countries);
  query.order_by(options.order);

  if let Some(limit) = options.effective_limit() {
    query.sql.push_str(" LIMIT ?");
    query.args.push(Value::Integer(limit));
  }

  query
}
