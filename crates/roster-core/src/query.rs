//! Request-shaped value objects that drive the WHERE, ORDER BY and
//! LIMIT/OFFSET parts of a user query.
//!
//! Column names and sort directions are closed enums, so anything that ends
//! up interpolated into SQL text has already been checked against the
//! allow-list. Filter values are free text and are only ever bound.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{Error, Result};

// ─── Ordering ────────────────────────────────────────────────────────────────

/// Columns a query may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SortColumn {
  Id,
  Age,
  Name,
}

impl SortColumn {
  pub fn as_sql(self) -> &'static str {
    match self {
      SortColumn::Id => "id",
      SortColumn::Age => "age",
      SortColumn::Name => "name",
    }
  }
}

impl FromStr for SortColumn {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "id" => Ok(SortColumn::Id),
      "age" => Ok(SortColumn::Age),
      "name" => Ok(SortColumn::Name),
      _ => Err(Error::InvalidOrderColumn(s.to_owned())),
    }
  }
}

impl TryFrom<String> for SortColumn {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { s.parse() }
}

/// Sort direction for a single ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SortDirection {
  Asc,
  Desc,
}

impl SortDirection {
  pub fn as_sql(self) -> &'static str {
    match self {
      SortDirection::Asc => "ASC",
      SortDirection::Desc => "DESC",
    }
  }
}

impl FromStr for SortDirection {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "asc" | "ascending" => Ok(SortDirection::Asc),
      "desc" | "descending" => Ok(SortDirection::Desc),
      _ => Err(Error::InvalidOrderDirection(s.to_owned())),
    }
  }
}

impl TryFrom<String> for SortDirection {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { s.parse() }
}

/// Multi-key ordering for paginated queries.
///
/// Keys always render in the order id, age, name, whatever order the caller
/// supplied them in. A `null` or blank direction leaves its key unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSpec {
  #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "direction_or_unset")]
  pub id:   Option<SortDirection>,
  #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "direction_or_unset")]
  pub age:  Option<SortDirection>,
  #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "direction_or_unset")]
  pub name: Option<SortDirection>,
}

fn direction_or_unset<'de, D>(deserializer: D) -> Result<Option<SortDirection>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<String>::deserialize(deserializer)? {
    Some(raw) if !raw.trim().is_empty() => raw.parse().map(Some).map_err(de::Error::custom),
    _ => Ok(None),
  }
}

impl OrderSpec {
  /// The present keys in rendering precedence.
  pub fn keys(&self) -> impl Iterator<Item = (SortColumn, SortDirection)> {
    [
      (SortColumn::Id, self.id),
      (SortColumn::Age, self.age),
      (SortColumn::Name, self.name),
    ]
    .into_iter()
    .filter_map(|(column, direction)| direction.map(|d| (column, d)))
  }

  pub fn is_empty(&self) -> bool { self.keys().next().is_none() }
}

// ─── Filtering ───────────────────────────────────────────────────────────────

/// Equality filters for paginated queries. Every field is optional; an unset
/// or empty field adds no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
  /// Case-insensitive exact match.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status:    Option<String>,
  /// Case-insensitive membership; `null` reads as empty.
  #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
  pub countries: Vec<String>,
  /// Exact match; only positive ages constrain.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub age:       Option<i64>,
  /// Case-insensitive exact match.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub degree:    Option<String>,
}

impl FilterSpec {
  pub fn status(&self) -> Option<&str> { non_empty(self.status.as_deref()) }

  pub fn countries(&self) -> &[String] { &self.countries }

  pub fn age(&self) -> Option<i64> { self.age.filter(|age| *age > 0) }

  pub fn degree(&self) -> Option<&str> { non_empty(self.degree.as_deref()) }

  pub fn is_empty(&self) -> bool {
    self.status().is_none()
      && self.countries.is_empty()
      && self.age().is_none()
      && self.degree().is_none()
  }
}

fn non_empty(s: Option<&str>) -> Option<&str> { s.filter(|s| !s.is_empty()) }

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// A 1-indexed page of `page_size` rows.
///
/// No validation happens here: a page below 1 produces a non-positive offset
/// which is handed to the database as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
  pub page:      i64,
  pub page_size: i64,
}

impl PageWindow {
  pub fn new(page: i64, page_size: i64) -> Self { Self { page, page_size } }

  pub fn offset(&self) -> i64 {
    self.page.saturating_sub(1).saturating_mul(self.page_size)
  }
}

// ─── Bulk retrieval ──────────────────────────────────────────────────────────

/// Options for the unpaginated read path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetrieveOptions {
  /// Row cap; ignored unless positive.
  pub limit:     Option<i64>,
  /// Case-insensitive membership over `status`.
  pub statuses:  Vec<String>,
  /// Case-insensitive membership over `country`.
  pub countries: Vec<String>,
  pub order:     Option<(SortColumn, SortDirection)>,
}

impl RetrieveOptions {
  pub fn new() -> Self { Self::default() }

  pub fn with_limit(mut self, limit: i64) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn with_statuses<I, T>(mut self, statuses: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    self.statuses = statuses.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_countries<I, T>(mut self, countries: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    self.countries = countries.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_order(mut self, column: SortColumn, direction: SortDirection) -> Self {
    self.order = Some((column, direction));
    self
  }

  /// Parse and set the ordering from raw strings.
  pub fn order_by(self, column: &str, direction: &str) -> Result<Self> {
    let direction: SortDirection = direction.parse()?;
    let column: SortColumn = column.parse()?;
    Ok(self.with_order(column, direction))
  }

  /// The row cap, if one applies.
  pub fn effective_limit(&self) -> Option<i64> { self.limit.filter(|l| *l > 0) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn direction_parses_case_insensitively() {
    assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
    assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    assert_eq!(
      "Descending".parse::<SortDirection>().unwrap(),
      SortDirection::Desc
    );
  }

  #[test]
  fn invalid_direction_is_an_error_not_a_panic() {
    let err = "sideways".parse::<SortDirection>().unwrap_err();
    assert_eq!(err, Error::InvalidOrderDirection("sideways".into()));

    let err = RetrieveOptions::new().order_by("age", "up").unwrap_err();
    assert_eq!(err, Error::InvalidOrderDirection("up".into()));
  }

  #[test]
  fn column_outside_allow_list_is_rejected() {
    let err = RetrieveOptions::new()
      .order_by("age; DROP TABLE users", "asc")
      .unwrap_err();
    assert!(matches!(err, Error::InvalidOrderColumn(_)));
  }

  #[test]
  fn order_spec_keys_follow_fixed_precedence() {
    let order: OrderSpec =
      serde_json::from_str(r#"{"name":"desc","id":"asc","age":"asc"}"#).unwrap();
    let keys: Vec<_> = order.keys().collect();
    assert_eq!(keys, vec![
      (SortColumn::Id, SortDirection::Asc),
      (SortColumn::Age, SortDirection::Asc),
      (SortColumn::Name, SortDirection::Desc),
    ]);
    assert!(OrderSpec::default().is_empty());
  }

  #[test]
  fn order_spec_rejects_bad_direction_on_deserialize() {
    let res = serde_json::from_str::<OrderSpec>(r#"{"age":"random"}"#);
    let msg = res.unwrap_err().to_string();
    assert!(msg.contains("invalid order direction"), "{msg}");
  }

  #[test]
  fn empty_strings_and_zero_age_are_unset() {
    let filters = FilterSpec {
      status:    Some(String::new()),
      countries: vec![],
      age:       Some(0),
      degree:    Some(String::new()),
    };
    assert!(filters.is_empty());
    assert_eq!(filters.status(), None);
    assert_eq!(filters.age(), None);

    let filters: FilterSpec =
      serde_json::from_str(r#"{"status":"active","age":30}"#).unwrap();
    assert_eq!(filters.status(), Some("active"));
    assert_eq!(filters.age(), Some(30));
    assert!(filters.countries().is_empty());
  }

  #[test]
  fn null_and_blank_values_mean_no_constraint() {
    let order: OrderSpec =
      serde_json::from_str(r#"{"id":null,"age":"","name":"  "}"#).unwrap();
    assert!(order.is_empty());

    let order: OrderSpec = serde_json::from_str(r#"{"id":"","age":"desc"}"#).unwrap();
    assert_eq!(order.keys().collect::<Vec<_>>(), vec![(
      SortColumn::Age,
      SortDirection::Desc
    )]);

    let filters: FilterSpec =
      serde_json::from_str(r#"{"status":null,"countries":null,"age":null}"#).unwrap();
    assert!(filters.is_empty());
  }

  #[test]
  fn negative_age_is_unset() {
    let filters = FilterSpec { age: Some(-4), ..FilterSpec::default() };
    assert_eq!(filters.age(), None);
    assert!(filters.is_empty());
  }

  #[test]
  fn page_offset() {
    assert_eq!(PageWindow::new(1, 10).offset(), 0);
    assert_eq!(PageWindow::new(3, 25).offset(), 50);
    assert_eq!(PageWindow::new(0, 10).offset(), -10);
  }

  #[test]
  fn retrieve_limit_only_applies_when_positive() {
    assert_eq!(RetrieveOptions::new().effective_limit(), None);
    assert_eq!(RetrieveOptions::new().with_limit(0).effective_limit(), None);
    assert_eq!(RetrieveOptions::new().with_limit(5).effective_limit(), Some(5));
  }
}
