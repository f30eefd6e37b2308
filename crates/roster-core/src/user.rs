//! The user record and its insert payload.

use serde::{Deserialize, Serialize};

/// One row of the `users` table.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:      i64,
  pub name:    String,
  pub age:     i64,
  pub country: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub degree:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub site:    Option<String>,
}

/// Everything needed to insert a user. Any `id` in an incoming payload is
/// ignored; the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
  pub name:    String,
  pub age:     i64,
  pub country: String,
  #[serde(default)]
  pub degree:  Option<String>,
  #[serde(default)]
  pub status:  Option<String>,
  #[serde(default)]
  pub site:    Option<String>,
}

impl NewUser {
  pub fn new(name: impl Into<String>, age: i64, country: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      age,
      country: country.into(),
      degree: None,
      status: None,
      site: None,
    }
  }

  /// Attach the store-assigned identifier.
  pub fn into_user(self, id: i64) -> User {
    User {
      id,
      name:    self.name,
      age:     self.age,
      country: self.country,
      degree:  self.degree,
      status:  self.status,
      site:    self.site,
    }
  }
}
