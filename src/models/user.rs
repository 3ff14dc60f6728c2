use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Identifier of the one profile row every request reads and writes.
pub const PROFILE_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Replacement values for the profile, as submitted by a form or JSON body.
///
/// Fields are optional because clients may omit them; an omitted field is
/// written as NULL and rejected by the store's NOT NULL constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl User {
    /// The record as it looks after `update` is applied.
    pub fn with_update(&self, update: &ProfileUpdate) -> User {
        User {
            id: self.id,
            name: update.name.clone().unwrap_or_default(),
            email: update.email.clone().unwrap_or_default(),
            phone: update.phone.clone().unwrap_or_default(),
        }
    }
}
