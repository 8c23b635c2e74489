use serde::{Deserialize, Serialize};

use crate::errors_stub::StubError;

/// A fully materialized user profile as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
}

impl User {
    /// The profile served for an id marked as existing when no earlier
    /// create produced one.
    pub fn default_for_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            age: 30,
        }
    }
}

/// A candidate profile in its textual wire form, before type coercion.
///
/// `age` stays a string here: it may be missing or non-numeric until the
/// validation rules have run. A candidate never carries an id; ids exist
/// only on [`User`], once assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
}

impl UserFields {
    /// Assign a field by its wire name. Unknown keys are ignored.
    pub fn insert(&mut self, key: &str, value: &str) {
        let value = Some(value.to_string());
        match key {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "email" => self.email = value,
            "age" => self.age = value,
            _ => {}
        }
    }

    /// Coerce the textual fields into a wire record under the given id.
    ///
    /// Missing names and email become empty strings and a missing age
    /// becomes 0, matching what the service echoes for them. Non-numeric
    /// age text is a fatal stub-layer failure at this point, not a
    /// business validation outcome.
    pub fn materialize(&self, id: impl Into<String>) -> Result<User, StubError> {
        let age_text = self.age.as_deref().unwrap_or("0");
        let age = age_text
            .parse()
            .map_err(|_| StubError::NonNumericAge(age_text.to_string()))?;
        Ok(User {
            id: id.into(),
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            age,
        })
    }
}
