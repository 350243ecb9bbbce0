use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ModelError;

/// A user record, keyed by `id` in the user store.
/// Capitalized element names are accepted on input (`<User><Id>1</Id>...`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// identifier of the user
    #[serde(default, alias = "Id", alias = "ID")]
    #[schema(example = "1")]
    pub id: String,
    /// name of the user
    #[serde(default, alias = "Name")]
    #[schema(default = "john")]
    pub name: String,
    /// age of the user
    #[serde(default, alias = "Age")]
    #[schema(default = 21)]
    pub age: i64,
}

/// Body of a create request. Every field is optional and overrides the
/// record seeded from the path identifier when present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserInput {
    /// overrides the path identifier when present
    #[serde(default, alias = "Id", alias = "ID")]
    pub id: Option<String>,
    /// name of the user
    #[serde(default, alias = "Name")]
    #[schema(default = "john")]
    pub name: Option<String>,
    /// age of the user
    #[serde(default, alias = "Age")]
    #[schema(default = 21)]
    pub age: Option<i64>,
}

impl User {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    /// Merge the fields present in `input` onto this record.
    pub fn merge(mut self, input: UserInput) -> Self {
        if let Some(id) = input.id.filter(|id| !id.trim().is_empty()) { self.id = id; }
        if let Some(name) = input.name { self.name = name; }
        if let Some(age) = input.age { self.age = age; }
        self
    }
}

pub fn validate_id(id: &str) -> Result<(), ModelError> {
    if id.trim().is_empty() { return Err(ModelError::Validation("user id required".into())); }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_only_present_fields() {
        let seeded = User::with_id("7");
        let merged = seeded.merge(UserInput { id: None, name: Some("Melissa".into()), age: None });
        assert_eq!(merged, User { id: "7".into(), name: "Melissa".into(), age: 0 });
    }

    #[test]
    fn merge_body_id_wins_over_seed() {
        let merged = User::with_id("7").merge(UserInput { id: Some("8".into()), name: None, age: Some(30) });
        assert_eq!(merged.id, "8");
        assert_eq!(merged.age, 30);
    }

    #[test]
    fn blank_body_id_keeps_seed() {
        let merged = User::with_id("7").merge(UserInput { id: Some("  ".into()), ..UserInput::default() });
        assert_eq!(merged.id, "7");
    }

    #[test]
    fn validate_id_rejects_blank() {
        assert!(validate_id("1").is_ok());
        assert!(matches!(validate_id(" "), Err(ModelError::Validation(_))));
    }

    #[test]
    fn capitalized_field_names_are_accepted() {
        let u: User = serde_json::from_str(r#"{"Id":"1","Name":"Melissa","Age":30}"#).unwrap();
        assert_eq!(u, User { id: "1".into(), name: "Melissa".into(), age: 30 });
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let u: User = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(u, User { id: "1".into(), name: String::new(), age: 0 });
    }
}
