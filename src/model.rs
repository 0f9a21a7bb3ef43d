use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend record identifier.
///
/// The fixture backend stores ids as strings, but real REST APIs frequently
/// hand back numbers. Either decodes; the gateway always exposes the string
/// form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(pub String);

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => RecordId(s),
            Raw::Number(n) => RecordId(n.to_string()),
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `users` record as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: RecordId,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub age: Option<i32>,
}

/// A `companies` record as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: RecordId,

    #[serde(default)]
    pub name: Option<String>,
}

/// Body for `POST /users`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    pub age: i32,
}

/// Body for `PATCH /users/{id}`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

/// Payload shape the backend hands back on a GET.
///
/// The collection endpoints return an array, but the gateway also accepts a
/// bare object so a get-by-id backend can be dropped in without a decode
/// change.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// First record of a collection, or the object itself.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(items) => items.into_iter().next(),
            OneOrMany::One(item) => Some(item),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_from_string() {
        let user: UserRecord = serde_json::from_str(r#"{"id": "23"}"#).unwrap();
        assert_eq!(user.id, RecordId("23".to_string()));
    }

    #[test]
    fn test_record_id_from_number() {
        let user: UserRecord = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(user.id.to_string(), "1");
    }

    #[test]
    fn test_user_record_camel_case_fields() {
        let user: UserRecord =
            serde_json::from_str(r#"{"id": "1", "firstName": "Bill", "age": 20}"#).unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Bill"));
        assert_eq!(user.last_name, None);
        assert_eq!(user.age, Some(20));
    }

    #[test]
    fn test_one_or_many_from_array() {
        let payload: OneOrMany<UserRecord> =
            serde_json::from_str(r#"[{"id": "1"}, {"id": "2"}]"#).unwrap();
        assert_eq!(payload.into_first().unwrap().id.to_string(), "1");
    }

    #[test]
    fn test_one_or_many_from_object() {
        let payload: OneOrMany<UserRecord> = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(payload.into_vec().len(), 1);
    }

    #[test]
    fn test_one_or_many_empty_array() {
        let payload: OneOrMany<UserRecord> = serde_json::from_str("[]").unwrap();
        assert!(payload.into_first().is_none());
    }

    #[test]
    fn test_user_patch_skips_unset_fields() {
        let patch = UserPatch {
            age: Some(30),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"age":30}"#);
    }

    #[test]
    fn test_new_user_serializes_camel_case() {
        let input = NewUser {
            first_name: "Charley".to_string(),
            last_name: None,
            age: 20,
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"firstName":"Charley","age":20}"#
        );
    }
}
