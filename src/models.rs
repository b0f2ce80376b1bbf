//! Frontend Models
//!
//! Task records as served by the remote collection, plus the request bodies
//! sent back to it.

use std::fmt;

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned record identifier.
///
/// Opaque to the client. JSON servers hand these out as numbers or strings
/// depending on version, so both are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id encoded for use as a single URL path segment
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, NON_ALPHANUMERIC).to_string()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => TodoId(s),
            RawId::Unsigned(n) => TodoId(n.to_string()),
            RawId::Signed(n) => TodoId(n.to_string()),
        })
    }
}

/// Todo record (matches the remote collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// POST body for a new record. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            created_at,
        }
    }
}

/// PATCH body. Only built through [`TodoPatch::title`] or
/// [`TodoPatch::completed`], so at least one field is always set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn new_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn new_completed(&self) -> Option<bool> {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let todos: Vec<Todo> = serde_json::from_str(
            r#"[{"id": 7, "title": "a", "completed": true},
                {"id": "x9f2", "title": "b", "completed": false}]"#,
        )
        .expect("decode");

        assert_eq!(todos[0].id, TodoId::new("7"));
        assert_eq!(todos[1].id, TodoId::new("x9f2"));
        assert!(todos[0].completed);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let todo: Todo = serde_json::from_str(r#"{"id": 1, "title": "legacy"}"#).expect("decode");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, None);
    }

    #[test]
    fn test_created_at_is_camel_case() {
        let todo: Todo = serde_json::from_str(
            r#"{"id": "1", "title": "t", "completed": false, "createdAt": "2025-03-01T10:00:00Z"}"#,
        )
        .expect("decode");
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(todo.created_at, Some(expected));
    }

    #[test]
    fn test_new_todo_body() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let body = serde_json::to_value(NewTodo::new("Buy milk", at)).unwrap();

        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["completed"], false);
        assert_eq!(body["createdAt"], "2025-03-01T10:00:00Z");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let body = serde_json::to_value(TodoPatch::completed(true)).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));

        let body = serde_json::to_value(TodoPatch::title("New").with_completed(false)).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "New", "completed": false }));
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(TodoId::new("42").path_segment(), "42");
        assert_eq!(TodoId::new("a/b c").path_segment(), "a%2Fb%20c");
    }
}
