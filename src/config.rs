//! Application Configuration
//!
//! Endpoint, edit style and user-facing wording. Defaults can be overridden
//! at build time through `TODO_*` environment variables.

use std::str::FromStr;

use thiserror::Error;

const DEFAULT_API_BASE: &str = "http://localhost:3000";
const DEFAULT_COLLECTION: &str = "todos";
const DEFAULT_MESSAGE_MS: u32 = 3_500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown edit style `{0}` (expected `inline` or `prompt`)")]
    UnknownEditStyle(String),
    #[error("invalid message duration `{0}`")]
    InvalidDuration(String),
}

/// How a row's title gets edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditStyle {
    /// Title replaced in place by a text field with Save/Cancel
    #[default]
    Inline,
    /// Blocking browser prompt pre-filled with the current title
    Prompt,
}

impl FromStr for EditStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(EditStyle::Inline),
            "prompt" => Ok(EditStyle::Prompt),
            other => Err(ConfigError::UnknownEditStyle(other.to_string())),
        }
    }
}

/// Every string the user can see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub heading: String,
    pub input_placeholder: String,
    pub add_label: String,
    pub edit_label: String,
    pub delete_label: String,
    pub save_label: String,
    pub cancel_label: String,
    pub dismiss_label: String,
    pub loading: String,
    pub empty_list: String,
    pub empty_title: String,
    pub edit_in_progress: String,
    pub confirm_delete: String,
    pub edit_prompt: String,
    pub server_error: String,
    pub network_error: String,
    pub request_error: String,
    pub decode_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            heading: "Todo".into(),
            input_placeholder: "What needs to be done?".into(),
            add_label: "Add".into(),
            edit_label: "Edit".into(),
            delete_label: "Delete".into(),
            save_label: "Save".into(),
            cancel_label: "Cancel".into(),
            dismiss_label: "×".into(),
            loading: "Loading...".into(),
            empty_list: "No tasks yet. Add something to do!".into(),
            empty_title: "Task title cannot be empty.".into(),
            edit_in_progress: "Another task is being edited. Save or cancel it first.".into(),
            confirm_delete: "Are you sure you want to delete this task?".into(),
            edit_prompt: "Enter the new task title:".into(),
            server_error: "Server error:".into(),
            network_error: "No response from the server. Check that it is running and allows CORS."
                .into(),
            request_error: "Error:".into(),
            decode_error: "Unexpected response from the server:".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Server root, without the collection path
    pub api_base: String,
    pub collection: String,
    pub edit_style: EditStyle,
    /// How long a message banner stays up
    pub message_ms: u32,
    pub messages: Messages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            edit_style: EditStyle::default(),
            message_ms: DEFAULT_MESSAGE_MS,
            messages: Messages::default(),
        }
    }
}

impl AppConfig {
    /// Defaults plus whatever `TODO_*` variables were set when the bundle was built
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(Overrides {
            api_base: option_env!("TODO_API_BASE"),
            collection: option_env!("TODO_COLLECTION"),
            edit_style: option_env!("TODO_EDIT_STYLE"),
            message_ms: option_env!("TODO_MESSAGE_MS"),
        })
    }

    /// Apply overrides. Invalid values are logged and the current value kept.
    pub fn with_overrides(mut self, overrides: Overrides<'_>) -> Self {
        if let Some(base) = overrides.api_base.map(str::trim).filter(|s| !s.is_empty()) {
            self.api_base = base.to_string();
        }
        if let Some(collection) = overrides
            .collection
            .map(|s| s.trim().trim_matches('/'))
            .filter(|s| !s.is_empty())
        {
            self.collection = collection.to_string();
        }
        if let Some(style) = overrides.edit_style {
            match style.parse() {
                Ok(style) => self.edit_style = style,
                Err(err) => tracing::warn!(error = %err, "ignoring TODO_EDIT_STYLE"),
            }
        }
        if let Some(ms) = overrides.message_ms {
            match parse_duration(ms) {
                Ok(ms) => self.message_ms = ms,
                Err(err) => tracing::warn!(error = %err, "ignoring TODO_MESSAGE_MS"),
            }
        }
        self
    }

    /// Full URL of the collection resource
    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), self.collection)
    }
}

/// Raw override values, usually from the build environment
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides<'a> {
    pub api_base: Option<&'a str>,
    pub collection: Option<&'a str>,
    pub edit_style: Option<&'a str>,
    pub message_ms: Option<&'a str>,
}

fn parse_duration(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidDuration(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.collection_url(), "http://localhost:3000/todos");
        assert_eq!(config.edit_style, EditStyle::Inline);
        assert_eq!(config.message_ms, 3_500);
    }

    #[test]
    fn test_overrides_applied() {
        let config = AppConfig::default().with_overrides(Overrides {
            api_base: Some("https://api.example.com/"),
            collection: Some("/tasks/"),
            edit_style: Some("Prompt"),
            message_ms: Some("1200"),
        });

        assert_eq!(config.collection_url(), "https://api.example.com/tasks");
        assert_eq!(config.edit_style, EditStyle::Prompt);
        assert_eq!(config.message_ms, 1_200);
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = AppConfig::default().with_overrides(Overrides {
            api_base: Some("   "),
            collection: None,
            edit_style: Some("modal"),
            message_ms: Some("0"),
        });

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_edit_style_parse_error() {
        assert_eq!(
            "dialog".parse::<EditStyle>(),
            Err(ConfigError::UnknownEditStyle("dialog".into()))
        );
    }
}
