use crate::domain::event::Event;
use crate::utils::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PREFERENCE_COUNT_MESSAGE: &str = "Please select at least 1 and at most 3 preferences.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Checked preference inputs, between one and three of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PreferenceSelection(Vec<String>);

impl PreferenceSelection {
    pub const MIN: usize = 1;
    pub const MAX: usize = 3;

    /// Builds a selection from the values of the checked inputs, in form order.
    /// Repeated values count once.
    pub fn from_checked<I, S>(checked: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = Vec::new();
        for value in checked {
            let value = value.into();
            if !values.contains(&value) {
                values.push(value);
            }
        }

        if values.len() < Self::MIN || values.len() > Self::MAX {
            return Err(ClientError::ValidationError {
                message: PREFERENCE_COUNT_MESSAGE.to_string(),
            });
        }

        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "webTitle")]
    pub web_title: String,
    #[serde(rename = "sectionName", default)]
    pub section_name: String,
    #[serde(rename = "webUrl")]
    pub web_url: String,
    #[serde(default)]
    pub is_cached: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl Article {
    pub fn new(
        web_title: impl Into<String>,
        section_name: impl Into<String>,
        web_url: impl Into<String>,
    ) -> Self {
        Self {
            web_title: web_title.into(),
            section_name: section_name.into(),
            web_url: web_url.into(),
            is_cached: false,
            saved_at: None,
        }
    }

    pub fn cached(mut self, is_cached: bool) -> Self {
        self.is_cached = is_cached;
        self
    }

    /// The fields a save request carries.
    pub fn save_payload(&self) -> SaveArticleRequest<'_> {
        SaveArticleRequest {
            web_title: &self.web_title,
            section_name: &self.section_name,
            web_url: &self.web_url,
        }
    }

    /// `saved_at` as sent by the server (an HTTP date), if present and parseable.
    pub fn saved_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.saved_at.as_deref()?;
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveArticleRequest<'a> {
    #[serde(rename = "webTitle")]
    pub web_title: &'a str,
    #[serde(rename = "sectionName")]
    pub section_name: &'a str,
    #[serde(rename = "webUrl")]
    pub web_url: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub preferences: &'a PreferenceSelection,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferencesRequest<'a> {
    pub preferences: &'a PreferenceSelection,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteArticleRequest<'a> {
    pub url: &'a str,
}

/// Reply body of every POST endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiReply {
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => fallback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceOption {
    pub id: String,
    pub name: String,
}

/// The preference categories a form offers. Forms submit ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceCatalog {
    options: Vec<PreferenceOption>,
}

impl Default for PreferenceCatalog {
    fn default() -> Self {
        Self::new(vec![
            PreferenceOption {
                id: "1".to_string(),
                name: "Technology".to_string(),
            },
            PreferenceOption {
                id: "2".to_string(),
                name: "Sports".to_string(),
            },
            PreferenceOption {
                id: "3".to_string(),
                name: "Business".to_string(),
            },
        ])
    }
}

impl PreferenceCatalog {
    pub fn new(options: Vec<PreferenceOption>) -> Self {
        Self { options }
    }

    /// Resolves an id or a case-insensitive name to the id a form would submit.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        self.options
            .iter()
            .find(|opt| opt.id == input || opt.name.eq_ignore_ascii_case(input))
            .map(|opt| opt.id.as_str())
    }

    /// Maps user input to checked values; unknown entries are an error.
    pub fn checked_values(&self, inputs: &[String]) -> Result<Vec<String>> {
        inputs
            .iter()
            .map(|input| {
                self.resolve(input)
                    .map(str::to_string)
                    .ok_or_else(|| ClientError::ValidationError {
                        message: format!(
                            "Unknown preference '{}'. Choose from: {}",
                            input,
                            self.options
                                .iter()
                                .map(|opt| opt.name.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    })
            })
            .collect()
    }
}

/// Named page containers that listings render into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    UserPreferences,
    Articles,
    SavedArticles,
}

impl Region {
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::UserPreferences => "user-preferences",
            Region::Articles => "articles",
            Region::SavedArticles => "saved-articles",
        }
    }
}

/// A rendered piece of a region, optionally clickable.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub html: String,
    pub text: String,
    pub on_click: Option<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_bounds() {
        assert!(PreferenceSelection::from_checked(Vec::<String>::new()).is_err());
        assert!(PreferenceSelection::from_checked(["1"]).is_ok());
        assert!(PreferenceSelection::from_checked(["1", "2", "3"]).is_ok());

        let err = PreferenceSelection::from_checked(["1", "2", "3", "4"]).unwrap_err();
        assert_eq!(err.alert_message(), PREFERENCE_COUNT_MESSAGE);
    }

    #[test]
    fn test_selection_collapses_duplicates() {
        let selection = PreferenceSelection::from_checked(["2", "1", "2", "1"]).unwrap();
        assert_eq!(selection.as_slice(), &["2".to_string(), "1".to_string()]);
        assert_eq!(serde_json::to_value(&selection).unwrap(), serde_json::json!(["2", "1"]));
    }

    #[test]
    fn test_article_decodes_guardian_shape() {
        let article: Article = serde_json::from_value(serde_json::json!({
            "id": "technology/2024/jan/01/x",
            "type": "article",
            "webTitle": "Chips",
            "sectionName": "Technology",
            "webUrl": "https://www.theguardian.com/technology/x",
            "apiUrl": "https://content.guardianapis.com/technology/x",
            "is_cached": true
        }))
        .unwrap();

        assert_eq!(article.web_title, "Chips");
        assert!(article.is_cached);
        assert!(article.saved_at.is_none());
    }

    #[test]
    fn test_saved_article_without_cache_flag() {
        let article: Article = serde_json::from_value(serde_json::json!({
            "webTitle": "Goal",
            "sectionName": "Sport",
            "webUrl": "https://example.com/goal",
            "saved_at": "Sat, 17 Oct 2026 09:30:00 GMT"
        }))
        .unwrap();

        assert!(!article.is_cached);
        let saved_at = article.saved_at_utc().unwrap();
        assert_eq!(saved_at.to_rfc3339(), "2026-10-17T09:30:00+00:00");
    }

    #[test]
    fn test_save_payload_has_three_fields() {
        let article = Article::new("T", "S", "https://example.com/a").cached(true);
        let value = serde_json::to_value(article.save_payload()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "webTitle": "T",
                "sectionName": "S",
                "webUrl": "https://example.com/a"
            })
        );
    }

    #[test]
    fn test_reply_message_fallback() {
        let reply: ApiReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(reply.message_or("default"), "default");

        let reply: ApiReply =
            serde_json::from_str(r#"{"success": false, "message": "nope"}"#).unwrap();
        assert_eq!(reply.message_or("default"), "nope");
    }

    #[test]
    fn test_catalog_resolves_names_and_ids() {
        let catalog = PreferenceCatalog::default();
        assert_eq!(catalog.resolve("sports"), Some("2"));
        assert_eq!(catalog.resolve("3"), Some("3"));
        assert_eq!(catalog.resolve("Weather"), None);

        let values = catalog
            .checked_values(&["Technology".to_string(), "3".to_string()])
            .unwrap();
        assert_eq!(values, vec!["1".to_string(), "3".to_string()]);
        assert!(catalog.checked_values(&["Weather".to_string()]).is_err());
    }
}
