//! Filter configuration.
//!
//! A [`FilterConfig`] controls where the default word lists come from and
//! how user input is normalized before it reaches a
//! [`WordFilter`](crate::nlp::word_filter::WordFilter).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "resource_dir": "/opt/wordcloud/lists",
//!   "lowercase_added_words": true,
//!   "extra_delimiters": ["|", "#"]
//! }
//! ```
//!
//! Every field is optional; unknown fields are rejected.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Settings for filter construction and word normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Directory holding `StopWords.txt` / `FlaggedWords.txt` overrides.
    /// Tried before the embedded lists.
    pub resource_dir: Option<PathBuf>,

    /// Lower-case user-added words before they enter the filter.
    pub lowercase_added_words: bool,

    /// Delimiters added on top of the tokenizer defaults.
    pub extra_delimiters: Vec<char>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            resource_dir: None,
            lowercase_added_words: true,
            extra_delimiters: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the resource override directory.
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Set the lower-casing policy for added words.
    pub fn with_lowercase_added_words(mut self, lowercase: bool) -> Self {
        self.lowercase_added_words = lowercase;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummaryError;

    #[test]
    fn test_empty_json_gives_defaults() {
        let cfg = FilterConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, FilterConfig::default());
        assert!(cfg.lowercase_added_words);
        assert!(cfg.resource_dir.is_none());
    }

    #[test]
    fn test_full_json() {
        let cfg = FilterConfig::from_json_str(
            r##"{
                "resource_dir": "/tmp/lists",
                "lowercase_added_words": false,
                "extra_delimiters": ["|", "#"]
            }"##,
        )
        .unwrap();
        assert_eq!(cfg.resource_dir, Some(PathBuf::from("/tmp/lists")));
        assert!(!cfg.lowercase_added_words);
        assert_eq!(cfg.extra_delimiters, vec!['|', '#']);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = FilterConfig::from_json_str(r#"{ "stop_list": "x" }"#).unwrap_err();
        assert!(matches!(err, SummaryError::Config(_)));
    }

    #[test]
    fn test_builders() {
        let cfg = FilterConfig::default()
            .with_resource_dir("lists")
            .with_lowercase_added_words(false);
        assert_eq!(cfg.resource_dir, Some(PathBuf::from("lists")));
        assert!(!cfg.lowercase_added_words);
    }
}
