//! Default word lists
//!
//! The stop-word and flagged-word lists ship inside the crate and can be
//! overridden from disk. A [`ResourceLoader`] tries an ordered list of
//! [`ResourceStrategy`]s and returns the first list it can read.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use rustc_hash::FxHashSet;

use crate::config::FilterConfig;
use crate::errors::{Result, SummaryError};

const EMBEDDED_STOP_WORDS: &str = include_str!("../../resources/StopWords.txt");
const EMBEDDED_FLAGGED_WORDS: &str = include_str!("../../resources/FlaggedWords.txt");

/// Directory searched when nothing else is configured.
pub const DEFAULT_RESOURCE_DIR: &str = "resources";

/// One of the bundled word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordListResource {
    Stop,
    Flagged,
}

impl WordListResource {
    /// File name of this list, both embedded and on disk
    pub fn file_name(self) -> &'static str {
        match self {
            WordListResource::Stop => "StopWords.txt",
            WordListResource::Flagged => "FlaggedWords.txt",
        }
    }

    fn embedded_text(self) -> &'static str {
        match self {
            WordListResource::Stop => EMBEDDED_STOP_WORDS,
            WordListResource::Flagged => EMBEDDED_FLAGGED_WORDS,
        }
    }
}

impl fmt::Display for WordListResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A place a word list can be read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceStrategy {
    /// Lists compiled into the crate
    Embedded,
    /// `<dir>/<file name>` on the filesystem
    Directory(PathBuf),
}

impl ResourceStrategy {
    fn read(&self, resource: WordListResource) -> std::io::Result<String> {
        match self {
            ResourceStrategy::Embedded => Ok(resource.embedded_text().to_string()),
            ResourceStrategy::Directory(dir) => fs::read_to_string(dir.join(resource.file_name())),
        }
    }
}

impl fmt::Display for ResourceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceStrategy::Embedded => f.write_str("embedded"),
            ResourceStrategy::Directory(dir) => write!(f, "directory {}", dir.display()),
        }
    }
}

/// Loads word lists by trying each strategy in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLoader {
    strategies: Vec<ResourceStrategy>,
}

impl Default for ResourceLoader {
    /// The `resources/` directory first, then the embedded lists.
    fn default() -> Self {
        Self::new(vec![
            ResourceStrategy::Directory(PathBuf::from(DEFAULT_RESOURCE_DIR)),
            ResourceStrategy::Embedded,
        ])
    }
}

impl ResourceLoader {
    /// Create a loader from an explicit strategy order
    pub fn new(strategies: Vec<ResourceStrategy>) -> Self {
        Self { strategies }
    }

    /// Create a loader honoring `config.resource_dir`
    ///
    /// A configured directory is tried before the defaults so operators can
    /// replace the shipped lists without rebuilding.
    pub fn from_config(config: &FilterConfig) -> Self {
        let mut loader = Self::default();
        if let Some(dir) = &config.resource_dir {
            loader
                .strategies
                .insert(0, ResourceStrategy::Directory(dir.clone()));
        }
        loader
    }

    /// Strategies in the order they are tried
    pub fn strategies(&self) -> &[ResourceStrategy] {
        &self.strategies
    }

    /// Load and tokenize a word list
    pub fn load(&self, resource: WordListResource) -> Result<FxHashSet<String>> {
        let mut attempts = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            match strategy.read(resource) {
                Ok(text) => {
                    let words = tokenize_word_list(&text);
                    #[cfg(feature = "tracing")]
                    tracing::info!(
                        resource = %resource,
                        strategy = %strategy,
                        words = words.len(),
                        "loaded word list"
                    );
                    return Ok(words);
                }
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        resource = %resource,
                        strategy = %strategy,
                        error = %_err,
                        "word list strategy failed, trying next"
                    );
                    attempts.push(strategy.to_string());
                }
            }
        }

        Err(SummaryError::ResourceUnavailable { resource, attempts })
    }
}

/// Split a word list on any whitespace; line structure is irrelevant.
pub fn tokenize_word_list(text: &str) -> FxHashSet<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_lists_load() {
        let loader = ResourceLoader::new(vec![ResourceStrategy::Embedded]);

        let stop = loader.load(WordListResource::Stop).unwrap();
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
        assert!(!stop.contains("protein"));

        let flagged = loader.load(WordListResource::Flagged).unwrap();
        assert!(flagged.contains("et"));
        assert!(flagged.contains("al"));
    }

    #[test]
    fn test_tokenize_ignores_line_structure() {
        let words = tokenize_word_list("alpha beta\n\tgamma\r\n\n  delta  ");
        assert_eq!(words.len(), 4);
        for w in ["alpha", "beta", "gamma", "delta"] {
            assert!(words.contains(w));
        }
    }

    #[test]
    fn test_configured_directory_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("StopWords.txt"), "zebra yak").unwrap();

        let loader = ResourceLoader::from_config(&FilterConfig::default().with_resource_dir(dir.path()));
        let stop = loader.load(WordListResource::Stop).unwrap();

        assert_eq!(stop.len(), 2);
        assert!(stop.contains("zebra"));
        assert!(!stop.contains("the"));
    }

    #[test]
    fn test_missing_override_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // Only the stop list is overridden; the flagged list falls through.
        fs::write(dir.path().join("StopWords.txt"), "zebra").unwrap();

        let loader = ResourceLoader::new(vec![
            ResourceStrategy::Directory(dir.path().to_path_buf()),
            ResourceStrategy::Embedded,
        ]);
        let flagged = loader.load(WordListResource::Flagged).unwrap();
        assert!(flagged.contains("et"));
    }

    #[test]
    fn test_all_strategies_failing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let loader = ResourceLoader::new(vec![ResourceStrategy::Directory(missing)]);

        match loader.load(WordListResource::Flagged) {
            Err(SummaryError::ResourceUnavailable { resource, attempts }) => {
                assert_eq!(resource, WordListResource::Flagged);
                assert_eq!(attempts.len(), 1);
                assert!(attempts[0].starts_with("directory "));
            }
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_no_strategies_is_an_error() {
        let loader = ResourceLoader::new(Vec::new());
        let err = loader.load(WordListResource::Stop).unwrap_err();
        assert!(matches!(
            err,
            SummaryError::ResourceUnavailable { ref attempts, .. } if attempts.is_empty()
        ));
    }

    #[test]
    fn test_from_config_order() {
        let loader = ResourceLoader::from_config(&FilterConfig::default().with_resource_dir("custom"));
        assert_eq!(
            loader.strategies(),
            &[
                ResourceStrategy::Directory(PathBuf::from("custom")),
                ResourceStrategy::Directory(PathBuf::from(DEFAULT_RESOURCE_DIR)),
                ResourceStrategy::Embedded,
            ]
        );
    }

    #[test]
    fn test_default_order_ends_with_embedded() {
        let loader = ResourceLoader::default();
        assert_eq!(
            loader.strategies(),
            &[
                ResourceStrategy::Directory(PathBuf::from(DEFAULT_RESOURCE_DIR)),
                ResourceStrategy::Embedded,
            ]
        );
        // Whatever the working directory holds, the embedded lists back it up.
        assert!(loader.load(WordListResource::Stop).unwrap().contains("the"));
    }
}
