//! Error types shared across the crate.

use thiserror::Error;

use crate::nlp::resources::WordListResource;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Everything that can go wrong while building or editing a summary.
///
/// Restoring a filter never fails, so malformed records have no variant.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// No loading strategy produced the requested bundled word list.
    #[error("unable to load {resource} word list (tried: {})", .attempts.join(", "))]
    ResourceUnavailable {
        resource: WordListResource,
        attempts: Vec<String>,
    },

    /// A user-supplied word was empty.
    #[error("word must not be empty")]
    EmptyWord,

    /// A user-supplied word contained something other than word characters.
    #[error("invalid word {word:?}: only letters, digits and '_' are allowed, and not the list separator")]
    InvalidWord { word: String },

    /// A session lookup named a network that was never opened.
    #[error("unknown network {name:?}")]
    UnknownNetwork { name: String },

    /// Configuration JSON could not be parsed.
    #[error("invalid filter configuration: {0}")]
    Config(#[from] serde_json::Error),
}
