//! Shape checks for user-supplied filter words.
//!
//! [`WordFilter`](super::word_filter::WordFilter) accepts any string; these
//! checks run before a word typed by a user is added. A valid word is
//! non-empty, made only of word characters (`[A-Za-z0-9_]`), and does not
//! contain the persistence list separator [`WORD_DELIMITER`].

use crate::errors::{Result, SummaryError};
use crate::nlp::word_filter::WORD_DELIMITER;

/// Whether `c` is a word character.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check that `raw` can be added as a filter word.
pub fn validate_word(raw: &str) -> Result<&str> {
    if raw.is_empty() {
        return Err(SummaryError::EmptyWord);
    }
    if !raw.chars().all(is_word_char) || raw.contains(WORD_DELIMITER) {
        return Err(SummaryError::InvalidWord {
            word: raw.to_string(),
        });
    }
    Ok(raw)
}

/// Validate `raw` and optionally lower-case it.
pub fn normalize_word(raw: &str, lowercase: bool) -> Result<String> {
    let word = validate_word(raw)?;
    Ok(if lowercase {
        word.to_ascii_lowercase()
    } else {
        word.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_word_characters() {
        for word in ["kinase", "P53", "snake_case", "2010", "_"] {
            assert_eq!(validate_word(word).unwrap(), word);
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate_word(""), Err(SummaryError::EmptyWord)));
    }

    #[test]
    fn test_rejects_non_word_characters() {
        for word in ["two words", "tab\there", "dash-ed", "café", "end."] {
            match validate_word(word) {
                Err(SummaryError::InvalidWord { word: w }) => assert_eq!(w, word),
                other => panic!("{word:?} should be invalid, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_persistence_separator() {
        for word in [
            "geneWordFilterDelimiterkinase",
            "WordFilterDelimiter",
            "geneWordFilterDelimiter",
        ] {
            assert!(
                matches!(validate_word(word), Err(SummaryError::InvalidWord { .. })),
                "{word:?} should be invalid"
            );
            assert!(normalize_word(word, false).is_err());
            assert!(normalize_word(word, true).is_err());
        }
        // Only the exact separator is reserved.
        assert!(validate_word("wordfilterdelimiter").is_ok());
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_word("Kinase", true).unwrap(), "kinase");
        assert_eq!(normalize_word("Kinase", false).unwrap(), "Kinase");
        assert!(normalize_word("", true).is_err());
    }
}
