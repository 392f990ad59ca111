//! Tokenization and word counting
//!
//! The [`Tokenizer`] splits node text on delimiter characters, folds case,
//! and drops whatever a [`WordFilter`] excludes. [`Tokenizer::count_words`]
//! does this for many texts at once and merges the per-text counts.

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use super::word_filter::WordFilter;

/// Common punctuation delimiters, all in use by default.
///
/// Whitespace always separates words and is not part of this list.
pub const DEFAULT_DELIMITERS: &str = "!@#$%^&*()-=+[]{}|\\;:'\",.<>/?~`";

/// Splits text into lower-case word tokens
///
/// Common delimiters are either in use or set aside; removing one sets it
/// aside and adding it again puts it back. Any other character a user adds
/// is kept as a user delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    /// Common delimiters currently splitting words
    common_in_use: FxHashSet<char>,
    /// Common delimiters the user removed
    common_unused: FxHashSet<char>,
    /// User-added delimiters outside the common list
    user: FxHashSet<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer with every common delimiter in use
    pub fn new() -> Self {
        Self {
            common_in_use: DEFAULT_DELIMITERS.chars().collect(),
            common_unused: FxHashSet::default(),
            user: FxHashSet::default(),
        }
    }

    /// Create a tokenizer with extra delimiters on top of the defaults
    pub fn with_delimiters(extra: &[char]) -> Self {
        let mut tokenizer = Self::new();
        for &c in extra {
            tokenizer.add_delimiter(c);
        }
        tokenizer
    }

    /// Start splitting on `c`. Returns `false` if it already splits words.
    ///
    /// A common delimiter that was removed goes back into use; anything
    /// else becomes a user delimiter.
    pub fn add_delimiter(&mut self, c: char) -> bool {
        if self.is_delimiter(c) {
            return false;
        }
        if self.common_unused.remove(&c) {
            self.common_in_use.insert(c);
            return true;
        }
        self.user.insert(c)
    }

    /// Stop splitting on `c`, whether it is a common or a user delimiter
    ///
    /// Returns `false` if `c` was not in use. Whitespace cannot be removed.
    pub fn remove_delimiter(&mut self, c: char) -> bool {
        if self.common_in_use.remove(&c) {
            self.common_unused.insert(c);
            return true;
        }
        self.user.remove(&c)
    }

    /// Common delimiters in use, sorted
    pub fn delimiters_in_use(&self) -> Vec<char> {
        sorted(&self.common_in_use)
    }

    /// Common delimiters that were removed and can be added back, sorted
    pub fn delimiters_to_add(&self) -> Vec<char> {
        sorted(&self.common_unused)
    }

    /// User-added delimiters, sorted
    pub fn user_delimiters(&self) -> Vec<char> {
        sorted(&self.user)
    }

    /// Whether `c` currently separates words
    pub fn is_delimiter(&self, c: char) -> bool {
        c.is_whitespace() || self.common_in_use.contains(&c) || self.user.contains(&c)
    }

    /// Split `text` into lower-cased tokens, dropping empty pieces
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| self.is_delimiter(c))
            .filter(|piece| !piece.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Tokenize `text` and drop every word `filter` excludes
    pub fn filtered_words(&self, text: &str, filter: &WordFilter) -> Vec<String> {
        let mut words = self.tokenize(text);
        words.retain(|w| !filter.contains(w));
        words
    }

    /// Count the filtered words of every text
    pub fn count_words<S>(&self, texts: &[S], filter: &WordFilter) -> WordCounts
    where
        S: AsRef<str> + Sync,
    {
        let counts = texts
            .par_iter()
            .map(|text| {
                let mut local: FxHashMap<String, usize> = FxHashMap::default();
                for word in self.filtered_words(text.as_ref(), filter) {
                    *local.entry(word).or_insert(0) += 1;
                }
                local
            })
            .reduce(FxHashMap::default, |mut acc, local| {
                for (word, n) in local {
                    *acc.entry(word).or_insert(0) += n;
                }
                acc
            });

        WordCounts { counts }
    }
}

fn sorted(set: &FxHashSet<char>) -> Vec<char> {
    let mut chars: Vec<char> = set.iter().copied().collect();
    chars.sort_unstable();
    chars
}

/// Occurrence counts of filtered words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: FxHashMap<String, usize>,
}

impl WordCounts {
    /// Count for `word`, zero if absent
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no word was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent words; ties break alphabetically
    pub fn top_n(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(w, &c)| (w.as_str(), c))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Every counted word with its count, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}
