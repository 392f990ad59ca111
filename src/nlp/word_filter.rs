//! Word filtering
//!
//! A [`WordFilter`] decides whether a token is excluded from a summary. It
//! combines four categories, checked in priority order:
//!
//! 1. stop words (common words such as "the"),
//! 2. flagged words (curated domain exclusions),
//! 3. added words (user exclusions for one network),
//! 4. the numbers `0..=999`, only while number filtering is on.
//!
//! Matching is exact and case-sensitive. Callers fold case beforehand.
//!
//! # Persistence format
//!
//! [`WordFilter`] implements `Display`; its output restores through
//! [`WordFilter::restore`]:
//!
//! ```text
//! StopWords\ttheWordFilterDelimiterandWordFilterDelimiter
//! FlaggedWords\tetWordFilterDelimiter
//! AddedWords\tkinaseWordFilterDelimiter
//! FilterNums\tfalse
//! ```
//!
//! Empty word lists are omitted and `FilterNums` is always present. The
//! number list is never persisted.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::errors::Result;
use crate::nlp::resources::{ResourceLoader, WordListResource};

/// Separator between words inside a persisted list value.
pub const WORD_DELIMITER: &str = "WordFilterDelimiter";

const KEY_STOP_WORDS: &str = "StopWords";
const KEY_FLAGGED_WORDS: &str = "FlaggedWords";
const KEY_ADDED_WORDS: &str = "AddedWords";
const KEY_FILTER_NUMS: &str = "FilterNums";

/// Upper bound (exclusive) of the numeric exclusion range.
const NUMBER_LIMIT: u32 = 1000;

/// Which category matched (or held) a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Stop,
    Flagged,
    Added,
    Number,
}

/// Stateful exclusion filter for word tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFilter {
    stop_words: FxHashSet<String>,
    flagged_words: FxHashSet<String>,
    added_words: FxHashSet<String>,
    number_words: FxHashSet<String>,
    filter_nums: bool,
}

impl WordFilter {
    /// Create a filter with the default lists read through `loader`
    ///
    /// Fails if either list cannot be loaded; a filter without its default
    /// lists is never handed out.
    pub fn new(loader: &ResourceLoader) -> Result<Self> {
        let stop_words = loader.load(WordListResource::Stop)?;
        let flagged_words = loader.load(WordListResource::Flagged)?;
        Ok(Self::from_parts(
            stop_words,
            flagged_words,
            FxHashSet::default(),
            false,
        ))
    }

    /// Create a filter with the default loader
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ResourceLoader::default())
    }

    /// Create a filter from explicit stop and flagged lists
    pub fn from_lists<S: AsRef<str>>(stop_words: &[S], flagged_words: &[S]) -> Self {
        Self::from_parts(
            stop_words.iter().map(|w| w.as_ref().to_string()).collect(),
            flagged_words.iter().map(|w| w.as_ref().to_string()).collect(),
            FxHashSet::default(),
            false,
        )
    }

    /// Create a filter with every category empty and number filtering off
    pub fn empty() -> Self {
        Self::from_parts(
            FxHashSet::default(),
            FxHashSet::default(),
            FxHashSet::default(),
            false,
        )
    }

    /// Rebuild a filter from its persisted text form
    ///
    /// Lines that do not split into exactly two tab-separated fields are
    /// skipped, as are unknown keys. Missing lists stay empty and a missing
    /// `FilterNums` leaves number filtering off. Never fails.
    pub fn restore(record: &str) -> Self {
        let mut stop = None;
        let mut flagged = None;
        let mut added = None;
        let mut filter_nums = None;

        for line in record.split('\n') {
            // Trailing empty fields do not count.
            let mut fields = line.trim_end_matches('\t').split('\t');
            let (Some(key), Some(value), None) = (fields.next(), fields.next(), fields.next())
            else {
                #[cfg(feature = "tracing")]
                if !line.is_empty() {
                    tracing::debug!(line, "skipping malformed filter record line");
                }
                continue;
            };

            // Later duplicates win.
            match key {
                KEY_STOP_WORDS => stop = Some(value),
                KEY_FLAGGED_WORDS => flagged = Some(value),
                KEY_ADDED_WORDS => added = Some(value),
                KEY_FILTER_NUMS => filter_nums = Some(value),
                _ => {}
            }
        }

        Self::from_parts(
            stop.map(split_word_list).unwrap_or_default(),
            flagged.map(split_word_list).unwrap_or_default(),
            added.map(split_word_list).unwrap_or_default(),
            filter_nums.is_some_and(|v| v.eq_ignore_ascii_case("true")),
        )
    }

    fn from_parts(
        stop_words: FxHashSet<String>,
        flagged_words: FxHashSet<String>,
        added_words: FxHashSet<String>,
        filter_nums: bool,
    ) -> Self {
        Self {
            stop_words,
            flagged_words,
            added_words,
            number_words: number_words(),
            filter_nums,
        }
    }

    /// Check whether `word` should be filtered out
    pub fn contains(&self, word: &str) -> bool {
        self.category_of(word).is_some()
    }

    /// The first category, in priority order, that excludes `word`
    pub fn category_of(&self, word: &str) -> Option<WordCategory> {
        if self.stop_words.contains(word) {
            Some(WordCategory::Stop)
        } else if self.flagged_words.contains(word) {
            Some(WordCategory::Flagged)
        } else if self.added_words.contains(word) {
            Some(WordCategory::Added)
        } else if self.filter_nums && self.number_words.contains(word) {
            Some(WordCategory::Number)
        } else {
            None
        }
    }

    /// Add a user exclusion. Adding an existing word changes nothing.
    pub fn add(&mut self, word: impl Into<String>) {
        let word = word.into();
        #[cfg(feature = "tracing")]
        tracing::trace!(word = %word, "adding filter word");
        self.added_words.insert(word);
    }

    /// Remove `word` from the first of stop, flagged, added that holds it
    ///
    /// Other categories keep their copy. Returns the category the word
    /// was removed from, or `None` if no category held it.
    pub fn remove(&mut self, word: &str) -> Option<WordCategory> {
        let category = if self.stop_words.remove(word) {
            WordCategory::Stop
        } else if self.flagged_words.remove(word) {
            WordCategory::Flagged
        } else if self.added_words.remove(word) {
            WordCategory::Added
        } else {
            return None;
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(word, ?category, "removed filter word");
        Some(category)
    }

    /// Turn exclusion of the numbers `0..=999` on or off
    pub fn set_filter_nums(&mut self, filter_nums: bool) {
        self.filter_nums = filter_nums;
    }

    /// Whether numbers are currently excluded
    pub fn filter_nums(&self) -> bool {
        self.filter_nums
    }

    /// Stop words, as loaded or restored, minus removals
    pub fn stop_words(&self) -> &FxHashSet<String> {
        &self.stop_words
    }

    /// Flagged words, as loaded or restored, minus removals
    pub fn flagged_words(&self) -> &FxHashSet<String> {
        &self.flagged_words
    }

    /// Words the user added
    pub fn added_words(&self) -> &FxHashSet<String> {
        &self.added_words
    }

    /// The generated number list, regardless of whether it is active
    pub fn number_words(&self) -> &FxHashSet<String> {
        &self.number_words
    }
}

impl fmt::Display for WordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_word_list(f, KEY_STOP_WORDS, &self.stop_words)?;
        write_word_list(f, KEY_FLAGGED_WORDS, &self.flagged_words)?;
        write_word_list(f, KEY_ADDED_WORDS, &self.added_words)?;
        writeln!(f, "{KEY_FILTER_NUMS}\t{}", self.filter_nums)
    }
}

impl FromStr for WordFilter {
    type Err = Infallible;

    fn from_str(record: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::restore(record))
    }
}

/// Write one `KEY\tw1<delim>w2<delim>` line, sorted; nothing when empty.
fn write_word_list(f: &mut fmt::Formatter<'_>, key: &str, words: &FxHashSet<String>) -> fmt::Result {
    if words.is_empty() {
        return Ok(());
    }

    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    write!(f, "{key}\t")?;
    for word in sorted {
        write!(f, "{word}{WORD_DELIMITER}")?;
    }
    writeln!(f)
}

fn split_word_list(value: &str) -> FxHashSet<String> {
    value
        .split(WORD_DELIMITER)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn number_words() -> FxHashSet<String> {
    (0..NUMBER_LIMIT).map(|n| n.to_string()).collect()
}
