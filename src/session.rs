//! Per-session summary state.
//!
//! A [`SessionContext`] owns one [`NetworkParameters`] per open network
//! and remembers which network is current. It is passed explicitly to
//! whatever needs it; there is no process-wide instance.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::config::FilterConfig;
use crate::errors::{Result, SummaryError};
use crate::nlp::resources::ResourceLoader;
use crate::nlp::tokenizer::{Tokenizer, WordCounts};
use crate::nlp::validation::normalize_word;
use crate::nlp::word_filter::{WordCategory, WordFilter};

/// Summary settings for one network
#[derive(Debug, Clone)]
pub struct NetworkParameters {
    name: String,
    filter: WordFilter,
    tokenizer: Tokenizer,
    lowercase_added_words: bool,
    changed: bool,
}

impl NetworkParameters {
    fn new(name: &str, filter: WordFilter, config: &FilterConfig) -> Self {
        Self {
            name: name.to_string(),
            filter,
            tokenizer: Tokenizer::with_delimiters(&config.extra_delimiters),
            lowercase_added_words: config.lowercase_added_words,
            changed: false,
        }
    }

    /// Network name this state belongs to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The network's word filter
    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    /// The network's tokenizer and delimiter settings
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Whether settings changed since the last [`mark_clean`](Self::mark_clean)
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Acknowledge the current settings, e.g. after rebuilding a cloud
    pub fn mark_clean(&mut self) {
        self.changed = false;
    }

    /// Validate, normalize and add a user word to the filter
    pub fn add_word(&mut self, raw: &str) -> Result<String> {
        let word = normalize_word(raw, self.lowercase_added_words)?;
        self.filter.add(word.clone());
        self.changed = true;
        Ok(word)
    }

    /// Remove a word from the filter (first matching category only)
    pub fn remove_word(&mut self, word: &str) -> Option<WordCategory> {
        let removed = self.filter.remove(word);
        if removed.is_some() {
            self.changed = true;
        }
        removed
    }

    /// Turn number filtering on or off; always marks the network changed
    pub fn set_filter_nums(&mut self, filter_nums: bool) {
        self.filter.set_filter_nums(filter_nums);
        self.changed = true;
    }

    /// Start splitting on `c`; marks changed only if it was not in use
    pub fn add_delimiter(&mut self, c: char) -> bool {
        let added = self.tokenizer.add_delimiter(c);
        self.changed |= added;
        added
    }

    /// Stop splitting on `c`; marks changed only if it was in use
    pub fn remove_delimiter(&mut self, c: char) -> bool {
        let removed = self.tokenizer.remove_delimiter(c);
        self.changed |= removed;
        removed
    }

    /// Count the filtered words of `texts` with this network's settings
    pub fn summarize<S: AsRef<str> + Sync>(&self, texts: &[S]) -> WordCounts {
        self.tokenizer.count_words(texts, &self.filter)
    }
}

/// All networks of a session plus the current selection
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    config: FilterConfig,
    networks: BTreeMap<String, NetworkParameters>,
    current: Option<String>,
}

impl SessionContext {
    /// Create an empty session; `config` applies to every network opened later
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            networks: BTreeMap::new(),
            current: None,
        }
    }

    /// Configuration shared by the session's networks
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Open `name` with a fresh filter (or reuse it) and make it current
    pub fn open_network(&mut self, name: &str) -> Result<&mut NetworkParameters> {
        if !self.networks.contains_key(name) {
            let filter = WordFilter::new(&ResourceLoader::from_config(&self.config))?;
            #[cfg(feature = "tracing")]
            tracing::info!(network = name, "opened network");
            self.networks
                .insert(name.to_string(), NetworkParameters::new(name, filter, &self.config));
        }
        self.current = Some(name.to_string());
        self.network_mut(name)
    }

    /// Rebuild `name` from a saved filter record, replacing any open state
    pub fn restore_network(&mut self, name: &str, record: &str) -> &mut NetworkParameters {
        let params = NetworkParameters::new(name, WordFilter::restore(record), &self.config);
        #[cfg(feature = "tracing")]
        tracing::info!(network = name, "restored network");
        match self.networks.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(params);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(params),
        }
    }

    /// Look up an open network
    pub fn network(&self, name: &str) -> Result<&NetworkParameters> {
        self.networks
            .get(name)
            .ok_or_else(|| SummaryError::UnknownNetwork {
                name: name.to_string(),
            })
    }

    /// Look up an open network for editing
    pub fn network_mut(&mut self, name: &str) -> Result<&mut NetworkParameters> {
        self.networks
            .get_mut(name)
            .ok_or_else(|| SummaryError::UnknownNetwork {
                name: name.to_string(),
            })
    }

    /// Make an open network current
    pub fn set_current(&mut self, name: &str) -> Result<()> {
        if !self.networks.contains_key(name) {
            return Err(SummaryError::UnknownNetwork {
                name: name.to_string(),
            });
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    /// The current network, if one is selected
    pub fn current(&self) -> Option<&NetworkParameters> {
        self.current.as_deref().and_then(|n| self.networks.get(n))
    }

    /// The current network for editing, if one is selected
    pub fn current_mut(&mut self) -> Option<&mut NetworkParameters> {
        match self.current.as_deref() {
            Some(name) => self.networks.get_mut(name),
            None => None,
        }
    }

    /// Drop a network; clears the current selection if it pointed there
    pub fn remove_network(&mut self, name: &str) -> Option<NetworkParameters> {
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        self.networks.remove(name)
    }

    /// Names of all open networks, sorted
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Serialized filter of every network, sorted by name
    pub fn save_filters(&self) -> Vec<(String, String)> {
        self.networks
            .iter()
            .map(|(name, params)| (name.clone(), params.filter.to_string()))
            .collect()
    }
}
