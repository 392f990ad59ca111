//! # semantic-summary
//!
//! Word filtering and counting for semantic summaries (word clouds) of
//! network node text.
//!
//! The central type is [`WordFilter`]: stop words, flagged words, user
//! exclusions and an optional numeric rule, persisted through a flat
//! key/value text record. A [`Tokenizer`] turns node text into filtered,
//! counted words, and a [`SessionContext`] keeps per-network settings.
//!
//! ```rust
//! use semantic_summary::{FilterConfig, SessionContext};
//!
//! let mut session = SessionContext::new(FilterConfig::default());
//! let network = session.open_network("yeast").unwrap();
//! network.add_word("Protein").unwrap();
//!
//! let counts = network.summarize(&["The protein binds DNA", "DNA repair"]);
//! assert_eq!(counts.get("dna"), 2);
//! assert_eq!(counts.get("protein"), 0);
//!
//! let saved = network.filter().to_string();
//! assert!(saved.contains("AddedWords\tproteinWordFilterDelimiter\n"));
//! ```

pub mod config;
pub mod errors;
pub mod nlp;
pub mod session;

pub use config::FilterConfig;
pub use errors::{Result, SummaryError};
pub use nlp::resources::{ResourceLoader, ResourceStrategy, WordListResource};
pub use nlp::tokenizer::{Tokenizer, WordCounts};
pub use nlp::word_filter::{WordCategory, WordFilter};
pub use session::{NetworkParameters, SessionContext};
