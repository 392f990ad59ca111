//! Natural Language Processing components
//!
//! This module provides word filtering, tokenization and the default word lists.

pub mod resources;
pub mod tokenizer;
pub mod validation;
pub mod word_filter;
