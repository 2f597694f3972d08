//! Translation tables: byte-sequence patterns mapped to replacement strings.
//!
//! A table is a forest of tries, one per possible first byte, stored in a
//! single node arena. Lookups find the longest registered pattern that is a
//! prefix of the input.
//!
//! # Architecture
//!
//! - [`node`] -- Node arena (extend path, child lookup)
//! - [`table`] -- [`TranslationTable`] and the table builder
//! - [`matcher`] -- Longest-prefix matching and whole-string translation
//! - [`dump`] -- Human-readable table description and tree dump

pub mod dump;
pub mod matcher;
pub mod node;
pub mod table;

pub use matcher::{Match, match_longest, translate};
pub use table::TranslationTable;

/// Error type for table construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("pattern/replacement count mismatch: {patterns} patterns, {replacements} replacements")]
    LengthMismatch { patterns: usize, replacements: usize },
    #[error("pattern {index} is empty")]
    EmptyPattern { index: usize },
}
