//! Custom character translation and collation.
//!
//! Installations author translation tables as map files: lines of
//! `PATTERN<TAB>REPLACEMENT` with byte escapes. Each table fills one slot of
//! the [`Registry`] (editor, GEDCOM, display and report conversions, the
//! custom sort order, character widths). Callers rewrite strings through a
//! slot's table or compare strings with the custom sort order.
//!
//! # Architecture
//!
//! - [`grammar`] -- Map-file parser (directives, escapes, comments)
//! - [`registry`] -- Mapping slots, reload from storage and options
//! - [`collate`] -- String comparison with sort weights and character widths
//!
//! ```
//! use xlat::registry::store::{MemoryOptions, MemoryRecords};
//! use xlat::{MapSlot, Registry};
//!
//! let mut records = MemoryRecords::new();
//! records.insert("MSORT", "a\t1\nb\t2\n");
//! let mut registry = Registry::new();
//! let report = registry.reload(&records, &MemoryOptions::new());
//! assert_eq!(report.loaded, vec![MapSlot::Sort]);
//!
//! let collator = registry.collator();
//! assert!(collator.compare(b"ab", b"ac").unwrap().is_lt());
//! ```

use std::path::PathBuf;

pub mod collate;
pub mod grammar;
pub mod registry;

pub use collate::Collator;
pub use grammar::{MapEntries, MapError, MapErrorKind, load_map_file, load_table, parse_map};
pub use registry::{MappingSlot, Registry, ReloadReport};
pub use xlat_core::{MapSlot, Zone};
pub use xlat_trie::dump;
pub use xlat_trie::{Match, TableError, TranslationTable, match_longest, translate};

/// Error type for loading translation tables.
#[derive(Debug, thiserror::Error)]
pub enum XlatError {
    /// The map text was rejected by the grammar.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The parsed entries could not be built into a table.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A map file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
