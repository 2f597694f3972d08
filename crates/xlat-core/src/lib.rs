//! Shared types for the xlat translation-table crates.
//!
//! - [`slot`] -- the fixed set of mapping slots and the codeset zones they serve
//! - [`bytes`] -- byte classification used by the map-file escape grammar,
//!   plus display-name truncation

pub mod bytes;
pub mod slot;

pub use slot::{MapSlot, Zone};

/// Maximum number of bytes kept in a table display name.
///
/// Longer names are truncated, never rejected.
pub const MAX_NAME_LEN: usize = 19;
