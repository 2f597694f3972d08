// Translation table and builder.

use std::borrow::Cow;

use xlat_core::bytes::truncate_name;

use crate::TableError;
use crate::node::{NodeArena, NodeId, TrieNode};

/// Patterns mapped to replacements, rooted at one slot per first byte.
///
/// The table owns its node arena; replacements returned by lookups borrow
/// from it.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    roots: [Option<NodeId>; 256],
    arena: NodeArena,
    name: Box<[u8]>,
    total: usize,
}

impl TranslationTable {
    /// Build a table from parallel pattern and replacement lists.
    ///
    /// Patterns must be non-empty; replacements may be empty, in which case
    /// a match deletes its input. A pattern registered twice keeps the later
    /// replacement. Zero entries yield a valid table that never matches.
    /// The name is truncated to [`xlat_core::MAX_NAME_LEN`] bytes.
    pub fn build<P, R>(
        patterns: &[P],
        replacements: &[R],
        name: impl AsRef<[u8]>,
    ) -> Result<Self, TableError>
    where
        P: AsRef<[u8]>,
        R: AsRef<[u8]>,
    {
        if patterns.len() != replacements.len() {
            return Err(TableError::LengthMismatch {
                patterns: patterns.len(),
                replacements: replacements.len(),
            });
        }
        if let Some(index) = patterns.iter().position(|p| p.as_ref().is_empty()) {
            return Err(TableError::EmptyPattern { index });
        }

        let mut table = Self::empty(name);
        table.total = patterns.len();
        for (pattern, replacement) in patterns.iter().zip(replacements) {
            table.insert(pattern.as_ref(), replacement.as_ref());
        }
        Ok(table)
    }

    /// A table with no entries.
    pub fn empty(name: impl AsRef<[u8]>) -> Self {
        Self {
            roots: [None; 256],
            arena: NodeArena::new(),
            name: truncate_name(name.as_ref()),
            total: 0,
        }
    }

    fn insert(&mut self, pattern: &[u8], replacement: &[u8]) {
        let (&first, rest) = match pattern.split_first() {
            Some(split) => split,
            None => return,
        };
        let root = match self.roots[first as usize] {
            Some(root) => root,
            None => {
                let root = self.arena.alloc(None, first);
                self.roots[first as usize] = Some(root);
                root
            }
        };
        let end = self.arena.extend_path(root, rest);
        self.arena.get_mut(end).replacement = Some(Box::from(replacement));
    }

    /// Root node for patterns starting with `byte`.
    #[inline]
    pub fn root(&self, byte: u8) -> Option<NodeId> {
        self.roots[byte as usize]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        self.arena.get(id)
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Display name bytes (possibly empty), in the codeset the map was
    /// written in.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Display name for printing; bytes that are not UTF-8 are replaced.
    pub fn display_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Number of entries the table was built from, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether no pattern was registered.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Exact lookup of a whole pattern.
    pub fn get(&self, pattern: &[u8]) -> Option<&[u8]> {
        let (&first, rest) = pattern.split_first()?;
        let mut node = self.root(first)?;
        for &b in rest {
            node = self.arena.child(node, b)?;
        }
        self.node(node).replacement.as_deref()
    }
}
