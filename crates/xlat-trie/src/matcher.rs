// Longest-prefix matching and string translation.

use crate::table::TranslationTable;

/// Result of a longest-prefix lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    /// Number of input bytes consumed; 0 means no match.
    pub len: usize,
    /// Replacement for the matched pattern; empty when there is no match.
    pub replacement: &'t [u8],
}

impl Match<'_> {
    const NONE: Match<'static> = Match {
        len: 0,
        replacement: b"",
    };

    #[inline]
    pub fn is_match(&self) -> bool {
        self.len > 0
    }
}

/// Find the longest registered pattern that is a prefix of `input`.
///
/// Descends greedily as far as the input follows the trie, then backs off
/// toward the root until it reaches a node carrying a replacement. Every
/// pattern shorter than the greedy depth lies on that same path, so the first
/// terminus found while backing off is the longest one.
pub fn match_longest<'t>(table: &'t TranslationTable, input: &[u8]) -> Match<'t> {
    let Some((&first, _)) = input.split_first() else {
        return Match::NONE;
    };
    let Some(mut node) = table.root(first) else {
        return Match::NONE;
    };
    let arena = table.arena();

    let mut consumed = 1;
    while consumed < input.len() {
        match arena.child(node, input[consumed]) {
            Some(child) => {
                node = child;
                consumed += 1;
            }
            None => break,
        }
    }

    loop {
        let current = arena.get(node);
        if let Some(replacement) = current.replacement.as_deref() {
            return Match {
                len: consumed,
                replacement,
            };
        }
        match current.parent {
            Some(parent) => {
                node = parent;
                consumed -= 1;
            }
            None => return Match::NONE,
        }
    }
}

/// Rewrite `input` through `table`.
///
/// At each position the longest match is replaced; bytes that start no
/// match are copied through unchanged.
pub fn translate(table: &TranslationTable, input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + input.len() / 3 + 2);
    let mut pos = 0;
    while pos < input.len() {
        let m = match_longest(table, &input[pos..]);
        if m.is_match() {
            out.extend_from_slice(m.replacement);
            pos += m.len;
        } else {
            out.push(input[pos]);
            pos += 1;
        }
    }
    out
}
