// Custom collation driven by a sort-weight table and a character-width table.
//
// The sort table maps character sequences to decimal sort weights. Where
// either side has no sort entry the raw bytes decide, and the width table
// (whose replacements are ignored) says how many bytes make up the character
// being stepped over.

use std::cmp::Ordering;

use xlat_trie::{TranslationTable, match_longest};

/// Comparator over an optional sort table and optional width table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collator<'t> {
    sort: Option<&'t TranslationTable>,
    width: Option<&'t TranslationTable>,
}

impl<'t> Collator<'t> {
    pub fn new(sort: Option<&'t TranslationTable>, width: Option<&'t TranslationTable>) -> Self {
        Self { sort, width }
    }

    /// Whether a sort table is present.
    pub fn has_custom_order(&self) -> bool {
        self.sort.is_some()
    }

    /// Compare with the custom order; `None` when there is no sort table and
    /// the caller must fall back to its default comparison.
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Option<Ordering> {
        compare(a, b, self.sort, self.width)
    }

    /// Compare with the custom order, falling back to plain byte order.
    pub fn compare_or_default(&self, a: &[u8], b: &[u8]) -> Ordering {
        self.compare(a, b).unwrap_or_else(|| a.cmp(b))
    }
}

/// Compare two byte strings with a custom sort order.
///
/// Returns `None` if `sort_table` is absent. Otherwise both strings are
/// walked in step:
///
/// - when both cursors start a sort-table entry, the entries' weights are
///   compared and each cursor skips its own match;
/// - otherwise the bytes at the cursors are compared; if equal, both cursors
///   skip the wider of the two characters found in `width_table` (one byte
///   when neither side has a width entry or there is no width table).
///
/// The walk ends at the first difference, or when either string runs out;
/// strings ending together compare equal.
pub fn compare(
    a: &[u8],
    b: &[u8],
    sort_table: Option<&TranslationTable>,
    width_table: Option<&TranslationTable>,
) -> Option<Ordering> {
    let sort = sort_table?;
    Some(difference(a, b, sort, width_table).cmp(&0))
}

/// Signed difference at the first point where `a` and `b` diverge.
fn difference(
    a: &[u8],
    b: &[u8],
    sort: &TranslationTable,
    width: Option<&TranslationTable>,
) -> i64 {
    let (mut i, mut j) = (0, 0);
    loop {
        if i >= a.len() || j >= b.len() {
            return byte_at(a, i) - byte_at(b, j);
        }
        let (rest1, rest2) = (&a[i..], &b[j..]);

        let m1 = match_longest(sort, rest1);
        let m2 = match_longest(sort, rest2);
        if m1.is_match() && m2.is_match() {
            let d = sort_weight(m1.replacement).saturating_sub(sort_weight(m2.replacement));
            if d != 0 {
                return d;
            }
            i += m1.len;
            j += m2.len;
            continue;
        }

        let d = i64::from(rest1[0]) - i64::from(rest2[0]);
        if d != 0 {
            return d;
        }
        let step = match width {
            Some(width) => {
                let w = match_longest(width, rest1)
                    .len
                    .max(match_longest(width, rest2).len);
                if w > 0 {
                    let d = prefix_difference(rest1, rest2, w);
                    if d != 0 {
                        return d;
                    }
                    w
                } else {
                    1
                }
            }
            None => 1,
        };
        i = (i + step).min(a.len());
        j = (j + step).min(b.len());
    }
}

/// Byte at `pos`, or 0 past the end.
#[inline]
fn byte_at(s: &[u8], pos: usize) -> i64 {
    s.get(pos).copied().map_or(0, i64::from)
}

/// Difference within the first `n` bytes, treating the end of a string as a
/// zero byte and stopping there.
fn prefix_difference(a: &[u8], b: &[u8], n: usize) -> i64 {
    for k in 0..n {
        let (x, y) = (byte_at(a, k), byte_at(b, k));
        if x != y {
            return x - y;
        }
        if x == 0 {
            break;
        }
    }
    0
}

/// Decimal sort weight of a sort-table replacement.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit, and text without digits weighs 0.
pub fn sort_weight(replacement: &[u8]) -> i64 {
    let mut rest = replacement.trim_ascii_start();
    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };
    let magnitude = rest
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, &b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    if negative { -magnitude } else { magnitude }
}
