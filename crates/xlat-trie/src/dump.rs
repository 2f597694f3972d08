// Table description and tree dump, for diagnostics and the CLI.

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::node::NodeId;
use crate::table::TranslationTable;

/// One-line description: the table name (or `(Unnamed table)`) followed by
/// the entry count in brackets.
pub fn describe(table: &TranslationTable) -> String {
    let name = if table.name().is_empty() {
        Cow::Borrowed("(Unnamed table)")
    } else {
        table.display_name()
    };
    format!("{name} [{}]", table.total())
}

/// Write the trie as an indented tree, one node per line.
///
/// Each line shows the byte value and its character, followed by the quoted
/// replacement on termini. Nodes are indented two spaces per level.
pub fn dump<W: Write>(table: &TranslationTable, out: &mut W) -> fmt::Result {
    for byte in 0..=255u8 {
        if let Some(root) = table.root(byte) {
            dump_node(table, root, out)?;
        }
    }
    Ok(())
}

/// The dump as a string.
pub fn dump_to_string(table: &TranslationTable) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = dump(table, &mut out);
    out
}

fn dump_node<W: Write>(table: &TranslationTable, node: NodeId, out: &mut W) -> fmt::Result {
    let n = table.node(node);
    for _ in 1..table.arena().depth(node) {
        out.write_str("  ")?;
    }
    write!(out, "{}({})", n.byte, char::from(n.byte).escape_default())?;
    if let Some(replacement) = n.replacement.as_deref() {
        write!(out, " \"{}\"", replacement.escape_ascii())?;
    }
    out.write_char('\n')?;
    for child in table.arena().children(node) {
        dump_node(table, child, out)?;
    }
    Ok(())
}
