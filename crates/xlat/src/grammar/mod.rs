// Map-file grammar: text definitions of translation tables.
//
// Line oriented. Blank lines and lines starting with "##" are skipped; two
// directives live in "##" lines:
//
//   ##!sep=X        field separator for the following lines (default tab)
//   ##!name: TEXT   table display name
//
// Every other line is PATTERN SEP REPLACEMENT. Both fields accept the byte
// escapes #ddd (decimal), $hh (hex) and \c (literal c); the replacement also
// accepts \t for a tab. In the replacement a raw tab or separator starts a
// comment running to the end of the line.

pub mod cursor;
pub mod error;

use std::path::Path;

use xlat_core::bytes::{decode_decimal, decode_hex, truncate_name};
use xlat_trie::TranslationTable;

use crate::XlatError;
use cursor::Cursor;
pub use error::{MapError, MapErrorKind};

/// Default field separator.
pub const DEFAULT_SEPARATOR: u8 = b'\t';

/// Parsed map definition, ready for [`TranslationTable::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEntries {
    pub patterns: Vec<Vec<u8>>,
    pub replacements: Vec<Vec<u8>>,
    /// Raw name bytes from the `##!name:` directive, empty if there was
    /// none.
    pub name: Vec<u8>,
}

impl MapEntries {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Build the table; `None` when there are no entries.
    pub fn into_table(self) -> Result<Option<TranslationTable>, XlatError> {
        if self.is_empty() {
            return Ok(None);
        }
        let table = TranslationTable::build(&self.patterns, &self.replacements, &self.name)?;
        Ok(Some(table))
    }
}

/// Parse map text into pattern/replacement lists.
///
/// `map_name` identifies the map in error messages. Parsing stops at the
/// first grammar error.
pub fn parse_map(text: &[u8], map_name: &str) -> Result<MapEntries, MapError> {
    let capacity = count_entries(text);
    if capacity == 0 {
        return Ok(MapEntries::default());
    }
    Lexer::new(text, map_name).run(capacity)
}

/// Parse map text and build its table.
///
/// Text without any data line yields `Ok(None)`.
pub fn load_table(text: &[u8], map_name: &str) -> Result<Option<TranslationTable>, XlatError> {
    parse_map(text, map_name)?.into_table()
}

/// Read a map file and build its table.
///
/// A missing or empty file yields `Ok(None)`.
pub fn load_map_file(path: &Path, map_name: &str) -> Result<Option<TranslationTable>, XlatError> {
    let text = match std::fs::read(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(XlatError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    load_table(&text, map_name)
}

/// Whether the line starting at `rest` carries no entry.
fn is_skipped_line(rest: &[u8]) -> bool {
    matches!(rest, [b'\r' | b'\n', ..] | [b'#', b'#', ..])
}

/// First pass: number of data lines, used to size the entry lists.
fn count_entries(text: &[u8]) -> usize {
    let mut cursor = Cursor::new(text);
    let mut count = 0;
    while !cursor.is_eof() {
        if !is_skipped_line(cursor.rest()) {
            count += 1;
        }
        cursor.skip_line();
    }
    count
}

/// How a replacement field ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldEnd {
    /// End of line; more lines may follow.
    Line,
    /// End of the text.
    Text,
}

/// Second pass: the actual lexer.
struct Lexer<'a> {
    cursor: Cursor<'a>,
    map_name: &'a str,
    separator: u8,
    name: Vec<u8>,
    line: usize,
    entry: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a [u8], map_name: &'a str) -> Self {
        Self {
            cursor: Cursor::new(text),
            map_name,
            separator: DEFAULT_SEPARATOR,
            name: Vec::new(),
            line: 1,
            entry: 1,
        }
    }

    fn run(mut self, capacity: usize) -> Result<MapEntries, MapError> {
        let mut patterns = Vec::with_capacity(capacity);
        let mut replacements = Vec::with_capacity(capacity);

        while !self.cursor.is_eof() {
            if is_skipped_line(self.cursor.rest()) {
                self.directive();
                self.cursor.skip_line();
                continue;
            }
            let pattern = self.pattern()?;
            let (replacement, end) = self.replacement()?;
            patterns.push(pattern);
            replacements.push(replacement);
            if end == FieldEnd::Text {
                break;
            }
        }

        Ok(MapEntries {
            patterns,
            replacements,
            name: self.name,
        })
    }

    fn error(&self, kind: MapErrorKind) -> MapError {
        MapError {
            map: self.map_name.to_string(),
            line: self.line,
            entry: self.entry,
            kind,
        }
    }

    /// Apply a `##!` directive found on a skipped line.
    fn directive(&mut self) {
        let line = self.cursor.line();
        if let Some(arg) = line.strip_prefix(b"##!sep") {
            if let [b'=', sep, ..] = *arg {
                if sep != b'\r' {
                    self.separator = sep;
                }
            }
        }
        if let Some(text) = line.strip_prefix(b"##!name: ") {
            let text = text.strip_suffix(b"\r").unwrap_or(text);
            self.name = truncate_name(text).into_vec();
        }
    }

    fn decimal(&mut self) -> Result<u8, MapError> {
        let value = decode_decimal(self.cursor.rest())
            .ok_or_else(|| self.error(MapErrorKind::BadDecimal))?;
        self.cursor.advance(3);
        Ok(value)
    }

    fn hex(&mut self) -> Result<u8, MapError> {
        let value =
            decode_hex(self.cursor.rest()).ok_or_else(|| self.error(MapErrorKind::BadHex))?;
        self.cursor.advance(2);
        Ok(value)
    }

    /// Byte following a backslash. `\t` means tab only in replacements.
    fn escaped(&mut self, in_replacement: bool) -> Result<u8, MapError> {
        match self.cursor.bump() {
            None | Some(b'\t' | b'\n' | b'\r') => Err(self.error(MapErrorKind::BadEscape)),
            Some(b't') if in_replacement => Ok(b'\t'),
            Some(c) => Ok(c),
        }
    }

    /// Lex the pattern field, consuming the separator.
    fn pattern(&mut self) -> Result<Vec<u8>, MapError> {
        let mut out = Vec::new();
        loop {
            match self.cursor.bump() {
                Some(b'#') => out.push(self.decimal()?),
                Some(b'$') => out.push(self.hex()?),
                None | Some(b'\n' | b'\r') => return Err(self.error(MapErrorKind::NoReplacement)),
                Some(b'\\') => out.push(self.escaped(false)?),
                Some(c) if c == self.separator => break,
                Some(c) => out.push(c),
            }
        }
        if out.is_empty() {
            return Err(self.error(MapErrorKind::NoOriginal));
        }
        Ok(out)
    }

    /// Lex the replacement field through the end of its line.
    fn replacement(&mut self) -> Result<(Vec<u8>, FieldEnd), MapError> {
        let mut out = Vec::new();
        loop {
            match self.cursor.bump() {
                Some(b'#') => out.push(self.decimal()?),
                Some(b'$') => out.push(self.hex()?),
                Some(b'\n') => {
                    self.next_line();
                    return Ok((out, FieldEnd::Line));
                }
                None => return Ok((out, FieldEnd::Text)),
                Some(b'\\') => out.push(self.escaped(true)?),
                Some(c) if c == b'\t' || c == self.separator => {
                    // trailing comment
                    if self.cursor.skip_line() {
                        self.next_line();
                    }
                    return Ok((out, FieldEnd::Line));
                }
                Some(b'\r') => {}
                Some(c) => out.push(c),
            }
        }
    }

    fn next_line(&mut self) {
        self.line += 1;
        self.entry += 1;
    }
}
