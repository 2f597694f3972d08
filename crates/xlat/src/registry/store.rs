// Collaborator contracts: record storage and configuration options.

use std::path::PathBuf;

use hashbrown::HashMap;

/// Source of raw map definitions, looked up by slot key.
pub trait RecordStore {
    /// Raw text stored under `key`, or `None` if there is none.
    fn fetch_raw(&self, key: &str) -> Option<Vec<u8>>;
}

/// Source of named configuration options.
pub trait OptionStore {
    fn get_string_option(&self, name: &str) -> Option<String>;

    /// Integer option; unparsable values count as missing.
    fn get_int_option(&self, name: &str) -> Option<i64> {
        self.get_string_option(name)?.trim().parse().ok()
    }
}

/// A store with nothing in it, for hosts without an open database.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecords;

impl RecordStore for NoRecords {
    fn fetch_raw(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }
}

/// In-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecords {
    records: HashMap<String, Vec<u8>>,
}

impl MemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<Vec<u8>>) {
        self.records.insert(key.into(), text.into());
    }
}

impl RecordStore for MemoryRecords {
    fn fetch_raw(&self, key: &str) -> Option<Vec<u8>> {
        self.records.get(key).cloned()
    }
}

/// Record store backed by a directory of map files named `<KEY>.tt`.
#[derive(Debug, Clone)]
pub struct DirRecords {
    dir: PathBuf,
}

/// File extension of map files in a [`DirRecords`] directory.
pub const MAP_FILE_EXTENSION: &str = "tt";

impl DirRecords {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the map file for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key).with_extension(MAP_FILE_EXTENSION)
    }
}

impl RecordStore for DirRecords {
    fn fetch_raw(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        match std::fs::read(&path) {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read map file");
                }
                None
            }
        }
    }
}

/// In-memory option store.
#[derive(Debug, Clone, Default)]
pub struct MemoryOptions {
    options: HashMap<String, String>,
}

impl MemoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.options.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Parse `name=value` lines. Blank lines and lines starting with `#` are
    /// skipped, as are lines without `=`. Names and values are trimmed; later
    /// lines override earlier ones.
    pub fn parse(text: &str) -> Self {
        let mut options = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((name, value)) = line.split_once('=') {
                options.set(name.trim(), value.trim());
            }
        }
        options
    }
}

impl OptionStore for MemoryOptions {
    fn get_string_option(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_records() {
        let mut store = MemoryRecords::new();
        store.insert("MSORT", "a\t1\n");
        assert_eq!(store.fetch_raw("MSORT").as_deref(), Some(&b"a\t1\n"[..]));
        assert_eq!(store.fetch_raw("MCHAR"), None);
        store.insert("MSORT", "b\t2\n");
        assert_eq!(store.fetch_raw("MSORT").as_deref(), Some(&b"b\t2\n"[..]));
    }

    #[test]
    fn no_records() {
        assert_eq!(NoRecords.fetch_raw("MSORT"), None);
    }

    #[test]
    fn dir_records_path() {
        let store = DirRecords::new("/tmp/maps");
        assert_eq!(store.path_for("MSORT"), PathBuf::from("/tmp/maps/MSORT.tt"));
    }

    #[test]
    fn dir_records_missing_dir() {
        let store = DirRecords::new(std::env::temp_dir().join("xlat-no-such-dir"));
        assert_eq!(store.fetch_raw("MSORT"), None);
    }

    #[test]
    fn options_parse() {
        let opts = MemoryOptions::parse(
            "# codesets\nGedcomCodeset = ANSEL\n\nGuiCodeset=UTF-8\nbroken line\nGuiCodeset=CP1252\n",
        );
        assert_eq!(opts.len(), 2);
        assert_eq!(opts.get_string_option("GedcomCodeset").as_deref(), Some("ANSEL"));
        assert_eq!(opts.get_string_option("GuiCodeset").as_deref(), Some("CP1252"));
        assert_eq!(opts.get_string_option("EditorCodeset"), None);
    }

    #[test]
    fn int_options() {
        let mut opts = MemoryOptions::new();
        opts.set("width", " 3 ");
        opts.set("bad", "three");
        assert_eq!(opts.get_int_option("width"), Some(3));
        assert_eq!(opts.get_int_option("bad"), None);
        assert_eq!(opts.get_int_option("missing"), None);
    }
}
