// xlat-cli: shared utilities for CLI tools.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::EnvFilter;
use xlat::registry::store::{DirRecords, MAP_FILE_EXTENSION, MemoryOptions, OptionStore};
use xlat::{MapSlot, Registry, ReloadReport};

/// Options file name within a map directory.
const OPTIONS_FILE: &str = "options.conf";

/// Option naming the internal codeset.
const CODESET_OPTION: &str = "codeset";

/// Registry loaded from a map directory.
pub struct LoadedMaps {
    pub dir: PathBuf,
    pub registry: Registry,
    pub report: ReloadReport,
}

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`
/// (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Find the map directory and reload a registry from it.
///
/// Search order:
/// 1. `map_dir` argument (if provided)
/// 2. `XLAT_MAP_PATH` environment variable
/// 3. `~/.xlat/maps`
/// 4. `/etc/xlat/maps`
/// 5. Current working directory
///
/// The first directory holding an options file or any map file wins. The
/// options file supplies zone codesets and, under `codeset`, the internal
/// codeset.
pub fn load_registry(map_dir: Option<&str>) -> Result<LoadedMaps, String> {
    let search_paths = build_search_paths(map_dir);
    let Some(dir) = search_paths.iter().find(|dir| is_map_dir(dir)) else {
        return Err(format!(
            "could not find a map directory in any of the search paths:\n{}",
            search_paths
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    };

    let options = load_options(dir)?;
    let mut registry = Registry::new();
    registry.set_internal_codeset(options.get_string_option(CODESET_OPTION));
    let report = registry.reload(&DirRecords::new(dir), &options);
    tracing::debug!(dir = %dir.display(), loaded = report.loaded.len(), "registry loaded");

    Ok(LoadedMaps {
        dir: dir.clone(),
        registry,
        report,
    })
}

/// Read `options.conf` from `dir`; a missing file gives no options.
pub fn load_options(dir: &Path) -> Result<MemoryOptions, String> {
    let path = dir.join(OPTIONS_FILE);
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(MemoryOptions::parse(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(MemoryOptions::new()),
        Err(e) => Err(format!("failed to read {}: {e}", path.display())),
    }
}

fn is_map_dir(dir: &Path) -> bool {
    dir.join(OPTIONS_FILE).is_file()
        || MapSlot::ALL
            .iter()
            .any(|id| dir.join(format!("{}.{MAP_FILE_EXTENSION}", id.key())).is_file())
}

/// Build the list of directories to search for map files.
fn build_search_paths(map_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = map_dir {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("XLAT_MAP_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".xlat").join("maps"));
    }

    paths.push(PathBuf::from("/etc/xlat/maps"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// `$HOME`, ignored when unset or empty.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Parse a `--map-dir=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(map_dir, remaining_args)`.
pub fn parse_map_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut map_dir = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--map-dir=") {
            map_dir = Some(val.to_string());
        } else if arg == "--map-dir" || arg == "-d" {
            match iter.next() {
                Some(val) => map_dir = Some(val.clone()),
                None => fatal(format_args!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (map_dir, remaining)
}

/// Resolve a slot argument: a storage key (`MSORT`, case-insensitive) or a
/// slot index.
pub fn parse_slot(arg: &str) -> Option<MapSlot> {
    MapSlot::from_key(&arg.to_ascii_uppercase())
        .or_else(|| arg.parse().ok().and_then(MapSlot::from_index))
}

/// Slot keys and names, one per line, for help output.
pub fn slot_listing() -> String {
    MapSlot::ALL
        .iter()
        .map(|id| format!("  {:>2}  {}  {}", id.index(), id.key(), id.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read all of stdin and split it into lines, dropping the line terminators
/// (`\n` or `\r\n`). Input need not be UTF-8.
pub fn read_stdin_lines() -> io::Result<Vec<Vec<u8>>> {
    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;
    Ok(split_lines(&input))
}

fn split_lines(input: &[u8]) -> Vec<Vec<u8>> {
    if input.is_empty() {
        return Vec::new();
    }
    let body = input.strip_suffix(b"\n").unwrap_or(input);
    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}

/// Report `err` on stderr and exit with status 1.
pub fn fatal(err: impl fmt::Display) -> ! {
    eprintln!("error: {err}");
    process::exit(1);
}

/// Whether `-h` or `--help` appears before any `--` terminator.
pub fn wants_help(args: &[String]) -> bool {
    args.iter()
        .take_while(|a| *a != "--")
        .any(|a| a == "-h" || a == "--help")
}
