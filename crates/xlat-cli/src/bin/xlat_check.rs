// xlat-check: Validate map files.
//
// With FILE arguments, parses each file and prints its table description or
// its first error. Without arguments, reloads every slot from the map
// directory and prints one line per slot:
//   MSORT  Custom Sort: Welsh [24]
//   MCHAR  Custom Charset: -
//   MINDS  Internal to Display: error: <message>
//
// Exits with status 1 if any map was rejected.
//
// Usage:
//   xlat-check [-d MAP_DIR] [FILE...]
//
// Options:
//   -d, --map-dir PATH   Directory containing the map files
//   -h, --help           Print help

use std::io::{self, Write};
use std::path::Path;
use std::process;

use xlat::dump::describe;

fn main() {
    xlat_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (map_dir, args) = xlat_cli::parse_map_dir(&args);

    if xlat_cli::wants_help(&args) {
        println!("xlat-check: Validate map files.");
        println!();
        println!("Usage: xlat-check [-d MAP_DIR] [FILE...]");
        println!();
        println!("If FILE arguments are given, checks each file.");
        println!("Otherwise checks every slot in the map directory.");
        println!();
        println!("Options:");
        println!("  -d, --map-dir PATH   Directory containing the map files");
        println!("  -h, --help           Print this help");
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let failed = if args.is_empty() {
        check_registry(map_dir.as_deref(), &mut out)
    } else {
        check_files(&args, &mut out)
    };

    let _ = out.flush();
    if failed {
        process::exit(1);
    }
}

fn check_files(files: &[String], out: &mut impl Write) -> bool {
    let mut failed = false;
    for file in files {
        let path = Path::new(file);
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.clone());
        match xlat::load_map_file(path, &name) {
            Ok(Some(table)) => {
                let _ = writeln!(out, "{file}: {}", describe(&table));
            }
            Ok(None) => {
                let _ = writeln!(out, "{file}: no entries");
            }
            Err(e) => {
                let _ = writeln!(out, "{file}: error: {e}");
                failed = true;
            }
        }
    }
    failed
}

fn check_registry(map_dir: Option<&str>, out: &mut impl Write) -> bool {
    let maps = xlat_cli::load_registry(map_dir).unwrap_or_else(|e| xlat_cli::fatal(e));
    let _ = writeln!(out, "{}", maps.dir.display());

    for id in xlat::MapSlot::ALL {
        let status = match maps.report.errors.iter().find(|(slot, _)| *slot == id) {
            Some((_, e)) => format!("error: {e}"),
            None => maps
                .registry
                .table(id)
                .map(describe)
                .unwrap_or_else(|| "-".to_string()),
        };
        let _ = writeln!(out, "{}  {}: {status}", id.key(), id.name());
    }

    if let Some(codeset) = maps.registry.internal_codeset() {
        let _ = writeln!(out, "internal codeset: {codeset}");
    }
    !maps.report.is_clean()
}
