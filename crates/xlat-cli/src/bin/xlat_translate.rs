// xlat-translate: Apply a slot's custom table to lines from stdin.
//
// Each input line is rewritten through the table's longest-match
// translation and printed. Lines pass through unchanged when the slot has no
// table.
//
// Usage:
//   xlat-translate [-d MAP_DIR] SLOT
//
// Options:
//   -d, --map-dir PATH   Directory containing the map files
//   -h, --help           Print help

use std::io::{self, Write};

fn main() {
    xlat_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (map_dir, args) = xlat_cli::parse_map_dir(&args);

    if xlat_cli::wants_help(&args) || args.len() != 1 {
        println!("xlat-translate: Apply a slot's custom table to lines from stdin.");
        println!();
        println!("Usage: xlat-translate [-d MAP_DIR] SLOT");
        println!();
        println!("SLOT is a storage key or index:");
        println!("{}", xlat_cli::slot_listing());
        println!();
        println!("Options:");
        println!("  -d, --map-dir PATH   Directory containing the map files");
        println!("  -h, --help           Print this help");
        return;
    }

    let slot = xlat_cli::parse_slot(&args[0])
        .unwrap_or_else(|| xlat_cli::fatal(format!("unknown slot: {}", args[0])));
    let maps = xlat_cli::load_registry(map_dir.as_deref()).unwrap_or_else(|e| xlat_cli::fatal(e));
    if maps.registry.table(slot).is_none() {
        tracing::warn!(slot = slot.key(), "slot has no custom table; copying input");
    }

    let lines = xlat_cli::read_stdin_lines()
        .unwrap_or_else(|e| xlat_cli::fatal(format!("error reading stdin: {e}")));
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in &lines {
        let translated = maps.registry.translate(slot, line);
        let _ = out.write_all(&translated);
        let _ = out.write_all(b"\n");
    }
}
