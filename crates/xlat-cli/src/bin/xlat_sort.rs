// xlat-sort: Sort lines from stdin with the custom sort order.
//
// Uses the sort table (MSORT) and character-width table (MCHAR) from the
// map directory. Without a sort table lines are sorted by plain byte order.
//
// Usage:
//   xlat-sort [-d MAP_DIR] [OPTIONS]
//
// Options:
//   -d, --map-dir PATH   Directory containing the map files
//   -r, --reverse        Reverse the sort order
//   -u, --unique         Print only the first of equal lines
//   -h, --help           Print help

use std::io::{self, Write};

fn main() {
    xlat_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (map_dir, args) = xlat_cli::parse_map_dir(&args);

    if xlat_cli::wants_help(&args) {
        println!("xlat-sort: Sort lines from stdin with the custom sort order.");
        println!();
        println!("Usage: xlat-sort [-d MAP_DIR] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --map-dir PATH   Directory containing the map files");
        println!("  -r, --reverse        Reverse the sort order");
        println!("  -u, --unique         Print only the first of equal lines");
        println!("  -h, --help           Print this help");
        return;
    }

    let reverse = args.iter().any(|a| a == "-r" || a == "--reverse");
    let unique = args.iter().any(|a| a == "-u" || a == "--unique");

    let maps = xlat_cli::load_registry(map_dir.as_deref()).unwrap_or_else(|e| xlat_cli::fatal(e));
    let collator = maps.registry.collator();
    if !collator.has_custom_order() {
        tracing::warn!(dir = %maps.dir.display(), "no custom sort table; using byte order");
    }

    let mut lines = xlat_cli::read_stdin_lines()
        .unwrap_or_else(|e| xlat_cli::fatal(format!("error reading stdin: {e}")));
    lines.sort_by(|a, b| {
        let order = collator.compare_or_default(a, b);
        if reverse { order.reverse() } else { order }
    });
    if unique {
        lines.dedup_by(|a, b| collator.compare_or_default(a, b).is_eq());
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in &lines {
        let _ = out.write_all(line);
        let _ = out.write_all(b"\n");
    }
}
