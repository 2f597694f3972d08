// xlat-dump: Print the trie of a translation table.
//
// Each node is printed on its own line, indented by depth, as
// `<byte>(<char>)` followed by the quoted replacement on pattern ends.
//
// Usage:
//   xlat-dump [-d MAP_DIR] SLOT
//   xlat-dump --file PATH
//
// Options:
//   -d, --map-dir PATH   Directory containing the map files
//   -f, --file PATH      Dump a map file instead of a registry slot
//   -h, --help           Print help

use std::path::Path;

use xlat::TranslationTable;
use xlat::dump::{describe, dump_to_string};

fn main() {
    xlat_cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (map_dir, args) = xlat_cli::parse_map_dir(&args);

    if xlat_cli::wants_help(&args) || args.is_empty() {
        println!("xlat-dump: Print the trie of a translation table.");
        println!();
        println!("Usage: xlat-dump [-d MAP_DIR] SLOT");
        println!("       xlat-dump --file PATH");
        println!();
        println!("SLOT is a storage key or index:");
        println!("{}", xlat_cli::slot_listing());
        println!();
        println!("Options:");
        println!("  -d, --map-dir PATH   Directory containing the map files");
        println!("  -f, --file PATH      Dump a map file instead of a registry slot");
        println!("  -h, --help           Print this help");
        return;
    }

    match args.as_slice() {
        [flag, path] if flag == "-f" || flag == "--file" => {
            let path = Path::new(path);
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            match xlat::load_map_file(path, &name) {
                Ok(Some(table)) => print_table(&table),
                Ok(None) => xlat_cli::fatal(format!("{}: no entries", path.display())),
                Err(e) => xlat_cli::fatal(e),
            }
        }
        [slot] => {
            let slot = xlat_cli::parse_slot(slot)
                .unwrap_or_else(|| xlat_cli::fatal(format!("unknown slot: {slot}")));
            let maps =
                xlat_cli::load_registry(map_dir.as_deref()).unwrap_or_else(|e| xlat_cli::fatal(e));
            if let Some((_, e)) = maps.report.errors.iter().find(|(id, _)| *id == slot) {
                xlat_cli::fatal(e);
            }
            match maps.registry.table(slot) {
                Some(table) => print_table(table),
                None => xlat_cli::fatal(format!("{} has no custom table", slot.name())),
            }
        }
        _ => xlat_cli::fatal("expected a single SLOT or --file PATH"),
    }
}

fn print_table(table: &TranslationTable) {
    println!("{}", describe(table));
    print!("{}", dump_to_string(table));
}
