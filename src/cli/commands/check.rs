//! Check command handler

use degree_planner::core::loader::parse_catalog_json;
use logger::error;
use std::path::Path;

/// Run the check command.
///
/// Loads a catalog and reports dangling requirement references (major or minor
/// requires a course the catalog does not define) and dangling prerequisite
/// references. Exits non-zero when any problem is found.
pub fn run(catalog_path: &Path) {
    let catalog = match parse_catalog_json(catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog {}: {e}", catalog_path.display());
            eprintln!("✗ Failed to load {}: {e}", catalog_path.display());
            std::process::exit(1);
        }
    };

    let mut problems = 0usize;

    match catalog.validate_requirements() {
        Ok(()) => println!("✓ All requirement references resolve"),
        Err(missing) => {
            for msg in &missing {
                eprintln!("✗ {msg}");
            }
            problems += missing.len();
        }
    }

    match catalog.validate_prerequisites() {
        Ok(()) => println!("✓ All prerequisite references resolve"),
        Err(dangling) => {
            for msg in &dangling {
                eprintln!("✗ {msg}");
            }
            problems += dangling.len();
        }
    }

    if problems > 0 {
        eprintln!("\n✗ {problems} problem(s) found in {}", catalog_path.display());
        std::process::exit(1);
    }

    println!(
        "\n✓ Catalog {} looks consistent ({} courses)",
        catalog_path.display(),
        catalog.course_count()
    );
}
