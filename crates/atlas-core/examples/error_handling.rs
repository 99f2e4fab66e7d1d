//! Error handling example for atlas-core
//!
//! This example demonstrates how each error kind surfaces.

use atlas_core::prelude::*;

fn main() -> Result<()> {
    println!("=== atlas-core Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Opening a directory without datasets ---");
    let atlas = Atlas::open(&DataPaths::from_dir("/nonexistent/atlas"));
    match atlas.statistics.totals() {
        Ok(_) => println!("✓ Database loaded"),
        Err(e) => println!("✗ [{}] {e}", e.kind()),
    }
    println!();

    let atlas = Atlas::bundled();

    // Example 2: Unknown codes
    println!("--- Example 2: Searching for non-existent countries ---");
    for code in ["XX", "YY", "ZZ"] {
        match atlas.countries.get_by_code(code) {
            Ok(country) => println!("  Found: {} ({})", country.name(), country.iso_code()),
            Err(e) => println!("  [{}] {e}", e.kind()),
        }
    }
    println!();

    // Example 3: Invalid sort field
    println!("--- Example 3: Invalid sort field ---");
    let criteria = SearchCriteria::default().sorted_by("elevation", SortOrder::Asc);
    if let Err(e) = atlas.countries.list_countries(PageRequest::default(), &criteria) {
        println!("  [{}] {e} detail={:?}", e.kind(), e.detail());
    }
    println!();

    // Example 4: Invalid arguments
    println!("--- Example 4: Invalid arguments ---");
    if let Err(e) = atlas.statistics.top_largest_populations(0) {
        println!("  [{}] {e}", e.kind());
    }
    if let Err(e) = PageRequest::new(1, 500) {
        println!("  [{}] {e}", e.kind());
    }

    Ok(())
}
