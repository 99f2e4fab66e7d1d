//! Basic usage example for atlas-core
//!
//! This example demonstrates how to:
//! - Open the bundled datasets
//! - List and page through countries
//! - Look up a country and a capital by key
//! - Use the dataset cache

use atlas_core::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== atlas-core Basic Usage Example ===\n");

    println!("Opening bundled datasets...");
    let atlas = Atlas::bundled();
    let totals = atlas.statistics.totals()?;
    println!(
        "✓ Loaded {} countries, {} capitals\n",
        totals.countries, totals.capitals
    );

    // Example 1: First page of countries
    println!("--- Example 1: List countries (page 1, size 3) ---");
    let page = atlas
        .countries
        .list_countries(PageRequest::new(1, 3)?, &SearchCriteria::default())?;
    for (i, country) in page.items.iter().enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.iso_code());
    }
    println!(
        "page {} of {} ({} countries total)\n",
        page.meta.page, page.meta.total_pages, page.meta.total_items
    );

    // Example 2: Country by code
    println!("--- Example 2: Find country by ISO code ---");
    let us = atlas.countries.get_by_code("us")?;
    println!("Found: {} ({})", us.name(), us.official_name());
    println!("Capital: {}", us.capital());
    println!("Region: {} / {}", us.region(), us.subregion());
    println!("Population: {}", us.population());
    println!();

    // Example 3: Capital by name
    println!("--- Example 3: Find capital by name ---");
    let tokyo = atlas.capitals.get_by_name("TOKYO")?;
    println!(
        "{} is the capital of {} ({} inhabitants)",
        tokyo.name(),
        tokyo.country(),
        tokyo.population()
    );
    println!();

    // Example 4: Cache usage
    println!("--- Example 4: Cache usage ---");
    let cache = Arc::new(DatasetCache::new());
    let paths = DataPaths::bundled();

    let start = std::time::Instant::now();
    Atlas::with_cache(&paths, Arc::clone(&cache)).statistics.totals()?;
    println!("First load (reads files): {:?}", start.elapsed());

    let start = std::time::Instant::now();
    Atlas::with_cache(&paths, Arc::clone(&cache)).statistics.totals()?;
    println!("Second load (from cache): {:?}", start.elapsed());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
