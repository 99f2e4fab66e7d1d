//! Advanced filtering example for atlas-core
//!
//! This example demonstrates combined filters, sorting and statistics.

use atlas_core::prelude::*;

fn main() -> Result<()> {
    println!("=== atlas-core Advanced Filtering Example ===\n");

    let atlas = Atlas::bundled();

    // Example 1: Region + currency
    println!("--- Example 1: Countries in Europe using EUR ---");
    let criteria = SearchCriteria {
        region: Some("Europe".into()),
        currency: Some("EUR".into()),
        ..Default::default()
    };
    let page = atlas.countries.list_countries(PageRequest::default(), &criteria)?;
    for country in &page.items {
        println!("- {} ({})", country.name(), country.iso_code());
    }
    println!();

    // Example 2: Text search hits name, official name or capital
    println!("--- Example 2: Countries matching 'republic' ---");
    let page = atlas.countries.list_countries(
        PageRequest::default(),
        &SearchCriteria::default().with_name("republic"),
    )?;
    for country in &page.items {
        println!("- {} ({})", country.name(), country.official_name());
    }
    println!();

    // Example 3: Range filter + sort
    println!("--- Example 3: Countries over 50M people, largest area first ---");
    let criteria = SearchCriteria {
        min_population: Some(50_000_000),
        ..Default::default()
    }
    .sorted_by("area", SortOrder::Desc);
    let page = atlas.countries.list_countries(PageRequest::default(), &criteria)?;
    for country in &page.items {
        println!(
            "- {}: {} km², {} people",
            country.name(),
            country.area(),
            country.population()
        );
    }
    println!();

    // Example 4: Distributions
    println!("--- Example 4: Countries per region ---");
    for (region, count) in atlas.statistics.region_distribution()? {
        println!("{region}: {count}");
    }
    println!();

    println!("--- Example 5: Countries per language ---");
    for (language, count) in atlas.statistics.language_distribution()? {
        println!("{language}: {count}");
    }

    Ok(())
}
