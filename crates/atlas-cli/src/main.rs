//! atlas-cli: command-line interface for atlas-core
//!
//! Inspect the country and capital reference data from your terminal:
//! print totals, search and page through countries, look up a country or a
//! capital, and print population rankings and distributions.
//!
//! Usage examples
//! --------------
//!
//! - Show dataset totals
//!   $ atlas stats
//!
//! - Search countries, filter and sort
//!   $ atlas countries --name ger
//!   $ atlas countries --region Europe --sort-by population --order desc
//!   $ atlas countries --min-population 100000000 --page 1 --size 5
//!
//! - Look up a country (case-insensitive) or a capital
//!   $ atlas country de
//!   $ atlas capital tokyo
//!
//! - Rankings and distributions
//!   $ atlas top --limit 3
//!   $ atlas top --smallest
//!   $ atlas regions
//!   $ atlas languages
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `countries.json` and `capitals.json` bundled
//! with `atlas-core`. Use `--data-dir <dir>` (or `ATLAS_DATA_DIR`) to point
//! at another directory holding the same two files.
mod args;

use crate::args::{CliArgs, Commands, Paging};
use atlas_core::{Atlas, Country, DataPaths, Page, PageRequest, SearchCriteria};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let paths = match &args.data_dir {
        Some(dir) => DataPaths::from_dir(dir),
        None => DataPaths::bundled(),
    };
    tracing::debug!(
        countries = %paths.countries.display(),
        capitals = %paths.capitals.display(),
        "resolved dataset paths"
    );
    let atlas = Atlas::open(&paths);

    match args.command {
        Commands::Stats => {
            let stats = atlas.statistics.totals()?;
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Capitals: {}", stats.capitals);
        }

        Commands::Countries { filters, paging } => {
            let criteria = SearchCriteria::from(filters);
            let page = atlas
                .countries
                .list_countries(page_request(&paging)?, &criteria)?;
            print_countries(&page);
        }

        Commands::Country { code } => {
            let c = atlas.countries.get_by_code(&code)?;
            println!("Country: {}", c.name());
            println!("Official name: {}", c.official_name());
            println!("ISO code: {}", c.iso_code());
            println!("Capital: {}", c.capital());
            println!("Region: {} / {}", c.region(), c.subregion());
            println!("Population: {}", c.population());
            println!("Area: {} km²", c.area());
            println!("Languages: {}", c.languages().join(", "));
            println!("Currencies: {}", c.currencies().join(", "));
        }

        Commands::Region { region, paging } => {
            let page = atlas
                .countries
                .get_by_region(&region, page_request(&paging)?)?;
            if page.items.is_empty() {
                println!("No countries found in region: {region}");
            } else {
                print_countries(&page);
            }
        }

        Commands::Capitals { name, sort, paging } => {
            let criteria = SearchCriteria {
                name,
                sort_by: sort.sort_by,
                order: sort.order,
                ..Default::default()
            };
            let page = atlas
                .capitals
                .list_capitals(page_request(&paging)?, &criteria)?;
            for cap in &page.items {
                println!("{} ({}) {}", cap.name(), cap.country(), cap.population());
            }
            print_meta(&page);
        }

        Commands::Capital { name } => {
            let cap = atlas.capitals.get_by_name(&name)?;
            println!("Capital: {}", cap.name());
            println!("Country: {}", cap.country());
            println!("Population: {}", cap.population());
            println!("Coordinates: {}, {}", cap.lat, cap.lng);
        }

        Commands::Top { limit, smallest } => {
            let ranked = if smallest {
                atlas.statistics.top_smallest_populations(limit)?
            } else {
                atlas.statistics.top_largest_populations(limit)?
            };
            for (i, c) in ranked.iter().enumerate() {
                println!("{}. {} ({}): {}", i + 1, c.name(), c.iso_code(), c.population());
            }
        }

        Commands::Regions => {
            for (region, count) in atlas.statistics.region_distribution()? {
                println!("{region}: {count}");
            }
        }

        Commands::Languages => {
            for (language, count) in atlas.statistics.language_distribution()? {
                println!("{language}: {count}");
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "atlas=debug,atlas_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn page_request(paging: &Paging) -> anyhow::Result<PageRequest> {
    Ok(PageRequest::new(paging.page, paging.size)?)
}

fn print_countries(page: &Page<Country>) {
    for c in &page.items {
        println!("{} ({})", c.name(), c.iso_code());
    }
    print_meta(page);
}

fn print_meta<T>(page: &Page<T>) {
    let meta = &page.meta;
    println!(
        "-- page {}/{}, {} of {} items",
        meta.page,
        meta.total_pages,
        page.items.len(),
        meta.total_items
    );
}
