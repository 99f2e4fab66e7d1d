use atlas_core::{SearchCriteria, SortOrder};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for atlas-cli
#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    version,
    about = "CLI for querying the atlas country and capital reference data"
)]
pub struct CliArgs {
    /// Directory holding countries.json and capitals.json (default: bundled data)
    #[arg(short = 'd', long = "data-dir", global = true, env = "ATLAS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log dataset loading and lookups to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show dataset totals
    Stats,

    /// List countries with optional search, filters and sorting
    Countries {
        #[command(flatten)]
        filters: CountryFilters,
        #[command(flatten)]
        paging: Paging,
    },

    /// Lookup a country by ISO code
    Country {
        /// ISO code (e.g. DE, fr), case-insensitive
        code: String,
    },

    /// List countries in a region
    Region {
        /// Region name (e.g. Europe), case-insensitive
        region: String,
        #[command(flatten)]
        paging: Paging,
    },

    /// List capitals with optional name search and sorting
    Capitals {
        /// Substring to search (case-insensitive)
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        sort: Sorting,
        #[command(flatten)]
        paging: Paging,
    },

    /// Lookup a capital by name
    Capital {
        /// Capital name, case-insensitive
        name: String,
    },

    /// Countries ranked by population
    Top {
        /// Number of countries to show
        #[arg(short = 'n', long, default_value_t = 5, allow_negative_numbers = true)]
        limit: i64,
        /// Rank from the smallest population instead of the largest
        #[arg(long)]
        smallest: bool,
    },

    /// Number of countries per region
    Regions,

    /// Number of countries per language
    Languages,
}

#[derive(Debug, Args)]
pub struct Paging {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Page size (1-100)
    #[arg(long, default_value_t = 10)]
    pub size: usize,
}

#[derive(Debug, Args)]
pub struct Sorting {
    /// Field to sort by (e.g. population, name)
    #[arg(long = "sort-by")]
    pub sort_by: Option<String>,
    /// Sort order: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,
}

#[derive(Debug, Args)]
pub struct CountryFilters {
    /// Substring matched against name, official name and capital
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub subregion: Option<String>,
    #[arg(long)]
    pub min_population: Option<u64>,
    #[arg(long)]
    pub max_population: Option<u64>,
    #[arg(long)]
    pub min_area: Option<f64>,
    #[arg(long)]
    pub max_area: Option<f64>,
    #[arg(long)]
    pub language: Option<String>,
    #[arg(long)]
    pub currency: Option<String>,
    #[command(flatten)]
    pub sort: Sorting,
}

impl From<CountryFilters> for SearchCriteria {
    fn from(f: CountryFilters) -> Self {
        SearchCriteria {
            name: f.name,
            region: f.region,
            subregion: f.subregion,
            min_population: f.min_population,
            max_population: f.max_population,
            min_area: f.min_area,
            max_area: f.max_area,
            language: f.language,
            currency: f.currency,
            sort_by: f.sort.sort_by,
            order: f.sort.order,
        }
    }
}
