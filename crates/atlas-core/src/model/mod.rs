// crates/atlas-core/src/model/mod.rs
pub mod capital;
pub mod country;

pub use capital::{Capital, CapitalSortField};
pub use country::{Country, CountrySortField};

fn check_coordinates(lat: f64, lng: f64) -> Result<(), String> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude must be within -90..=90, got {lat}"));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("longitude must be within -180..=180, got {lng}"));
    }
    Ok(())
}
