#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn country(code: &str, name: &str, region: &str, population: u64) -> Value {
    json!({
        "name": name,
        "official_name": format!("Republic of {name}"),
        "country_code": code,
        "capital": format!("{name} City"),
        "region": region,
        "subregion": format!("Western {region}"),
        "population": population,
        "area": 1000.0,
        "latitude": 10.0,
        "longitude": 20.0,
        "borders": [],
        "languages": ["English"],
        "currencies": ["EUR"]
    })
}

pub fn capital(name: &str, country: &str, population: u64) -> Value {
    json!({ "name": name, "country": country, "population": population, "lat": 1.0, "lng": 2.0 })
}

pub fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// A temp dir holding `countries.json` and `capitals.json`.
pub fn dataset_dir(countries: Value, capitals: Value) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_json(&dir.path().join("countries.json"), &countries);
    write_json(&dir.path().join("capitals.json"), &capitals);
    dir
}

/// The two-country scenario: FR and DE, both in Europe.
pub fn europe_dir() -> TempDir {
    dataset_dir(
        json!([
            country("FR", "France", "Europe", 67_000_000),
            country("DE", "Germany", "Europe", 83_000_000),
        ]),
        json!([capital("Paris", "France", 2_165_423), capital("Berlin", "Germany", 3_664_088)]),
    )
}
