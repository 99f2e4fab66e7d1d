mod support;

use atlas_core::{Atlas, CountryRepository, DataPaths, DatasetCache, ErrorKind};
use serde_json::json;
use std::fs;
use std::sync::Arc;
use support::{country, dataset_dir, write_json};

const KEYS: &[&str] = &["name", "population"];

#[test]
fn missing_file_is_data_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let cache = DatasetCache::new();
    let err = cache.load(&dir.path().join("missing.json"), KEYS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataUnavailable);
    assert!(err.to_string().starts_with("Data file not found"));
}

#[test]
fn malformed_json_is_schema_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, b"[{ \"name\": ").unwrap();
    let err = DatasetCache::new().load(&path, KEYS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaInvalid);
}

#[test]
fn missing_keys_are_listed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.json");
    write_json(&path, &json!([{ "name": "X" }]));
    let err = DatasetCache::new().load(&path, KEYS).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaInvalid);
    assert_eq!(err.to_string(), "Dataset item missing keys: population");
}

#[test]
fn second_load_is_served_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    write_json(&path, &json!([{ "name": "A", "population": 1 }]));

    let cache = DatasetCache::new();
    let first = cache.load(&path, KEYS).unwrap();
    assert!(cache.is_cached(&path));

    // The file is never read again, even if it disappears.
    fs::remove_file(&path).unwrap();
    let second = cache.load(&path, KEYS).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn failed_loads_are_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late.json");
    let cache = DatasetCache::new();
    assert!(cache.load(&path, KEYS).is_err());
    assert!(!cache.is_cached(&path));

    write_json(&path, &json!([{ "name": "A", "population": 1 }]));
    assert_eq!(cache.load(&path, KEYS).unwrap().len(), 1);
}

#[test]
fn record_validation_failure_carries_payload() {
    let mut bad = country("FR", "France", "Europe", 1);
    bad["latitude"] = json!(120.0);
    let dir = dataset_dir(json!([bad]), json!([]));
    let repo = CountryRepository::new(
        DataPaths::from_dir(dir.path()).countries,
        Arc::new(DatasetCache::new()),
    );
    let err = repo.get_all().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaInvalid);
    assert_eq!(err.to_string(), "Invalid country dataset");
    let detail = err.detail().unwrap();
    assert_eq!(detail["record"]["country_code"], "FR");
    assert!(detail["error"].as_str().unwrap().contains("latitude"));
}

#[test]
fn duplicate_codes_are_rejected() {
    let dir = dataset_dir(
        json!([
            country("FR", "France", "Europe", 1),
            country("fr", "Francia", "Europe", 2),
        ]),
        json!([]),
    );
    let repo = CountryRepository::new(
        DataPaths::from_dir(dir.path()).countries,
        Arc::new(DatasetCache::new()),
    );
    let err = repo.get_all().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaInvalid);
    assert_eq!(err.detail().unwrap()["duplicate"], "fr");
}

#[test]
fn wrong_types_and_unknown_fields_are_rejected() {
    let mut negative = country("FR", "France", "Europe", 1);
    negative["population"] = json!(-5);
    let dir = dataset_dir(json!([negative]), json!([]));
    let atlas = Atlas::open(&DataPaths::from_dir(dir.path()));
    assert_eq!(atlas.statistics.total_countries().unwrap_err().kind(), ErrorKind::SchemaInvalid);

    let mut extra = country("DE", "Germany", "Europe", 1);
    extra["motto"] = json!("Einigkeit");
    let dir = dataset_dir(json!([extra]), json!([]));
    let atlas = Atlas::open(&DataPaths::from_dir(dir.path()));
    assert_eq!(atlas.statistics.total_countries().unwrap_err().kind(), ErrorKind::SchemaInvalid);
}

#[test]
fn bundled_dataset_loads() {
    let atlas = Atlas::bundled();
    let totals = atlas.statistics.totals().unwrap();
    assert_eq!(totals.countries, 6);
    assert_eq!(totals.capitals, 6);
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_dataset_is_decompressed() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.json.gz");
    let body = serde_json::to_vec(&json!([{ "name": "A", "population": 1 }])).unwrap();
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(&body).unwrap();
    encoder.finish().unwrap();

    let data = DatasetCache::new().load(&path, KEYS).unwrap();
    assert_eq!(data[0]["name"], "A");
}
