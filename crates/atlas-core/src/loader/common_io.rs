// crates/atlas-core/src/loader/common_io.rs
use crate::error::{AtlasError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dataset file, buffered, and unwraps gzip when the file name ends
/// in `.gz` (requires the `compact` feature).
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| AtlasError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

/// Reads the whole dataset into memory.
pub fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut reader = open_stream(path)?;
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| AtlasError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes)
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
