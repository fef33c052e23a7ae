use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, info};

use super::RawTable;

/// Load a delimited-text file into a [`RawTable`]
///
/// Cells are kept as raw strings; nothing is validated or coerced here.
/// Input that is not valid UTF-8 is decoded as Windows-1252, since ranch
/// exports commonly come out of Brazilian spreadsheet tools in that encoding.
pub fn load_table<P: AsRef<Path>>(file_path: P, delimiter: u8) -> Result<RawTable> {
    let path = file_path.as_ref();
    info!("Loading table from: {:?}", path);

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    let text = decode_bytes(&bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true) // Allow variable number of columns
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read table headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    debug!("Table headers: {:?}", headers);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.context("Failed to read table row")?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    info!("Loaded {} rows from {:?}", rows.len(), path);
    Ok(RawTable::new(headers, rows))
}

/// Decode raw file bytes, preferring UTF-8 and falling back to Windows-1252
fn decode_bytes(bytes: &[u8]) -> String {
    // Strip a UTF-8 BOM if present
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!("Input is not valid UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}
