//! Identifier source
//!
//! Reads CNPJs from a CSV file. The column is sniffed by name: the first
//! header containing `cnpj` (any case) wins. Cells are read as text so
//! leading zeros survive, then normalized and deduplicated.

use crate::utils::error::{Result, ValidatorError};
use crate::utils::identifier::normalize_all;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Identifiers read from an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSource {
    /// Header of the column that was used
    pub column: String,
    /// Data rows read
    pub rows: usize,
    /// Normalized, unique, in first-seen order
    pub identifiers: Vec<String>,
}

/// Index of the first header containing "cnpj", case-insensitively
pub fn detect_identifier_column(headers: &StringRecord) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.to_lowercase().contains("cnpj"))
}

/// Read identifiers from any CSV reader
pub fn read_identifiers<R: Read>(reader: R, delimiter: u8) -> Result<IdentifierSource> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let index = detect_identifier_column(&headers).ok_or(ValidatorError::MissingIdentifierColumn)?;
    let column = headers.get(index).unwrap_or_default().to_string();
    debug!("Using column '{}' for CNPJs", column);

    let mut raw = Vec::new();
    for row in reader.records() {
        let row = row?;
        raw.push(row.get(index).unwrap_or_default().to_string());
    }

    Ok(IdentifierSource {
        column,
        rows: raw.len(),
        identifiers: normalize_all(raw),
    })
}

/// Read identifiers from a CSV file
pub fn load_identifiers(path: &Path, delimiter: u8) -> Result<IdentifierSource> {
    info!("Reading CNPJs from: {}", path.display());
    let file = File::open(path)?;
    let source = read_identifiers(file, delimiter)?;
    info!(
        "Read {} rows, {} unique CNPJs from column '{}'",
        source.rows,
        source.identifiers.len(),
        source.column
    );
    Ok(source)
}
