//! Export sink
//!
//! Writes the deduplicated pairs as a two-column CSV named after the client,
//! and optionally the full result set as JSON Lines.

use crate::core::types::{ExportRow, Record};
use crate::utils::error::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Export file name for a client
pub fn export_file_name(client_id: &str) -> String {
    format!("warehouse_cnpj_{}.csv", client_id)
}

/// Write export rows with a `warehouse_queried,identifier_queried` header
///
/// Every field is quoted so identifiers are read back as text.
pub fn write_export<W: Write>(writer: W, rows: &[ExportRow]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    if rows.is_empty() {
        writer.write_record(["warehouse_queried", "identifier_queried"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the export file into `dir`, returning its path
pub fn export_to_dir(dir: &Path, client_id: &str, rows: &[ExportRow]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(client_id));
    write_export(BufWriter::new(File::create(&path)?), rows)?;
    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(path)
}

/// Write one JSON object per record
pub fn write_records_jsonl<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Dump the full result set to a JSON Lines file
pub fn dump_records(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_records_jsonl(BufWriter::new(File::create(path)?), records)?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
