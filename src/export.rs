use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::record::ExtractedRecord;

/// Errors that can occur while writing the output files
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Expand a record into its fixed (label, value) row list.
///
/// Multi-valued fields contribute one row per element under a repeated
/// label; scalar fields contribute exactly one row. The order is part of
/// the output contract.
pub fn delimited_rows(record: &ExtractedRecord) -> Vec<(&'static str, &str)> {
    let mut rows: Vec<(&'static str, &str)> = Vec::new();

    rows.push(("HTTP Message", record.http_message.as_str()));
    rows.push(("User Name", record.user_name.as_str()));
    for name in &record.repository_name {
        rows.push(("Repository Name", name.as_str()));
    }
    rows.push((
        "The Third Repositories Name",
        record.the_third_repositories_name.as_str(),
    ));
    for href in &record.first_three_hrefs {
        rows.push(("First Three Hrefs", href.as_str()));
    }
    rows.push(("Overview Link", record.overview_link.as_str()));
    for src in &record.first_three_image_sources {
        rows.push(("First Three Image Sources", src.as_str()));
    }
    rows.push(("Title", record.title.as_str()));
    rows.push(("Star Count", record.star_count.as_str()));

    rows
}

/// Write the record as tab-delimited rows, one per label/value pair,
/// each terminated with `\n`. No header row and no escaping: values are
/// written verbatim, so a value containing a tab or newline will corrupt
/// the row structure (known limitation of the format).
///
/// # Errors
/// Returns an error if writing fails
pub fn write_delimited<W: Write>(
    record: &ExtractedRecord,
    writer: &mut W,
) -> Result<(), ExportError> {
    for (label, value) in delimited_rows(record) {
        // writeln! always emits `\n`, never the platform line ending
        writeln!(writer, "{}\t{}", label, value)?;
    }
    Ok(())
}

/// Serialize the whole record as one pretty-printed JSON object.
/// Field names and order follow the record declaration; arrays preserve
/// extraction order.
///
/// # Errors
/// Returns an error if JSON serialization or writing fails
pub fn write_json<W: Write>(record: &ExtractedRecord, writer: &mut W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, record)?;
    Ok(())
}

/// Write the tab-delimited export to `path`, replacing any existing file
pub fn write_delimited_file<P: AsRef<Path>>(
    path: P,
    record: &ExtractedRecord,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_delimited(record, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the JSON export to `path`, replacing any existing file
pub fn write_json_file<P: AsRef<Path>>(
    path: P,
    record: &ExtractedRecord,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(record, &mut writer)?;
    writer.flush()?;
    Ok(())
}
