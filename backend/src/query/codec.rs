//! CSV export and import.
//!
//! Export writes an unquoted header row ([`CSV_HEADERS`]) and then one row per record with
//! every value wrapped in double quotes (`"` doubled inside values), rows separated by
//! `\n`. Import reads any CSV with a header row, maps columns by name and accepts quoted
//! fields with embedded commas, quotes and newlines.

use crate::error::CsvError;
use common::model::csv::{StudentRow, CSV_HEADERS};
use common::model::student::{NewStudent, StudentRecord};
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};

pub const EXPORT_FILENAME: &str = "students_export.csv";

pub fn encode(records: &[StudentRecord]) -> Result<String, CsvError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    for record in records {
        let row = StudentRow::from(record);
        writer.write_record(row.fields())?;
    }

    let body = writer
        .into_inner()
        .map_err(|e| CsvError::Csv(e.into_error().into()))?;
    let body = String::from_utf8(body).map_err(|_| CsvError::Encoding)?;

    let mut out = CSV_HEADERS.join(",");
    if let Some(rows) = body.strip_suffix('\n') {
        out.push('\n');
        out.push_str(rows);
    }
    Ok(out)
}

/// Parses every data row into a [`StudentRow`]. Text without a header row yields nothing.
pub fn decode(text: &str) -> Result<Vec<StudentRow>, CsvError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Short rows leave the trailing columns empty; surplus fields are dropped.
        rows.push(StudentRow::from_columns(headers.iter().zip(record.iter())));
    }
    Ok(rows)
}

/// Parses an exported file back into full records.
pub fn decode_records(text: &str) -> Result<Vec<StudentRecord>, CsvError> {
    decode(text)?
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            StudentRecord::try_from(row).map_err(|source| CsvError::Row { row: i + 1, source })
        })
        .collect()
}

/// Parses a CSV file into import candidates.
pub fn decode_candidates(text: &str) -> Result<Vec<NewStudent>, CsvError> {
    Ok(decode(text)?.into_iter().map(NewStudent::from).collect())
}
