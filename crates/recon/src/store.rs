//! Store report parsing: one decoded CSV export into projected, labeled rows.

use std::fmt;

use crate::model::{StoreLabel, StoreReportRow};
use crate::normalize::normalize;
use crate::schema::resolve_store_columns;

/// Why a store file was skipped. Non-fatal: the caller turns this into a
/// warning and the remaining stores still process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSkip {
    /// No data rows after the header.
    Empty,
    /// No usable header columns.
    NoColumns,
    /// Required column slots unresolved; carries the headers actually seen.
    MissingColumns(Vec<String>),
    /// CSV-level parse fault.
    Csv(String),
}

impl fmt::Display for StoreSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "file has no data rows"),
            Self::NoColumns => write!(f, "file has no usable columns"),
            Self::MissingColumns(seen) => {
                write!(f, "expected columns not found (detected: {seen:?})")
            }
            Self::Csv(msg) => write!(f, "cannot parse CSV: {msg}"),
        }
    }
}

/// Parse one `;`-delimited store export that has already been decoded.
///
/// Headers are normalized and resolved against the synonym schema; only the
/// four canonical columns are projected, stamped with the store label. Row
/// order is preserved.
pub fn parse_store_report(
    csv_text: &str,
    store: StoreLabel,
) -> Result<Vec<StoreReportRow>, StoreSkip> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| StoreSkip::Csv(e.to_string()))?
        .iter()
        .map(normalize)
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(StoreSkip::NoColumns);
    }

    let columns = resolve_store_columns(&headers).map_err(StoreSkip::MissingColumns)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StoreSkip::Csv(e.to_string()))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        rows.push(StoreReportRow {
            product_code: field(columns.product_code),
            description: field(columns.description),
            packaging: field(columns.packaging),
            current_price: field(columns.current_price),
            store,
        });
    }

    if rows.is_empty() {
        return Err(StoreSkip::Empty);
    }

    Ok(rows)
}
