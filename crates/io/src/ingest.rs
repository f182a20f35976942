//! Store report ingestion: decode, parse, concatenate.

use tipo3_recon::model::{StoreLabel, StoreReportRow, StoreTable};
use tipo3_recon::store::parse_store_report;

use crate::decode::decode_text;

/// Result of ingesting the (up to three) store exports. `table` is absent
/// (not empty) when no store produced rows; reconciliation requires its
/// presence.
#[derive(Debug, Default)]
pub struct StoreIngest {
    pub table: Option<StoreTable>,
    pub loaded: Vec<StoreLabel>,
    pub warnings: Vec<String>,
}

/// Ingest one store export from raw bytes. `Err` carries the warning text;
/// the caller keeps going with the other stores.
pub fn ingest_store(bytes: Vec<u8>, store: StoreLabel) -> Result<Vec<StoreReportRow>, String> {
    let text = decode_text(bytes);
    if text.trim().is_empty() {
        return Err(format!("{store}: file is empty or undecodable"));
    }
    parse_store_report(&text, store).map_err(|skip| format!("{store}: {skip}"))
}

/// Ingest every supplied store in the given order (6, 14, 16 by convention).
/// Absent files are ignored without a warning, since nothing was supplied;
/// skipped files leave a warning and never disturb the remaining stores.
pub fn ingest_stores(sources: Vec<(StoreLabel, Option<Vec<u8>>)>) -> StoreIngest {
    let mut ingest = StoreIngest::default();
    let mut rows: Vec<StoreReportRow> = Vec::new();

    for (store, bytes) in sources {
        let Some(bytes) = bytes else { continue };
        match ingest_store(bytes, store) {
            Ok(store_rows) => {
                rows.extend(store_rows);
                ingest.loaded.push(store);
            }
            Err(warning) => ingest.warnings.push(warning),
        }
    }

    if !rows.is_empty() {
        ingest.table = Some(StoreTable { rows });
    }
    ingest
}
