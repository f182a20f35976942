//! Reconciliation: price comparison and missing-item detection.

use std::collections::{HashMap, HashSet};

use crate::error::ReconError;
use crate::model::{
    DifferenceRow, RunMeta, RunReport, RunSummary, StoreTable, TranslatedBaseTable,
    TranslatedPriceRow,
};
use crate::money::parse_cents;

/// Canonical join key for a product/store code.
///
/// Integer-looking codes collapse to their decimal rendering so "006", " 6 "
/// and a numeric spreadsheet cell all coincide; anything else joins as its
/// trimmed text.
pub fn code_key(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => n.to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Reconcile with presence enforced: both tables must exist, otherwise the
/// absent side is named instead of silently producing nothing.
pub fn run(
    base: Option<&TranslatedBaseTable>,
    stores: Option<&StoreTable>,
) -> Result<RunReport, ReconError> {
    let base = base.ok_or(ReconError::MissingInput("translated base price table"))?;
    let stores = stores.ok_or(ReconError::MissingInput("store report table"))?;
    Ok(reconcile(base, stores))
}

/// Pure reconciliation of the unified store table against the translated
/// base table. Same inputs, same report (modulo the run timestamp).
pub fn reconcile(base: &TranslatedBaseTable, stores: &StoreTable) -> RunReport {
    let mut warnings = Vec::new();
    let mut rows_skipped = 0usize;

    // Base rows by store-code key, base order preserved per key so mapping
    // duplicates fan out deterministically.
    let mut base_by_key: HashMap<String, Vec<&TranslatedPriceRow>> = HashMap::new();
    for row in &base.rows {
        base_by_key
            .entry(row.store_code.to_string())
            .or_default()
            .push(row);
    }

    let mut differences: Vec<DifferenceRow> = Vec::new();
    let mut seen_diff: HashSet<String> = HashSet::new();

    for row in &stores.rows {
        let Some(current_cents) = parse_cents(&row.current_price) else {
            warnings.push(format!(
                "{}: product {}: cannot parse price {:?}, row skipped",
                row.store, row.product_code, row.current_price
            ));
            rows_skipped += 1;
            continue;
        };

        let key = code_key(&row.product_code);
        if seen_diff.contains(&key) {
            continue;
        }
        let Some(candidates) = base_by_key.get(&key) else {
            // No base price, no comparison.
            continue;
        };
        let mismatch = candidates.iter().find_map(|b| match b.price_cents {
            Some(p) if p != current_cents => Some(p),
            _ => None,
        });
        if let Some(base_cents) = mismatch {
            seen_diff.insert(key.clone());
            differences.push(DifferenceRow {
                product_code: key,
                description: row.description.clone(),
                packaging: row.packaging.clone(),
                current_price_cents: current_cents,
                base_price_cents: base_cents,
            });
        }
    }

    // Missing items check against the FULL translated store-code set, not
    // just the rows that matched above.
    let base_keys: HashSet<String> = base
        .rows
        .iter()
        .map(|r| r.store_code.to_string())
        .collect();

    let mut missing = Vec::new();
    let mut seen_missing: HashSet<String> = HashSet::new();
    for row in &stores.rows {
        let key = code_key(&row.product_code);
        if !base_keys.contains(&key) && seen_missing.insert(key) {
            missing.push(row.clone());
        }
    }

    let stores_seen = stores
        .rows
        .iter()
        .map(|r| r.store)
        .collect::<HashSet<_>>()
        .len();

    RunReport {
        meta: RunMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary: RunSummary {
            stores_seen,
            store_rows: stores.rows.len(),
            base_rows: base.rows.len(),
            differences: differences.len(),
            missing: missing.len(),
            rows_skipped,
        },
        differences,
        missing,
        warnings,
    }
}
