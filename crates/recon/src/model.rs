use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Code mapping
// ---------------------------------------------------------------------------

/// One row of the internal↔retail cross-reference. Internal codes are not
/// guaranteed unique; duplicates fan out joined rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeMappingRow {
    pub internal_code: String,
    pub store_code: i64,
}

/// The two-column cross-reference table, in source order.
#[derive(Debug, Clone, Default)]
pub struct CodeMapping {
    pub rows: Vec<CodeMappingRow>,
}

impl CodeMapping {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All retail codes mapped to an internal code, in table order.
    pub fn store_codes_for<'a>(&'a self, internal_code: &'a str) -> impl Iterator<Item = i64> + 'a {
        self.rows
            .iter()
            .filter(move |r| r.internal_code == internal_code)
            .map(|r| r.store_code)
    }
}

// ---------------------------------------------------------------------------
// Base price list
// ---------------------------------------------------------------------------

/// A base price row as loaded, before markup and translation.
/// `price` is `None` when the source cell was empty or unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBaseRow {
    pub product_code: String,
    pub description: String,
    pub price: Option<f64>,
}

/// A base price row after markup and code translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslatedPriceRow {
    pub product_code: String,
    pub description: String,
    /// Marked-up price in cents; `None` when the source had no usable price.
    /// A priceless row can never produce a difference, but its store code
    /// still counts toward the missing-item reference set.
    pub price_cents: Option<i64>,
    pub store_code: i64,
}

/// Translated base table. Invariant: every row carries a concrete store code.
#[derive(Debug, Clone, Default)]
pub struct TranslatedBaseTable {
    pub rows: Vec<TranslatedPriceRow>,
}

// ---------------------------------------------------------------------------
// Store reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StoreLabel {
    #[serde(rename = "Loja 6")]
    Loja6,
    #[serde(rename = "Loja 14")]
    Loja14,
    #[serde(rename = "Loja 16")]
    Loja16,
}

impl StoreLabel {
    /// Ingestion order: store 6, then 14, then 16.
    pub const ALL: [StoreLabel; 3] = [StoreLabel::Loja6, StoreLabel::Loja14, StoreLabel::Loja16];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loja6 => "Loja 6",
            Self::Loja14 => "Loja 14",
            Self::Loja16 => "Loja 16",
        }
    }
}

impl fmt::Display for StoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One projected row of a store export. `current_price` stays the raw locale
/// string until reconciliation; the missing-items CSV carries the original
/// text, not a reformatted number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreReportRow {
    pub product_code: String,
    pub description: String,
    pub packaging: String,
    pub current_price: String,
    pub store: StoreLabel,
}

/// Unified concatenation of the per-store tables, stores in 6/14/16 order,
/// row order preserved within each store.
#[derive(Debug, Clone, Default)]
pub struct StoreTable {
    pub rows: Vec<StoreReportRow>,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A store price that disagrees with the marked-up base price. Store
/// identity is dropped; the set is keyed uniquely by product code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifferenceRow {
    pub product_code: String,
    pub description: String,
    pub packaging: String,
    pub current_price_cents: i64,
    pub base_price_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub stores_seen: usize,
    pub store_rows: usize,
    pub base_rows: usize,
    pub differences: usize,
    pub missing: usize,
    pub rows_skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub engine_version: String,
    pub run_at: String,
}

/// One reconciliation run. Differences and missing items are each keyed
/// uniquely by product code; ordering is first occurrence in merge order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub meta: RunMeta,
    pub summary: RunSummary,
    pub differences: Vec<DifferenceRow>,
    pub missing: Vec<StoreReportRow>,
    pub warnings: Vec<String>,
}
