//! Base price translation: markup plus code-mapping join.

use crate::model::{CodeMapping, RawBaseRow, TranslatedBaseTable, TranslatedPriceRow};
use crate::money::to_cents;

/// Fixed markup multiplier applied to base prices before comparison.
pub const MARKUP_FACTOR: f64 = 1.05;

/// Marked-up price in cents, rounded to two places. Applied exactly once,
/// at translation time.
pub fn marked_up_cents(price: f64) -> i64 {
    to_cents(price * MARKUP_FACTOR)
}

/// Left-join base rows against the code mapping. Mapping duplicates fan out;
/// rows with no retail code represent codes outside this store group and are
/// dropped, expected noise rather than a fault.
pub fn build_translated(raw: &[RawBaseRow], mapping: &CodeMapping) -> TranslatedBaseTable {
    let mut rows = Vec::new();
    for base in raw {
        let price_cents = base.price.map(marked_up_cents);
        for store_code in mapping.store_codes_for(&base.product_code) {
            rows.push(TranslatedPriceRow {
                product_code: base.product_code.clone(),
                description: base.description.clone(),
                price_cents,
                store_code,
            });
        }
    }
    TranslatedBaseTable { rows }
}
