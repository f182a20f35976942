//! Declarative store-report column schema.
//!
//! Canonical output columns and the normalized spelling variants that satisfy
//! them. Adding a new spelling is a one-line change to a variant list.

/// One canonical output column with its accepted normalized spellings.
pub struct ColumnSpec {
    pub canonical: &'static str,
    pub variants: &'static [&'static str],
}

/// The four required slots of a store report, in projection order.
///
/// "cdigo do produto" and "descrio do produto" cover a known upstream
/// mis-decoding that strips the accented vowel entirely; either spelling
/// fills the same slot.
pub const STORE_REPORT_SCHEMA: &[ColumnSpec] = &[
    ColumnSpec {
        canonical: "Código do Produto",
        variants: &["cdigo do produto", "codigo do produto"],
    },
    ColumnSpec {
        canonical: "Descrição do Produto",
        variants: &["descrio do produto", "descricao do produto"],
    },
    ColumnSpec {
        canonical: "Embalagem",
        variants: &["embalagem"],
    },
    ColumnSpec {
        canonical: "Venda Atual",
        variants: &["venda atual"],
    },
];

/// Source-column indexes for the four canonical slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreColumns {
    pub product_code: usize,
    pub description: usize,
    pub packaging: usize,
    pub current_price: usize,
}

/// Resolve every slot against a set of normalized headers.
///
/// Each group is satisfied by its first present variant, in declaration
/// order. On failure the detected headers come back so the caller can report
/// what it actually saw.
pub fn resolve_store_columns(headers: &[String]) -> Result<StoreColumns, Vec<String>> {
    let find = |spec: &ColumnSpec| {
        spec.variants
            .iter()
            .find_map(|v| headers.iter().position(|h| h.as_str() == *v))
    };

    let mut slots = [None; 4];
    for (slot, spec) in slots.iter_mut().zip(STORE_REPORT_SCHEMA.iter()) {
        *slot = find(spec);
    }

    match slots {
        [Some(product_code), Some(description), Some(packaging), Some(current_price)] => {
            Ok(StoreColumns { product_code, description, packaging, current_price })
        }
        _ => Err(headers.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn resolves_all_slots() {
        let h = headers(&[
            "codigo do produto",
            "descricao do produto",
            "embalagem",
            "venda atual",
        ]);
        let cols = resolve_store_columns(&h).unwrap();
        assert_eq!(cols.product_code, 0);
        assert_eq!(cols.description, 1);
        assert_eq!(cols.packaging, 2);
        assert_eq!(cols.current_price, 3);
    }

    #[test]
    fn mis_decoded_variant_fills_the_slot() {
        let h = headers(&[
            "venda atual",
            "cdigo do produto",
            "descrio do produto",
            "embalagem",
        ]);
        let cols = resolve_store_columns(&h).unwrap();
        assert_eq!(cols.product_code, 1);
        assert_eq!(cols.current_price, 0);
    }

    #[test]
    fn first_variant_wins_when_both_spellings_present() {
        let h = headers(&[
            "codigo do produto",
            "cdigo do produto",
            "descricao do produto",
            "embalagem",
            "venda atual",
        ]);
        let cols = resolve_store_columns(&h).unwrap();
        // "cdigo do produto" is declared first, so index 1 wins.
        assert_eq!(cols.product_code, 1);
    }

    #[test]
    fn missing_group_returns_detected_headers() {
        let h = headers(&["codigo do produto", "embalagem", "venda atual"]);
        let err = resolve_store_columns(&h).unwrap_err();
        assert_eq!(err, h);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let h = headers(&[
            "secao",
            "codigo do produto",
            "descricao do produto",
            "embalagem",
            "venda atual",
            "margem",
        ]);
        let cols = resolve_store_columns(&h).unwrap();
        assert_eq!(cols.product_code, 1);
        assert_eq!(cols.current_price, 4);
    }
}
