use unicode_normalization::UnicodeNormalization;

/// Canonicalize a raw header for lookup: NFKD-decompose accented characters,
/// drop non-ASCII remnants, trim, lowercase.
///
/// Total: unencodable characters are dropped, not errored. The output is
/// only ever used as a lookup key, never displayed.
pub fn normalize(raw: &str) -> String {
    raw.nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn folds_diacritics_and_case() {
        assert_eq!(normalize("Descrição do Produto"), "descricao do produto");
        assert_eq!(normalize("DESCRICAO DO PRODUTO"), "descricao do produto");
        assert_eq!(normalize("Código do Produto"), "codigo do produto");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize("  Venda Atual  "), "venda atual");
    }

    #[test]
    fn drops_unencodable_characters() {
        // Upstream exports sometimes lose the "ó" entirely; whatever survives
        // decoding is folded, the rest disappears (BOM included).
        assert_eq!(normalize("Cdigo do Produto"), "cdigo do produto");
        assert_eq!(normalize("\u{feff}Código do Produto"), "codigo do produto");
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    proptest! {
        #[test]
        fn idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn output_is_ascii(s in "\\PC*") {
            prop_assert!(normalize(&s).is_ascii());
        }
    }
}
