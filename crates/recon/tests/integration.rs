//! End-to-end engine scenarios: store CSVs → projection → translation →
//! reconciliation.

use tipo3_recon::base::build_translated;
use tipo3_recon::model::{CodeMapping, CodeMappingRow, RawBaseRow, StoreTable};
use tipo3_recon::store::parse_store_report;
use tipo3_recon::{reconcile, StoreLabel};

fn mapping(pairs: &[(&str, i64)]) -> CodeMapping {
    CodeMapping {
        rows: pairs
            .iter()
            .map(|(internal, store)| CodeMappingRow {
                internal_code: internal.to_string(),
                store_code: *store,
            })
            .collect(),
    }
}

fn base_row(code: &str, description: &str, price: f64) -> RawBaseRow {
    RawBaseRow {
        product_code: code.to_string(),
        description: description.to_string(),
        price: Some(price),
    }
}

#[test]
fn marked_up_base_price_disagrees_with_store_price() {
    // Mapping 100 → 6; base Produto=100 at 10.00 becomes 10.50 for store
    // code 6. The store still sells at 10,00, so exactly one difference.
    let mapping = mapping(&[("100", 6)]);
    let base = build_translated(&[base_row("100", "ARROZ TIPO 1", 10.00)], &mapping);
    assert_eq!(base.rows.len(), 1);
    assert_eq!(base.rows[0].store_code, 6);
    assert_eq!(base.rows[0].price_cents, Some(1050));

    let store_csv = "\
Código do Produto;Descrição do Produto;Embalagem;Venda Atual
6;ARROZ TIPO 1;PCT 1KG;10,00
";
    let rows = parse_store_report(store_csv, StoreLabel::Loja6).unwrap();
    let stores = StoreTable { rows };

    let report = reconcile(&base, &stores);
    assert_eq!(report.differences.len(), 1);
    assert_eq!(report.differences[0].product_code, "6");
    assert_eq!(report.differences[0].current_price_cents, 1000);
    assert_eq!(report.differences[0].base_price_cents, 1050);
    assert!(report.missing.is_empty());
}

#[test]
fn code_absent_from_base_is_missing_only() {
    let mapping = mapping(&[("100", 6)]);
    let base = build_translated(&[base_row("100", "ARROZ TIPO 1", 10.00)], &mapping);

    let store_csv = "\
Código do Produto;Descrição do Produto;Embalagem;Venda Atual
6;ARROZ TIPO 1;PCT 1KG;10,50
999;BISCOITO NOVO;UN;3,99
";
    let rows = parse_store_report(store_csv, StoreLabel::Loja6).unwrap();
    let stores = StoreTable { rows };

    let report = reconcile(&base, &stores);
    assert!(report.differences.is_empty());
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].product_code, "999");
    assert_eq!(report.missing[0].current_price, "3,99");
    assert_eq!(report.missing[0].store, StoreLabel::Loja6);
}

#[test]
fn stores_concatenate_in_fixed_order_and_dedup_keeps_first() {
    let mapping = mapping(&[("100", 6), ("200", 777)]);
    let base = build_translated(
        &[
            base_row("100", "ARROZ TIPO 1", 10.00),
            base_row("200", "ACUCAR CRISTAL", 4.00),
        ],
        &mapping,
    );

    // Both stores carry product 6 at wrong (different) prices; store 6 was
    // ingested first, so its row wins the difference slot.
    let loja6 = parse_store_report(
        "Código do Produto;Descrição do Produto;Embalagem;Venda Atual\n6;ARROZ;PCT;9,00\n",
        StoreLabel::Loja6,
    )
    .unwrap();
    let loja14 = parse_store_report(
        "Código do Produto;Descrição do Produto;Embalagem;Venda Atual\n6;ARROZ;PCT;8,00\n555;SUCO;UN;2,00\n",
        StoreLabel::Loja14,
    )
    .unwrap();

    let mut rows = loja6;
    rows.extend(loja14);
    let stores = StoreTable { rows };

    let report = reconcile(&base, &stores);
    assert_eq!(report.differences.len(), 1);
    assert_eq!(report.differences[0].current_price_cents, 900);
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].product_code, "555");
    assert_eq!(report.summary.stores_seen, 2);

    // Missing and difference sets never share a code: missing means no base
    // row at all, difference means a base row exists with another price.
    for m in &report.missing {
        assert!(report
            .differences
            .iter()
            .all(|d| d.product_code != tipo3_recon::engine::code_key(&m.product_code)));
    }
}

#[test]
fn rerunning_identical_inputs_yields_identical_sets() {
    let mapping = mapping(&[("100", 6)]);
    let base = build_translated(&[base_row("100", "ARROZ TIPO 1", 10.00)], &mapping);
    let rows = parse_store_report(
        "Código do Produto;Descrição do Produto;Embalagem;Venda Atual\n6;ARROZ;PCT;10,00\n999;NOVO;UN;1,00\n",
        StoreLabel::Loja6,
    )
    .unwrap();
    let stores = StoreTable { rows };

    let first = reconcile(&base, &stores);
    let second = reconcile(&base, &stores);
    assert_eq!(first.differences, second.differences);
    assert_eq!(first.missing, second.missing);
    assert_eq!(first.summary, second.summary);
}
