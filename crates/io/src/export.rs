//! Artifact rendering: the differences TXT and the missing-items CSV.

use std::path::{Path, PathBuf};

use tipo3_recon::error::ReconError;
use tipo3_recon::model::{DifferenceRow, RunReport, StoreReportRow};
use tipo3_recon::money::format_cents;
use tipo3_recon::schema::STORE_REPORT_SCHEMA;

pub const DIFFERENCES_FILENAME: &str = "Precos_Diferentes.txt";
pub const MISSING_FILENAME: &str = "Itens_a_Revisar.csv";

/// `{code};{marked-up price}` with a comma decimal, one line per difference,
/// no header, no trailing newline. Downstream import tools consume this
/// byte-for-byte.
pub fn render_differences_txt(differences: &[DifferenceRow]) -> String {
    differences
        .iter()
        .map(|d| format!("{};{}", d.product_code, format_cents(d.base_price_cents)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Semicolon-delimited CSV of the missing items, header included, original
/// column values retained.
pub fn render_missing_csv(missing: &[StoreReportRow]) -> Result<String, ReconError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    let header: Vec<&str> = STORE_REPORT_SCHEMA
        .iter()
        .map(|spec| spec.canonical)
        .chain(std::iter::once("Loja"))
        .collect();
    writer
        .write_record(&header)
        .map_err(|e| ReconError::Io(e.to_string()))?;

    for row in missing {
        writer
            .write_record([
                row.product_code.as_str(),
                row.description.as_str(),
                row.packaging.as_str(),
                row.current_price.as_str(),
                row.store.as_str(),
            ])
            .map_err(|e| ReconError::Io(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReconError::Io(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReconError::Io(e.to_string()))
}

/// Write the artifacts into `dir`. The differences file is always written;
/// the missing-items CSV only when there is something to review.
pub fn write_artifacts(report: &RunReport, dir: &Path) -> Result<Vec<PathBuf>, ReconError> {
    std::fs::create_dir_all(dir).map_err(|e| ReconError::Io(e.to_string()))?;
    let mut written = Vec::new();

    let txt_path = dir.join(DIFFERENCES_FILENAME);
    std::fs::write(&txt_path, render_differences_txt(&report.differences))
        .map_err(|e| ReconError::Io(e.to_string()))?;
    written.push(txt_path);

    if !report.missing.is_empty() {
        let csv_path = dir.join(MISSING_FILENAME);
        std::fs::write(&csv_path, render_missing_csv(&report.missing)?)
            .map_err(|e| ReconError::Io(e.to_string()))?;
        written.push(csv_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipo3_recon::model::StoreLabel;

    fn diff(code: &str, base_cents: i64) -> DifferenceRow {
        DifferenceRow {
            product_code: code.to_string(),
            description: "ARROZ".to_string(),
            packaging: "PCT".to_string(),
            current_price_cents: 1000,
            base_price_cents: base_cents,
        }
    }

    fn missing_row(code: &str, price: &str) -> StoreReportRow {
        StoreReportRow {
            product_code: code.to_string(),
            description: "BISCOITO".to_string(),
            packaging: "UN".to_string(),
            current_price: price.to_string(),
            store: StoreLabel::Loja6,
        }
    }

    #[test]
    fn txt_lines_use_comma_decimals() {
        let txt = render_differences_txt(&[diff("6", 1050), diff("14", 99)]);
        assert_eq!(txt, "6;10,50\n14;0,99");
    }

    #[test]
    fn txt_is_empty_for_no_differences() {
        assert_eq!(render_differences_txt(&[]), "");
    }

    #[test]
    fn csv_has_header_and_original_values() {
        let csv = render_missing_csv(&[missing_row("999", "3,99")]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Código do Produto;Descrição do Produto;Embalagem;Venda Atual;Loja"
        );
        assert_eq!(lines.next().unwrap(), "999;BISCOITO;UN;3,99;Loja 6");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_quotes_fields_containing_the_delimiter() {
        let mut row = missing_row("999", "3,99");
        row.description = "BISCOITO; RECHEADO".to_string();
        let csv = render_missing_csv(&[row]).unwrap();
        assert!(csv.contains("\"BISCOITO; RECHEADO\""));
    }

    #[test]
    fn artifacts_written_only_when_relevant() {
        let dir = tempfile::tempdir().unwrap();
        let report = tipo3_recon::reconcile(
            &tipo3_recon::TranslatedBaseTable::default(),
            &tipo3_recon::StoreTable::default(),
        );

        let written = write_artifacts(&report, dir.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(dir.path().join(DIFFERENCES_FILENAME).exists());
        assert!(!dir.path().join(MISSING_FILENAME).exists());
    }
}
