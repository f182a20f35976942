//! Spreadsheet loading for the two xlsx inputs: the code mapping and the
//! Tipo 03 base price list.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use tipo3_recon::error::ReconError;
use tipo3_recon::model::{CodeMapping, CodeMappingRow, RawBaseRow};
use tipo3_recon::money::parse_decimal;

/// Fixed column contract of the code mapping spreadsheet. Exact names: this
/// is an external contract, not user data, so no normalization applies.
const MAPPING_INTERNAL: &str = "SANKHYA";
const MAPPING_STORE: &str = "VAREJO";

/// Base price list layout: two banner rows, then the header.
const BASE_HEADER_SKIP: usize = 2;
const BASE_PRODUCT: &str = "Produto";
const BASE_DESCRIPTION: &str = "Descrição (Produto)";
const BASE_PRICE: &str = "Preço";

#[derive(Debug)]
pub struct MappingLoad {
    pub mapping: CodeMapping,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct BaseLoad {
    pub rows: Vec<RawBaseRow>,
    pub warnings: Vec<String>,
}

/// Render one cell the way it reads: whole floats as plain integers,
/// everything else as its text form.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Trimmed canonical form for product/store code cells.
fn code_text(cell: &Data) -> String {
    cell_text(cell).trim().to_string()
}

/// Numeric value of a price cell; string cells may use comma decimals.
fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(n) => Some(*n),
        Data::Int(n) => Some(*n as f64),
        Data::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn open_first_sheet(path: &Path, source: &str) -> Result<Range<Data>, ReconError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ReconError::Spreadsheet {
        source: source.to_string(),
        detail: format!("cannot open {}: {e}", path.display()),
    })?;
    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names.first().ok_or_else(|| ReconError::Spreadsheet {
        source: source.to_string(),
        detail: "workbook contains no sheets".to_string(),
    })?;
    workbook
        .worksheet_range(first)
        .map_err(|e| ReconError::Spreadsheet {
            source: source.to_string(),
            detail: format!("cannot read sheet {first:?}: {e}"),
        })
}

/// Load the code-mapping spreadsheet. Rows whose retail code is empty are
/// join noise and skipped silently; non-integer retail codes are skipped
/// with a warning.
pub fn load_mapping(path: &Path) -> Result<MappingLoad, ReconError> {
    const SOURCE: &str = "code mapping";
    let range = open_first_sheet(path, SOURCE)?;
    let mut rows_iter = range.rows();

    let header: Vec<String> = rows_iter
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();

    let missing_column = |column: &str| ReconError::MissingColumn {
        source: SOURCE.to_string(),
        column: column.to_string(),
    };
    let internal_idx = header
        .iter()
        .position(|h| h == MAPPING_INTERNAL)
        .ok_or_else(|| missing_column(MAPPING_INTERNAL))?;
    let store_idx = header
        .iter()
        .position(|h| h == MAPPING_STORE)
        .ok_or_else(|| missing_column(MAPPING_STORE))?;

    let mut mapping = CodeMapping::default();
    let mut warnings = Vec::new();

    for (i, row) in rows_iter.enumerate() {
        let internal_code = row.get(internal_idx).map(code_text).unwrap_or_default();
        if internal_code.is_empty() {
            continue;
        }
        let store_text = row.get(store_idx).map(code_text).unwrap_or_default();
        if store_text.is_empty() {
            continue;
        }
        match store_text.parse::<i64>() {
            Ok(store_code) => mapping.rows.push(CodeMappingRow {
                internal_code,
                store_code,
            }),
            Err(_) => warnings.push(format!(
                "{SOURCE}: row {}: non-integer store code {store_text:?}, row skipped",
                i + 2
            )),
        }
    }

    Ok(MappingLoad { mapping, warnings })
}

/// Load the Tipo 03 base price list. The two banner rows are skipped, the
/// header row is trimmed (trim only, not normalized), and the three columns
/// are selected by exact name.
///
/// Rows with an empty or unparseable price are kept priceless: their store
/// code still belongs in the missing-item reference set, they just cannot
/// produce a difference.
pub fn load_base_prices(path: &Path) -> Result<BaseLoad, ReconError> {
    const SOURCE: &str = "base prices";
    let range = open_first_sheet(path, SOURCE)?;
    // The banner skip counts absolute sheet rows; the used range may already
    // start below row 0 when the banner rows are blank.
    let start_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    let mut rows_iter = range
        .rows()
        .skip(BASE_HEADER_SKIP.saturating_sub(start_row));

    let header: Vec<String> = rows_iter
        .next()
        .map(|row| {
            row.iter()
                .map(|c| cell_text(c).trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    let missing_column = |column: &str| ReconError::MissingColumn {
        source: SOURCE.to_string(),
        column: column.to_string(),
    };
    let product_idx = header
        .iter()
        .position(|h| h == BASE_PRODUCT)
        .ok_or_else(|| missing_column(BASE_PRODUCT))?;
    let description_idx = header
        .iter()
        .position(|h| h == BASE_DESCRIPTION)
        .ok_or_else(|| missing_column(BASE_DESCRIPTION))?;
    let price_idx = header
        .iter()
        .position(|h| h == BASE_PRICE)
        .ok_or_else(|| missing_column(BASE_PRICE))?;

    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for (i, row) in rows_iter.enumerate() {
        let product_code = row.get(product_idx).map(code_text).unwrap_or_default();
        if product_code.is_empty() {
            continue;
        }
        let description = row.get(description_idx).map(cell_text).unwrap_or_default();
        let price_cell = row.get(price_idx);
        let price = price_cell.and_then(cell_number);
        if price.is_none() {
            let raw = price_cell.map(cell_text).unwrap_or_default();
            if !raw.is_empty() {
                warnings.push(format!(
                    "{SOURCE}: row {}: non-numeric price {raw:?}, kept without price",
                    i + BASE_HEADER_SKIP + 2
                ));
            }
        }
        rows.push(RawBaseRow {
            product_code,
            description,
            price,
        });
    }

    Ok(BaseLoad { rows, warnings })
}
