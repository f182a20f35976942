// tipo3 CLI - Tipo 03 price reconciliation (headless)

mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{
    EXIT_FINDINGS, EXIT_MISSING_INPUT, EXIT_RUNTIME, EXIT_SCHEMA, EXIT_SUCCESS, EXIT_USAGE,
};
use tipo3_io::export::write_artifacts;
use tipo3_io::ingest::{ingest_stores, StoreIngest};
use tipo3_io::xlsx::{load_base_prices, load_mapping};
use tipo3_recon::base::build_translated;
use tipo3_recon::{ReconError, StoreLabel};

#[derive(Parser)]
#[command(name = "tipo3")]
#[command(about = "Reconciles Tipo 03 base prices against store price exports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one reconciliation and write the result artifacts
    #[command(after_help = "\
Examples:
  tipo3 run --mapping BANCO_DE_CODIGOS.xlsx --base tipo03.xlsx --store6 loja6.csv
  tipo3 run --mapping m.xlsx --base b.xlsx --store6 l6.csv --store14 l14.csv --store16 l16.csv
  tipo3 run --mapping m.xlsx --base b.xlsx --store6 l6.csv --out relatorios --json")]
    Run {
        /// Code mapping spreadsheet (SANKHYA/VAREJO columns)
        #[arg(long)]
        mapping: PathBuf,

        /// Tipo 03 base price spreadsheet (header on row 3)
        #[arg(long)]
        base: PathBuf,

        /// Store 6 (Caruaru) CSV export
        #[arg(long)]
        store6: Option<PathBuf>,

        /// Store 14 (Jatiúca) CSV export
        #[arg(long)]
        store14: Option<PathBuf>,

        /// Store 16 (Beira Mar) CSV export
        #[arg(long)]
        store16: Option<PathBuf>,

        /// Directory for Precos_Diferentes.txt and Itens_a_Revisar.csv
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Print the full report as JSON to stdout
        #[arg(long)]
        json: bool,

        /// Write the full JSON report to a file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate the two spreadsheet inputs without reconciling
    #[command(after_help = "\
Examples:
  tipo3 validate --mapping BANCO_DE_CODIGOS.xlsx --base tipo03.xlsx")]
    Validate {
        /// Code mapping spreadsheet (SANKHYA/VAREJO columns)
        #[arg(long)]
        mapping: PathBuf,

        /// Tipo 03 base price spreadsheet (header on row 3)
        #[arg(long)]
        base: PathBuf,
    },
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    fn runtime(msg: impl Into<String>) -> Self {
        Self { code: EXIT_RUNTIME, message: msg.into(), hint: None }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Map engine errors to their registered exit codes.
fn recon_error(err: ReconError) -> CliError {
    let code = match &err {
        ReconError::MissingColumn { .. } => EXIT_SCHEMA,
        ReconError::MissingInput(_) => EXIT_MISSING_INPUT,
        ReconError::Spreadsheet { .. } | ReconError::Io(_) => EXIT_RUNTIME,
    };
    let hint = match &err {
        ReconError::MissingColumn { source, .. } if source == "base prices" => Some(
            "the Tipo 03 report carries two banner rows; the header is expected on row 3"
                .to_string(),
        ),
        ReconError::MissingInput(_) => Some(
            "supply at least one readable store CSV (--store6/--store14/--store16)".to_string(),
        ),
        _ => None,
    };
    CliError { code, message: err.to_string(), hint }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            mapping,
            base,
            store6,
            store14,
            store16,
            out,
            json,
            output,
        } => cmd_run(mapping, base, store6, store14, store16, out, json, output),
        Commands::Validate { mapping, base } => cmd_validate(mapping, base),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = &err.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(err.code)
        }
    }
}

fn cmd_run(
    mapping_path: PathBuf,
    base_path: PathBuf,
    store6: Option<PathBuf>,
    store14: Option<PathBuf>,
    store16: Option<PathBuf>,
    out_dir: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    if store6.is_none() && store14.is_none() && store16.is_none() {
        return Err(CliError::args("no store CSV supplied")
            .with_hint("pass at least one of --store6, --store14, --store16"));
    }

    let mapping_load = load_mapping(&mapping_path).map_err(recon_error)?;
    let base_load = load_base_prices(&base_path).map_err(recon_error)?;
    let translated = build_translated(&base_load.rows, &mapping_load.mapping);

    let mut load_warnings: Vec<String> = Vec::new();
    load_warnings.extend(mapping_load.warnings);
    load_warnings.extend(base_load.warnings);

    // Store files are isolated per store: an unreadable file is a warning,
    // not the end of the run.
    let mut sources: Vec<(StoreLabel, Option<Vec<u8>>)> = Vec::new();
    for (store, path) in StoreLabel::ALL.into_iter().zip([store6, store14, store16]) {
        let bytes = match path {
            None => None,
            Some(path) => match std::fs::read(&path) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    load_warnings.push(format!("{store}: cannot read {}: {e}", path.display()));
                    None
                }
            },
        };
        sources.push((store, bytes));
    }

    let StoreIngest {
        table,
        loaded,
        warnings: ingest_warnings,
    } = ingest_stores(sources);

    let mut report =
        tipo3_recon::run(Some(&translated), table.as_ref()).map_err(recon_error)?;

    // Surface every warning once, in load → ingest → engine order.
    let mut warnings = load_warnings;
    warnings.extend(ingest_warnings);
    warnings.append(&mut report.warnings);
    report.warnings = warnings;

    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    let written = write_artifacts(&report, &out_dir).map_err(recon_error)?;
    for path in &written {
        eprintln!("wrote {}", path.display());
    }

    if json_output || output_file.is_some() {
        let json_str = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::runtime(format!("JSON serialization error: {e}")))?;
        if let Some(ref path) = output_file {
            std::fs::write(path, &json_str)
                .map_err(|e| CliError::runtime(format!("cannot write output: {e}")))?;
            eprintln!("wrote {}", path.display());
        }
        if json_output {
            println!("{json_str}");
        }
    }

    let s = &report.summary;
    eprintln!(
        "{} store(s), {} store rows vs {} base prices — {} differences, {} missing, {} rows skipped",
        loaded.len(),
        s.store_rows,
        s.base_rows,
        s.differences,
        s.missing,
        s.rows_skipped,
    );

    if s.differences > 0 || s.missing > 0 {
        return Err(CliError {
            code: EXIT_FINDINGS,
            message: "differences found".into(),
            hint: None,
        });
    }

    Ok(())
}

fn cmd_validate(mapping_path: PathBuf, base_path: PathBuf) -> Result<(), CliError> {
    let mapping_load = load_mapping(&mapping_path).map_err(recon_error)?;
    let base_load = load_base_prices(&base_path).map_err(recon_error)?;

    for warning in mapping_load.warnings.iter().chain(&base_load.warnings) {
        eprintln!("warning: {warning}");
    }

    let translated = build_translated(&base_load.rows, &mapping_load.mapping);
    eprintln!(
        "valid: {} mapping row(s), {} base price row(s), {} translated for this store group",
        mapping_load.mapping.len(),
        base_load.rows.len(),
        translated.rows.len(),
    );
    Ok(())
}
