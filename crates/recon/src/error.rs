use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// Required column absent from a spreadsheet source.
    MissingColumn { source: String, column: String },
    /// A prerequisite table was absent at reconcile time.
    MissingInput(&'static str),
    /// Workbook could not be opened or read.
    Spreadsheet { source: String, detail: String },
    /// IO error (file read/write, etc.).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn { source, column } => {
                write!(f, "{source}: missing required column {column:?}")
            }
            Self::MissingInput(which) => write!(f, "missing input: {which}"),
            Self::Spreadsheet { source, detail } => write!(f, "{source}: {detail}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
