use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while loading a roster.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The roster file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not well-formed CSV (e.g. rows of unequal length).
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    /// The header row contains columns that are not part of the format.
    #[error("unknown columns: {}", .0.join(", "))]
    UnknownColumns(Vec<String>),

    /// A required column is absent from the header row.
    #[error("missing column: {0}")]
    MissingColumn(&'static str),

    /// A column appears more than once in the header row.
    #[error("duplicate column: {0}")]
    DuplicateColumn(&'static str),

    /// A numeric cell could not be parsed.
    #[error("row {row}: invalid value \"{value}\" for column {column}")]
    InvalidValue {
        /// 1-based data row number (the header is row 0).
        row: usize,
        /// The column the value belongs to.
        column: &'static str,
        /// The offending cell content.
        value: String,
    },
}
