use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A caller-supplied dimension or budget was not positive
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A table row's cell count does not match its column count. Raised
    /// before any geometry is produced
    #[error("row {row} has {found} cells, expected {expected}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    /// An I/O error occurred while writing rendered output
    Io(#[from] std::io::Error),
}
