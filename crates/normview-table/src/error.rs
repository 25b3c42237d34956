use normview_kernel::KernelError;
use thiserror::Error;

/// Errors raised when a renderer asks for something outside the current schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("column {column} out of range ({count} columns)")]
    ColumnOutOfRange { column: usize, count: usize },

    #[error("row {row} out of range ({count} rows)")]
    RowOutOfRange { row: usize, count: usize },

    #[error("schema has coordinate columns but no flavour")]
    MissingFlavour,

    #[error(transparent)]
    Kernel(#[from] KernelError),
}
