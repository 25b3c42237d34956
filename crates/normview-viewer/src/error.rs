use crate::host::HostError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("selected row {row} out of range ({count} rows)")]
    RowOutOfRange { row: usize, count: usize },
}

/// Why a crush request did not produce a new triangulation.
///
/// The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrushError {
    #[error("No normal surface is selected to crush.")]
    NoSelection,

    #[error("More than one normal surface is selected to crush.")]
    MultipleSelection,

    #[error("The selected normal surface could not be crushed: {0}")]
    Engine(HostError),

    #[error("The crushed triangulation could not be inserted into the tree: {0}")]
    Tree(HostError),
}

impl CrushError {
    /// Selection mistakes are expected user errors, not faults.
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::NoSelection | Self::MultipleSelection)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid viewer configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid colour `{0}`: expected #rrggbb")]
    Colour(String),
}
