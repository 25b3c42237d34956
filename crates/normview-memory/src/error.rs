use normview_kernel::Flavour;
use normview_viewer::PacketId;
use std::path::PathBuf;

/// Errors raised while loading documents or operating on in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid surface list document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid triangulation skeleton: {0}")]
    Skeleton(String),

    #[error("surface lists cannot be enumerated in {0}")]
    NotEnumerable(Flavour),

    #[error("surface {surface}: expected {expected} coordinates, found {actual}")]
    VectorLength {
        surface: usize,
        expected: usize,
        actual: usize,
    },

    #[error("surface {surface}: coordinate {index} is not an integer: `{value}`")]
    InvalidCoordinate {
        surface: usize,
        index: usize,
        value: String,
    },

    #[error("surface {surface}: Euler characteristic is not an integer: `{value}`")]
    InvalidEuler { surface: usize, value: String },

    #[error("surface {surface}: compact surfaces need an Euler characteristic")]
    MissingEuler { surface: usize },

    #[error("cannot crush a non-compact surface")]
    NonCompactCrush,

    #[error("packet not found: {0}")]
    PacketNotFound(PacketId),
}
