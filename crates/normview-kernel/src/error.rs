//! Error types for kernel lookups.

use crate::flavour::Flavour;

/// Errors arising from requests outside the shape of a coordinate system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// A coordinate index is not below `coordinate_count`.
    #[error("coordinate {index} out of range for {flavour} ({count} coordinates)")]
    CoordinateOutOfRange {
        flavour: Flavour,
        index: usize,
        count: usize,
    },

    /// A surface index is not below the size of its list.
    #[error("surface {index} out of range ({len} surfaces)")]
    SurfaceOutOfRange { index: usize, len: usize },

    /// A flavour token could not be parsed.
    #[error("unknown coordinate system: {0}")]
    UnknownFlavour(String),
}
