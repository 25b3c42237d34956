//! # Normview Kernel
//!
//! The data-dependent core of the normal surface coordinate viewer: which
//! coordinate systems a surface list can be shown in, what each coordinate
//! column means, and how individual surfaces are classified.
//!
//! This crate is **engine-agnostic**: surfaces, surface lists and
//! triangulations are consumed through traits. It never enumerates surfaces
//! or modifies them.
//!
//! ## Architecture
//!
//! ```text
//! Flavour               ← Closed catalogue of coordinate systems
//!     │
//! Triangulation         ← Skeleton counts + label (external)
//!     │
//! NormalSurface         ← Properties + raw coordinates (external)
//!     │
//! SurfaceSet            ← Ordered surfaces + native flavour + embedded flag
//!     │
//! coords                ← Registry (valid flavours) + extractor (columns)
//!     │
//! properties            ← Euler / orientability / sides / boundary / type
//! ```

pub mod coords;
pub mod error;
pub mod flavour;
pub mod properties;
pub mod surface;

pub use coords::{
    CoordinateColumn, Piece, VERTEX_SPLITS, column_abbr, column_description, coordinate,
    coordinate_columns, coordinate_count, piece, valid_flavours, valid_flavours_for,
};
pub use error::KernelError;
pub use flavour::Flavour;
pub use properties::{Boundary, SurfaceKind, SurfaceProperties};
pub use surface::{NormalSurface, SurfaceSet, TriState, Triangulation};

/// Arbitrary-precision integer used for coordinates and Euler characteristics.
pub use num_bigint::BigInt;
