//! Contracts for the external surface engine.
//!
//! Surfaces, surface lists and triangulations are owned by the enumeration
//! engine. The viewer only reads them, so every accessor here takes `&self`.

use crate::flavour::Flavour;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A three-valued answer to a yes/no question the engine may not have
/// settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    Positive,
    Negative,
    #[default]
    Unknown,
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Positive,
            Some(false) => Self::Negative,
            None => Self::Unknown,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Positive => Some(true),
            TriState::Negative => Some(false),
            TriState::Unknown => None,
        }
    }
}

/// The triangulation a surface list lives in.
///
/// Only skeleton counts are needed: coordinate counts and column labels
/// depend on the combinatorics, never on any individual surface.
pub trait Triangulation {
    /// Packet label of the triangulation.
    fn label(&self) -> &str;

    fn tetrahedron_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn face_count(&self) -> usize;
}

/// A single normal (or almost normal) surface.
pub trait NormalSurface {
    /// Whether the surface has finitely many normal discs.
    fn is_compact(&self) -> bool;

    /// Euler characteristic. Only meaningful when [`is_compact`](Self::is_compact).
    fn euler_characteristic(&self) -> BigInt;

    fn orientability(&self) -> TriState;

    /// Two-sidedness. Only meaningful for embedded surfaces.
    fn sidedness(&self) -> TriState;

    /// Whether the surface meets the boundary of the triangulation.
    /// Only meaningful when compact.
    fn has_real_boundary(&self) -> bool;

    fn is_vertex_linking(&self) -> bool;

    fn is_splitting(&self) -> bool;

    /// Coordinate `index` in the given flavour; `None` denotes an infinite
    /// coordinate. Callers keep `index` below
    /// [`coordinate_count`](crate::coords::coordinate_count).
    fn coordinate(&self, flavour: Flavour, index: usize) -> Option<BigInt>;
}

/// An ordered, immutable list of surfaces produced by one enumeration.
pub trait SurfaceSet {
    type Surface: NormalSurface;
    type Triangulation: Triangulation;

    fn triangulation(&self) -> &Self::Triangulation;

    /// The flavour the list was enumerated in.
    fn flavour(&self) -> Flavour;

    /// Whether every member is guaranteed to be embedded.
    fn is_embedded_only(&self) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn surface(&self, index: usize) -> Option<&Self::Surface>;
}
