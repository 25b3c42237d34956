//! Coordinate flavours.
//!
//! A flavour names the coordinate system in which the vector of a normal
//! surface is written out. Surface lists are enumerated in one *native*
//! flavour; the registry in [`crate::coords`] decides which others can be
//! derived from it.

use crate::error::KernelError;
use serde::{Deserialize, Serialize};

/// A coordinate system for normal (or almost normal) surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavour {
    /// Triangle and quadrilateral counts, 7 per tetrahedron.
    Standard,

    /// Triangle, quadrilateral and octagon counts, 10 per tetrahedron.
    AnStandard,

    /// Quadrilateral counts only, 3 per tetrahedron.
    Quad,

    /// Quadrilateral and octagon counts, 6 per tetrahedron.
    QuadOct,

    /// Number of times the surface meets each edge of the triangulation.
    EdgeWeight,

    /// Number of arcs cutting off each corner of each face.
    FaceArcs,
}

impl Flavour {
    pub const ALL: [Flavour; 6] = [
        Flavour::Standard,
        Flavour::AnStandard,
        Flavour::Quad,
        Flavour::QuadOct,
        Flavour::EdgeWeight,
        Flavour::FaceArcs,
    ];

    /// Human-readable name, as shown in the flavour selector.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard normal (tri-quad)",
            Self::AnStandard => "Standard almost normal (tri-quad-oct)",
            Self::Quad => "Quad normal",
            Self::QuadOct => "Quad-oct almost normal",
            Self::EdgeWeight => "Edge weights",
            Self::FaceArcs => "Face arcs",
        }
    }

    /// Stable token used on the command line and in configuration files.
    pub fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::AnStandard => "an_standard",
            Self::Quad => "quad",
            Self::QuadOct => "quad_oct",
            Self::EdgeWeight => "edge_weight",
            Self::FaceArcs => "face_arcs",
        }
    }

    /// Whether this flavour has octagon coordinates.
    pub fn is_almost_normal(self) -> bool {
        matches!(self, Self::AnStandard | Self::QuadOct)
    }

    /// Whether a surface list can be enumerated in this flavour, as opposed
    /// to it only being derived for viewing.
    pub fn is_enumerable(self) -> bool {
        !matches!(self, Self::EdgeWeight | Self::FaceArcs)
    }
}

impl std::fmt::Display for Flavour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Flavour {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "standard" | "std" => Ok(Self::Standard),
            "an_standard" | "an_std" | "almost_normal" => Ok(Self::AnStandard),
            "quad" => Ok(Self::Quad),
            "quad_oct" | "an_quad_oct" => Ok(Self::QuadOct),
            "edge_weight" | "edge" | "edges" => Ok(Self::EdgeWeight),
            "face_arcs" | "arcs" | "face_arc" => Ok(Self::FaceArcs),
            _ => Err(KernelError::UnknownFlavour(s.to_string())),
        }
    }
}
