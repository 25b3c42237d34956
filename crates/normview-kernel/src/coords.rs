//! Coordinate system registry and coordinate extraction.
//!
//! The registry answers "which flavours can this list be shown in"; the
//! extractor answers "how many columns does a flavour have here, what is
//! each one called, and what value does a surface take in it".
//!
//! Per-tetrahedron layout for the disc-counting flavours:
//!
//! ```text
//! Standard     T0 T1 T2 T3 Q0 Q1 Q2
//! AnStandard   T0 T1 T2 T3 Q0 Q1 Q2 K0 K1 K2
//! Quad         Q0 Q1 Q2
//! QuadOct      Q0 Q1 Q2 K0 K1 K2
//! ```
//!
//! Triangle `Ti` surrounds vertex `i`; quad and octagon type `k` split the
//! vertices as [`VERTEX_SPLITS`]`[k]`.

use crate::error::KernelError;
use crate::flavour::Flavour;
use crate::surface::{NormalSurface, SurfaceSet, Triangulation};
use num_bigint::BigInt;

/// Vertex partitions for quadrilateral / octagon types 0, 1, 2.
pub const VERTEX_SPLITS: [&str; 3] = ["01/23", "02/13", "03/12"];

/// Static metadata for one coordinate column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateColumn {
    pub abbr: String,
    pub description: String,
}

/// What a single coordinate counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Triangle { tet: usize, vertex: usize },
    Quad { tet: usize, kind: usize },
    Octagon { tet: usize, kind: usize },
    Edge(usize),
    FaceArc { face: usize, vertex: usize },
}

fn per_tetrahedron(flavour: Flavour) -> usize {
    match flavour {
        Flavour::Standard => 7,
        Flavour::AnStandard => 10,
        Flavour::Quad => 3,
        Flavour::QuadOct => 6,
        Flavour::EdgeWeight | Flavour::FaceArcs => 0,
    }
}

/// The piece counted by coordinate `index` of `flavour`. Does not check
/// `index` against any triangulation.
pub fn piece(flavour: Flavour, index: usize) -> Piece {
    match flavour {
        Flavour::Standard | Flavour::AnStandard => {
            let width = per_tetrahedron(flavour);
            let (tet, pos) = (index / width, index % width);
            match pos {
                0..=3 => Piece::Triangle { tet, vertex: pos },
                4..=6 => Piece::Quad { tet, kind: pos - 4 },
                _ => Piece::Octagon { tet, kind: pos - 7 },
            }
        }
        Flavour::Quad => Piece::Quad {
            tet: index / 3,
            kind: index % 3,
        },
        Flavour::QuadOct => {
            let (tet, pos) = (index / 6, index % 6);
            if pos < 3 {
                Piece::Quad { tet, kind: pos }
            } else {
                Piece::Octagon { tet, kind: pos - 3 }
            }
        }
        Flavour::EdgeWeight => Piece::Edge(index),
        Flavour::FaceArcs => Piece::FaceArc {
            face: index / 3,
            vertex: index % 3,
        },
    }
}

/// Flavours a list enumerated in `native` can be viewed in, in selector
/// order. Empty when the triangulation has no tetrahedra.
pub fn valid_flavours<T: Triangulation + ?Sized>(native: Flavour, tri: &T) -> Vec<Flavour> {
    if tri.tetrahedron_count() == 0 {
        return Vec::new();
    }
    match native {
        Flavour::Standard | Flavour::Quad => vec![
            Flavour::Standard,
            Flavour::Quad,
            Flavour::EdgeWeight,
            Flavour::FaceArcs,
        ],
        Flavour::AnStandard | Flavour::QuadOct => vec![
            Flavour::AnStandard,
            Flavour::QuadOct,
            Flavour::EdgeWeight,
            Flavour::FaceArcs,
        ],
        Flavour::EdgeWeight | Flavour::FaceArcs => vec![Flavour::EdgeWeight, Flavour::FaceArcs],
    }
}

/// [`valid_flavours`] for an optional surface list.
pub fn valid_flavours_for<S: SurfaceSet + ?Sized>(set: Option<&S>) -> Vec<Flavour> {
    match set {
        Some(set) => valid_flavours(set.flavour(), set.triangulation()),
        None => Vec::new(),
    }
}

/// Number of coordinate columns `flavour` has over `tri`.
pub fn coordinate_count<T: Triangulation + ?Sized>(flavour: Flavour, tri: &T) -> usize {
    match flavour {
        Flavour::EdgeWeight => tri.edge_count(),
        Flavour::FaceArcs => 3 * tri.face_count(),
        _ => per_tetrahedron(flavour) * tri.tetrahedron_count(),
    }
}

fn check_range<T: Triangulation + ?Sized>(
    flavour: Flavour,
    tri: &T,
    index: usize,
) -> Result<(), KernelError> {
    let count = coordinate_count(flavour, tri);
    if index < count {
        Ok(())
    } else {
        Err(KernelError::CoordinateOutOfRange {
            flavour,
            index,
            count,
        })
    }
}

/// Short column header for coordinate `index`.
pub fn column_abbr<T: Triangulation + ?Sized>(
    flavour: Flavour,
    tri: &T,
    index: usize,
) -> Result<String, KernelError> {
    check_range(flavour, tri, index)?;
    Ok(abbr(flavour, index))
}

/// Longer description for coordinate `index`, used as the column tooltip.
pub fn column_description<T: Triangulation + ?Sized>(
    flavour: Flavour,
    tri: &T,
    index: usize,
) -> Result<String, KernelError> {
    check_range(flavour, tri, index)?;
    Ok(description(flavour, index))
}

fn abbr(flavour: Flavour, index: usize) -> String {
    match piece(flavour, index) {
        Piece::Triangle { tet, vertex } => format!("{tet}: {vertex}"),
        Piece::Quad { tet, kind } => format!("{tet}: {}", VERTEX_SPLITS[kind]),
        Piece::Octagon { tet, kind } => format!("K{tet}: {}", VERTEX_SPLITS[kind]),
        Piece::Edge(edge) => format!("E{edge}"),
        Piece::FaceArc { face, vertex } => format!("F{face}: {vertex}"),
    }
}

fn description(flavour: Flavour, index: usize) -> String {
    match piece(flavour, index) {
        Piece::Triangle { tet, vertex } => {
            format!("Tetrahedron {tet}, triangle about vertex {vertex}")
        }
        Piece::Quad { tet, kind } => format!(
            "Tetrahedron {tet}, quad splitting vertices {}",
            VERTEX_SPLITS[kind]
        ),
        Piece::Octagon { tet, kind } => format!(
            "Tetrahedron {tet}, octagon partitioning vertices {}",
            VERTEX_SPLITS[kind]
        ),
        Piece::Edge(edge) => format!("Weight of edge {edge}"),
        Piece::FaceArc { face, vertex } => {
            format!("Face {face}, arcs around face vertex {vertex}")
        }
    }
}

/// Metadata for every coordinate column of `flavour` over `tri`.
pub fn coordinate_columns<T: Triangulation + ?Sized>(
    flavour: Flavour,
    tri: &T,
) -> Vec<CoordinateColumn> {
    (0..coordinate_count(flavour, tri))
        .map(|index| CoordinateColumn {
            abbr: abbr(flavour, index),
            description: description(flavour, index),
        })
        .collect()
}

/// Coordinate `index` of `surface` in `flavour`; `Ok(None)` means infinite.
pub fn coordinate<T, S>(
    flavour: Flavour,
    tri: &T,
    surface: &S,
    index: usize,
) -> Result<Option<BigInt>, KernelError>
where
    T: Triangulation + ?Sized,
    S: NormalSurface + ?Sized,
{
    check_range(flavour, tri, index)?;
    Ok(surface.coordinate(flavour, index))
}
