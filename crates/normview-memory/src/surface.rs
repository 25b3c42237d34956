//! Surfaces and surface lists backed by a stored standard vector.
//!
//! Every surface keeps its full standard coordinates (with octagons for
//! almost normal lists). Quad coordinates are projections of that vector;
//! edge weights and face arcs are summed from one tetrahedron that
//! contains the edge or face.

use crate::document::{SurfaceDocument, SurfaceSetDocument, is_infinite_token};
use crate::error::MemoryError;
use crate::triangulation::{EDGE_VERTICES, MemoryTriangulation};
use normview_kernel::{
    BigInt, Flavour, NormalSurface, Piece, SurfaceSet, TriState, Triangulation, piece,
};
use num_traits::Zero;
use std::path::Path;
use std::rc::Rc;

/// Quad/octagon type whose vertex split pairs up the endpoints of each
/// local edge.
const EDGE_SPLIT: [usize; 6] = [0, 1, 2, 2, 1, 0];

fn edge_between(a: usize, b: usize) -> usize {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    EDGE_VERTICES
        .iter()
        .position(|&e| e == (lo, hi))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct MemorySurface {
    name: Option<String>,
    compact: bool,
    euler: BigInt,
    orientable: TriState,
    two_sided: TriState,
    real_boundary: bool,
    vertex_linking: bool,
    splitting: bool,
    almost_normal: bool,
    vector: Vec<Option<BigInt>>,
    tri: Rc<MemoryTriangulation>,
}

impl MemorySurface {
    fn from_document(
        index: usize,
        doc: &SurfaceDocument,
        tri: &Rc<MemoryTriangulation>,
        almost_normal: bool,
    ) -> Result<Self, MemoryError> {
        let width = if almost_normal { 10 } else { 7 };
        let expected = width * tri.tetrahedron_count();
        if doc.vector.len() != expected {
            return Err(MemoryError::VectorLength {
                surface: index,
                expected,
                actual: doc.vector.len(),
            });
        }

        let vector = doc
            .vector
            .iter()
            .enumerate()
            .map(|(pos, value)| {
                if is_infinite_token(value) {
                    return Ok(None);
                }
                value
                    .trim()
                    .parse::<BigInt>()
                    .map(Some)
                    .map_err(|_| MemoryError::InvalidCoordinate {
                        surface: index,
                        index: pos,
                        value: value.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Non-compact surfaces never show an Euler characteristic.
        let euler = match (&doc.euler, doc.compact) {
            (Some(text), _) => {
                text.trim()
                    .parse::<BigInt>()
                    .map_err(|_| MemoryError::InvalidEuler {
                        surface: index,
                        value: text.clone(),
                    })?
            }
            (None, true) => return Err(MemoryError::MissingEuler { surface: index }),
            (None, false) => BigInt::zero(),
        };

        Ok(Self {
            name: doc.name.clone(),
            compact: doc.compact,
            euler,
            orientable: doc.orientable,
            two_sided: doc.two_sided,
            real_boundary: doc.real_boundary,
            vertex_linking: doc.vertex_linking,
            splitting: doc.splitting,
            almost_normal,
            vector,
            tri: Rc::clone(tri),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn triangulation(&self) -> &MemoryTriangulation {
        &self.tri
    }

    pub fn is_almost_normal(&self) -> bool {
        self.almost_normal
    }

    fn width(&self) -> usize {
        if self.almost_normal { 10 } else { 7 }
    }

    fn entry(&self, pos: usize) -> Option<BigInt> {
        self.vector.get(pos).cloned().flatten()
    }

    pub fn triangles(&self, tet: usize, vertex: usize) -> Option<BigInt> {
        self.entry(tet * self.width() + vertex)
    }

    pub fn quads(&self, tet: usize, kind: usize) -> Option<BigInt> {
        self.entry(tet * self.width() + 4 + kind)
    }

    /// Octagon count; always zero for normal surfaces.
    pub fn octagons(&self, tet: usize, kind: usize) -> Option<BigInt> {
        if self.almost_normal {
            self.entry(tet * self.width() + 7 + kind)
        } else {
            Some(BigInt::zero())
        }
    }

    /// Whether tetrahedron `tet` holds any quadrilateral or octagon.
    pub fn meets_with_quads_or_octagons(&self, tet: usize) -> bool {
        (0..3).any(|k| {
            let quad = self.quads(tet, k);
            let oct = self.octagons(tet, k);
            [quad, oct]
                .into_iter()
                .any(|value| value.is_none_or(|v| !v.is_zero()))
        })
    }

    pub fn edge_weight(&self, edge: usize) -> Option<BigInt> {
        let (tet, local) = self.tri.edge_home(edge)?;
        let (a, b) = EDGE_VERTICES[local];
        let split = EDGE_SPLIT[local];

        let mut terms = vec![self.triangles(tet, a), self.triangles(tet, b)];
        for kind in 0..3 {
            if kind != split {
                terms.push(self.quads(tet, kind));
            }
            let oct = self.octagons(tet, kind);
            terms.push(if kind == split {
                oct.map(|v| v * 2)
            } else {
                oct
            });
        }
        sum(terms)
    }

    /// Arcs cutting off corner `vertex` (0, 1 or 2, in increasing order of
    /// tetrahedron vertex) of face `face`.
    pub fn face_arcs(&self, face: usize, vertex: usize) -> Option<BigInt> {
        let (tet, opposite) = self.tri.face_home(face)?;
        let corner = (0..4).filter(|&v| v != opposite).nth(vertex)?;
        let split = EDGE_SPLIT[edge_between(corner, opposite)];

        let mut terms = vec![self.triangles(tet, corner), self.quads(tet, split)];
        for kind in (0..3).filter(|&k| k != split) {
            terms.push(self.octagons(tet, kind));
        }
        sum(terms)
    }
}

/// Any infinite term makes the whole sum infinite.
fn sum(terms: Vec<Option<BigInt>>) -> Option<BigInt> {
    terms
        .into_iter()
        .try_fold(BigInt::zero(), |acc, term| term.map(|t| acc + t))
}

impl NormalSurface for MemorySurface {
    fn is_compact(&self) -> bool {
        self.compact
    }

    fn euler_characteristic(&self) -> BigInt {
        self.euler.clone()
    }

    fn orientability(&self) -> TriState {
        self.orientable
    }

    fn sidedness(&self) -> TriState {
        self.two_sided
    }

    fn has_real_boundary(&self) -> bool {
        self.real_boundary
    }

    fn is_vertex_linking(&self) -> bool {
        self.vertex_linking
    }

    fn is_splitting(&self) -> bool {
        self.splitting
    }

    fn coordinate(&self, flavour: Flavour, index: usize) -> Option<BigInt> {
        match piece(flavour, index) {
            Piece::Triangle { tet, vertex } => self.triangles(tet, vertex),
            Piece::Quad { tet, kind } => self.quads(tet, kind),
            Piece::Octagon { tet, kind } => self.octagons(tet, kind),
            Piece::Edge(edge) => self.edge_weight(edge),
            Piece::FaceArc { face, vertex } => self.face_arcs(face, vertex),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemorySurfaceSet {
    tri: Rc<MemoryTriangulation>,
    flavour: Flavour,
    embedded_only: bool,
    surfaces: Vec<MemorySurface>,
}

impl MemorySurfaceSet {
    pub fn from_document(doc: &SurfaceSetDocument) -> Result<Self, MemoryError> {
        if !doc.flavour.is_enumerable() {
            return Err(MemoryError::NotEnumerable(doc.flavour));
        }
        let tri = Rc::new(MemoryTriangulation::from_document(&doc.triangulation)?);
        let almost_normal = doc.flavour.is_almost_normal();
        let surfaces = doc
            .surfaces
            .iter()
            .enumerate()
            .map(|(index, surface)| {
                MemorySurface::from_document(index, surface, &tri, almost_normal)
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "loaded {} surfaces over `{}` in {}",
            surfaces.len(),
            tri.label(),
            doc.flavour.token()
        );

        Ok(Self {
            tri,
            flavour: doc.flavour,
            embedded_only: doc.embedded_only,
            surfaces,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, MemoryError> {
        Self::from_document(&SurfaceSetDocument::from_json_str(text)?)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, MemoryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MemoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn shared_triangulation(&self) -> &Rc<MemoryTriangulation> {
        &self.tri
    }

    pub fn surfaces(&self) -> &[MemorySurface] {
        &self.surfaces
    }
}

impl SurfaceSet for MemorySurfaceSet {
    type Surface = MemorySurface;
    type Triangulation = MemoryTriangulation;

    fn triangulation(&self) -> &MemoryTriangulation {
        &self.tri
    }

    fn flavour(&self) -> Flavour {
        self.flavour
    }

    fn is_embedded_only(&self) -> bool {
        self.embedded_only
    }

    fn len(&self) -> usize {
        self.surfaces.len()
    }

    fn surface(&self, index: usize) -> Option<&MemorySurface> {
        self.surfaces.get(index)
    }
}
