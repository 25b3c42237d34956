//! Triangulation skeletons.
//!
//! Only the edge and face identifications are stored: enough to count
//! coordinates and to find one tetrahedron containing each edge or face.

use crate::document::{TetrahedronDocument, TriangulationDocument};
use crate::error::MemoryError;
use normview_kernel::Triangulation;

/// Endpoints of local edges 0..6.
pub const EDGE_VERTICES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetrahedron {
    pub edges: [usize; 6],
    pub faces: [usize; 4],
}

impl From<&TetrahedronDocument> for Tetrahedron {
    fn from(doc: &TetrahedronDocument) -> Self {
        Self {
            edges: doc.edges,
            faces: doc.faces,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTriangulation {
    label: String,
    tetrahedra: Vec<Tetrahedron>,
    /// First (tetrahedron, local edge) containing each edge.
    edge_homes: Vec<(usize, usize)>,
    /// First (tetrahedron, local face) containing each face.
    face_homes: Vec<(usize, usize)>,
}

impl MemoryTriangulation {
    /// Build a skeleton. Edge and face indices must each be contiguous from 0.
    pub fn new(
        label: impl Into<String>,
        tetrahedra: Vec<Tetrahedron>,
    ) -> Result<Self, MemoryError> {
        let edge_homes = homes("edge", tetrahedra.iter().map(|t| t.edges.as_slice()))?;
        let face_homes = homes("face", tetrahedra.iter().map(|t| t.faces.as_slice()))?;
        Ok(Self {
            label: label.into(),
            tetrahedra,
            edge_homes,
            face_homes,
        })
    }

    pub fn from_document(doc: &TriangulationDocument) -> Result<Self, MemoryError> {
        Self::new(
            doc.label.clone(),
            doc.tetrahedra.iter().map(Tetrahedron::from).collect(),
        )
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn tetrahedra(&self) -> &[Tetrahedron] {
        &self.tetrahedra
    }

    pub fn edge_home(&self, edge: usize) -> Option<(usize, usize)> {
        self.edge_homes.get(edge).copied()
    }

    pub fn face_home(&self, face: usize) -> Option<(usize, usize)> {
        self.face_homes.get(face).copied()
    }
}

fn homes<'a>(
    what: &str,
    per_tet: impl Iterator<Item = &'a [usize]>,
) -> Result<Vec<(usize, usize)>, MemoryError> {
    let mut found: Vec<Option<(usize, usize)>> = Vec::new();
    for (tet, indices) in per_tet.enumerate() {
        for (local, &global) in indices.iter().enumerate() {
            if global >= found.len() {
                found.resize(global + 1, None);
            }
            found[global].get_or_insert((tet, local));
        }
    }
    found
        .into_iter()
        .enumerate()
        .map(|(global, home)| {
            home.ok_or_else(|| {
                MemoryError::Skeleton(format!("{what} {global} does not appear in any tetrahedron"))
            })
        })
        .collect()
}

impl Triangulation for MemoryTriangulation {
    fn label(&self) -> &str {
        &self.label
    }

    fn tetrahedron_count(&self) -> usize {
        self.tetrahedra.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_homes.len()
    }

    fn face_count(&self) -> usize {
        self.face_homes.len()
    }
}
