//! Crushing a surface in the in-memory engine.
//!
//! Tetrahedra that hold a quadrilateral or octagon are flattened away;
//! the rest survive with their edges and faces renumbered in order of
//! first appearance. Compact surfaces only.

use crate::error::MemoryError;
use crate::surface::MemorySurface;
use crate::triangulation::{MemoryTriangulation, Tetrahedron};
use normview_kernel::{NormalSurface, Triangulation};
use std::collections::HashMap;

/// Crush `surface` to a point, returning the resulting unlabelled skeleton.
pub fn crush(surface: &MemorySurface) -> Result<MemoryTriangulation, MemoryError> {
    if !surface.is_compact() {
        return Err(MemoryError::NonCompactCrush);
    }

    let source = surface.triangulation();
    let mut edges = Renumber::default();
    let mut faces = Renumber::default();
    let survivors: Vec<Tetrahedron> = source
        .tetrahedra()
        .iter()
        .enumerate()
        .filter(|(index, _)| !surface.meets_with_quads_or_octagons(*index))
        .map(|(_, tet)| Tetrahedron {
            edges: tet.edges.map(|e| edges.assign(e)),
            faces: tet.faces.map(|f| faces.assign(f)),
        })
        .collect();

    log::debug!(
        "crushed `{}`: {} of {} tetrahedra survive",
        source.label(),
        survivors.len(),
        source.tetrahedron_count()
    );
    MemoryTriangulation::new(String::new(), survivors)
}

#[derive(Default)]
struct Renumber {
    seen: HashMap<usize, usize>,
}

impl Renumber {
    fn assign(&mut self, old: usize) -> usize {
        let next = self.seen.len();
        *self.seen.entry(old).or_insert(next)
    }
}
