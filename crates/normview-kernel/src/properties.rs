//! Derived, flavour-independent surface properties.
//!
//! Every property except the special type is gated on compactness: the
//! engine's answers for non-compact surfaces are not meaningful.

use crate::surface::{NormalSurface, TriState};
use num_bigint::BigInt;
use serde::Serialize;

/// Boundary classification of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Non-compact: infinitely many discs.
    Infinite,
    /// Compact and meets the triangulation boundary.
    Real,
    /// Compact with no real boundary.
    Closed,
}

/// Special structural type of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    VertexLink,
    Splitting,
    Ordinary,
}

/// The per-surface classification shown beside the coordinates.
///
/// `None` marks a property that is not shown for this surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceProperties {
    pub euler: Option<BigInt>,
    pub orientability: Option<TriState>,
    pub sidedness: Option<TriState>,
    pub boundary: Boundary,
    pub kind: SurfaceKind,
}

impl SurfaceProperties {
    /// Classify `surface`. Sidedness is only derived for lists known to be
    /// embedded.
    pub fn derive<S: NormalSurface + ?Sized>(surface: &S, embedded_only: bool) -> Self {
        let compact = surface.is_compact();
        Self {
            euler: compact.then(|| surface.euler_characteristic()),
            orientability: compact.then(|| surface.orientability()),
            sidedness: (compact && embedded_only).then(|| surface.sidedness()),
            boundary: boundary(surface),
            kind: kind(surface),
        }
    }
}

pub fn boundary<S: NormalSurface + ?Sized>(surface: &S) -> Boundary {
    if !surface.is_compact() {
        Boundary::Infinite
    } else if surface.has_real_boundary() {
        Boundary::Real
    } else {
        Boundary::Closed
    }
}

/// Vertex links win over splitting surfaces when an engine reports both.
pub fn kind<S: NormalSurface + ?Sized>(surface: &S) -> SurfaceKind {
    if surface.is_vertex_linking() {
        SurfaceKind::VertexLink
    } else if surface.is_splitting() {
        SurfaceKind::Splitting
    } else {
        SurfaceKind::Ordinary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavour::Flavour;

    #[derive(Default)]
    struct Fake {
        compact: bool,
        euler: i64,
        orientable: TriState,
        two_sided: TriState,
        real_boundary: bool,
        vertex_linking: bool,
        splitting: bool,
    }

    impl NormalSurface for Fake {
        fn is_compact(&self) -> bool {
            self.compact
        }
        fn euler_characteristic(&self) -> BigInt {
            BigInt::from(self.euler)
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
        fn coordinate(&self, _flavour: Flavour, _index: usize) -> Option<BigInt> {
            None
        }
    }

    #[test]
    fn compact_surface_reports_everything() {
        let surface = Fake {
            compact: true,
            euler: -2,
            orientable: TriState::Positive,
            two_sided: TriState::Negative,
            real_boundary: true,
            ..Fake::default()
        };
        let props = SurfaceProperties::derive(&surface, true);
        assert_eq!(props.euler, Some(BigInt::from(-2)));
        assert_eq!(props.orientability, Some(TriState::Positive));
        assert_eq!(props.sidedness, Some(TriState::Negative));
        assert_eq!(props.boundary, Boundary::Real);
        assert_eq!(props.kind, SurfaceKind::Ordinary);
    }

    #[test]
    fn non_compact_surface_hides_gated_properties() {
        let surface = Fake {
            compact: false,
            euler: 7,
            orientable: TriState::Positive,
            two_sided: TriState::Positive,
            real_boundary: true,
            ..Fake::default()
        };
        let props = SurfaceProperties::derive(&surface, true);
        assert_eq!(props.euler, None);
        assert_eq!(props.orientability, None);
        assert_eq!(props.sidedness, None);
        assert_eq!(props.boundary, Boundary::Infinite);
    }

    #[test]
    fn sidedness_needs_embedded_list() {
        let surface = Fake {
            compact: true,
            two_sided: TriState::Positive,
            ..Fake::default()
        };
        assert_eq!(SurfaceProperties::derive(&surface, false).sidedness, None);
        assert_eq!(boundary(&surface), Boundary::Closed);
    }

    #[test]
    fn vertex_link_takes_priority_over_splitting() {
        let both = Fake {
            vertex_linking: true,
            splitting: true,
            ..Fake::default()
        };
        assert_eq!(kind(&both), SurfaceKind::VertexLink);

        let splitting = Fake {
            splitting: true,
            ..Fake::default()
        };
        assert_eq!(kind(&splitting), SurfaceKind::Splitting);
    }
}
