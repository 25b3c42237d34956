//! Hand-built surfaces for unit tests.

use normview_kernel::{BigInt, Flavour, NormalSurface, SurfaceSet, TriState, Triangulation};

pub struct Skeleton {
    pub label: String,
    pub tets: usize,
    pub edges: usize,
    pub faces: usize,
}

impl Triangulation for Skeleton {
    fn label(&self) -> &str {
        &self.label
    }
    fn tetrahedron_count(&self) -> usize {
        self.tets
    }
    fn edge_count(&self) -> usize {
        self.edges
    }
    fn face_count(&self) -> usize {
        self.faces
    }
}

pub fn one_tet() -> Skeleton {
    Skeleton {
        label: "One tet".to_string(),
        tets: 1,
        edges: 6,
        faces: 4,
    }
}

/// Returns `coords[index]` for every flavour; missing entries read as zero.
#[derive(Clone, Default)]
pub struct FakeSurface {
    pub compact: bool,
    pub euler: i64,
    pub orientable: TriState,
    pub two_sided: TriState,
    pub real_boundary: bool,
    pub vertex_linking: bool,
    pub splitting: bool,
    pub coords: Vec<Option<i64>>,
}

impl NormalSurface for FakeSurface {
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
    fn coordinate(&self, _flavour: Flavour, index: usize) -> Option<BigInt> {
        match self.coords.get(index) {
            Some(value) => value.map(BigInt::from),
            None => Some(BigInt::from(0)),
        }
    }
}

pub struct FakeSet {
    tri: Skeleton,
    flavour: Flavour,
    embedded_only: bool,
    surfaces: Vec<FakeSurface>,
}

impl FakeSet {
    pub fn new(flavour: Flavour, embedded_only: bool, surfaces: Vec<FakeSurface>) -> Self {
        Self {
            tri: one_tet(),
            flavour,
            embedded_only,
            surfaces,
        }
    }
}

impl SurfaceSet for FakeSet {
    type Surface = FakeSurface;
    type Triangulation = Skeleton;

    fn triangulation(&self) -> &Skeleton {
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
    fn surface(&self, index: usize) -> Option<&FakeSurface> {
        self.surfaces.get(index)
    }
}
