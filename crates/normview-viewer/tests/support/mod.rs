#![allow(dead_code)]

use normview_kernel::{BigInt, Flavour, NormalSurface, SurfaceSet, TriState, Triangulation};
use normview_viewer::{HostError, PacketId, ViewerHost, ViewerId};

pub struct Tri {
    pub label: String,
    pub tets: usize,
}

impl Triangulation for Tri {
    fn label(&self) -> &str {
        &self.label
    }
    fn tetrahedron_count(&self) -> usize {
        self.tets
    }
    fn edge_count(&self) -> usize {
        self.tets + 1
    }
    fn face_count(&self) -> usize {
        2 * self.tets
    }
}

#[derive(Clone, Default)]
pub struct Surf {
    pub name: &'static str,
    pub compact: bool,
    pub euler: i64,
    pub orientable: TriState,
    pub two_sided: TriState,
}

impl NormalSurface for Surf {
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
        false
    }
    fn is_vertex_linking(&self) -> bool {
        false
    }
    fn is_splitting(&self) -> bool {
        false
    }
    fn coordinate(&self, _flavour: Flavour, index: usize) -> Option<BigInt> {
        if self.compact {
            Some(BigInt::from(index))
        } else {
            None
        }
    }
}

pub struct List {
    pub tri: Tri,
    pub flavour: Flavour,
    pub embedded_only: bool,
    pub surfaces: Vec<Surf>,
}

impl SurfaceSet for List {
    type Surface = Surf;
    type Triangulation = Tri;

    fn triangulation(&self) -> &Tri {
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
    fn surface(&self, index: usize) -> Option<&Surf> {
        self.surfaces.get(index)
    }
}

pub fn list(flavour: Flavour, tets: usize, surfaces: usize) -> List {
    List {
        tri: Tri {
            label: "Fig 8".to_string(),
            tets,
        },
        flavour,
        embedded_only: true,
        surfaces: (0..surfaces)
            .map(|_| Surf {
                name: "torus",
                compact: true,
                orientable: TriState::Positive,
                two_sided: TriState::Positive,
                ..Surf::default()
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Crush(&'static str),
    Insert {
        parent: PacketId,
        label: String,
        crushed_from: &'static str,
    },
    Notify {
        node: PacketId,
        originator: ViewerId,
        select: bool,
    },
    Error(String),
}

/// Records every collaborator call in order.
#[derive(Default)]
pub struct RecordingHost {
    pub calls: std::cell::RefCell<Vec<Call>>,
    pub used_labels: Vec<String>,
    pub fail_crush: bool,
    pub fail_insert: bool,
    pub next_id: usize,
}

impl RecordingHost {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Error(m) => Some(m),
                _ => None,
            })
            .collect()
    }
}

impl ViewerHost<List> for RecordingHost {
    type Crushed = &'static str;

    fn crush(&self, surface: &Surf) -> Result<&'static str, HostError> {
        self.calls.borrow_mut().push(Call::Crush(surface.name));
        if self.fail_crush {
            Err(HostError::new("engine exploded"))
        } else {
            Ok(surface.name)
        }
    }

    fn make_unique_label(&self, candidate: &str) -> String {
        if self.used_labels.iter().any(|l| l == candidate) {
            format!("{candidate} 2")
        } else {
            candidate.to_string()
        }
    }

    fn insert_child_last(
        &mut self,
        parent: PacketId,
        label: String,
        child: &'static str,
    ) -> Result<PacketId, HostError> {
        if self.fail_insert {
            return Err(HostError::new("tree is read-only"));
        }
        self.calls.borrow_mut().push(Call::Insert {
            parent,
            label: label.clone(),
            crushed_from: child,
        });
        self.used_labels.push(label);
        self.next_id += 1;
        Ok(PacketId(100 + self.next_id))
    }

    fn notify_subtree_inserted(
        &mut self,
        node: PacketId,
        originator: &ViewerId,
        request_select: bool,
    ) {
        self.calls.borrow_mut().push(Call::Notify {
            node,
            originator: originator.clone(),
            select: request_select,
        });
    }

    fn report_error(&mut self, message: &str) {
        self.calls.borrow_mut().push(Call::Error(message.to_string()));
    }
}
