//! A viewer host over the in-memory packet tree.

use crate::engine;
use crate::error::MemoryError;
use crate::packet::{PacketContent, PacketTree};
use crate::surface::{MemorySurface, MemorySurfaceSet};
use crate::triangulation::MemoryTriangulation;
use normview_kernel::Triangulation;
use normview_viewer::{HostError, PacketId, ViewerHost, ViewerId};
use serde::Serialize;
use std::rc::Rc;

/// Label of the packet holding the surface list in [`MemoryHost::for_set`].
pub const SURFACE_LIST_LABEL: &str = "Normal Surfaces";

/// Something the tree view was told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TreeEvent {
    SubtreeInserted {
        node: PacketId,
        originator: String,
        request_select: bool,
    },
}

#[derive(Debug, Clone)]
pub struct MemoryHost {
    tree: PacketTree,
    events: Vec<TreeEvent>,
    errors: Vec<String>,
}

impl MemoryHost {
    pub fn new(tree: PacketTree) -> Self {
        Self {
            tree,
            events: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// A tree holding `set` under its triangulation, as
    /// `root / <triangulation> / Normal Surfaces`. Returns the host and the
    /// surface list packet.
    pub fn for_set(set: &Rc<MemorySurfaceSet>) -> Result<(Self, PacketId), MemoryError> {
        let mut tree = PacketTree::new("Document");
        let tri = Rc::clone(set.shared_triangulation());
        let label = tree.make_unique_label(tri.label());
        let tri_node =
            tree.insert_child_last(tree.root(), label, PacketContent::Triangulation(tri))?;
        let list = tree.insert_child_last(
            tri_node,
            SURFACE_LIST_LABEL,
            PacketContent::SurfaceList(Rc::clone(set)),
        )?;
        Ok((Self::new(tree), list))
    }

    pub fn tree(&self) -> &PacketTree {
        &self.tree
    }

    pub fn events(&self) -> &[TreeEvent] {
        &self.events
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl ViewerHost<MemorySurfaceSet> for MemoryHost {
    type Crushed = MemoryTriangulation;

    fn crush(&self, surface: &MemorySurface) -> Result<MemoryTriangulation, HostError> {
        engine::crush(surface).map_err(|err| HostError::new(err.to_string()))
    }

    fn make_unique_label(&self, candidate: &str) -> String {
        self.tree.make_unique_label(candidate)
    }

    fn insert_child_last(
        &mut self,
        parent: PacketId,
        label: String,
        mut child: MemoryTriangulation,
    ) -> Result<PacketId, HostError> {
        child.set_label(label.clone());
        self.tree
            .insert_child_last(parent, label, PacketContent::Triangulation(Rc::new(child)))
            .map_err(|err| HostError::new(err.to_string()))
    }

    fn notify_subtree_inserted(
        &mut self,
        node: PacketId,
        originator: &ViewerId,
        request_select: bool,
    ) {
        log::debug!("subtree inserted at {node} by {originator}");
        self.events.push(TreeEvent::SubtreeInserted {
            node,
            originator: originator.to_string(),
            request_select,
        });
    }

    /// Records `message` for display. Log levels are chosen by the caller.
    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
