//! A labelled packet tree.

use crate::error::MemoryError;
use crate::surface::MemorySurfaceSet;
use crate::triangulation::MemoryTriangulation;
use normview_viewer::PacketId;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub enum PacketContent {
    Container,
    Triangulation(Rc<MemoryTriangulation>),
    SurfaceList(Rc<MemorySurfaceSet>),
}

#[derive(Debug, Clone)]
pub struct PacketNode {
    pub label: String,
    pub parent: Option<PacketId>,
    pub children: Vec<PacketId>,
    pub content: PacketContent,
}

/// Tree of packets, rooted at `PacketId(0)`.
#[derive(Debug, Clone)]
pub struct PacketTree {
    nodes: Vec<PacketNode>,
}

impl PacketTree {
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            nodes: vec![PacketNode {
                label: root_label.into(),
                parent: None,
                children: Vec::new(),
                content: PacketContent::Container,
            }],
        }
    }

    pub fn root(&self) -> PacketId {
        PacketId(0)
    }

    pub fn node(&self, id: PacketId) -> Option<&PacketNode> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: PacketId) -> &[PacketId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Append a new node as the last child of `parent`.
    pub fn insert_child_last(
        &mut self,
        parent: PacketId,
        label: impl Into<String>,
        content: PacketContent,
    ) -> Result<PacketId, MemoryError> {
        if self.node(parent).is_none() {
            return Err(MemoryError::PacketNotFound(parent));
        }
        let id = PacketId(self.nodes.len());
        self.nodes.push(PacketNode {
            label: label.into(),
            parent: Some(parent),
            children: Vec::new(),
            content,
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    pub fn find_by_label(&self, label: &str) -> Option<PacketId> {
        self.nodes
            .iter()
            .position(|node| node.label == label)
            .map(PacketId)
    }

    /// `candidate` if unused, otherwise `candidate 2`, `candidate 3`, ...
    pub fn make_unique_label(&self, candidate: &str) -> String {
        if self.find_by_label(candidate).is_none() {
            return candidate.to_string();
        }
        (2..)
            .map(|n| format!("{candidate} {n}"))
            .find(|label| self.find_by_label(label).is_none())
            .unwrap_or_else(|| candidate.to_string())
    }
}
