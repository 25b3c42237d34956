//! The boundary between the viewer and everything it does not own: the
//! crushing engine, the packet tree, the tree view, and the host shell.

use normview_kernel::SurfaceSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifies a node in the packet tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PacketId(pub usize);

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "packet#{}", self.0)
    }
}

/// Identifies the viewer that originated a tree change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewerId(pub String);

impl ViewerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A failure reported by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Collaborators a viewer of `S` calls out to.
pub trait ViewerHost<S: SurfaceSet> {
    /// The object the engine produces when crushing a surface.
    type Crushed;

    /// Crush `surface` into a new triangulation. Must not touch the tree.
    fn crush(&self, surface: &S::Surface) -> Result<Self::Crushed, HostError>;

    /// A label not yet used anywhere in the tree, derived from `candidate`.
    fn make_unique_label(&self, candidate: &str) -> String;

    /// Attach `child` as the last child of `parent` under `label`.
    fn insert_child_last(
        &mut self,
        parent: PacketId,
        label: String,
        child: Self::Crushed,
    ) -> Result<PacketId, HostError>;

    /// Tell the tree view a new subtree rooted at `node` exists.
    fn notify_subtree_inserted(
        &mut self,
        node: PacketId,
        originator: &ViewerId,
        request_select: bool,
    );

    /// Show a non-fatal error to the user.
    fn report_error(&mut self, message: &str);
}
