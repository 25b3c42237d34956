//! In-memory stand-ins for the collaborators the viewer consumes.
//!
//! This crate is the concrete boundary used by the CLI and by tests:
//! - load surface lists from JSON documents
//! - derive every viewable flavour from a stored standard vector
//! - crush a surface into a new skeleton
//! - keep a labelled packet tree and record what the viewer asked of it

mod document;
mod engine;
mod error;
mod host;
mod packet;
mod surface;
mod triangulation;

pub use document::{SurfaceDocument, SurfaceSetDocument, TetrahedronDocument, TriangulationDocument};
pub use engine::crush;
pub use error::MemoryError;
pub use host::{MemoryHost, SURFACE_LIST_LABEL, TreeEvent};
pub use packet::{PacketContent, PacketNode, PacketTree};
pub use surface::{MemorySurface, MemorySurfaceSet};
pub use triangulation::{EDGE_VERTICES, MemoryTriangulation, Tetrahedron};
