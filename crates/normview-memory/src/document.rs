//! JSON documents describing an enumerated surface list.
//!
//! Integers are written as strings so they can be arbitrarily large.
//! A coordinate of `"inf"` marks an infinite entry.

use normview_kernel::{Flavour, TriState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TetrahedronDocument {
    /// Global indices of local edges 01, 02, 03, 12, 13, 23.
    pub edges: [usize; 6],
    /// Global indices of local faces; face `i` is opposite vertex `i`.
    pub faces: [usize; 4],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangulationDocument {
    pub label: String,
    #[serde(default)]
    pub tetrahedra: Vec<TetrahedronDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub compact: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub euler: Option<String>,
    #[serde(default)]
    pub orientable: TriState,
    #[serde(default)]
    pub two_sided: TriState,
    #[serde(default)]
    pub real_boundary: bool,
    #[serde(default)]
    pub vertex_linking: bool,
    #[serde(default)]
    pub splitting: bool,
    /// Standard (or almost normal standard) coordinates.
    pub vector: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSetDocument {
    pub triangulation: TriangulationDocument,
    pub flavour: Flavour,
    #[serde(default)]
    pub embedded_only: bool,
    #[serde(default)]
    pub surfaces: Vec<SurfaceDocument>,
}

impl SurfaceSetDocument {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

pub(crate) fn is_infinite_token(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "inf" | "infinite" | "infinity"
    ) || value.trim() == "∞"
}
