//! Display values for individual cells.

use normview_kernel::{BigInt, Boundary, SurfaceKind, TriState};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-valued rendering hint attached to classification cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Positive,
    Negative,
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Blank,
    Text(&'static str),
    Emphasized {
        text: &'static str,
        emphasis: Emphasis,
    },
    Integer(BigInt),
    /// An infinite coordinate.
    Infinite,
}

impl CellValue {
    pub fn emphasis(&self) -> Option<Emphasis> {
        match self {
            Self::Emphasized { emphasis, .. } => Some(*emphasis),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    fn positive(text: &'static str) -> Self {
        Self::Emphasized {
            text,
            emphasis: Emphasis::Positive,
        }
    }

    fn negative(text: &'static str) -> Self {
        Self::Emphasized {
            text,
            emphasis: Emphasis::Negative,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Text(text) | Self::Emphasized { text, .. } => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Infinite => f.write_str("Inf"),
        }
    }
}

pub fn euler(value: Option<BigInt>) -> CellValue {
    value.map_or(CellValue::Blank, CellValue::Integer)
}

pub fn orientability(value: Option<TriState>) -> CellValue {
    match value {
        None => CellValue::Blank,
        Some(TriState::Positive) => CellValue::positive("Orbl"),
        Some(TriState::Negative) => CellValue::negative("Non-orbl"),
        Some(TriState::Unknown) => CellValue::Text("Unknown"),
    }
}

pub fn sides(value: Option<TriState>) -> CellValue {
    match value {
        None => CellValue::Blank,
        Some(TriState::Positive) => CellValue::positive("2"),
        Some(TriState::Negative) => CellValue::negative("1"),
        Some(TriState::Unknown) => CellValue::Text("Unknown"),
    }
}

pub fn boundary(value: Boundary) -> CellValue {
    match value {
        Boundary::Infinite => CellValue::Text("Infinite"),
        Boundary::Real => CellValue::negative("Real Bdry"),
        Boundary::Closed => CellValue::positive("Closed"),
    }
}

pub fn kind(value: SurfaceKind) -> CellValue {
    match value {
        SurfaceKind::VertexLink => CellValue::Text("Vtx Link"),
        SurfaceKind::Splitting => CellValue::Text("Splitting"),
        SurfaceKind::Ordinary => CellValue::Blank,
    }
}

/// Zero is suppressed on screen only; the underlying coordinate is kept.
pub fn coordinate(value: Option<BigInt>) -> CellValue {
    match value {
        None => CellValue::Infinite,
        Some(v) if v.is_zero() => CellValue::Blank,
        Some(v) => CellValue::Integer(v),
    }
}
