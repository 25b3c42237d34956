//! Table layer for the coordinate viewer.
//!
//! A [`TableSchema`] is built once per (embedded flag, flavour,
//! triangulation) and then published behind an `Rc`; renderers pull cell
//! values through the [`TableModel`] trait. Schemas are replaced, never
//! mutated, so reads within one generation always agree with each other.

pub mod cell;
pub mod error;
pub mod model;
pub mod schema;
pub mod snapshot;

pub use cell::{CellValue, Emphasis};
pub use error::TableError;
pub use model::{SurfaceTable, TableModel};
pub use schema::{Column, ColumnKind, PropertyColumn, TableSchema};
pub use snapshot::{CellSnapshot, HeaderSnapshot, TableSnapshot};

#[cfg(test)]
pub(crate) mod testing;
