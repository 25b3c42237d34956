//! Pull-based table model handed to renderers.

use crate::cell::CellValue;
use crate::error::TableError;
use crate::schema::TableSchema;
use normview_kernel::SurfaceSet;
use std::rc::Rc;

/// What a generic tabular renderer queries, on demand, cell by cell.
pub trait TableModel {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn column_name(&self, column: usize) -> Result<&str, TableError>;

    fn column_tooltip(&self, column: usize) -> Result<&str, TableError>;

    fn value_at(&self, row: usize, column: usize) -> Result<CellValue, TableError>;
}

/// A surface list paired with the schema generation it is shown under.
///
/// Cloning is cheap; clones share the same list and schema.
#[derive(Debug)]
pub struct SurfaceTable<S> {
    set: Option<Rc<S>>,
    schema: Rc<TableSchema>,
}

impl<S> Clone for SurfaceTable<S> {
    fn clone(&self) -> Self {
        Self {
            set: self.set.clone(),
            schema: Rc::clone(&self.schema),
        }
    }
}

impl<S: SurfaceSet> SurfaceTable<S> {
    pub fn new(set: Rc<S>, schema: Rc<TableSchema>) -> Self {
        Self {
            set: Some(set),
            schema,
        }
    }

    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        Self {
            set: None,
            schema: Rc::new(TableSchema::empty()),
        }
    }

    pub fn schema(&self) -> &Rc<TableSchema> {
        &self.schema
    }

    pub fn set(&self) -> Option<&Rc<S>> {
        self.set.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_none() || self.schema.column_count() == 0
    }
}

impl<S: SurfaceSet> TableModel for SurfaceTable<S> {
    fn row_count(&self) -> usize {
        match &self.set {
            Some(set) if self.schema.column_count() > 0 => set.len(),
            _ => 0,
        }
    }

    fn column_count(&self) -> usize {
        self.schema.column_count()
    }

    fn column_name(&self, column: usize) -> Result<&str, TableError> {
        self.schema.column(column).map(|c| c.name.as_str())
    }

    fn column_tooltip(&self, column: usize) -> Result<&str, TableError> {
        self.schema.column(column).map(|c| c.tooltip.as_str())
    }

    fn value_at(&self, row: usize, column: usize) -> Result<CellValue, TableError> {
        match &self.set {
            Some(set) => self.schema.value_at(set.as_ref(), row, column),
            None => Err(TableError::RowOutOfRange { row, count: 0 }),
        }
    }
}
