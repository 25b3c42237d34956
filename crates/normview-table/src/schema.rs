//! Column schema builder.
//!
//! | embedded only | 0     | 1      | 2     | 3    | 4    | 5+          |
//! |---------------|-------|--------|-------|------|------|-------------|
//! | yes           | Euler | Orient | Sides | Bdry | Type | coordinates |
//! | no            | Euler | Bdry   | Type  | coordinates ...           |

use crate::cell::{self, CellValue};
use crate::error::TableError;
use normview_kernel::{
    Flavour, SurfaceProperties, SurfaceSet, Triangulation, coordinate, coordinate_columns,
};

/// Fixed classification columns shown before the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyColumn {
    Euler,
    Orientability,
    Sides,
    Boundary,
    Type,
}

impl PropertyColumn {
    const EMBEDDED: [PropertyColumn; 5] = [
        Self::Euler,
        Self::Orientability,
        Self::Sides,
        Self::Boundary,
        Self::Type,
    ];
    const IMMERSED: [PropertyColumn; 3] = [Self::Euler, Self::Boundary, Self::Type];

    pub fn name(self) -> &'static str {
        match self {
            Self::Euler => "Euler",
            Self::Orientability => "Orient",
            Self::Sides => "Sides",
            Self::Boundary => "Bdry",
            Self::Type => "Type",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Euler => "Euler characteristic",
            Self::Orientability => "Orientability",
            Self::Sides => "Number of sides",
            Self::Boundary => "Boundary",
            Self::Type => "Other interesting properties",
        }
    }

    fn value(self, properties: SurfaceProperties) -> CellValue {
        match self {
            Self::Euler => cell::euler(properties.euler),
            Self::Orientability => cell::orientability(properties.orientability),
            Self::Sides => cell::sides(properties.sidedness),
            Self::Boundary => cell::boundary(properties.boundary),
            Self::Type => cell::kind(properties.kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Property(PropertyColumn),
    /// Coordinate column; the payload is the coordinate index.
    Coordinate(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub tooltip: String,
    pub kind: ColumnKind,
}

/// An immutable column layout for one schema generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableSchema {
    flavour: Option<Flavour>,
    embedded_only: bool,
    columns: Vec<Column>,
}

impl TableSchema {
    /// The no-column schema used when nothing can be shown.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn build<T: Triangulation + ?Sized>(
        embedded_only: bool,
        flavour: Flavour,
        tri: &T,
    ) -> Self {
        let fixed: &[PropertyColumn] = if embedded_only {
            &PropertyColumn::EMBEDDED
        } else {
            &PropertyColumn::IMMERSED
        };

        let mut columns: Vec<Column> = fixed
            .iter()
            .map(|&property| Column {
                name: property.name().to_string(),
                tooltip: property.tooltip().to_string(),
                kind: ColumnKind::Property(property),
            })
            .collect();
        columns.extend(
            coordinate_columns(flavour, tri)
                .into_iter()
                .enumerate()
                .map(|(index, meta)| Column {
                    name: meta.abbr,
                    tooltip: meta.description,
                    kind: ColumnKind::Coordinate(index),
                }),
        );

        log::debug!(
            "built schema: flavour={} embedded_only={embedded_only} columns={}",
            flavour.token(),
            columns.len()
        );

        Self {
            flavour: Some(flavour),
            embedded_only,
            columns,
        }
    }

    /// Schema for viewing `set` in `flavour`.
    pub fn for_set<S: SurfaceSet + ?Sized>(set: &S, flavour: Flavour) -> Self {
        Self::build(set.is_embedded_only(), flavour, set.triangulation())
    }

    pub fn flavour(&self) -> Option<Flavour> {
        self.flavour
    }

    pub fn is_embedded_only(&self) -> bool {
        self.embedded_only
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, column: usize) -> Result<&Column, TableError> {
        self.columns
            .get(column)
            .ok_or(TableError::ColumnOutOfRange {
                column,
                count: self.columns.len(),
            })
    }

    /// Resolve one cell of `set` under this schema.
    pub fn value_at<S: SurfaceSet + ?Sized>(
        &self,
        set: &S,
        row: usize,
        column: usize,
    ) -> Result<CellValue, TableError> {
        let kind = self.column(column)?.kind;
        let surface = set.surface(row).ok_or(TableError::RowOutOfRange {
            row,
            count: set.len(),
        })?;

        match kind {
            ColumnKind::Property(property) => Ok(property.value(SurfaceProperties::derive(
                surface,
                self.embedded_only,
            ))),
            ColumnKind::Coordinate(index) => {
                let flavour = self.flavour.ok_or(TableError::MissingFlavour)?;
                let value = coordinate(flavour, set.triangulation(), surface, index)?;
                Ok(cell::coordinate(value))
            }
        }
    }

    /// All cells of one row, left to right.
    pub fn row_values<S: SurfaceSet + ?Sized>(
        &self,
        set: &S,
        row: usize,
    ) -> Result<Vec<CellValue>, TableError> {
        (0..self.column_count())
            .map(|column| self.value_at(set, row, column))
            .collect()
    }
}
