//! Materialised copies of a table generation for export.

use crate::cell::Emphasis;
use crate::error::TableError;
use crate::model::TableModel;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSnapshot {
    pub name: String,
    pub tooltip: String,
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSnapshot {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

/// Every header and cell of a table, rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub columns: Vec<HeaderSnapshot>,
    pub rows: Vec<Vec<CellSnapshot>>,
    pub digest: String,
}

impl TableSnapshot {
    /// Pull every cell from `model`. `width` is the per-column width hint
    /// recorded in each header.
    pub fn capture<M: TableModel + ?Sized>(model: &M, width: usize) -> Result<Self, TableError> {
        let columns = (0..model.column_count())
            .map(|column| {
                Ok(HeaderSnapshot {
                    name: model.column_name(column)?.to_string(),
                    tooltip: model.column_tooltip(column)?.to_string(),
                    width,
                })
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        let rows = (0..model.row_count())
            .map(|row| {
                (0..columns.len())
                    .map(|column| {
                        let value = model.value_at(row, column)?;
                        Ok(CellSnapshot {
                            text: value.to_string(),
                            emphasis: value.emphasis(),
                        })
                    })
                    .collect::<Result<Vec<_>, TableError>>()
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        let digest = table_digest(&columns, &rows);
        Ok(Self {
            columns,
            rows,
            digest,
        })
    }

    pub fn row_texts(&self, row: usize) -> Option<Vec<&str>> {
        self.rows
            .get(row)
            .map(|cells| cells.iter().map(|c| c.text.as_str()).collect())
    }

    /// Left-aligned plain-text rendering with a dashed rule under the header.
    pub fn to_text(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.text.chars().count())
                    .chain(std::iter::once(header.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(render_line(
            self.columns.iter().map(|h| h.name.as_str()),
            &widths,
        ));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        for row in &self.rows {
            lines.push(render_line(row.iter().map(|c| c.text.as_str()), &widths));
        }
        lines.join("\n")
    }
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(text, &width)| format!("{text:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn table_digest(columns: &[HeaderSnapshot], rows: &[Vec<CellSnapshot>]) -> String {
    let mut hasher = Sha256::new();
    for header in columns {
        hasher.update(header.name.as_bytes());
        hasher.update(b"\t");
        hasher.update(header.tooltip.as_bytes());
        hasher.update(b"\n");
    }
    for row in rows {
        hasher.update(b"row\n");
        for cell in row {
            hasher.update(cell.text.as_bytes());
            hasher.update(match cell.emphasis {
                Some(Emphasis::Positive) => b":+\n".as_slice(),
                Some(Emphasis::Negative) => b":-\n".as_slice(),
                None => b":\n".as_slice(),
            });
        }
    }
    format!("table1_{:x}", hasher.finalize())
}
