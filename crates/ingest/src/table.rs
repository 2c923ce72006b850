use std::{collections::HashSet, path::Path};

use bson::{Bson, Document};
use eyre::{Context as _, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Float,
    Text,
}

impl ColumnType {
    /// Narrowest type holding every non-empty cell. A column with no values
    /// at all stays integral; all of its cells come out as null anyway.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> ColumnType {
        let mut kind = ColumnType::Int;
        for cell in cells.into_iter().map(str::trim).filter(|cell| !cell.is_empty()) {
            if kind == ColumnType::Int && cell.parse::<i64>().is_err() {
                kind = ColumnType::Float;
            }
            if kind == ColumnType::Float && cell.parse::<f64>().is_err() {
                return ColumnType::Text;
            }
        }
        kind
    }

    fn value(self, cell: &str) -> Bson {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return Bson::Null;
        }
        match self {
            ColumnType::Int => trimmed.parse().map(Bson::Int64).unwrap_or(Bson::Null),
            ColumnType::Float => trimmed.parse().map(Bson::Double).unwrap_or(Bson::Null),
            ColumnType::Text => Bson::String(cell.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn read(path: &Path) -> Result<Table> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let columns = reader
            .headers()
            .with_context(|| format!("Failed to read header of {}", path.display()))?
            .iter()
            .map(str::to_string)
            .collect();
        let rows = reader
            .records()
            .map(|record| record.map(|record| record.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()
            .with_context(|| format!("Failed to read rows of {}", path.display()))?;
        Ok(Table { columns, rows })
    }

    /// Removes the named columns; names the table does not have are ignored.
    pub fn drop_columns(&mut self, names: &[String]) {
        let drop: HashSet<&str> = names.iter().map(String::as_str).collect();
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|column| !drop.contains(column.as_str()))
            .collect();
        let retain = |cells: &mut Vec<String>| {
            let mut index = 0;
            cells.retain(|_| {
                let kept = keep.get(index).copied().unwrap_or(true);
                index += 1;
                kept
            });
        };
        retain(&mut self.columns);
        self.rows.iter_mut().for_each(retain);
    }

    pub fn column_types(&self) -> Vec<ColumnType> {
        (0..self.columns.len())
            .map(|index| {
                ColumnType::infer(
                    self.rows
                        .iter()
                        .map(|row| row.get(index).map(String::as_str).unwrap_or_default()),
                )
            })
            .collect()
    }

    /// One document per row, fields in column order.
    pub fn into_documents(self) -> Vec<Document> {
        let types = self.column_types();
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(&types)
                    .enumerate()
                    .map(|(index, (column, kind))| {
                        let cell = row.get(index).map(String::as_str).unwrap_or_default();
                        (column.clone(), kind.value(cell))
                    })
                    .collect()
            })
            .collect()
    }
}
