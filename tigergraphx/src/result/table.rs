// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Flat tabular query results

use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One row: column name -> value
pub type Row = IndexMap<String, Value>;

/// Ordered columns plus ordered rows
///
/// Every row holds exactly the frame's columns, in column order; cells with
/// no value in the source record are `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl DataFrame {
    /// Frame with no columns and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, keeping only known columns and filling gaps with null
    pub fn push_row(&mut self, mut values: Row) {
        let row = self
            .columns
            .iter()
            .map(|col| (col.clone(), values.swap_remove(col).unwrap_or(Value::Null)))
            .collect();
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value at a row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// All values of one column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        if !self.columns.iter().any(|c| c == name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|r| r.get(name).unwrap_or(&Value::Null))
                .collect(),
        )
    }

    /// Keep the first `n` rows
    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);

        let header: Vec<Cell> = self
            .columns
            .iter()
            .map(|col| Cell::new(col).fg(Color::Green))
            .collect();
        table.set_header(header);

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|col| {
                    row.get(col)
                        .map(cell_text)
                        .unwrap_or_else(|| "NULL".to_string())
                })
                .collect();
            table.add_row(cells);
        }

        write!(f, "{}", table)
    }
}
