//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_right, truncate, visible_width};
use ansi_term::Style;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: String,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: "-".to_string(),
        }
    }

    /// Columns sized to their header; rows widen them on insertion.
    pub fn with_headers(headers: &[&str]) -> Self {
        Self::new(
            headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: visible_width(h),
                })
                .collect(),
        )
    }

    pub fn separator(mut self, sep: &str) -> Self {
        if !sep.is_empty() {
            self.separator = sep.to_string();
        }
        self
    }

    /// Cells are cut to `max_width`; missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>, max_width: usize) {
        let row: Vec<String> = row.iter().map(|c| truncate(c, max_width)).collect();
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let bold = Style::new().bold();

        // Header
        for col in &self.columns {
            let h = bold.paint(col.header.as_str()).to_string();
            out.push_str(&pad_right(&h, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&self.separator.repeat(total / visible_width(&self.separator).max(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
