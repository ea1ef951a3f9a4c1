//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Display width of a cell, ANSI sequences excluded
fn visible_width(s: &str) -> usize {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => UnicodeWidthStr::width(re.replace_all(s, "").as_ref()),
        None => UnicodeWidthStr::width(s),
    }
}

fn truncate(s: &str, width: usize) -> String {
    if visible_width(s) <= width || s.contains('\x1b') {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if UnicodeWidthStr::width(out.as_str()) + 2 > width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let cell = |row: &Vec<String>, i: usize| -> String {
            truncate(
                row.get(i).map(String::as_str).unwrap_or_default(),
                self.columns[i].max_width,
            )
        };

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|r| visible_width(&cell(r, i)))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let pad = |s: &str, w: usize| -> String {
            let fill = w.saturating_sub(visible_width(s));
            format!("{s}{} ", " ".repeat(fill))
        };

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                out.push_str(&pad(&cell(row, i), *w));
            }
            out.push('\n');
        }

        out
    }
}
