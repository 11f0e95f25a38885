// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::SECONDARY_HEADERS;

/* ---------------- Scanning ---------------- */

/// Quote-aware CSV/TSV scanner. Never fails: an unterminated quote
/// just flushes whatever was accumulated.
///
/// - `""` inside quotes is a literal quote
/// - `\r` outside quotes is ignored, `\n` ends the row
/// - blank lines (nothing but whitespace) are dropped
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            c if c == sep => row.push(take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(take(&mut field));
                if is_blank_line(&row) {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !row.is_empty() || !field.is_empty() {
        row.push(field);
        if !is_blank_line(&row) {
            rows.push(row);
        }
    }

    rows
}

#[inline]
fn is_blank_line(row: &[String]) -> bool {
    matches!(row, [only] if only.trim().is_empty())
}

/* ---------------- Document ---------------- */

/// A parsed sheet: header plus rows padded to the header's width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvDocument {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Position of a named column, resolved once per document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column(Option<usize>);

impl Column {
    pub const MISSING: Column = Column(None);

    #[inline] pub fn index(self) -> Option<usize> { self.0 }
    #[inline] pub fn is_present(self) -> bool { self.0.is_some() }

    /// Raw cell for this column, `None` when the column is absent.
    #[inline]
    pub fn get(self, row: &[String]) -> Option<&str> {
        self.0.and_then(|i| row.get(i)).map(String::as_str)
    }

    /// Trimmed cell, `None` when absent or blank.
    pub fn text(self, row: &[String]) -> Option<&str> {
        self.get(row).map(str::trim).filter(|s| !s.is_empty())
    }
}

impl CsvDocument {
    /// Parse a comma-separated sheet.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut raw = parse_rows(text, ',');
        if raw.is_empty() {
            return Self::default();
        }

        let header_ix = if has_secondary_header(&raw) { 1 } else { 0 };
        let rest = raw.split_off(header_ix + 1);
        let header: Vec<String> = raw
            .pop()
            .unwrap_or_default()
            .into_iter()
            .map(|h| s!(h.trim()))
            .collect();

        let first = header.first().map(String::as_str).unwrap_or("");
        let rows = rest
            .into_iter()
            .filter(|r| first.is_empty() || r.first().map(|c| c.trim()) != Some(first))
            .collect();

        Self::from_parts(header, rows)
    }

    /// Build from already-split cells, padding short rows.
    pub fn from_parts(header: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = header.len();
        for r in rows.iter_mut() {
            if r.len() < width {
                r.resize(width, s!());
            }
        }
        Self { header, rows }
    }

    pub fn header(&self) -> &[String] { &self.header }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.header.is_empty() && self.rows.is_empty() }

    /// First column whose header equals `name` exactly.
    pub fn column(&self, name: &str) -> Column {
        Column(self.header.iter().position(|h| h == name))
    }
}

fn has_secondary_header(raw: &[Vec<String>]) -> bool {
    let first_cell = |ix: usize| raw.get(ix).and_then(|r| r.first()).map(|c| c.trim());
    match (first_cell(0), first_cell(1)) {
        (Some(a), Some(b)) => SECONDARY_HEADERS.iter().any(|(x, y)| *x == a && *y == b),
        _ => false,
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{sep}")?; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Render a whole table (header first when non-empty).
pub fn to_string(header: &[String], rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if !header.is_empty() {
        let _ = write_row(&mut buf, header, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
