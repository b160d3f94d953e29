//! Tab-separated table tokenizer.
//!
//! Splits text into a header row and data rows. The format is fixed: one
//! row per line, cells separated by a tab, no quoting. Cell values keep
//! their surrounding whitespace. Blank lines, including the trailing one,
//! are skipped.

mod encoding;
mod index;

pub use encoding::{decode_content, decode_text, detect_encoding};
pub use index::ColumnIndex;

use csv::{ReaderBuilder, StringRecord};

use crate::cursor::Cursor;
use crate::error::{StructuralError, TableResult};

/// Column separator.
pub const DELIMITER: u8 = b'\t';

/// A decoded table: header plus rows of equal width.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
    index: ColumnIndex,
}

impl Table {
    /// Decode raw file bytes and tokenize them.
    pub fn from_bytes(bytes: &[u8]) -> TableResult<Self> {
        let text = decode_text(bytes)?;
        Self::parse(&text)
    }

    /// Tokenize table text.
    ///
    /// Row numbers in errors count the header as row 0.
    pub fn parse(text: &str) -> TableResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = reader.records();

        let header = records.next().ok_or(StructuralError::MissingHeader)??;
        let headers: Vec<String> = header.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (i, record) in records.enumerate() {
            let record = record?;
            if record.len() != headers.len() {
                return Err(StructuralError::ColumnCount {
                    row: i + 1,
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            rows.push(record);
        }

        let index = ColumnIndex::new(&headers);
        Ok(Self {
            headers,
            rows,
            index,
        })
    }

    /// Column names in source order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn index(&self) -> &ColumnIndex {
        &self.index
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at data row `row` (zero-based, header excluded) and column `col`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// A fresh cursor positioned before the first data row.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
}
