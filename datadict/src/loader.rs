//! Record loading: bytes in, typed records out.
//!
//! A load either yields one record per data row or fails as a whole. The
//! tables are build artifacts, so a bad row is a misconfiguration and no
//! partial result is ever returned.
//!
//! # Example
//!
//! ```rust,ignore
//! use datadict::{load_records, AutoMagicRecord};
//!
//! let bytes = std::fs::read("data/global/excel/automagic.txt")?;
//! let rules: Vec<AutoMagicRecord> = load_records(&bytes)?;
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::error::{LoadError, LoadResult};
use crate::records::Record;
use crate::table::Table;

/// Decode `bytes` as a table of `R`.
pub fn load_records<R: Record>(bytes: &[u8]) -> LoadResult<Vec<R>> {
    let table = Table::from_bytes(bytes)?;
    load_table(&table)
}

/// Read a table file from disk and decode it as `R`.
pub fn load_file<R: Record>(path: impl AsRef<Path>) -> LoadResult<Vec<R>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        record = R::NAME,
        "read table file"
    );
    load_records(&bytes)
}

/// Decode an already tokenized table as `R`.
///
/// The header is checked against [`Record::COLUMNS`] before any row is read.
pub fn load_table<R: Record>(table: &Table) -> LoadResult<Vec<R>> {
    let missing = table.index().missing(R::COLUMNS);
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns {
            record: R::NAME,
            columns: missing,
        });
    }

    let mut records = Vec::with_capacity(table.len());
    let mut cursor = table.cursor();
    while cursor.advance() {
        records.push(R::decode(&mut cursor));
    }
    cursor.finish()?;

    info!(
        record = R::NAME,
        count = records.len(),
        "Loaded {} {} records",
        records.len(),
        R::NAME
    );
    Ok(records)
}
