//! Loaded game data, owned in one place.
//!
//! [`GameData`] is built once at startup and handed to whoever needs the
//! records. Each table is published as a [`RecordTable`], a read-only shared
//! handle that is cheap to clone and safe to send across threads.

use std::ops::Index;
use std::slice;
use std::sync::Arc;

use crate::config::Config;
use crate::error::LoadResult;
use crate::loader::load_file;
use crate::records::AutoMagicRecord;

/// Immutable, shared sequence of records in source row order.
#[derive(Debug)]
pub struct RecordTable<R> {
    records: Arc<[R]>,
}

impl<R> RecordTable<R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }
}

impl<R> Clone for RecordTable<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R> Default for RecordTable<R> {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl<R> From<Vec<R>> for RecordTable<R> {
    fn from(records: Vec<R>) -> Self {
        Self {
            records: Arc::from(records),
        }
    }
}

impl<R> Index<usize> for RecordTable<R> {
    type Output = R;

    fn index(&self, index: usize) -> &R {
        &self.records[index]
    }
}

impl<'a, R> IntoIterator for &'a RecordTable<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owner of every loaded table.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    automagic: RecordTable<AutoMagicRecord>,
}

impl GameData {
    /// Load every table from the configured data directory.
    ///
    /// Any failing table fails the whole load.
    pub fn load(config: &Config) -> LoadResult<Self> {
        let automagic = load_file::<AutoMagicRecord>(config.automagic_path())?;
        Ok(Self::from_parts(automagic))
    }

    /// Build from already decoded records.
    pub fn from_parts(automagic: Vec<AutoMagicRecord>) -> Self {
        Self {
            automagic: automagic.into(),
        }
    }

    pub fn automagic(&self) -> &RecordTable<AutoMagicRecord> {
        &self.automagic
    }
}
