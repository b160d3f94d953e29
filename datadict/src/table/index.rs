//! Header name to column position lookup.

use std::collections::HashMap;

/// Case-insensitive mapping from header name to zero-based column position.
///
/// Header capitalisation in the game files is inconsistent (`Name` next to
/// `version`), so every lookup is lower-cased. When a name appears twice the
/// last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the index from a header row.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positions = headers
            .into_iter()
            .enumerate()
            .map(|(pos, name)| (normalize(name.as_ref()), pos))
            .collect();
        Self { positions }
    }

    /// Position of `name`, if the header has it.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&normalize(name)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Names from `required` that the header lacks, in the order given.
    pub fn missing(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.contains(name))
            .map(|name| name.to_string())
            .collect()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}
