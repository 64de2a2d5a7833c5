//! Reverse lookup from filename fragment to derived sample id.
//!
//! The mapping is built once from the transformed CSV (column 1 is the
//! fragment key, column 0 the sample id) and only read afterward. Insertion
//! order is kept explicitly so the first-match-wins join in
//! [`crate::matcher`] is deterministic: a plain hash map would make the tie
//! break depend on incidental iteration order.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{MergeError, MergeResult};

/// Insertion-ordered fragment → sample id map.
///
/// `insert` has dict semantics: overwriting an existing key keeps its
/// original position, new keys append at the end.
#[derive(Debug, Clone, Default)]
pub struct FragmentMap {
    entries: Vec<(String, String)>,
}

impl FragmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fragment → sample id entry. Last write wins on collision.
    pub fn insert(&mut self, fragment: String, sample_id: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == fragment) {
            Some((_, v)) => *v = sample_id,
            None => self.entries.push((fragment, sample_id)),
        }
    }

    /// First entry, in insertion order, whose key *contains* `fragment`
    /// as a substring.
    ///
    /// Note the containment direction: the extracted fragment is searched
    /// inside the stored key, not the other way around. For well-formed
    /// data the keys are 6-character trial values and this degenerates to
    /// equality, but the direction is part of the documented behavior.
    pub fn lookup_containing(&self, fragment: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.contains(fragment))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Build the fragment map from the transformed CSV at `path`.
///
/// Later rows with a duplicate fragment overwrite earlier ones, so the
/// result is deterministic by file order and idempotent over re-reads.
pub fn build_mapping(path: &Path) -> MergeResult<FragmentMap> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(path)?);

    let mut map = FragmentMap::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;

        let sample_id = record.get(0).ok_or(MergeError::MissingColumn { row })?;
        let fragment = record.get(1).ok_or(MergeError::MissingColumn { row })?;
        map.insert(fragment.to_string(), sample_id.to_string());
    }

    Ok(map)
}
