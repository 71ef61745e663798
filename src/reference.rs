// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{Error, Result};
use crate::HierPath;

/// What the traversal found at a referenced path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub def_name: String,
    pub original_name: String,
}

/// One record of the reference list: a hierarchical path, the definition name
/// the user expects to find there, and boundary signals (clocks, resets) that
/// must not be auto-wired when the enclosing wrapper is synthesized.
#[derive(Clone, Debug)]
pub struct ReferenceEntry {
    pub path: HierPath,
    pub expected_original: String,
    pub excluded: HashSet<String>,
    pub resolved: Option<Resolution>,
}

/// The loaded reference list. Paths are kept in load order; a path loaded
/// twice keeps its first record and lands on the duplicate list.
#[derive(Debug, Default)]
pub struct ReferenceRegistry {
    entries: IndexMap<HierPath, ReferenceEntry>,
    duplicates: Vec<HierPath>,
}

impl ReferenceRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the registry from reference-list text: one record per line,
    /// `;`-separated fields, `<path>;<original name>[;<excluded signal>...]`.
    /// Blank lines are skipped. A record with fewer than two fields fails the
    /// whole load.
    pub fn load_str(text: &str) -> Result<Self> {
        let mut registry = ReferenceRegistry::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split(';').map(str::trim).filter(|f| !f.is_empty());
            let (Some(path), Some(original)) = (fields.next(), fields.next()) else {
                return Err(Error::MalformedRecord {
                    line: idx + 1,
                    text: line.to_string(),
                });
            };
            registry.insert(path, original, fields);
        }
        Ok(registry)
    }

    /// Loads the registry from a reference-list file. See `load_str` for the
    /// record format.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::load_str(&text)
    }

    /// Inserts one record. The first record for a path wins; a later record
    /// for the same path only appends the path to the duplicate list.
    pub fn insert<'a>(
        &mut self,
        path: impl Into<HierPath>,
        expected_original: impl AsRef<str>,
        excluded: impl IntoIterator<Item = &'a str>,
    ) {
        let path = path.into();
        match self.entries.entry(path.clone()) {
            Entry::Occupied(_) => {
                self.duplicates.push(path);
            }
            Entry::Vacant(entry) => {
                entry.insert(ReferenceEntry {
                    path,
                    expected_original: expected_original.as_ref().to_string(),
                    excluded: excluded.into_iter().map(str::to_string).collect(),
                    resolved: None,
                });
            }
        }
    }

    /// Marks the entry at `path` as resolved, recording the definition found
    /// there. Returns `true` if the entry exists and was not resolved before.
    pub(crate) fn resolve(
        &mut self,
        path: &HierPath,
        def_name: impl AsRef<str>,
        original_name: impl AsRef<str>,
    ) -> bool {
        match self.entries.get_mut(path) {
            Some(entry) if entry.resolved.is_none() => {
                entry.resolved = Some(Resolution {
                    def_name: def_name.as_ref().to_string(),
                    original_name: original_name.as_ref().to_string(),
                });
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, path: &HierPath) -> Option<&ReferenceEntry> {
        self.entries.get(path)
    }

    /// Iterates entries in load order.
    pub fn entries(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.values()
    }

    /// Paths that appeared more than once in the reference list, in the order
    /// the extra records were seen.
    pub fn duplicates(&self) -> &[HierPath] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
