// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::Serialize;

/// A dot-delimited hierarchical path uniquely naming one instance in the
/// elaborated tree, e.g. `top.cpu.alu`. The empty path is a valid scope key:
/// it is the enclosing scope of top-level instances.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HierPath(String);

impl HierPath {
    pub fn new(path: impl AsRef<str>) -> Self {
        HierPath(path.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty path, i.e. the scope enclosing top-level
    /// instances.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path with its last segment removed; the empty path if
    /// there is no dot.
    pub fn parent(&self) -> HierPath {
        match self.0.rfind('.') {
            Some(idx) => HierPath(self.0[..idx].to_string()),
            None => HierPath(String::new()),
        }
    }

    /// Returns the last segment of the path, e.g. `alu` for `top.cpu.alu`.
    pub fn leaf(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Returns the part of this path below `prefix`, e.g.
    /// `top.cpu.alu` relative to `top` is `cpu.alu`. Returns `None` if this
    /// path is not strictly underneath `prefix`.
    pub fn relative_to(&self, prefix: &HierPath) -> Option<&str> {
        if prefix.is_root() {
            return Some(&self.0);
        }
        let rest = self.0.strip_prefix(prefix.as_str())?;
        rest.strip_prefix('.')
    }
}

impl fmt::Display for HierPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HierPath {
    fn from(path: &str) -> Self {
        HierPath::new(path)
    }
}

impl From<String> for HierPath {
    fn from(path: String) -> Self {
        HierPath(path)
    }
}
