// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

use crate::{HierPath, IO};

/// A port recorded in the scope of the instance that declares it.
#[derive(Clone, Debug, PartialEq)]
pub struct PortInfo {
    pub name: String,
    pub io: IO,
}

/// A parameter with its resolved value, recorded one scope above the symbol
/// that declared it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterInfo {
    pub name: String,
    pub value: String,
}

/// A direct child instance of a scope that matched a reference-list entry.
/// `facing_prefix` starts out globally unique; canonicalization may later
/// rewrite it to the prefix of an earlier, structurally identical site.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildInst {
    pub path: HierPath,
    pub def_name: String,
    pub original_def_name: String,
    pub facing_prefix: String,
}

/// Everything accumulated for one hierarchical scope during the traversal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScopeState {
    pub ports: Vec<PortInfo>,
    pub parameters: Vec<ParameterInfo>,
    pub children: Vec<ChildInst>,
}

impl ScopeState {
    /// Records a port, ignoring a revisit of a port already recorded under
    /// the same name. Keeps the traversal idempotent when the same instance
    /// body is reached through more than one tree edge.
    pub(crate) fn record_port(&mut self, name: impl AsRef<str>, io: IO) {
        if self.ports.iter().any(|p| p.name == name.as_ref()) {
            return;
        }
        self.ports.push(PortInfo {
            name: name.as_ref().to_string(),
            io,
        });
    }

    /// Records a parameter, with the same revisit rule as `record_port`.
    pub(crate) fn record_parameter(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        if self.parameters.iter().any(|p| p.name == name.as_ref()) {
            return;
        }
        self.parameters.push(ParameterInfo {
            name: name.as_ref().to_string(),
            value: value.as_ref().to_string(),
        });
    }
}

/// The hierarchy state store: one `ScopeState` per hierarchical path, keyed
/// in first-insertion order so that everything derived from it enumerates
/// reproducibly.
#[derive(Debug, Default, PartialEq)]
pub struct HierarchyStore {
    scopes: IndexMap<HierPath, ScopeState>,
}

impl HierarchyStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the state for `path`, creating an empty one if it does not
    /// exist yet.
    pub(crate) fn scope_mut(&mut self, path: HierPath) -> &mut ScopeState {
        self.scopes.entry(path).or_default()
    }

    pub fn scope(&self, path: &HierPath) -> Option<&ScopeState> {
        self.scopes.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HierPath, &ScopeState)> {
        self.scopes.iter()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
