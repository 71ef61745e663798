// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use serde::Serialize;

use crate::state::{HierarchyStore, ScopeState};
use crate::{HierPath, ReferenceRegistry};

/// One port of a resolved module, as exported in the module-metadata
/// artifact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PortMetadata {
    pub direction: String,
    pub name: String,
    pub range: String,
}

/// Metadata for one resolved reference entry: the definition found at its
/// path and that definition's port list.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMetadata {
    pub module_name: String,
    pub original_module_name: String,
    pub module_port: Vec<PortMetadata>,
}

/// One sub-instance connection of a resolved scope, with its canonical
/// facing prefix.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacingNode {
    pub module_name: String,
    pub original_module_name: String,
    pub hierarchy: HierPath,
    pub port_prefix: String,
}

/// Metadata for one resolved reference entry with a non-empty child list.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacingMetadata {
    pub module_name: String,
    pub original_module_name: String,
    pub facing_node: Vec<FacingNode>,
}

/// Builds the module-metadata map, keyed by hierarchical path in reference
/// load order.
pub(crate) fn module_data(
    registry: &ReferenceRegistry,
    store: &HierarchyStore,
) -> IndexMap<HierPath, ModuleMetadata> {
    let empty = ScopeState::default();
    let mut data = IndexMap::new();
    for entry in registry.entries() {
        let Some(resolution) = &entry.resolved else {
            continue;
        };
        let scope = store.scope(&entry.path).unwrap_or(&empty);
        data.insert(
            entry.path.clone(),
            ModuleMetadata {
                module_name: resolution.def_name.clone(),
                original_module_name: resolution.original_name.clone(),
                module_port: scope
                    .ports
                    .iter()
                    .map(|port| PortMetadata {
                        direction: port.io.keyword().to_string(),
                        name: port.name.clone(),
                        range: port.io.range(),
                    })
                    .collect(),
            },
        );
    }
    data
}

/// Builds the facing-metadata map for every resolved entry that has direct
/// children. Reads the canonical prefixes left behind by
/// `facing::canonicalize`, so the export always matches the synthesized
/// wrappers.
pub(crate) fn facing_data(
    registry: &ReferenceRegistry,
    store: &HierarchyStore,
) -> IndexMap<HierPath, FacingMetadata> {
    let mut data = IndexMap::new();
    for entry in registry.entries() {
        let Some(resolution) = &entry.resolved else {
            continue;
        };
        let Some(scope) = store.scope(&entry.path) else {
            continue;
        };
        if scope.children.is_empty() {
            continue;
        }
        data.insert(
            entry.path.clone(),
            FacingMetadata {
                module_name: resolution.def_name.clone(),
                original_module_name: resolution.original_name.clone(),
                facing_node: scope
                    .children
                    .iter()
                    .map(|child| FacingNode {
                        module_name: child.def_name.clone(),
                        original_module_name: child.original_def_name.clone(),
                        hierarchy: child.path.clone(),
                        port_prefix: child.facing_prefix.clone(),
                    })
                    .collect(),
            },
        );
    }
    data
}

/// The three-way classification of reference entries. The run succeeds iff
/// all three lists are empty; entries that resolved to the expected original
/// name appear in none of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStatus {
    /// Paths loaded more than once.
    pub duplicates: Vec<HierPath>,
    /// Paths never matched during the traversal.
    pub not_found: Vec<HierPath>,
    /// Paths whose resolved original name differs from the expected one.
    pub mismatched: Vec<HierPath>,
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        self.duplicates.is_empty() && self.not_found.is_empty() && self.mismatched.is_empty()
    }

    /// Renders the error report: every entry of each list under its named
    /// section.
    pub fn render_error(&self) -> String {
        let mut out = String::from("duplicate hierarchy:\n");
        for path in &self.duplicates {
            out.push_str(path.as_str());
            out.push('\n');
        }
        out.push_str("hierarchy not found:\n");
        for path in &self.not_found {
            out.push_str(path.as_str());
            out.push('\n');
        }
        out.push_str("wrong module:\n");
        for path in &self.mismatched {
            out.push_str(path.as_str());
            out.push('\n');
        }
        out
    }
}

/// Classifies every reference entry after the traversal.
pub(crate) fn classify(registry: &ReferenceRegistry) -> RunStatus {
    let mut status = RunStatus {
        duplicates: registry.duplicates().to_vec(),
        ..Default::default()
    };
    for entry in registry.entries() {
        match &entry.resolved {
            None => status.not_found.push(entry.path.clone()),
            Some(resolution) => {
                if resolution.original_name != entry.expected_original {
                    status.mismatched.push(entry.path.clone());
                }
            }
        }
    }
    status
}
