// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use crate::state::{ChildInst, HierarchyStore};
use crate::{DesignNode, HierPath, ReferenceRegistry};

/// Performs the single depth-first traversal of the elaborated tree,
/// populating the hierarchy store and resolving reference entries as their
/// paths are encountered.
///
/// Each hierarchical path is recorded at most once; revisiting a path still
/// recurses into its body but produces no further side effects.
pub(crate) struct Walker<'a> {
    registry: &'a mut ReferenceRegistry,
    store: HierarchyStore,
    groups: IndexMap<String, Vec<HierPath>>,
    visited: HashSet<HierPath>,
    next_facing_id: usize,
}

impl<'a> Walker<'a> {
    /// Picks up a traversal over previously accumulated state, so that a
    /// design with more than one root is walked as one run.
    pub(crate) fn new(
        registry: &'a mut ReferenceRegistry,
        store: HierarchyStore,
        groups: IndexMap<String, Vec<HierPath>>,
        visited: HashSet<HierPath>,
        next_facing_id: usize,
    ) -> Self {
        Walker {
            registry,
            store,
            groups,
            visited,
            next_facing_id,
        }
    }

    /// Visits one node and everything below it.
    pub(crate) fn visit(&mut self, node: &DesignNode) {
        match node {
            DesignNode::Root { name, children } => {
                debug!("root: {name}");
                for child in children {
                    self.visit(child);
                }
            }
            DesignNode::Instance {
                name,
                def_name,
                path,
                children,
            } => {
                debug!("instance: {name} ({def_name}) at {path}");
                if !self.visited.contains(path) {
                    self.record_instance(path, def_name);
                    self.visited.insert(path.clone());
                }
                for child in children {
                    self.visit(child);
                }
            }
            DesignNode::Port { name, io, path } => {
                debug!("port: {name} ({}) at {path}", io.keyword());
                self.store.scope_mut(path.parent()).record_port(name, io.clone());
            }
            DesignNode::Parameter { name, value, path } => {
                debug!("parameter: {name} = {value} at {path}");
                self.store
                    .scope_mut(path.parent())
                    .record_parameter(name, value);
            }
            DesignNode::Scope { name, children } => {
                debug!("scope: {name}");
                for child in children {
                    self.visit(child);
                }
            }
        }
    }

    /// If `path` is an unresolved reference entry, resolves it, registers the
    /// instance as a child of its parent scope with a fresh facing prefix,
    /// and adds the path to its definition group. Instances the reference
    /// list does not name are traversed but leave no record of their own.
    fn record_instance(&mut self, path: &HierPath, def_name: &str) {
        // The walker has no access to pre-elaboration names, so the original
        // definition name is taken to equal the resolved one.
        let original_name = def_name;
        if !self.registry.resolve(path, def_name, original_name) {
            return;
        }

        self.groups
            .entry(def_name.to_string())
            .or_default()
            .push(path.clone());

        let facing_prefix = format!("fp{}_", self.next_facing_id);
        self.next_facing_id += 1;
        self.store.scope_mut(path.parent()).children.push(ChildInst {
            path: path.clone(),
            def_name: def_name.to_string(),
            original_def_name: original_name.to_string(),
            facing_prefix,
        });
    }

    /// Tears down the walker, handing back everything the traversal built:
    /// the hierarchy store, the definition groups (definition name to
    /// instantiation sites, both in first-visit order), the visited set, and
    /// the next free facing-prefix counter value.
    #[allow(clippy::type_complexity)]
    pub(crate) fn finish(
        self,
    ) -> (
        HierarchyStore,
        IndexMap<String, Vec<HierPath>>,
        HashSet<HierPath>,
        usize,
    ) {
        (self.store, self.groups, self.visited, self.next_facing_id)
    }
}
