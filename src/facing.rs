// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::state::HierarchyStore;
use crate::HierPath;

/// Canonicalizes facing prefixes for one definition group.
///
/// A definition instantiated at several sites carries the same relative
/// sub-hierarchy shape at each of them. The wrapper must expose one boundary
/// port group per distinct shape, so all child records whose path relative to
/// their site is identical are rewritten to share a single prefix. The first
/// visited site's first child with a given shape keeps its originally
/// assigned prefix; every later occurrence conforms to it.
///
/// Both the code synthesizer and the report emitter read the rewritten
/// prefixes, so the two always agree.
pub(crate) fn canonicalize(store: &mut HierarchyStore, sites: &[HierPath]) {
    let mut canonical: IndexMap<String, String> = IndexMap::new();
    for site in sites {
        let scope = store.scope_mut(site.clone());
        for child in scope.children.iter_mut() {
            let suffix = child.path.relative_to(site).unwrap_or_else(|| {
                panic!("child {} is not below its site {site}", child.path)
            });
            match canonical.entry(suffix.to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(child.facing_prefix.clone());
                }
                Entry::Occupied(entry) => {
                    child.facing_prefix = entry.get().clone();
                }
            }
        }
    }
}
