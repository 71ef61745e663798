// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexSet;
use itertools::Itertools;

use crate::state::{HierarchyStore, PortInfo, ScopeState};
use crate::{HierPath, IO, ReferenceRegistry};

fn render_port(port: &PortInfo) -> String {
    format!("{} logic{} {}", port.io.keyword(), port.io.range(), port.name)
}

/// Emits the black-box stub for a definition: parameters and ports of the
/// template site, no body.
pub(crate) fn stub_module(def_name: &str, state: &ScopeState) -> String {
    let mut out = format!("module {def_name}");
    if !state.parameters.is_empty() {
        out.push_str("#(\n");
        out.push_str(
            &state
                .parameters
                .iter()
                .map(|p| format!("parameter {}={}", p.name, p.value))
                .join(",\n"),
        );
        out.push_str("\n)\n");
    }
    if state.ports.is_empty() {
        out.push_str(";\n");
    } else {
        out.push_str("(\n");
        out.push_str(&state.ports.iter().map(render_port).join(",\n"));
        out.push_str("\n);\n");
    }
    out.push_str("endmodule\n");
    out
}

/// Emits the `<def>_top` wrapper for a definition group. The first visited
/// site is the structural template; its own ports pass through verbatim. On
/// top of those, one boundary port group is emitted per distinct relative
/// sub-hierarchy shape across all sites, with each exposed port's direction
/// flipped and wired to the nested instance port through its hierarchical
/// name. Ports on a site's exclusion list and bidirectional ports are never
/// auto-wired.
///
/// Expects `facing::canonicalize` to have run on the group already.
pub(crate) fn top_module(
    def_name: &str,
    sites: &[HierPath],
    store: &HierarchyStore,
    registry: &ReferenceRegistry,
) -> String {
    let empty = ScopeState::default();
    let template = store.scope(&sites[0]).unwrap_or(&empty);

    let mut decls: Vec<String> = template.ports.iter().map(render_port).collect();
    let mut assigns: Vec<String> = Vec::new();
    let mut seen: IndexSet<String> = IndexSet::new();

    for site in sites {
        let Some(scope) = store.scope(site) else {
            continue;
        };
        for child in &scope.children {
            let suffix = child.path.relative_to(site).unwrap_or_else(|| {
                panic!("child {} is not below its site {site}", child.path)
            });
            // Prefixes are canonical at this point, so a repeated shape
            // contributes no new boundary ports.
            if !seen.insert(suffix.to_string()) {
                continue;
            }
            let prefix = &child.facing_prefix;
            let nested = format!("{def_name}_top.{def_name}.{suffix}.");
            let excluded = registry.get(&child.path).map(|entry| &entry.excluded);
            let Some(child_scope) = store.scope(&child.path) else {
                continue;
            };
            for port in &child_scope.ports {
                if excluded.is_some_and(|set| set.contains(&port.name)) {
                    continue;
                }
                match port.io {
                    IO::InOut(_) => {}
                    IO::Input(_) => {
                        decls.push(format!(
                            "output logic{} {prefix}{}",
                            port.io.range(),
                            port.name
                        ));
                        assigns.push(format!(
                            "assign {prefix}{} = {nested}{}",
                            port.name, port.name
                        ));
                    }
                    IO::Output(_) | IO::Ref(_) => {
                        decls.push(format!(
                            "input logic{} {prefix}{}",
                            port.io.range(),
                            port.name
                        ));
                        assigns.push(format!(
                            "assign {nested}{} = {prefix}{}",
                            port.name, port.name
                        ));
                    }
                }
            }
        }
    }

    let mut out = format!("module {def_name}_top(\n{}\n);\n\n", decls.join(",\n"));

    // Instantiate the template once, connecting its own ports by name. The
    // instance reuses the definition name so that the nested hierarchical
    // references above hold.
    out.push_str(&format!("{def_name} "));
    if !template.parameters.is_empty() {
        out.push_str(&format!(
            "#({}) ",
            template
                .parameters
                .iter()
                .map(|p| format!(".{}({})", p.name, p.value))
                .join(", ")
        ));
    }
    out.push_str(&format!("{def_name}(\n"));
    out.push_str(
        &template
            .ports
            .iter()
            .map(|p| format!(".{}({})", p.name, p.name))
            .join(",\n"),
    );
    out.push_str("\n);\n\n");

    for assign in &assigns {
        out.push_str(assign);
        out.push_str(";\n");
    }
    out.push_str("endmodule\n");
    out
}
