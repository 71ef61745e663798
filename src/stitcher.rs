// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use log::info;

use crate::error::Result;
use crate::report::RunStatus;
use crate::state::HierarchyStore;
use crate::walker::Walker;
use crate::{DesignNode, HierPath, ReferenceRegistry, facing, report, synth};

/// File name of the module-metadata artifact.
pub const MODULE_DATA_FILE: &str = "module_data.json";
/// File name of the facing-metadata artifact.
pub const FACING_DATA_FILE: &str = "facing_node_data.json";
/// Marker written when all reference entries reconciled cleanly.
pub const DONE_FILE: &str = ".hierstitch_done";
/// Error report written when any entry was duplicated, unresolved, or
/// mismatched. At most one of `DONE_FILE` and `ERROR_FILE` exists after a
/// run.
pub const ERROR_FILE: &str = ".hierstitch_error";

/// The synthesized output for one module definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleArtifact {
    /// The `<def>_top` wrapper module.
    pub top: String,
    /// The black-box stub module.
    pub stub: String,
}

/// Everything one run produces, held in memory so callers can inspect it
/// before (or instead of) writing files.
#[derive(Debug)]
pub struct Artifacts {
    /// Per-definition wrapper and stub, in first-visit order.
    pub modules: IndexMap<String, ModuleArtifact>,
    /// The module-metadata artifact, serialized JSON.
    pub module_data: String,
    /// The facing-metadata artifact, serialized JSON.
    pub facing_data: String,
    /// The reconciliation outcome.
    pub status: RunStatus,
}

impl Artifacts {
    /// Writes every artifact into `dir`: `<def>_top.sv` and `<def>.sv` per
    /// definition, both metadata files, and exactly one of the done marker or
    /// the error report.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        for (def_name, module) in &self.modules {
            let top_path = dir.join(format!("{def_name}_top.sv"));
            info!("writing {}", top_path.display());
            std::fs::write(&top_path, &module.top)?;
            let stub_path = dir.join(format!("{def_name}.sv"));
            info!("writing {}", stub_path.display());
            std::fs::write(&stub_path, &module.stub)?;
        }
        std::fs::write(dir.join(MODULE_DATA_FILE), &self.module_data)?;
        std::fs::write(dir.join(FACING_DATA_FILE), &self.facing_data)?;
        if self.status.is_success() {
            std::fs::write(dir.join(DONE_FILE), "hierstitch done.\n")?;
            remove_if_present(&dir.join(ERROR_FILE))?;
        } else {
            std::fs::write(dir.join(ERROR_FILE), self.status.render_error())?;
            remove_if_present(&dir.join(DONE_FILE))?;
        }
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err(err),
        _ => Ok(()),
    }
}

/// Drives the whole pipeline: load the reference list, walk the elaborated
/// tree, then generate wrappers, stubs, metadata, and the status report.
pub struct Stitcher {
    registry: ReferenceRegistry,
    store: HierarchyStore,
    groups: IndexMap<String, Vec<HierPath>>,
    visited: HashSet<HierPath>,
    next_facing_id: usize,
}

impl Stitcher {
    pub fn new(registry: ReferenceRegistry) -> Self {
        Stitcher {
            registry,
            store: HierarchyStore::new(),
            groups: IndexMap::new(),
            visited: HashSet::new(),
            next_facing_id: 0,
        }
    }

    /// Creates a stitcher from reference-list text. See
    /// `ReferenceRegistry::load_str` for the record format.
    pub fn from_reference_str(text: &str) -> Result<Self> {
        Ok(Stitcher::new(ReferenceRegistry::load_str(text)?))
    }

    /// Creates a stitcher from a reference-list file.
    pub fn from_reference_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Stitcher::new(ReferenceRegistry::load_file(path)?))
    }

    /// Traverses one elaborated tree. May be called once per design root;
    /// state accumulates across calls within a run.
    pub fn walk(&mut self, root: &DesignNode) {
        let mut walker = Walker::new(
            &mut self.registry,
            std::mem::take(&mut self.store),
            std::mem::take(&mut self.groups),
            std::mem::take(&mut self.visited),
            self.next_facing_id,
        );
        walker.visit(root);
        (self.store, self.groups, self.visited, self.next_facing_id) = walker.finish();
    }

    pub fn registry(&self) -> &ReferenceRegistry {
        &self.registry
    }

    pub fn store(&self) -> &HierarchyStore {
        &self.store
    }

    /// Runs the generate phase in memory: canonicalizes facing prefixes per
    /// definition group, synthesizes each group's wrapper and stub from its
    /// first-visited site, and builds the metadata and status artifacts.
    /// Enumeration follows first-visit order throughout, so output is
    /// byte-identical across runs on identical input.
    pub fn generate(&mut self) -> Artifacts {
        for sites in self.groups.values() {
            facing::canonicalize(&mut self.store, sites);
        }

        let mut modules = IndexMap::new();
        for (def_name, sites) in &self.groups {
            let top = synth::top_module(def_name, sites, &self.store, &self.registry);
            let stub = match self.store.scope(&sites[0]) {
                Some(template) => synth::stub_module(def_name, template),
                None => synth::stub_module(def_name, &Default::default()),
            };
            modules.insert(def_name.clone(), ModuleArtifact { top, stub });
        }

        let module_data = serde_json::to_string_pretty(&report::module_data(
            &self.registry,
            &self.store,
        ))
        .expect("module metadata is serializable");
        let facing_data = serde_json::to_string_pretty(&report::facing_data(
            &self.registry,
            &self.store,
        ))
        .expect("facing metadata is serializable");

        Artifacts {
            modules,
            module_data,
            facing_data,
            status: report::classify(&self.registry),
        }
    }

    /// Runs the generate phase and writes all artifacts into `dir`.
    pub fn generate_to_dir(&mut self, dir: impl AsRef<Path>) -> Result<Artifacts> {
        let artifacts = self.generate();
        artifacts.write_to_dir(dir)?;
        Ok(artifacts)
    }
}
