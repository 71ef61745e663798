// SPDX-License-Identifier: Apache-2.0

//! Synthesize top-level wrapper and stub modules from an elaborated design
//! hierarchy.
//!
//! The input is an instance tree that has already been elaborated by an
//! external compiler (definition names, directions, widths, and parameter
//! values all resolved) plus a reference list of hierarchical paths to
//! expose. One depth-first pass over the tree populates a hierarchy store
//! and resolves the reference list; a generate phase then emits, per
//! distinct module definition, a `_top` wrapper that surfaces sub-instance
//! ports as deduplicated boundary ports and a black-box stub, along with
//! JSON metadata and a reconciliation status artifact.
//!
//! ```
//! use hierstitch::{DesignNode, IO, Stitcher};
//!
//! let tree = DesignNode::root("$root", vec![DesignNode::instance(
//!     "top",
//!     "Top",
//!     vec![
//!         DesignNode::port("top.clk", IO::Input(None)),
//!         DesignNode::instance(
//!             "top.cpu",
//!             "CpuCore",
//!             vec![DesignNode::port("top.cpu.clk", IO::Input(None))],
//!         ),
//!     ],
//! )]);
//!
//! let mut stitcher = Stitcher::from_reference_str("top.cpu;CpuCore;clk\n").unwrap();
//! stitcher.walk(&tree);
//! let artifacts = stitcher.generate();
//! assert!(artifacts.status.is_success());
//! assert!(artifacts.modules.contains_key("CpuCore"));
//! ```

mod error;
mod facing;
mod hier_path;
mod io;
mod reference;
mod report;
mod state;
mod stitcher;
mod synth;
mod tree;
mod walker;

pub use error::{Error, Result};
pub use hier_path::HierPath;
pub use io::IO;
pub use reference::{ReferenceEntry, ReferenceRegistry, Resolution};
pub use report::{FacingMetadata, FacingNode, ModuleMetadata, PortMetadata, RunStatus};
pub use state::{ChildInst, HierarchyStore, ParameterInfo, PortInfo, ScopeState};
pub use stitcher::{
    Artifacts, DONE_FILE, ERROR_FILE, FACING_DATA_FILE, MODULE_DATA_FILE, ModuleArtifact, Stitcher,
};
pub use tree::DesignNode;
