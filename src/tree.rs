// SPDX-License-Identifier: Apache-2.0

use crate::{HierPath, IO};

/// One node of the externally elaborated instance tree. The elaborator is
/// responsible for resolving definition names, directions, widths, parameter
/// values, and hierarchical paths before handing the tree over; this crate
/// only reads them.
///
/// The variant set is closed: anything the walker does not care about arrives
/// as a `Scope`, which is recursed into without recording anything.
#[derive(Clone, Debug)]
pub enum DesignNode {
    /// The root of the elaborated tree. Top-level instances are its children.
    Root {
        name: String,
        children: Vec<DesignNode>,
    },
    /// A module instance with a resolved definition name and a unique
    /// hierarchical path.
    Instance {
        name: String,
        def_name: String,
        path: HierPath,
        children: Vec<DesignNode>,
    },
    /// A port declared by the instance whose path encloses this one.
    Port {
        name: String,
        io: IO,
        path: HierPath,
    },
    /// A parameter with its fully resolved value rendered as text.
    Parameter {
        name: String,
        value: String,
        path: HierPath,
    },
    /// Any other elaborated construct (generate blocks, interfaces, ...).
    Scope {
        name: String,
        children: Vec<DesignNode>,
    },
}

impl DesignNode {
    pub fn root(name: impl AsRef<str>, children: Vec<DesignNode>) -> DesignNode {
        DesignNode::Root {
            name: name.as_ref().to_string(),
            children,
        }
    }

    /// Creates an instance node. The instance name is the last segment of
    /// `path`.
    pub fn instance(
        path: impl Into<HierPath>,
        def_name: impl AsRef<str>,
        children: Vec<DesignNode>,
    ) -> DesignNode {
        let path = path.into();
        DesignNode::Instance {
            name: path.leaf().to_string(),
            def_name: def_name.as_ref().to_string(),
            path,
            children,
        }
    }

    /// Creates a port node. The port name is the last segment of `path`; the
    /// owning instance is the parent of `path`.
    pub fn port(path: impl Into<HierPath>, io: IO) -> DesignNode {
        let path = path.into();
        DesignNode::Port {
            name: path.leaf().to_string(),
            io,
            path,
        }
    }

    /// Creates a parameter node. The parameter name is the last segment of
    /// `path`; the owning instance is the parent of `path`.
    pub fn parameter(path: impl Into<HierPath>, value: impl AsRef<str>) -> DesignNode {
        let path = path.into();
        DesignNode::Parameter {
            name: path.leaf().to_string(),
            value: value.as_ref().to_string(),
            path,
        }
    }

    pub fn scope(name: impl AsRef<str>, children: Vec<DesignNode>) -> DesignNode {
        DesignNode::Scope {
            name: name.as_ref().to_string(),
            children,
        }
    }

    /// Returns the children of this node; ports and parameters are leaves.
    pub fn children(&self) -> &[DesignNode] {
        match self {
            DesignNode::Root { children, .. } => children,
            DesignNode::Instance { children, .. } => children,
            DesignNode::Scope { children, .. } => children,
            DesignNode::Port { .. } | DesignNode::Parameter { .. } => &[],
        }
    }
}
