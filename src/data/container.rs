//! The container tree seam.
//!
//! The extraction engine never touches a file format directly. It walks a
//! [`Container`]: a read-only tree of named groups and leaf datasets
//! addressed by `/`-joined paths relative to the root (`""` is the root).

use crate::error::Result;
use ndarray::ArrayD;

/// Kind of a node in a container tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A group holding an ordered set of children.
    Group,
    /// A leaf dataset that can be materialized into an array.
    Leaf,
}

/// Value of an attribute attached to a node.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A single string.
    Str(String),
    /// A list of strings.
    Strs(Vec<String>),
    /// Any numeric value, rendered as text.
    Number(String),
}

impl AttrValue {
    /// Interpret the attribute as a list of names.
    ///
    /// A single string is split on `", "` (the way list attributes are
    /// flattened when stored as one string).
    pub fn as_names(&self) -> Vec<String> {
        match self {
            AttrValue::Str(s) => s
                .split(", ")
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
            AttrValue::Strs(v) => v.clone(),
            AttrValue::Number(n) => vec![n.clone()],
        }
    }
}

/// Read-only access to a hierarchical container.
pub trait Container {
    /// Names of the children of the group at `path`, in stored order.
    fn children(&self, path: &str) -> Result<Vec<String>>;

    /// Kind of the node at `path`, or `None` when nothing lives there.
    fn kind(&self, path: &str) -> Result<Option<NodeKind>>;

    /// Read the leaf dataset at `path` into memory.
    fn materialize(&self, path: &str) -> Result<ArrayD<f64>>;

    /// Attribute `name` of the node at `path`, if present.
    fn attribute(&self, path: &str, name: &str) -> Result<Option<AttrValue>>;

    /// Check whether a node exists at `path`.
    fn contains(&self, path: &str) -> Result<bool> {
        Ok(self.kind(path)?.is_some())
    }

    /// Check whether the node at `path` is a group.
    fn is_group(&self, path: &str) -> Result<bool> {
        Ok(self.kind(path)? == Some(NodeKind::Group))
    }
}

impl<C: Container + ?Sized> Container for &C {
    fn children(&self, path: &str) -> Result<Vec<String>> {
        (**self).children(path)
    }

    fn kind(&self, path: &str) -> Result<Option<NodeKind>> {
        (**self).kind(path)
    }

    fn materialize(&self, path: &str) -> Result<ArrayD<f64>> {
        (**self).materialize(path)
    }

    fn attribute(&self, path: &str, name: &str) -> Result<Option<AttrValue>> {
        (**self).attribute(path, name)
    }
}

/// Join a parent path and a child name.
pub fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}/{}", parent, child)
    }
}
