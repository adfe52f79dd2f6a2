//! In-memory container tree.

use super::container::{AttrValue, Container, NodeKind};
use crate::error::{Result, ToolboxError};
use ndarray::{Array1, ArrayD};
use std::collections::HashMap;

/// A node in an in-memory data tree.
///
/// A tree of `DataNode`s is a complete [`Container`]: the root node is the
/// container root and children keep their insertion order.
#[derive(Debug, Clone)]
pub struct DataNode {
    /// Node name.
    pub name: String,
    /// Kind of node.
    pub kind: NodeKind,
    /// Child nodes, in stored order.
    pub children: Vec<DataNode>,
    /// Node attributes.
    pub attributes: HashMap<String, AttrValue>,
    /// Values for leaf nodes.
    pub values: Option<ArrayD<f64>>,
}

impl DataNode {
    /// Create an empty group node.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Group,
            children: Vec::new(),
            attributes: HashMap::new(),
            values: None,
        }
    }

    /// Create a one-dimensional leaf node.
    pub fn leaf(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::leaf_nd(name, Array1::from_vec(values).into_dyn())
    }

    /// Create a leaf node of any dimensionality.
    pub fn leaf_nd(name: impl Into<String>, values: ArrayD<f64>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Leaf,
            children: Vec::new(),
            attributes: HashMap::new(),
            values: Some(values),
        }
    }

    /// Create a leaf node holding no readable data.
    pub fn unreadable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Leaf,
            children: Vec::new(),
            attributes: HashMap::new(),
            values: None,
        }
    }

    /// Add a child node, builder style.
    pub fn with_child(mut self, child: DataNode) -> Self {
        self.add_child(child);
        self
    }

    /// Add an attribute, builder style.
    pub fn with_attribute(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Add a child node.
    pub fn add_child(&mut self, child: DataNode) {
        self.children.push(child);
    }

    /// Check if this node is a leaf dataset.
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// Find the direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&DataNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Find the descendant at a `/`-joined path relative to this node.
    pub fn find(&self, path: &str) -> Option<&DataNode> {
        path.split('/')
            .filter(|part| !part.is_empty())
            .try_fold(self, |node, part| node.child(part))
    }

    fn find_or_err(&self, path: &str) -> Result<&DataNode> {
        self.find(path).ok_or_else(|| ToolboxError::node_not_found(path))
    }
}

impl Container for DataNode {
    fn children(&self, path: &str) -> Result<Vec<String>> {
        let node = self.find_or_err(path)?;
        Ok(node.children.iter().map(|c| c.name.clone()).collect())
    }

    fn kind(&self, path: &str) -> Result<Option<NodeKind>> {
        Ok(self.find(path).map(|n| n.kind))
    }

    fn materialize(&self, path: &str) -> Result<ArrayD<f64>> {
        let node = self.find_or_err(path)?;
        if !node.is_leaf() {
            return Err(ToolboxError::materialize(path, "node is a group"));
        }
        node.values
            .clone()
            .ok_or_else(|| ToolboxError::materialize(path, "no readable values"))
    }

    fn attribute(&self, path: &str, name: &str) -> Result<Option<AttrValue>> {
        let node = self.find_or_err(path)?;
        Ok(node.attributes.get(name).cloned())
    }
}
