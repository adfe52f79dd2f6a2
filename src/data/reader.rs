//! netCDF-4 / HDF5 container backend.

use super::container::{AttrValue, Container, NodeKind};
use super::values::{attr_value, read_variable_array};
use crate::error::{Result, ToolboxError};
use ndarray::ArrayD;
use std::path::{Path, PathBuf};

/// Longest name, in bytes, the netCDF library accepts for one path segment.
const MAX_NAME_LEN: usize = 256;

/// Check that every segment of `path` is a name the netCDF library can look
/// up. Other paths cannot name a node in any file.
fn is_addressable(path: &str) -> bool {
    path.split('/')
        .all(|part| !part.is_empty() && part.len() <= MAX_NAME_LEN && !part.contains('\0'))
}

/// A container file opened through the netCDF library.
///
/// The file handle is released when the value is dropped, so holding a
/// `NetcdfContainer` in a local binding scopes the open file to that block.
pub struct NetcdfContainer {
    path: PathBuf,
    file: netcdf::File,
}

impl std::fmt::Debug for NetcdfContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetcdfContainer")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl NetcdfContainer {
    /// Open a container file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        if let Err(source) = std::fs::metadata(path) {
            return Err(ToolboxError::file_open(path.to_path_buf(), source));
        }
        let file = netcdf::open(path)?;
        tracing::debug!("Opened container {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Path of the opened file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn group(&self, path: &str) -> Option<netcdf::Group<'_>> {
        if path.is_empty() || !is_addressable(path) {
            return None;
        }
        self.file.group(path).ok().flatten()
    }

    fn variable(&self, path: &str) -> Option<netcdf::Variable<'_>> {
        if !is_addressable(path) {
            return None;
        }
        self.file.variable(path)
    }
}

impl Drop for NetcdfContainer {
    fn drop(&mut self) {
        tracing::debug!("Closing container {}", self.path.display());
    }
}

impl Container for NetcdfContainer {
    fn children(&self, path: &str) -> Result<Vec<String>> {
        // Variables first, then sub-groups.
        if path.is_empty() {
            let mut names: Vec<String> = self.file.variables().map(|v| v.name().to_string()).collect();
            names.extend(self.file.groups()?.map(|g| g.name().to_string()));
            return Ok(names);
        }

        let group = self
            .group(path)
            .ok_or_else(|| ToolboxError::node_not_found(path))?;
        let mut names: Vec<String> = group.variables().map(|v| v.name().to_string()).collect();
        names.extend(group.groups().map(|g| g.name().to_string()));
        Ok(names)
    }

    fn kind(&self, path: &str) -> Result<Option<NodeKind>> {
        if path.is_empty() || self.group(path).is_some() {
            return Ok(Some(NodeKind::Group));
        }
        if self.variable(path).is_some() {
            return Ok(Some(NodeKind::Leaf));
        }
        Ok(None)
    }

    fn materialize(&self, path: &str) -> Result<ArrayD<f64>> {
        let var = self
            .variable(path)
            .ok_or_else(|| ToolboxError::node_not_found(path))?;
        read_variable_array(&var, path)
    }

    fn attribute(&self, path: &str, name: &str) -> Result<Option<AttrValue>> {
        let value = if path.is_empty() {
            self.file.attribute(name).map(|a| attr_value(&a))
        } else if let Some(group) = self.group(path) {
            group.attribute(name).map(|a| attr_value(&a))
        } else if let Some(var) = self.variable(path) {
            var.attribute(name).map(|a| attr_value(&a))
        } else {
            return Err(ToolboxError::node_not_found(path));
        };
        value.transpose()
    }
}
