//! Column flattening.
//!
//! A dataset group becomes a flat mapping of column name to array. Leaf
//! datasets become columns under their own name. Sub-groups whose name ends
//! in [`VARIABLE_SIGNAL_SUFFIX`] are hoisted: their leaves become top-level
//! columns, again under their own unprefixed name. Any other sub-group is
//! skipped.
//!
//! Name collisions are resolved silently in favour of the column met last
//! in stored order. A variable-signal leaf named like a plain leaf of the
//! dataset group therefore replaces it when the signal group comes later.

use crate::data::{join_path, Container, NodeKind};
use crate::error::Result;
use ndarray::ArrayD;

/// Name suffix of sub-groups whose leaves are hoisted into the parent.
pub const VARIABLE_SIGNAL_SUFFIX: &str = "_variable_signal";

/// A named, materialized column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Column values.
    pub data: ArrayD<f64>,
}

impl Column {
    /// Number of values in the column.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Minimum and maximum of the finite values.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Insertion-ordered mapping of column name to values.
///
/// Replacing an existing column keeps the position it was first inserted at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    columns: Vec<Column>,
}

impl ColumnMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column, replacing any column of the same name.
    ///
    /// Returns the replaced values.
    pub fn insert(&mut self, name: impl Into<String>, data: ArrayD<f64>) -> Option<ArrayD<f64>> {
        let name = name.into();
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.data, data)),
            None => {
                self.columns.push(Column { name, data });
                None
            }
        }
    }

    /// Values of the column named `name`.
    pub fn get(&self, name: &str) -> Option<&ArrayD<f64>> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.data)
    }

    /// Check whether a column named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Column names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Iterate over the columns, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColumnMap {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl IntoIterator for ColumnMap {
    type Item = Column;
    type IntoIter = std::vec::IntoIter<Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

/// Check whether a group name marks a variable-signal group.
pub fn is_variable_signal_group(name: &str) -> bool {
    name.ends_with(VARIABLE_SIGNAL_SUFFIX)
}

fn insert_column(columns: &mut ColumnMap, name: &str, data: ArrayD<f64>, path: &str) {
    if columns.insert(name, data).is_some() {
        tracing::debug!("Column \"{}\" replaced by {}", name, path);
    }
}

/// Read the dataset group at `group_path` into a flat column mapping.
pub fn flatten_columns<C>(container: &C, group_path: &str, expand_variable_signals: bool) -> Result<ColumnMap>
where
    C: Container + ?Sized,
{
    let mut columns = ColumnMap::new();

    for name in container.children(group_path)? {
        let path = join_path(group_path, &name);
        match container.kind(&path)? {
            Some(NodeKind::Group) if expand_variable_signals && is_variable_signal_group(&name) => {
                for signal in container.children(&path)? {
                    let signal_path = join_path(&path, &signal);
                    let data = container.materialize(&signal_path)?;
                    insert_column(&mut columns, &signal, data, &signal_path);
                }
            }
            Some(NodeKind::Leaf) => {
                let data = container.materialize(&path)?;
                insert_column(&mut columns, &name, data, &path);
            }
            _ => tracing::debug!("Skipping group {}", path),
        }
    }

    Ok(columns)
}
