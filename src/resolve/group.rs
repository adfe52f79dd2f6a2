//! Dataset group resolution.

use crate::data::{join_path, Container, NodeKind};
use crate::error::Result;
use crate::select::Selector;

/// Sub-path of an entry holding its dataset groups.
pub const DATA_GROUP: &str = "data";

/// Candidate name standing for the default dataset group.
pub const MAIN_DATASET: &str = "main dataset";

/// Path of a dataset group inside `entry`.
///
/// An empty `group` denotes the default group, i.e. the data sub-path itself.
pub fn dataset_group_path(entry: &str, group: &str) -> String {
    let data = join_path(entry, DATA_GROUP);
    if group.is_empty() {
        data
    } else {
        join_path(&data, group)
    }
}

/// Pick the dataset group of `entry` to read.
///
/// Returns the group name, empty for the default group. A requested group
/// that does not exist is not an error: the caller is warned and the choice
/// falls back to the groups that do exist.
pub fn resolve_dataset_group<C, S>(
    container: &C,
    entry: &str,
    requested: &str,
    selector: &mut S,
) -> Result<String>
where
    C: Container + ?Sized,
    S: Selector + ?Sized,
{
    if requested.is_empty() {
        return Ok(String::new());
    }

    let data_path = dataset_group_path(entry, "");
    if container.kind(&join_path(&data_path, requested))? == Some(NodeKind::Group) {
        return Ok(requested.to_string());
    }

    tracing::warn!(
        "The dataset group \"{}\" was not found in entry \"{}\"",
        requested,
        entry
    );

    let mut groups = vec![MAIN_DATASET.to_string()];
    for name in container.children(&data_path)? {
        if container.is_group(&join_path(&data_path, &name))? {
            groups.push(name);
        }
    }

    let chosen = if groups.len() == 1 {
        groups.remove(0)
    } else {
        selector.select(&groups)?
    };

    if chosen == MAIN_DATASET {
        Ok(String::new())
    } else {
        Ok(chosen)
    }
}
