//! Fit results stored next to a dataset.
//!
//! A dataset group may hold a `fits` sub-group with one group per fit. The
//! leaves of each fit group (fitted parameters, fit curves) are read as
//! columns of that fit.

use super::flatten::{flatten_columns, ColumnMap};
use crate::data::{join_path, Container, NodeKind};
use crate::error::Result;

/// Name of the sub-group holding fit results.
pub const FITS_GROUP: &str = "fits";

/// Columns of one fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// Fit name.
    pub name: String,
    /// Fit parameters and curves.
    pub parameters: ColumnMap,
}

/// Read every fit stored under the dataset group at `group_path`.
///
/// A dataset group without a `fits` sub-group has no fits.
pub fn read_fits<C>(container: &C, group_path: &str) -> Result<Vec<FitResult>>
where
    C: Container + ?Sized,
{
    let fits_path = join_path(group_path, FITS_GROUP);
    if !container.is_group(&fits_path)? {
        return Ok(Vec::new());
    }

    let mut fits = Vec::new();
    for name in container.children(&fits_path)? {
        let fit_path = join_path(&fits_path, &name);
        if container.kind(&fit_path)? != Some(NodeKind::Group) {
            tracing::debug!("Skipping non-group {} in fits", fit_path);
            continue;
        }
        let parameters = flatten_columns(container, &fit_path, false)?;
        fits.push(FitResult { name, parameters });
    }
    Ok(fits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataNode;
    use ndarray::arr1;

    #[test]
    fn no_fits_group_means_no_fits() {
        let root = DataNode::group("data").with_child(DataNode::leaf("time", vec![0.0]));
        assert!(read_fits(&root, "").unwrap().is_empty());
    }

    #[test]
    fn each_fit_group_becomes_a_result() {
        let root = DataNode::group("data").with_child(
            DataNode::group(FITS_GROUP)
                .with_child(
                    DataNode::group("gauss_fit")
                        .with_child(DataNode::leaf("center", vec![1.5]))
                        .with_child(DataNode::leaf("width", vec![0.2])),
                )
                .with_child(DataNode::leaf("stray", vec![0.0]))
                .with_child(DataNode::group("linear_fit").with_child(DataNode::leaf("slope", vec![2.0]))),
        );

        let fits = read_fits(&root, "").unwrap();
        let names: Vec<_> = fits.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["gauss_fit", "linear_fit"]);
        assert_eq!(
            fits[0].parameters.names().collect::<Vec<_>>(),
            vec!["center", "width"]
        );
        assert_eq!(fits[1].parameters.get("slope").unwrap(), &arr1(&[2.0]).into_dyn());
    }
}
