//! Plot hints stored on a dataset group.

use crate::data::Container;
use crate::error::Result;

/// Which columns a dataset group declares as axes and signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotHints {
    /// Axis column names.
    pub x: Vec<String>,
    /// Signal column names, primary signal first.
    pub y: Vec<String>,
}

/// Read the `axes`, `signal` and `auxiliary_signals` attributes of the
/// dataset group at `group_path`.
///
/// Returns `None` unless both `axes` and `signal` are present.
pub fn read_plot_hints<C>(container: &C, group_path: &str) -> Result<Option<PlotHints>>
where
    C: Container + ?Sized,
{
    let axes = container.attribute(group_path, "axes")?;
    let signal = container.attribute(group_path, "signal")?;
    let (Some(axes), Some(signal)) = (axes, signal) else {
        return Ok(None);
    };

    let mut y = signal.as_names();
    if let Some(aux) = container.attribute(group_path, "auxiliary_signals")? {
        y.extend(aux.as_names());
    }

    Ok(Some(PlotHints {
        x: axes.as_names(),
        y,
    }))
}
