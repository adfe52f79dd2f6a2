//! Extraction entry points.
//!
//! [`read_camels_file`] opens a file, resolves the entry and dataset group
//! to read, flattens the group into columns and closes the file again
//! before returning. [`extract_from`] runs the same pipeline over a
//! container the caller already holds.

use crate::data::{Container, NetcdfContainer};
use crate::error::Result;
use crate::resolve::{
    dataset_group_path, flatten_columns, read_fits, read_plot_hints, resolve_dataset_group,
    resolve_entry, ColumnMap, FitResult, PlotHints,
};
use crate::select::Selector;
use std::path::Path;

/// Options for a single extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Entry to read. Empty picks one automatically.
    pub entry_key: String,
    /// Dataset group to read. Empty reads the default group.
    pub data_set_key: String,
    /// Return a table instead of the raw columns when the adapter exists.
    pub return_table: bool,
    /// Hoist the leaves of variable-signal groups into the columns.
    pub read_variable_signal: bool,
    /// Also read the fit results stored with the dataset group.
    pub return_fits: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            entry_key: String::new(),
            data_set_key: String::new(),
            return_table: true,
            read_variable_signal: true,
            return_fits: false,
        }
    }
}

impl ReadOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this entry.
    pub fn entry(mut self, key: impl Into<String>) -> Self {
        self.entry_key = key.into();
        self
    }

    /// Read this dataset group.
    pub fn data_set(mut self, key: impl Into<String>) -> Self {
        self.data_set_key = key.into();
        self
    }

    /// Choose between table and raw column output.
    pub fn return_table(mut self, enabled: bool) -> Self {
        self.return_table = enabled;
        self
    }

    /// Enable or disable variable-signal expansion.
    pub fn read_variable_signal(mut self, enabled: bool) -> Self {
        self.read_variable_signal = enabled;
        self
    }

    /// Enable or disable reading fit results.
    pub fn return_fits(mut self, enabled: bool) -> Self {
        self.return_fits = enabled;
        self
    }
}

/// The entry and dataset group an extraction reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    /// Entry name.
    pub entry: String,
    /// Dataset group name, empty for the default group.
    pub dataset_group: String,
}

impl ResolvedSelection {
    /// Path of the selected dataset group.
    pub fn group_path(&self) -> String {
        dataset_group_path(&self.entry, &self.dataset_group)
    }

    /// Check whether the default dataset group is selected.
    pub fn is_default_group(&self) -> bool {
        self.dataset_group.is_empty()
    }
}

/// Extracted data in the shape the caller asked for.
#[derive(Debug, Clone)]
pub enum TableData {
    /// Raw column mapping.
    Columns(ColumnMap),
    /// Arrow table.
    #[cfg(feature = "arrow")]
    Table(arrow::record_batch::RecordBatch),
}

/// Result of one extraction.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// What was read.
    pub selection: ResolvedSelection,
    /// The data.
    pub data: TableData,
    /// Axis and signal hints declared on the dataset group.
    pub hints: Option<PlotHints>,
    /// Fit results, when requested.
    pub fits: Option<Vec<FitResult>>,
}

impl Extraction {
    /// The raw columns, unless a table was returned.
    pub fn columns(&self) -> Option<&ColumnMap> {
        match &self.data {
            TableData::Columns(columns) => Some(columns),
            #[cfg(feature = "arrow")]
            TableData::Table(_) => None,
        }
    }
}

/// Resolve the entry and dataset group to read.
pub fn resolve_selection<C, S>(
    container: &C,
    options: &ReadOptions,
    selector: &mut S,
) -> Result<ResolvedSelection>
where
    C: Container + ?Sized,
    S: Selector + ?Sized,
{
    let entry = resolve_entry(container, &options.entry_key, selector)?;
    let dataset_group = resolve_dataset_group(container, &entry, &options.data_set_key, selector)?;
    tracing::debug!("Resolved entry \"{}\", dataset group \"{}\"", entry, dataset_group);
    Ok(ResolvedSelection {
        entry,
        dataset_group,
    })
}

/// Run the extraction pipeline over an open container.
pub fn extract_from<C, S>(container: &C, options: &ReadOptions, selector: &mut S) -> Result<Extraction>
where
    C: Container + ?Sized,
    S: Selector + ?Sized,
{
    let selection = resolve_selection(container, options, selector)?;
    let group_path = selection.group_path();
    let columns = flatten_columns(container, &group_path, options.read_variable_signal)?;
    let hints = read_plot_hints(container, &group_path)?;
    let fits = if options.return_fits {
        Some(read_fits(container, &group_path)?)
    } else {
        None
    };
    tracing::info!("Read {} columns from {}", columns.len(), group_path);

    let data = if options.return_table {
        into_table(columns)?
    } else {
        TableData::Columns(columns)
    };

    Ok(Extraction {
        selection,
        data,
        hints,
        fits,
    })
}

#[cfg(feature = "arrow")]
fn into_table(columns: ColumnMap) -> Result<TableData> {
    Ok(TableData::Table(crate::table::to_record_batch(&columns)?))
}

#[cfg(not(feature = "arrow"))]
fn into_table(columns: ColumnMap) -> Result<TableData> {
    tracing::warn!("Tabular output requested but not available, returning raw columns");
    Ok(TableData::Columns(columns))
}

/// Read a CAMELS file.
///
/// The file is open only for the duration of this call; the returned data
/// owns its values.
pub fn read_camels_file<S>(path: &Path, options: &ReadOptions, selector: &mut S) -> Result<Extraction>
where
    S: Selector + ?Sized,
{
    let container = NetcdfContainer::open(path)?;
    extract_from(&container, options, selector)
}
