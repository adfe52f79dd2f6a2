//! The resolution engine.
//!
//! Resolution runs in three steps: pick an entry, pick a dataset group
//! inside it, and flatten that group into columns.

mod entry;
mod fits;
mod flatten;
mod group;
mod hints;

pub use entry::{is_reserved_entry, resolve_entry, RESERVED_ENTRY_PREFIX};
pub use fits::{read_fits, FitResult, FITS_GROUP};
pub use flatten::{flatten_columns, is_variable_signal_group, Column, ColumnMap, VARIABLE_SIGNAL_SUFFIX};
pub use group::{dataset_group_path, resolve_dataset_group, DATA_GROUP, MAIN_DATASET};
pub use hints::{read_plot_hints, PlotHints};
