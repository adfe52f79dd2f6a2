//! Tabular adapter.
//!
//! With the `arrow` feature, extracted columns can be returned as an Arrow
//! [`RecordBatch`](arrow::record_batch::RecordBatch). Without it,
//! [`TABULAR_AVAILABLE`] is `false` and callers get the raw [`ColumnMap`].
//!
//! [`ColumnMap`]: crate::resolve::ColumnMap

/// Whether the tabular adapter is compiled in.
pub const TABULAR_AVAILABLE: bool = cfg!(feature = "arrow");

#[cfg(feature = "arrow")]
pub use adapter::to_record_batch;

#[cfg(feature = "arrow")]
mod adapter {
    use crate::error::{Result, ToolboxError};
    use crate::resolve::ColumnMap;
    use arrow::array::{ArrayRef, Float64Array};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use std::sync::Arc;

    /// Build a record batch with one `Float64` column per mapping entry.
    ///
    /// Every column must be one-dimensional and all must share one length.
    pub fn to_record_batch(columns: &ColumnMap) -> Result<RecordBatch> {
        let mut fields = Vec::with_capacity(columns.len());
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(columns.len());
        let mut rows: Option<usize> = None;

        for column in columns {
            if column.data.ndim() != 1 {
                return Err(ToolboxError::Tabular(format!(
                    "column \"{}\" has {} dimensions, expected 1",
                    column.name,
                    column.data.ndim()
                )));
            }
            match rows {
                Some(n) if n != column.len() => {
                    return Err(ToolboxError::Tabular(format!(
                        "column \"{}\" has {} rows, expected {}",
                        column.name,
                        column.len(),
                        n
                    )));
                }
                _ => rows = Some(column.len()),
            }
            fields.push(Field::new(column.name.as_str(), DataType::Float64, false));
            arrays.push(Arc::new(Float64Array::from_iter_values(
                column.data.iter().copied(),
            )));
        }

        let schema = Arc::new(Schema::new(fields));
        if arrays.is_empty() {
            return Ok(RecordBatch::new_empty(schema));
        }
        Ok(RecordBatch::try_new(schema, arrays)?)
    }

}
