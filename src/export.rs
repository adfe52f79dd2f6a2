//! CSV export of extracted columns.

use crate::error::{Result, ToolboxError};
use crate::resolve::ColumnMap;
use std::io::Write;
use std::path::Path;

/// Write `columns` as CSV, one column per mapping entry.
///
/// Shorter columns are padded with empty cells. Columns with more than one
/// dimension cannot be written.
pub fn write_csv<W: Write>(columns: &ColumnMap, writer: W) -> Result<()> {
    if let Some(column) = columns.iter().find(|c| c.data.ndim() > 1) {
        return Err(ToolboxError::Tabular(format!(
            "column \"{}\" has {} dimensions and cannot be written as CSV",
            column.name,
            column.data.ndim()
        )));
    }

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(columns.names())?;

    let rows = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    let values: Vec<Vec<f64>> = columns.iter().map(|c| c.data.iter().copied().collect()).collect();
    for row in 0..rows {
        let record = values
            .iter()
            .map(|v| v.get(row).map(|x| x.to_string()).unwrap_or_default());
        csv.write_record(record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write `columns` to a CSV file at `path`.
pub fn write_csv_file(columns: &ColumnMap, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| ToolboxError::file_open(path.to_path_buf(), e))?;
    write_csv(columns, std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn ragged_columns_are_padded() {
        let mut columns = ColumnMap::new();
        columns.insert("time", arr1(&[0.0, 1.0]).into_dyn());
        columns.insert("value", arr1(&[2.5]).into_dyn());

        let mut out = Vec::new();
        write_csv(&columns, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "time,value\n0,2.5\n1,\n");
    }

    #[test]
    fn images_are_rejected() {
        let mut columns = ColumnMap::new();
        columns.insert("image", arr2(&[[0.0, 1.0], [2.0, 3.0]]).into_dyn());
        let err = write_csv(&columns, Vec::new()).unwrap_err();
        assert!(matches!(err, ToolboxError::Tabular(_)));
    }
}
