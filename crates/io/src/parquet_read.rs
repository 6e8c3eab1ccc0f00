//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::datatypes::{Float64Type, UInt32Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> =
        reader
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| IoError::Parquet {
                reason: e.to_string(),
            })?;

    Ok(batches)
}

/// Extracts the non-null `Float64` column `name` of every batch, in order.
pub(crate) fn f64_column(
    batches: &[RecordBatch],
    name: &str,
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    let mut out = Vec::new();
    for batch in batches {
        let column = batch
            .column_by_name(name)
            .ok_or_else(|| missing_column(name, path))?;
        if column.null_count() > 0 {
            return Err(null_values(name, path));
        }
        let values = column
            .as_primitive_opt::<Float64Type>()
            .ok_or_else(|| wrong_type(name, "Float64", column.data_type(), path))?;
        out.extend_from_slice(values.values());
    }
    Ok(out)
}

/// Extracts a `Float64` column, mapping nulls to NaN.
pub(crate) fn f64_column_lossy(
    batches: &[RecordBatch],
    name: &str,
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    let mut out = Vec::new();
    for batch in batches {
        let column = batch
            .column_by_name(name)
            .ok_or_else(|| missing_column(name, path))?;
        let values = column
            .as_primitive_opt::<Float64Type>()
            .ok_or_else(|| wrong_type(name, "Float64", column.data_type(), path))?;
        out.extend(values.iter().map(|v| v.unwrap_or(f64::NAN)));
    }
    Ok(out)
}

/// Extracts the non-null `UInt32` column `name` of every batch, in order.
pub(crate) fn u32_column(
    batches: &[RecordBatch],
    name: &str,
    path: &Path,
) -> Result<Vec<u32>, IoError> {
    let mut out = Vec::new();
    for batch in batches {
        let column = batch
            .column_by_name(name)
            .ok_or_else(|| missing_column(name, path))?;
        if column.null_count() > 0 {
            return Err(null_values(name, path));
        }
        let values = column
            .as_primitive_opt::<UInt32Type>()
            .ok_or_else(|| wrong_type(name, "UInt32", column.data_type(), path))?;
        out.extend_from_slice(values.values());
    }
    Ok(out)
}

fn missing_column(name: &str, path: &Path) -> IoError {
    IoError::Schema {
        path: path.to_path_buf(),
        details: format!("missing column '{name}'"),
    }
}

fn null_values(name: &str, path: &Path) -> IoError {
    IoError::Schema {
        path: path.to_path_buf(),
        details: format!("column '{name}' contains null values"),
    }
}

fn wrong_type(
    name: &str,
    expected: &str,
    found: &arrow::datatypes::DataType,
    path: &Path,
) -> IoError {
    IoError::Schema {
        path: path.to_path_buf(),
        details: format!("column '{name}': expected {expected}, got {found}"),
    }
}
