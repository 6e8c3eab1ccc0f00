//! Flat numeric arrays: one `Float64` column named `value`.

use std::path::Path;

use crate::error::IoError;
use crate::parquet_read::{f64_column, read_batches};
use crate::parquet_write::{Column, VALUE_COLUMN, columns_to_record_batch, write_batches};
use crate::writer::WriterConfig;

/// Writes `values` as a flat array file. NaN and infinities are stored as-is.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for an invalid `config`, or an
/// [`IoError::Io`] / [`IoError::Parquet`] error if writing fails.
pub fn write_array(path: &Path, values: &[f64], config: &WriterConfig) -> Result<(), IoError> {
    let props = config.properties()?;
    let (schema, batch) =
        columns_to_record_batch(vec![Column::Float64(VALUE_COLUMN, values.to_vec())])?;
    write_batches(path, &[batch], &schema, props)
}

/// Writes a single value as a one-element flat array file.
///
/// # Errors
///
/// See [`write_array`].
pub fn write_scalar(path: &Path, value: f64, config: &WriterConfig) -> Result<(), IoError> {
    write_array(path, &[value], config)
}

/// Reads a flat array file written by [`write_array`].
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, or
/// [`IoError::Schema`] if the file has no non-null `Float64` column `value`.
pub fn read_array(path: &Path) -> Result<Vec<f64>, IoError> {
    let batches = read_batches(path)?;
    f64_column(&batches, VALUE_COLUMN, path)
}
