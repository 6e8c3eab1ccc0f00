//! Low-level Parquet column building.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;

/// Name of the single column of a flat array file.
pub(crate) const VALUE_COLUMN: &str = "value";
/// Ensemble member count column of a daily counts file.
pub(crate) const COUNT_EM_COLUMN: &str = "count_em";
/// Observation count column of a daily counts file.
pub(crate) const COUNT_OBS_COLUMN: &str = "count_obs";
/// Lead-time column of a bootstrap table.
pub(crate) const STEP_COLUMN: &str = "step";
/// Score of the full sample in a bootstrap table.
pub(crate) const REAL_COLUMN: &str = "real";

/// A named column to be written.
pub(crate) enum Column<'a> {
    Float64(&'a str, Vec<f64>),
    UInt32(&'a str, Vec<u32>),
}

impl Column<'_> {
    fn field(&self) -> Field {
        match self {
            Column::Float64(name, _) => Field::new(*name, DataType::Float64, false),
            Column::UInt32(name, _) => Field::new(*name, DataType::UInt32, false),
        }
    }

    fn into_array(self) -> ArrayRef {
        match self {
            Column::Float64(_, values) => Arc::new(Float64Array::from(values)),
            Column::UInt32(_, values) => Arc::new(UInt32Array::from(values)),
        }
    }
}

/// Builds a schema and a single record batch from equal-length columns.
pub(crate) fn columns_to_record_batch(
    columns: Vec<Column<'_>>,
) -> Result<(Schema, RecordBatch), IoError> {
    let schema = Schema::new(columns.iter().map(Column::field).collect::<Vec<_>>());
    let arrays: Vec<ArrayRef> = columns.into_iter().map(Column::into_array).collect();
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), arrays).map_err(|e| {
        IoError::Parquet {
            reason: e.to_string(),
        }
    })?;
    Ok((schema, batch))
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`,
/// creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the directory or file cannot be created, or
/// [`IoError::Parquet`] if batch writing or file finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IoError::Io {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    let file = std::fs::File::create(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}
