//! Bootstrap score tables: one row per lead time with the score of the
//! full sample and of every bootstrap resample.

use std::path::Path;

use arrow::datatypes::DataType;

use crate::error::IoError;
use crate::parquet_read::{f64_column, f64_column_lossy, read_batches, u32_column};
use crate::parquet_write::{
    Column, REAL_COLUMN, STEP_COLUMN, columns_to_record_batch, write_batches,
};
use crate::writer::WriterConfig;

/// Scores per lead time: the value on the full sample plus its bootstrap
/// replicates. Bootstrap values may be NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapTable {
    steps: Vec<u32>,
    real: Vec<f64>,
    bootstrap: Vec<Vec<f64>>,
}

impl BootstrapTable {
    /// Builds a table; `bootstrap[i]` holds the replicates of `steps[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every inconsistency: lengths
    /// that differ, an empty table, or rows with differing replicate counts
    /// or none at all.
    pub fn new(steps: Vec<u32>, real: Vec<f64>, bootstrap: Vec<Vec<f64>>) -> Result<Self, IoError> {
        let mut problems = Vec::new();
        if steps.is_empty() {
            problems.push("table has no rows".to_string());
        }
        if real.len() != steps.len() {
            problems.push(format!(
                "{} steps but {} real values",
                steps.len(),
                real.len()
            ));
        }
        if bootstrap.len() != steps.len() {
            problems.push(format!(
                "{} steps but {} bootstrap rows",
                steps.len(),
                bootstrap.len()
            ));
        }
        if let Some(first) = bootstrap.first() {
            if first.is_empty() {
                problems.push("no bootstrap replicates".to_string());
            }
            if let Some(i) = bootstrap.iter().position(|row| row.len() != first.len()) {
                problems.push(format!(
                    "bootstrap row {i} has {} replicates, expected {}",
                    bootstrap[i].len(),
                    first.len()
                ));
            }
        }

        if !problems.is_empty() {
            return Err(IoError::Validation {
                count: problems.len(),
                details: problems.join("; "),
            });
        }
        Ok(Self {
            steps,
            real,
            bootstrap,
        })
    }

    /// Lead times, in hours.
    pub fn steps(&self) -> &[u32] {
        &self.steps
    }

    /// Score of the full sample per lead time.
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Bootstrap replicates, one row per lead time.
    pub fn bootstrap(&self) -> &[Vec<f64>] {
        &self.bootstrap
    }

    /// Number of lead times.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of replicates per lead time.
    pub fn n_replicates(&self) -> usize {
        self.bootstrap.first().map_or(0, Vec::len)
    }
}

/// Reads a bootstrap table.
///
/// Columns: `step` (`UInt32`), `real` (`Float64`), then one or more
/// `Float64` replicate columns in file order. Nulls in replicate columns are
/// read as NaN.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`], [`IoError::Schema`] for a malformed
/// layout, or [`IoError::Validation`] if the table is empty.
pub fn read_bootstrap_table(path: &Path) -> Result<BootstrapTable, IoError> {
    let batches = read_batches(path)?;
    let Some(first) = batches.first() else {
        return Err(IoError::Validation {
            count: 1,
            details: format!("{} contains no rows", path.display()),
        });
    };

    let replicate_names: Vec<String> = first
        .schema()
        .fields()
        .iter()
        .filter(|f| f.name() != STEP_COLUMN && f.name() != REAL_COLUMN)
        .map(|f| {
            if f.data_type() == &DataType::Float64 {
                Ok(f.name().clone())
            } else {
                Err(IoError::Schema {
                    path: path.to_path_buf(),
                    details: format!(
                        "column '{}': expected Float64, got {}",
                        f.name(),
                        f.data_type()
                    ),
                })
            }
        })
        .collect::<Result<_, _>>()?;
    if replicate_names.is_empty() {
        return Err(IoError::Schema {
            path: path.to_path_buf(),
            details: "no bootstrap replicate columns".to_string(),
        });
    }

    let steps = u32_column(&batches, STEP_COLUMN, path)?;
    let real = f64_column(&batches, REAL_COLUMN, path)?;
    let columns: Vec<Vec<f64>> = replicate_names
        .iter()
        .map(|name| f64_column_lossy(&batches, name, path))
        .collect::<Result<_, _>>()?;

    let bootstrap = (0..steps.len())
        .map(|row| columns.iter().map(|col| col[row]).collect())
        .collect();
    BootstrapTable::new(steps, real, bootstrap)
}

/// Writes a bootstrap table; replicate columns are named `bs_000`, `bs_001`, ...
///
/// # Errors
///
/// Returns [`IoError::Validation`] for an invalid `config`, or an I/O or
/// Parquet error if writing fails.
pub fn write_bootstrap_table(
    path: &Path,
    table: &BootstrapTable,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let props = config.properties()?;
    let names: Vec<String> = (0..table.n_replicates())
        .map(|i| format!("bs_{i:03}"))
        .collect();

    let mut columns = vec![
        Column::UInt32(STEP_COLUMN, table.steps.clone()),
        Column::Float64(REAL_COLUMN, table.real.clone()),
    ];
    for (i, name) in names.iter().enumerate() {
        let values = table.bootstrap.iter().map(|row| row[i]).collect();
        columns.push(Column::Float64(name, values));
    }

    let (schema, batch) = columns_to_record_batch(columns)?;
    write_batches(path, &[batch], &schema, props)
}
