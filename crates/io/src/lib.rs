//! # hyetos-io
//!
//! Parquet storage for the verification archive: daily paired counts in,
//! flat ROC arrays out, plus bootstrap score tables and the path layout that
//! ties files to a system, threshold and lead time.

mod array;
mod bootstrap;
mod counts;
mod error;
mod layout;
mod parquet_read;
mod parquet_write;
mod writer;

pub use array::{read_array, write_array, write_scalar};
pub use bootstrap::{BootstrapTable, read_bootstrap_table, write_bootstrap_table};
pub use counts::{DailyCounts, PeriodSample, read_daily_counts, read_period, write_daily_counts};
pub use error::IoError;
pub use layout::{ArrayKind, Layout};
pub use writer::{Compression, WriterConfig};
