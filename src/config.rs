use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<HyetosConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Top-level hyetos configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HyetosConfig {
    /// Verification period.
    pub period: PeriodToml,

    /// Lead times to verify.
    #[serde(default)]
    pub lead_times: LeadTimesToml,

    /// Accumulation period and rainfall thresholds.
    pub verification: VerificationToml,

    /// Forecasting systems and their ensemble sizes.
    pub systems: Vec<SystemToml>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Binormal curve sampling.
    #[serde(default)]
    pub binormal: BinormalToml,

    /// Bootstrap confidence band settings.
    #[serde(default)]
    pub confidence: ConfidenceToml,
}

/// Dates as `YYYY-MM-DD`; every day of `[start, end]` is a forecast run.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub base_hour: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeadTimesToml {
    #[serde(default = "default_first_step")]
    pub first: u32,
    #[serde(default = "default_last_step")]
    pub last: u32,
    #[serde(default = "default_step")]
    pub step: u32,
}

impl Default for LeadTimesToml {
    fn default() -> Self {
        Self {
            first: default_first_step(),
            last: default_last_step(),
            step: default_step(),
        }
    }
}

fn default_first_step() -> u32 {
    12
}
fn default_last_step() -> u32 {
    246
}
fn default_step() -> u32 {
    6
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerificationToml {
    #[serde(default = "default_accumulation")]
    pub accumulation: u32,
    /// Verifying rainfall events, in mm per accumulation period.
    pub thresholds: Vec<f64>,
}

fn default_accumulation() -> u32 {
    12
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemToml {
    pub name: String,
    pub members: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data/counts")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("data/roc")
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinormalToml {
    #[serde(default = "default_z_min")]
    pub z_min: f64,
    #[serde(default = "default_z_max")]
    pub z_max: f64,
    #[serde(default = "default_z_step")]
    pub z_step: f64,
}

impl Default for BinormalToml {
    fn default() -> Self {
        Self {
            z_min: default_z_min(),
            z_max: default_z_max(),
            z_step: default_z_step(),
        }
    }
}

fn default_z_min() -> f64 {
    -10.0
}
fn default_z_max() -> f64 {
    10.0
}
fn default_z_step() -> f64 {
    0.1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfidenceToml {
    /// Confidence level in percent.
    #[serde(default = "default_level")]
    pub level: f64,
    /// Thresholds of the bootstrap tables; falls back to
    /// `[verification].thresholds` when absent.
    #[serde(default)]
    pub thresholds: Option<Vec<f64>>,
    #[serde(default = "default_bootstrap_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "default_band_dir")]
    pub output_dir: PathBuf,
}

impl Default for ConfidenceToml {
    fn default() -> Self {
        Self {
            level: default_level(),
            thresholds: None,
            input_dir: default_bootstrap_dir(),
            output_dir: default_band_dir(),
        }
    }
}

fn default_level() -> f64 {
    99.0
}
fn default_bootstrap_dir() -> PathBuf {
    PathBuf::from("data/bootstrap")
}
fn default_band_dir() -> PathBuf {
    PathBuf::from("data/bsrel_ci")
}
