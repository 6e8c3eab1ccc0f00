//! Confidence band command: percentile bands of bootstrapped Brier score
//! reliability per lead time.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use hyetos_confidence::{ConfidenceLevel, confidence_band};
use hyetos_io::{Layout, read_bootstrap_table};

use crate::cli::BsrelCiArgs;
use crate::config::{self, HyetosConfig};
use crate::convert;

/// Run the confidence band batch.
pub fn run(args: BsrelCiArgs) -> Result<()> {
    let _cmd = info_span!("bsrel_ci").entered();
    let config = config::load(&args.config)?;

    let thresholds = confidence_thresholds(&config);
    convert::validate_targets(&config.systems, thresholds)?;
    let layout = convert::build_confidence_layout(&config);
    let level = convert::build_confidence_level(&config.confidence)?;

    let mut n_failed = 0;
    let mut n_done = 0;
    for system in &config.systems {
        for &threshold in thresholds {
            match write_band(&layout, &system.name, threshold, level) {
                Ok(()) => n_done += 1,
                Err(e) => {
                    warn!(
                        system = %system.name,
                        threshold,
                        error = %format!("{e:#}"),
                        "confidence band failed"
                    );
                    n_failed += 1;
                }
            }
        }
    }

    info!(n_done, n_failed, "confidence bands complete");
    if n_failed > 0 {
        bail!("{n_failed} of {} confidence bands failed", n_done + n_failed);
    }
    Ok(())
}

/// Thresholds of the bootstrap tables.
fn confidence_thresholds(config: &HyetosConfig) -> &[f64] {
    config
        .confidence
        .thresholds
        .as_deref()
        .unwrap_or(&config.verification.thresholds)
}

/// Reads one bootstrap table and writes its confidence band as JSON.
pub fn write_band(
    layout: &Layout,
    system: &str,
    threshold: f64,
    level: ConfidenceLevel,
) -> Result<()> {
    let input = layout.bootstrap_table_path(system, threshold);
    let table = read_bootstrap_table(&input)
        .with_context(|| format!("failed to read bootstrap table: {}", input.display()))?;

    let band = confidence_band(table.steps(), table.real(), table.bootstrap(), level)
        .context("failed to compute confidence band")?;
    let json = band.to_json()?;

    let output = layout.confidence_band_path(system, threshold);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write confidence band: {}", output.display()))?;
    info!(
        path = %output.display(),
        n_steps = band.steps().len(),
        discretisation = band.discretisation(),
        "confidence band written"
    );
    Ok(())
}
