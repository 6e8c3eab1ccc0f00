//! Pure conversion functions: TOML config structs -> crate API config types.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::config::*;

use hyetos_calendar::{LeadTimes, VerificationPeriod};
use hyetos_confidence::ConfidenceLevel;
use hyetos_io::{Compression, Layout, WriterConfig};
use hyetos_roc::BinormalConfig;

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

/// Builds a [`VerificationPeriod`] from the TOML period configuration.
pub fn build_period(period: &PeriodToml) -> Result<VerificationPeriod> {
    let start = parse_date(&period.start)?;
    let end = parse_date(&period.end)?;
    Ok(VerificationPeriod::new(start, end, period.base_hour)?)
}

/// Builds [`LeadTimes`] from the TOML lead-time configuration.
pub fn build_lead_times(lead_times: &LeadTimesToml) -> Result<LeadTimes> {
    Ok(LeadTimes::new(
        lead_times.first,
        lead_times.last,
        lead_times.step,
    )?)
}

/// Checks the system list and threshold list of a batch.
pub fn validate_targets(systems: &[SystemToml], thresholds: &[f64]) -> Result<()> {
    if systems.is_empty() {
        bail!("no forecasting systems configured");
    }
    if thresholds.is_empty() {
        bail!("no rainfall thresholds configured");
    }
    if let Some(t) = thresholds.iter().find(|t| !t.is_finite() || **t < 0.0) {
        bail!("rainfall thresholds must be finite and non-negative, got {t}");
    }
    if let Some(s) = systems.iter().find(|s| s.name.is_empty()) {
        bail!("system with {} members has an empty name", s.members);
    }

    // Units of a batch run in parallel and must not share output files.
    let mut names = HashSet::new();
    if let Some(s) = systems.iter().find(|s| !names.insert(s.name.as_str())) {
        bail!("forecasting system {:?} is configured more than once", s.name);
    }
    let mut rendered = HashSet::new();
    if let Some(t) = thresholds.iter().find(|t| !rendered.insert(t.to_string())) {
        bail!("rainfall threshold {t} is configured more than once");
    }
    Ok(())
}

/// Builds a [`BinormalConfig`] from the TOML binormal configuration.
pub fn build_binormal_config(binormal: &BinormalToml) -> Result<BinormalConfig> {
    let cfg = BinormalConfig::default()
        .with_z_range(binormal.z_min, binormal.z_max)
        .with_z_step(binormal.z_step);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoConfig) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    let cfg = WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds the archive [`Layout`] of the ROC batch.
pub fn build_roc_layout(config: &HyetosConfig) -> Layout {
    Layout::new(
        &config.io.input_dir,
        &config.io.output_dir,
        config.verification.accumulation,
    )
}

/// Builds the archive [`Layout`] of the confidence band batch.
pub fn build_confidence_layout(config: &HyetosConfig) -> Layout {
    Layout::new(
        &config.confidence.input_dir,
        &config.confidence.output_dir,
        config.verification.accumulation,
    )
}

/// Builds a [`ConfidenceLevel`] from the TOML confidence configuration.
pub fn build_confidence_level(confidence: &ConfidenceToml) -> Result<ConfidenceLevel> {
    Ok(ConfidenceLevel::new(confidence.level)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_names() {
        assert_eq!(parse_compression("ZSTD").unwrap(), Compression::Zstd);
        assert_eq!(parse_compression("none").unwrap(), Compression::None);
        assert!(parse_compression("gzip").is_err());
    }

    #[test]
    fn period_from_toml() {
        let period = build_period(&PeriodToml {
            start: "2021-12-01".to_string(),
            end: "2022-11-30".to_string(),
            base_hour: 0,
        })
        .unwrap();
        assert_eq!(period.n_days(), 365);
    }

    #[test]
    fn period_rejects_bad_dates() {
        let bad_format = PeriodToml {
            start: "01/12/2021".to_string(),
            end: "2022-11-30".to_string(),
            base_hour: 0,
        };
        assert!(build_period(&bad_format).is_err());

        let inverted = PeriodToml {
            start: "2022-11-30".to_string(),
            end: "2021-12-01".to_string(),
            base_hour: 0,
        };
        assert!(build_period(&inverted).is_err());
    }

    #[test]
    fn default_lead_times() {
        let steps = build_lead_times(&LeadTimesToml::default()).unwrap();
        assert_eq!(steps.len(), 40);
    }

    #[test]
    fn default_binormal_grid() {
        let cfg = build_binormal_config(&BinormalToml::default()).unwrap();
        assert_eq!(cfg.grid().len(), 200);
    }

    #[test]
    fn invalid_binormal_grid() {
        let toml = BinormalToml {
            z_min: 1.0,
            z_max: -1.0,
            z_step: 0.1,
        };
        assert!(build_binormal_config(&toml).is_err());
    }

    #[test]
    fn writer_config_rejects_zero_row_groups() {
        let io = IoConfig {
            row_group_size: 0,
            ..IoConfig::default()
        };
        assert!(build_writer_config(&io).is_err());
    }

    #[test]
    fn targets_validation() {
        let systems = vec![SystemToml {
            name: "ENS".to_string(),
            members: 51,
        }];
        assert!(validate_targets(&systems, &[0.2, 10.0]).is_ok());
        assert!(validate_targets(&[], &[10.0]).is_err());
        assert!(validate_targets(&systems, &[]).is_err());
        assert!(validate_targets(&systems, &[-1.0]).is_err());
    }

    #[test]
    fn duplicate_targets_rejected() {
        let ens = |members| SystemToml {
            name: "ENS".to_string(),
            members,
        };
        let err = validate_targets(&[ens(51), ens(99)], &[10.0]).unwrap_err();
        assert!(err.to_string().contains("\"ENS\" is configured more than once"));

        // 10 and 10.0 share the directory and file names "10".
        let err = validate_targets(&[ens(51)], &[10.0, 0.2, 10.0]).unwrap_err();
        assert!(err.to_string().contains("threshold 10 is configured more than once"));

        let distinct = [
            ens(51),
            SystemToml {
                name: "ecPoint".to_string(),
                members: 99,
            },
        ];
        assert!(validate_targets(&distinct, &[0.2, 10.0]).is_ok());
    }

    #[test]
    fn confidence_level_bounds() {
        assert!(build_confidence_level(&ConfidenceToml::default()).is_ok());
        let bad = ConfidenceToml {
            level: 100.0,
            ..ConfidenceToml::default()
        };
        assert!(build_confidence_level(&bad).is_err());
    }
}
