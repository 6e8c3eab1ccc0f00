//! ROC command: empirical and binormal ROC curves for every verification
//! unit (system x threshold x lead time).

use std::path::Path;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use hyetos_calendar::{LeadTimes, VerificationPeriod};
use hyetos_io::{ArrayKind, Layout, WriterConfig, read_period, write_array, write_scalar};
use hyetos_roc::{BinormalConfig, compute_empirical_roc, fit_binormal_with};

use crate::cli::RocArgs;
use crate::config::{self, HyetosConfig};
use crate::convert;

/// Settings shared by every unit of a batch.
pub struct RocContext {
    pub layout: Layout,
    pub period: VerificationPeriod,
    pub binormal: BinormalConfig,
    pub writer: WriterConfig,
}

/// One forecasting system, rainfall threshold and lead time.
#[derive(Debug, Clone)]
pub struct Unit {
    pub system: String,
    pub members: u32,
    pub threshold: f64,
    pub step: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Ok,
    Failed,
}

/// Outcome of one unit, as listed in the run summary.
#[derive(Debug, Clone, Serialize)]
pub struct UnitReport {
    pub system: String,
    pub threshold: f64,
    pub step: u32,
    pub status: UnitStatus,
    pub error: Option<String>,
    pub sample_size: usize,
    pub positives: usize,
    pub negatives: usize,
    pub days_read: usize,
    pub days_missing: usize,
    pub rows_dropped: usize,
    pub empirical_area: Option<f64>,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub r2: Option<f64>,
    pub binormal_area: Option<f64>,
}

impl UnitReport {
    fn new(unit: &Unit) -> Self {
        Self {
            system: unit.system.clone(),
            threshold: unit.threshold,
            step: unit.step,
            status: UnitStatus::Ok,
            error: None,
            sample_size: 0,
            positives: 0,
            negatives: 0,
            days_read: 0,
            days_missing: 0,
            rows_dropped: 0,
            empirical_area: None,
            slope: None,
            intercept: None,
            r2: None,
            binormal_area: None,
        }
    }
}

/// Summary of a whole batch, written next to the outputs.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub accumulation: u32,
    pub period_start: String,
    pub period_end: String,
    pub n_units: usize,
    pub n_failed: usize,
    pub units: Vec<UnitReport>,
}

/// Run the ROC batch.
pub fn run(args: RocArgs) -> Result<()> {
    let _cmd = info_span!("roc").entered();
    let config = config::load(&args.config)?;

    let ctx = build_context(&config)?;
    let lead_times = convert::build_lead_times(&config.lead_times)?;
    let units = build_units(&config, &lead_times);
    info!(
        n_units = units.len(),
        n_days = ctx.period.n_days(),
        "verification units planned"
    );

    for system in &config.systems {
        for &threshold in &config.verification.thresholds {
            let dir = ctx.layout.unit_dir(&system.name, threshold);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create directory: {}", dir.display()))?;
        }
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = args.jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build().context("failed to build worker pool")?;
    let reports = pool.install(|| run_units(&units, &ctx));

    let summary = RunSummary {
        accumulation: config.verification.accumulation,
        period_start: ctx.period.start().to_string(),
        period_end: ctx.period.end().to_string(),
        n_units: reports.len(),
        n_failed: reports
            .iter()
            .filter(|r| r.status == UnitStatus::Failed)
            .count(),
        units: reports,
    };
    let summary_path = ctx.layout.summary_path();
    write_summary(&summary_path, &summary)?;
    info!(
        path = %summary_path.display(),
        n_units = summary.n_units,
        n_failed = summary.n_failed,
        "run summary written"
    );

    if summary.n_failed > 0 {
        bail!(
            "{} of {} verification units failed (see {})",
            summary.n_failed,
            summary.n_units,
            summary_path.display()
        );
    }
    Ok(())
}

/// Builds the shared batch settings from the configuration.
pub fn build_context(config: &HyetosConfig) -> Result<RocContext> {
    convert::validate_targets(&config.systems, &config.verification.thresholds)?;
    Ok(RocContext {
        layout: convert::build_roc_layout(config),
        period: convert::build_period(&config.period)?,
        binormal: convert::build_binormal_config(&config.binormal)?,
        writer: convert::build_writer_config(&config.io)?,
    })
}

/// Enumerates every (system, threshold, lead time) unit in output order.
pub fn build_units(config: &HyetosConfig, lead_times: &LeadTimes) -> Vec<Unit> {
    let mut units = Vec::new();
    for system in &config.systems {
        for &threshold in &config.verification.thresholds {
            for step in lead_times.steps() {
                units.push(Unit {
                    system: system.name.clone(),
                    members: system.members,
                    threshold,
                    step,
                });
            }
        }
    }
    units
}

/// Processes units on the current rayon pool; reports keep the unit order.
pub fn run_units(units: &[Unit], ctx: &RocContext) -> Vec<UnitReport> {
    units.par_iter().map(|unit| run_unit(unit, ctx)).collect()
}

/// Processes one unit. Failures are recorded in the report, never
/// propagated.
pub fn run_unit(unit: &Unit, ctx: &RocContext) -> UnitReport {
    let _span = info_span!(
        "unit",
        system = %unit.system,
        threshold = unit.threshold,
        step = unit.step
    )
    .entered();

    let mut report = UnitReport::new(unit);
    match process_unit(unit, ctx, &mut report) {
        Ok(()) => {
            debug!(r2 = ?report.r2, "unit complete");
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "unit failed");
            report.status = UnitStatus::Failed;
            report.error = Some(format!("{e:#}"));
        }
    }
    report
}

fn process_unit(unit: &Unit, ctx: &RocContext, report: &mut UnitReport) -> Result<()> {
    let layout = &ctx.layout;
    let paths = ctx
        .period
        .run_times()
        .map(|run| layout.counts_path(&unit.system, unit.threshold, run, unit.step));
    let sample = read_period(paths).context("failed to read daily counts")?;

    report.days_read = sample.n_days_read();
    report.days_missing = sample.n_days_missing();
    report.rows_dropped = sample.n_dropped();
    report.sample_size = sample.len();
    if sample.n_days_missing() > 0 {
        debug!(
            days_missing = sample.n_days_missing(),
            "daily counts missing for some days"
        );
    }
    if sample.is_empty() {
        bail!(
            "no verification data ({} of {} daily files missing)",
            sample.n_days_missing(),
            ctx.period.n_days()
        );
    }

    let roc = compute_empirical_roc(sample.member_counts(), sample.observed(), unit.members)
        .context("contingency sweep failed")?;
    report.positives = roc.table().positives();
    report.negatives = roc.table().negatives();
    report.empirical_area = Some(roc.area());

    let path_of =
        |kind: ArrayKind| layout.array_path(kind, &unit.system, unit.threshold, unit.step);
    let write = |kind: ArrayKind, values: &[f64]| -> Result<()> {
        let path = path_of(kind);
        write_array(&path, values, &ctx.writer)
            .with_context(|| format!("failed to write {kind}: {}", path.display()))
    };

    write(ArrayKind::HitRate, roc.hit_rate())?;
    write(ArrayKind::FalseAlarmRate, roc.false_alarm_rate())?;

    let fit = fit_binormal_with(roc.hit_rate(), roc.false_alarm_rate(), &ctx.binormal)
        .context("binormal fit failed")?;
    report.slope = Some(fit.slope());
    report.intercept = Some(fit.intercept());
    report.r2 = Some(fit.r2());
    report.binormal_area = Some(fit.area());

    write(ArrayKind::BinormalHitRate, fit.hit_rate())?;
    write(ArrayKind::BinormalFalseAlarmRate, fit.false_alarm_rate())?;
    write(ArrayKind::ZHitRate, fit.z_hit_rate())?;
    write(ArrayKind::ZFalseAlarmRate, fit.z_false_alarm_rate())?;
    write(ArrayKind::RegressionX, fit.predicted_x())?;
    write(ArrayKind::RegressionY, fit.predicted_y())?;

    let r2_path = path_of(ArrayKind::R2);
    write_scalar(&r2_path, fit.r2(), &ctx.writer)
        .with_context(|| format!("failed to write r2: {}", r2_path.display()))?;

    Ok(())
}

fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(summary).context("failed to serialize run summary")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write run summary: {}", path.display()))
}
