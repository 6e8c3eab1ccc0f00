//! # hyetos-roc
//!
//! Relative operating characteristic (ROC) analysis of ensemble forecasts
//! of rainfall threshold exceedance.
//!
//! # Pipeline
//!
//! 1. **Sweep** every decision threshold (members required for a "yes")
//!    and count hits, false alarms, misses and correct negatives
//! 2. **Anchor** the resulting hit-rate / false-alarm-rate curve at (0,0)
//!    and (1,1)
//! 3. **Fit** the binormal model: a line in probit space, sampled back into
//!    probability space as a smooth curve, with R² as goodness of fit
//!
//! # Glossary
//!
//! - **HR**: hit rate, hits / (hits + misses)
//! - **FAR**: false alarm rate, false alarms / (false alarms + correct negatives)
//! - **probit**: inverse of the standard normal CDF
//!
//! # Quick Start
//!
//! ```no_run
//! use hyetos_roc::{compute_empirical_roc, fit_binormal};
//!
//! // Members (out of 5) exceeding the threshold, and whether it was observed.
//! let members = vec![5, 4, 1, 0, 3, 2];
//! let observed = vec![true, true, false, false, true, false];
//!
//! let roc = compute_empirical_roc(&members, &observed, 5)?;
//! let fit = fit_binormal(roc.hit_rate(), roc.false_alarm_rate())?;
//! println!("R² = {:.3}, area = {:.3}", fit.r2(), fit.area());
//! # Ok::<(), hyetos_roc::RocError>(())
//! ```

mod binormal;
mod config;
mod contingency;
mod empirical;
mod error;

pub use binormal::{BinormalFit, fit_binormal, fit_binormal_with};
pub use config::BinormalConfig;
pub use contingency::{ContingencyCounts, ContingencyTable, contingency_sweep};
pub use empirical::{EmpiricalRoc, compute_empirical_roc};
pub use error::RocError;
