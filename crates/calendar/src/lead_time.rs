//! Lead-time steps: final steps of the accumulation periods to verify.

use crate::error::CalendarError;

/// Evenly spaced final steps (hours after the base time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadTimes {
    first: u32,
    last: u32,
    step: u32,
}

impl LeadTimes {
    /// Creates the range `first, first + step, ...` up to and including
    /// `last` when it falls on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidLeadTimes`] if `step` is zero or
    /// `first > last`.
    pub fn new(first: u32, last: u32, step: u32) -> Result<Self, CalendarError> {
        if step == 0 || first > last {
            return Err(CalendarError::InvalidLeadTimes { first, last, step });
        }
        Ok(Self { first, last, step })
    }

    /// Discretisation step in hours.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Number of lead times.
    pub fn len(&self) -> usize {
        ((self.last - self.first) / self.step) as usize + 1
    }

    /// Always false: a valid range holds at least `first`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All final steps in ascending order.
    pub fn steps(&self) -> Vec<u32> {
        (self.first..=self.last).step_by(self.step as usize).collect()
    }
}
