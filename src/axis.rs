//! Calendar axis builder
//!
//! Produces the shared, immutable sequence of sample dates every entity is
//! evaluated against. Built once per run; the axis is a pure function of
//! (start, end, interval) and involves no randomness.

use crate::{Error, Result};
use chrono::{Duration, NaiveDate};

/// Ordered, strictly increasing sequence of sample dates with fixed spacing.
///
/// Invariants (enforced by [`SampleAxis::build`]):
/// - non-empty, first date == `start`, last date ≤ `end`
/// - every consecutive pair differs by exactly `interval_days`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleAxis {
    dates: Vec<NaiveDate>,
    interval_days: i64,
}

impl SampleAxis {
    /// Build the axis spanning `start..=end` sampled every `interval_days`.
    ///
    /// The end bound is inclusive: the last emitted date is the largest
    /// `start + k * interval` that does not exceed `end`. Length is
    /// `floor((end - start) / interval) + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start > end` or
    /// `interval_days <= 0`.
    pub fn build(start: NaiveDate, end: NaiveDate, interval_days: i64) -> Result<Self> {
        if interval_days <= 0 {
            return Err(Error::InvalidRange(format!(
                "interval of {interval_days} days must be positive"
            )));
        }
        if start > end {
            return Err(Error::InvalidRange(format!(
                "start {start} is after end {end}"
            )));
        }

        let step = Duration::days(interval_days);
        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            dates.push(current);
            current += step;
        }

        Ok(Self {
            dates,
            interval_days,
        })
    }

    /// All sample dates, in order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of samples. Never zero for a successfully built axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false` for a successfully built axis; present for the
    /// conventional `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First sample date.
    #[must_use]
    pub fn first(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Last sample date.
    #[must_use]
    pub fn last(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    /// Spacing between consecutive samples, in days.
    #[must_use]
    pub const fn interval_days(&self) -> i64 {
        self.interval_days
    }

    /// Iterate over sample dates.
    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.dates.iter()
    }
}

impl<'a> IntoIterator for &'a SampleAxis {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}
