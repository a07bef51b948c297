//! Lifecycle regimes
//!
//! Each entity's simulated lifecycle is an ordered table of regimes. A
//! regime is active over a half-open calendar window `[from, until)` and
//! defines a deterministic base value plus a Gaussian noise sigma. The
//! three base-value shapes are an exhaustive tagged variant, so there is no
//! hidden fallthrough between phases.
//!
//! Boundary semantics: a date equal to a threshold belongs to the later
//! regime (the earlier window excludes its `until`, the later window
//! includes its `from`).

use crate::{Error, Result};
use crate::axis::SampleAxis;
use chrono::NaiveDate;
use serde::Serialize;

/// Unit in which a regime measures elapsed time since its phase start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElapsedUnit {
    /// Elapsed days / 7
    Weeks,
    /// Elapsed days / 30
    Months,
}

impl ElapsedUnit {
    const fn days_per_unit(self) -> f64 {
        match self {
            Self::Weeks => 7.0,
            Self::Months => 30.0,
        }
    }
}

/// Deterministic base-value shape of a regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BaseValue {
    /// Flat level for the whole phase
    Constant {
        /// The level
        level: f64,
    },
    /// Linear growth from `start`, optionally saturating at `cap`
    Ramp {
        /// Value at phase start
        start: f64,
        /// Increase per elapsed unit
        rate: f64,
        /// Unit of elapsed time
        unit: ElapsedUnit,
        /// Saturation ceiling, if any
        cap: Option<f64>,
    },
    /// Linear decline from `start`, optionally bottoming out at `floor`
    Decay {
        /// Value at phase start
        start: f64,
        /// Decrease per elapsed unit
        rate: f64,
        /// Unit of elapsed time
        unit: ElapsedUnit,
        /// Lower bound of the decline, if any
        floor: Option<f64>,
    },
}

impl BaseValue {
    /// Evaluate the shape at `elapsed_days` since the phase start.
    #[must_use]
    pub fn eval(&self, elapsed_days: i64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let days = elapsed_days as f64;
        match *self {
            Self::Constant { level } => level,
            Self::Ramp {
                start,
                rate,
                unit,
                cap,
            } => {
                let value = start + rate * (days / unit.days_per_unit());
                cap.map_or(value, |c| value.min(c))
            }
            Self::Decay {
                start,
                rate,
                unit,
                floor,
            } => {
                let value = start - rate * (days / unit.days_per_unit());
                floor.map_or(value, |f| value.max(f))
            }
        }
    }
}

/// One phase of an entity's lifecycle: an activation window, a base-value
/// shape, and a noise sigma.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Regime {
    /// Inclusive lower bound of the window; `None` = open (earliest phase)
    from: Option<NaiveDate>,
    /// Exclusive upper bound of the window; `None` = open (terminal phase)
    until: Option<NaiveDate>,
    base: BaseValue,
    /// Standard deviation of the mean-zero Gaussian noise added on top
    sigma: f64,
}

impl Regime {
    /// Create a regime active over `[from, until)`.
    #[must_use]
    pub const fn new(
        from: Option<NaiveDate>,
        until: Option<NaiveDate>,
        base: BaseValue,
        sigma: f64,
    ) -> Self {
        Self {
            from,
            until,
            base,
            sigma,
        }
    }

    /// Does this regime's window contain `date`?
    ///
    /// Lower bound inclusive, upper bound exclusive: a threshold date
    /// belongs to the regime that starts on it.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |f| date >= f) && self.until.map_or(true, |u| date < u)
    }

    /// Base value at `date`, evaluated at the elapsed time since the phase
    /// start (`from`; an open-start regime evaluates at elapsed zero, which
    /// only matters for non-constant shapes).
    #[must_use]
    pub fn base_value_at(&self, date: NaiveDate) -> f64 {
        let elapsed_days = self.from.map_or(0, |f| (date - f).num_days());
        self.base.eval(elapsed_days)
    }

    /// Noise standard deviation.
    #[must_use]
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Window start, if bounded.
    #[must_use]
    pub const fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    /// Window end (exclusive), if bounded.
    #[must_use]
    pub const fn until(&self) -> Option<NaiveDate> {
        self.until
    }
}

/// Ordered regime table for one entity.
///
/// The table must partition the full sample axis: every date is covered by
/// exactly one regime. Selection asserts that uniqueness instead of taking
/// the first match, so an overlapping table surfaces as an error rather
/// than being masked by evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimeTable {
    regimes: Vec<Regime>,
}

impl RegimeTable {
    /// Create a table from ordered regimes.
    #[must_use]
    pub fn new(regimes: Vec<Regime>) -> Self {
        Self { regimes }
    }

    /// Regimes in order.
    #[must_use]
    pub fn regimes(&self) -> &[Regime] {
        &self.regimes
    }

    /// Number of regimes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regimes.len()
    }

    /// Is the table empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regimes.is_empty()
    }

    /// Select the unique regime covering `date`, returning its position in
    /// the table alongside the regime.
    ///
    /// Returns `Err(matches)` with the observed match count when coverage
    /// is violated (zero or multiple matches); callers attach the entity
    /// name and date to build [`Error::RegimeCoverage`].
    pub fn select(&self, date: NaiveDate) -> std::result::Result<(usize, &Regime), usize> {
        let mut found = None;
        let mut matches = 0;
        for (idx, regime) in self.regimes.iter().enumerate() {
            if regime.covers(date) {
                matches += 1;
                if found.is_none() {
                    found = Some((idx, regime));
                }
            }
        }
        match (matches, found) {
            (1, Some(hit)) => Ok(hit),
            _ => Err(matches),
        }
    }

    /// Check that this table partitions the whole axis and that every
    /// sigma is evaluable, before any value is generated.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRegime`] for a negative or non-finite sigma,
    /// [`Error::RegimeCoverage`] for the first date with zero or multiple
    /// covering regimes.
    pub fn validate(&self, entity: &str, axis: &SampleAxis) -> Result<()> {
        for (idx, regime) in self.regimes.iter().enumerate() {
            if !regime.sigma.is_finite() || regime.sigma < 0.0 {
                return Err(Error::InvalidRegime {
                    entity: entity.to_string(),
                    reason: format!("regime {idx} has noise sigma {}", regime.sigma),
                });
            }
        }
        for &date in axis {
            if let Err(matches) = self.select(date) {
                return Err(Error::RegimeCoverage {
                    entity: entity.to_string(),
                    date,
                    matches,
                });
            }
        }
        Ok(())
    }
}
