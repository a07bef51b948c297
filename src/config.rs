//! Compiled-in scenario
//!
//! Date range, base seed, and the per-entity regime tables for the tracked
//! AI assistants. Thresholds follow each product's real launch and rebrand
//! dates; levels and sigmas are tuned to look like relative search-interest
//! curves, not fitted to observed data.

use crate::regime::{BaseValue, ElapsedUnit, Regime, RegimeTable};
use chrono::NaiveDate;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Everything a run needs: axis bounds, sampling interval, base seed, and
/// the tracked entities.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// First sample date
    pub start: NaiveDate,
    /// Inclusive last bound of the axis
    pub end: NaiveDate,
    /// Sampling interval in days
    pub interval_days: i64,
    /// Base seed all per-entity streams derive from
    pub base_seed: u64,
    /// Tracked entities in chart order
    pub entities: Vec<EntitySpec>,
}

impl Scenario {
    /// Seed for one entity's noise stream, derived from the base seed and
    /// the entity name (FxHash). Stable under entity reordering, so adding
    /// or removing an entity never perturbs another entity's values.
    #[must_use]
    pub fn entity_seed(&self, name: &str) -> u64 {
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        self.base_seed ^ hasher.finish()
    }
}

/// One tracked entity: name, chart color, and its ordered regime table.
#[derive(Debug, Clone)]
pub struct EntitySpec {
    /// Column / legend name
    pub name: &'static str,
    /// Line color for the rendered chart
    pub color: (u8, u8, u8),
    /// Ordered lifecycle regimes
    pub regimes: RegimeTable,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid compiled-in date")
}

fn constant(from: Option<NaiveDate>, until: Option<NaiveDate>, level: f64, sigma: f64) -> Regime {
    Regime::new(from, until, BaseValue::Constant { level }, sigma)
}

fn ramp(
    from: NaiveDate,
    until: Option<NaiveDate>,
    start: f64,
    rate: f64,
    unit: ElapsedUnit,
    cap: Option<f64>,
    sigma: f64,
) -> Regime {
    Regime::new(
        Some(from),
        until,
        BaseValue::Ramp {
            start,
            rate,
            unit,
            cap,
        },
        sigma,
    )
}

fn decay(
    from: NaiveDate,
    until: Option<NaiveDate>,
    start: f64,
    rate: f64,
    unit: ElapsedUnit,
    floor: Option<f64>,
    sigma: f64,
) -> Regime {
    Regime::new(
        Some(from),
        until,
        BaseValue::Decay {
            start,
            rate,
            unit,
            floor,
        },
        sigma,
    )
}

/// The default scenario: weekly samples from September 2022 (first Sunday)
/// through February 2025, five entities.
#[must_use]
pub fn scenario() -> Scenario {
    Scenario {
        start: day(2022, 9, 4),
        end: day(2025, 2, 28),
        interval_days: 7,
        base_seed: 42,
        entities: vec![
            chatgpt(),
            claude(),
            gemini(),
            copilot(),
            deepseek(),
        ],
    }
}

/// Released November 2022, explosive growth, peak, decline, high plateau.
fn chatgpt() -> EntitySpec {
    let launch = day(2022, 11, 1);
    let peak = day(2022, 12, 1);
    let decline = day(2023, 3, 1);
    let plateau = day(2023, 8, 1);
    EntitySpec {
        name: "ChatGPT",
        color: (0xFF, 0x6B, 0x6B),
        regimes: RegimeTable::new(vec![
            constant(None, Some(launch), 2.0, 1.0),
            ramp(
                launch,
                Some(peak),
                5.0,
                20.0,
                ElapsedUnit::Weeks,
                Some(85.0),
                5.0,
            ),
            constant(Some(peak), Some(decline), 95.0, 8.0),
            decay(
                decline,
                Some(plateau),
                95.0,
                8.0,
                ElapsedUnit::Months,
                Some(60.0),
                6.0,
            ),
            constant(Some(plateau), None, 75.0, 10.0),
        ]),
    }
}

/// Gradual growth, steady increase, mature adoption.
fn claude() -> EntitySpec {
    let growth = day(2023, 1, 1);
    let steady = day(2023, 6, 1);
    let mature = day(2024, 1, 1);
    EntitySpec {
        name: "Claude",
        color: (0x4E, 0xCD, 0xC4),
        regimes: RegimeTable::new(vec![
            constant(None, Some(growth), 5.0, 2.0),
            ramp(growth, Some(steady), 5.0, 8.0, ElapsedUnit::Months, None, 3.0),
            constant(Some(steady), Some(mature), 40.0, 8.0),
            constant(Some(mature), None, 55.0, 10.0),
        ]),
    }
}

/// Launched as Bard in March 2023, rebranded to Gemini in December 2023.
fn gemini() -> EntitySpec {
    let bard_launch = day(2023, 3, 1);
    let bard_steady = day(2023, 6, 1);
    let rebrand = day(2023, 12, 1);
    let mature = day(2024, 3, 1);
    EntitySpec {
        name: "Gemini",
        color: (0x45, 0xB7, 0xD1),
        regimes: RegimeTable::new(vec![
            constant(None, Some(bard_launch), 1.0, 0.5),
            ramp(
                bard_launch,
                Some(bard_steady),
                15.0,
                12.0,
                ElapsedUnit::Months,
                None,
                4.0,
            ),
            constant(Some(bard_steady), Some(rebrand), 45.0, 8.0),
            ramp(
                rebrand,
                Some(mature),
                45.0,
                10.0,
                ElapsedUnit::Months,
                None,
                6.0,
            ),
            constant(Some(mature), None, 65.0, 12.0),
        ]),
    }
}

/// Professional-tool adoption curve: slow, steady, no spike.
fn copilot() -> EntitySpec {
    let growth = day(2023, 1, 1);
    let steady = day(2023, 7, 1);
    let mainstream = day(2024, 6, 1);
    EntitySpec {
        name: "Copilot",
        color: (0x96, 0xCE, 0xB4),
        regimes: RegimeTable::new(vec![
            constant(None, Some(growth), 15.0, 4.0),
            ramp(growth, Some(steady), 15.0, 5.0, ElapsedUnit::Months, None, 3.0),
            constant(Some(steady), Some(mainstream), 35.0, 6.0),
            constant(Some(mainstream), None, 45.0, 8.0),
        ]),
    }
}

/// Late entrant, rapid growth through 2024, surging at the end of the
/// window (the terminal ramp is open-ended; the clamp bounds it).
fn deepseek() -> EntitySpec {
    let growth = day(2024, 1, 1);
    let accel = day(2024, 6, 1);
    let surge = day(2024, 10, 1);
    EntitySpec {
        name: "Deepseek",
        color: (0xFE, 0xCA, 0x57),
        regimes: RegimeTable::new(vec![
            constant(None, Some(growth), 2.0, 1.0),
            ramp(growth, Some(accel), 2.0, 6.0, ElapsedUnit::Months, None, 2.0),
            constant(Some(accel), Some(surge), 30.0, 6.0),
            ramp(surge, None, 30.0, 15.0, ElapsedUnit::Months, None, 8.0),
        ]),
    }
}
