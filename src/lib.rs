//! # trendlab: Regime-Based Synthetic Trend Generator
//!
//! Synthesizes plausible popularity-index time series for competing
//! products over a fixed historical window and renders them as a static
//! chart plus a flat CSV export.
//!
//! The core is the regime trajectory generator: each entity's lifecycle is
//! an ordered table of calendar-anchored regimes (pre-launch, launch ramp,
//! peak, decline, steady state), each pairing a deterministic base-value
//! shape with mean-zero Gaussian noise. Every emitted value is clamped to
//! `[0, 100]`.
//!
//! ## Example
//!
//! ```rust
//! use trendlab::axis::SampleAxis;
//! use trendlab::regime::{BaseValue, Regime, RegimeTable};
//! use trendlab::trajectory;
//! use chrono::NaiveDate;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let start = NaiveDate::from_ymd_opt(2022, 9, 4).unwrap();
//! let end = NaiveDate::from_ymd_opt(2022, 11, 6).unwrap();
//! let axis = SampleAxis::build(start, end, 7)?;
//!
//! let table = RegimeTable::new(vec![
//!     Regime::new(None, None, BaseValue::Constant { level: 50.0 }, 5.0),
//! ]);
//! let mut rng = StdRng::seed_from_u64(42);
//! let trajectory = trajectory::generate("demo", &axis, &table, &mut rng)?;
//! assert_eq!(trajectory.len(), axis.len());
//! # Ok::<(), trendlab::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod axis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod regime;
pub mod render;
pub mod trajectory;

pub use error::{Error, Result};
