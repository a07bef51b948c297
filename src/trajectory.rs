//! Regime trajectory generator
//!
//! Turns one entity's regime table plus the shared sample axis into a
//! clamped, noisy value sequence. The noise source is an explicitly owned,
//! per-entity seeded rng passed in by the caller, never a global one, so
//! entity streams are reproducible and safe to generate in parallel.

use crate::axis::SampleAxis;
use crate::regime::RegimeTable;
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::Normal;

/// Inclusive bounds every emitted value is clamped to.
pub const VALUE_RANGE: (f64, f64) = (0.0, 100.0);

/// The clamped value sequence produced for one entity, aligned by position
/// to the sample axis it was generated against. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTrajectory {
    values: Vec<f64>,
}

impl EntityTrajectory {
    /// Values in axis order, each in `[0, 100]`.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values (equals the axis length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the trajectory empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Generate one entity's trajectory over `axis`.
///
/// Per date, in axis order: select the unique covering regime, evaluate its
/// base value at the elapsed time within the phase, add one draw from a
/// mean-zero Gaussian with the regime's sigma, clamp to `[0, 100]`.
///
/// # Errors
///
/// [`Error::RegimeCoverage`] if any date is covered by zero or multiple
/// regimes (a malformed table is fatal, never silently defaulted), and
/// [`Error::InvalidRegime`] if a sigma cannot parameterize a Gaussian.
pub fn generate(
    entity: &str,
    axis: &SampleAxis,
    table: &RegimeTable,
    rng: &mut StdRng,
) -> Result<EntityTrajectory> {
    // One distribution per regime, built up front so a bad sigma fails
    // before any value is emitted.
    let noise: Vec<Normal<f64>> = table
        .regimes()
        .iter()
        .enumerate()
        .map(|(idx, regime)| {
            Normal::new(0.0, regime.sigma()).map_err(|e| Error::InvalidRegime {
                entity: entity.to_string(),
                reason: format!("regime {idx} has noise sigma {}: {e}", regime.sigma()),
            })
        })
        .collect::<Result<_>>()?;

    let mut values = Vec::with_capacity(axis.len());
    for &date in axis {
        let (idx, regime) = table.select(date).map_err(|matches| Error::RegimeCoverage {
            entity: entity.to_string(),
            date,
            matches,
        })?;

        let base = regime.base_value_at(date);
        let sample: f64 = rng.sample(noise[idx]);
        values.push((base + sample).clamp(VALUE_RANGE.0, VALUE_RANGE.1));
    }

    Ok(EntityTrajectory { values })
}
