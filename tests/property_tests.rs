//! Property-based tests
//!
//! Invariants under arbitrary configuration:
//! - axis length formula and exact spacing
//! - every emitted value clamped to [0, 100]
//! - fixed seed → identical trajectories
//! - tables with a hole always fail, never default

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trendlab::axis::SampleAxis;
use trendlab::regime::{BaseValue, ElapsedUnit, Regime, RegimeTable};
use trendlab::trajectory;
use trendlab::Error;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. 2030-12-31 as day offsets
    (0i64..11_322).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_axis_length_formula(
        start in arb_date(),
        span_days in 0i64..2000,
        interval in 1i64..60,
    ) {
        let end = start + Duration::days(span_days);
        let axis = SampleAxis::build(start, end, interval).unwrap();
        prop_assert_eq!(axis.len() as i64, span_days / interval + 1);
    }

    #[test]
    fn prop_axis_spacing_exact(
        start in arb_date(),
        span_days in 0i64..2000,
        interval in 1i64..60,
    ) {
        let end = start + Duration::days(span_days);
        let axis = SampleAxis::build(start, end, interval).unwrap();
        for pair in axis.dates().windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), interval);
        }
    }

    #[test]
    fn prop_reversed_range_always_rejected(
        start in arb_date(),
        span_days in 1i64..2000,
    ) {
        let end = start + Duration::days(span_days);
        prop_assert!(matches!(
            SampleAxis::build(end, start, 7),
            Err(Error::InvalidRange(_))
        ));
    }

    #[test]
    fn prop_values_always_clamped(
        start in arb_date(),
        span_days in 7i64..1500,
        level in -500.0f64..500.0,
        sigma in 0.0f64..200.0,
        seed in any::<u64>(),
    ) {
        let end = start + Duration::days(span_days);
        let axis = SampleAxis::build(start, end, 7).unwrap();
        let table = RegimeTable::new(vec![
            Regime::new(None, None, BaseValue::Constant { level }, sigma),
        ]);
        let mut rng = StdRng::seed_from_u64(seed);
        let traj = trajectory::generate("prop", &axis, &table, &mut rng).unwrap();
        prop_assert!(traj.values().iter().all(|&v| (0.0..=100.0).contains(&v)));
    }

    #[test]
    fn prop_fixed_seed_reproducible(
        start in arb_date(),
        span_days in 7i64..1500,
        sigma in 0.0f64..50.0,
        seed in any::<u64>(),
    ) {
        let end = start + Duration::days(span_days);
        let axis = SampleAxis::build(start, end, 7).unwrap();
        let table = RegimeTable::new(vec![
            Regime::new(None, None, BaseValue::Constant { level: 50.0 }, sigma),
        ]);
        let mut rng_a = StdRng::seed_from_u64(seed);
        let mut rng_b = StdRng::seed_from_u64(seed);
        let a = trajectory::generate("prop", &axis, &table, &mut rng_a).unwrap();
        let b = trajectory::generate("prop", &axis, &table, &mut rng_b).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_hole_in_table_always_fatal(
        start in arb_date(),
        hole_offset in 1i64..100,
    ) {
        // Window long enough that the axis crosses the hole
        let end = start + Duration::days(hole_offset + 200);
        let axis = SampleAxis::build(start, end, 7).unwrap();
        let hole_start = start + Duration::days(hole_offset);
        let hole_end = hole_start + Duration::days(100);
        let table = RegimeTable::new(vec![
            Regime::new(None, Some(hole_start), BaseValue::Constant { level: 1.0 }, 0.0),
            Regime::new(Some(hole_end), None, BaseValue::Constant { level: 2.0 }, 0.0),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        let result = trajectory::generate("prop", &axis, &table, &mut rng);
        let hole_is_fatal = matches!(result, Err(Error::RegimeCoverage { matches: 0, .. }));
        prop_assert!(hole_is_fatal);
    }

    #[test]
    fn prop_ramp_never_exceeds_cap(
        elapsed_days in 0i64..3650,
        start in 0.0f64..50.0,
        rate in 0.0f64..30.0,
        cap in 50.0f64..100.0,
    ) {
        let base = BaseValue::Ramp {
            start,
            rate,
            unit: ElapsedUnit::Weeks,
            cap: Some(cap),
        };
        prop_assert!(base.eval(elapsed_days) <= cap);
    }

    #[test]
    fn prop_decay_never_undershoots_floor(
        elapsed_days in 0i64..3650,
        start in 50.0f64..100.0,
        rate in 0.0f64..30.0,
        floor in 0.0f64..50.0,
    ) {
        let base = BaseValue::Decay {
            start,
            rate,
            unit: ElapsedUnit::Months,
            floor: Some(floor),
        };
        prop_assert!(base.eval(elapsed_days) >= floor);
    }
}
