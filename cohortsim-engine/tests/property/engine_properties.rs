use cohortsim_core::models::VariantConfig;
use cohortsim_engine::{CohortSimulator, RevenueSimulator, SourceCombiner};
use cohortsim_retention::{ExponentialRetention, PointTableRetention};
use proptest::prelude::*;

fn arb_sources() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..40, 1usize..6).prop_flat_map(|(horizon, count)| {
        prop::collection::vec(prop::collection::vec(0.0f64..1e6, horizon), count)
    })
}

fn close(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() <= 1e-9 * (1.0 + x.abs().max(y.abs())))
}

// ── Source combination ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn combine_is_commutative(mut sources in arb_sources()) {
        let forward = SourceCombiner::combine(&sources).unwrap();
        sources.reverse();
        let reversed = SourceCombiner::combine(&sources).unwrap();
        prop_assert!(close(&forward, &reversed));
    }
}

proptest! {
    #[test]
    fn combine_is_associative(sources in arb_sources()) {
        let all = SourceCombiner::combine(&sources).unwrap();
        let (head, tail) = sources.split_at(1);
        let tail_total = if tail.is_empty() {
            vec![0.0; head[0].len()]
        } else {
            SourceCombiner::combine(tail).unwrap()
        };
        let nested = SourceCombiner::combine(&[head[0].clone(), tail_total]).unwrap();
        prop_assert!(close(&all, &nested));
    }
}

proptest! {
    #[test]
    fn integer_installs_combine_exactly_in_any_order(
        a in prop::collection::vec(0i64..100_000, 30),
        b in prop::collection::vec(0i64..100_000, 30),
        c in prop::collection::vec(0i64..100_000, 30),
    ) {
        let abc = SourceCombiner::combine(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let cab = SourceCombiner::combine(&[c, a, b]).unwrap();
        prop_assert_eq!(abc, cab);
    }
}

// ── Cohort accumulation ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn zero_installs_give_zero_dau(horizon in 0usize..120, r0 in 0.0f64..1.0, k in 0.0f64..1.0) {
        let decay = ExponentialRetention::new(r0, k).unwrap();
        let dau = CohortSimulator::simulate(&vec![0; horizon], &decay).unwrap();
        prop_assert_eq!(dau, vec![0.0; horizon]);
    }
}

proptest! {
    #[test]
    fn impulse_reproduces_scaled_curve(horizon in 1usize..80, offset in 0usize..80) {
        let k = offset % horizon;
        let table = PointTableRetention::new([(2, 0.53), (4, 0.27), (8, 0.17), (15, 0.06)]).unwrap();
        let mut installs = vec![0; horizon];
        installs[k] = 1000;

        let dau = CohortSimulator::simulate(&installs, &table).unwrap();
        for (idx, &value) in dau.iter().enumerate() {
            let expected = if idx < k {
                0.0
            } else {
                1000.0 * table.retention((idx - k + 1) as i64).unwrap()
            };
            prop_assert!((value - expected).abs() < 1e-9);
        }
    }
}

proptest! {
    #[test]
    fn parallel_is_bit_identical(installs in prop::collection::vec(0i64..50_000, 0..100)) {
        let decay = ExponentialRetention::new(0.52, 0.10).unwrap();
        let sequential = CohortSimulator::simulate(&installs, &decay).unwrap();
        let parallel = CohortSimulator::simulate_par(&installs, &decay).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}

// ── Revenue ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn revenue_is_linear_in_arppu_for_iap(
        installs in prop::collection::vec(0i64..10_000, 1..30),
        arppu in 0.0f64..50.0,
    ) {
        let dau = vec![0.0; installs.len()];
        let variant = VariantConfig::new("x", 0.03, 10.0, 2.0);
        let revenue = RevenueSimulator::with_arppu(arppu)
            .simulate(&variant, &installs, &dau, None)
            .unwrap();
        for (day, &n) in revenue.iter().zip(&installs) {
            let expected = n as f64 * 0.03 * arppu;
            prop_assert!((day - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
        }
    }
}

proptest! {
    #[test]
    fn mismatched_lengths_always_fail(a in 0usize..50, b in 0usize..50) {
        prop_assume!(a != b);
        let variant = VariantConfig::new("x", 0.03, 10.0, 2.0);
        let result = RevenueSimulator::new().simulate(&variant, &vec![1; a], &vec![1.0; b], None);
        prop_assert!(result.is_err());
    }
}
