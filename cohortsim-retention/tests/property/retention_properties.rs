use cohortsim_retention::{ExponentialRetention, PointTableRetention};
use proptest::prelude::*;

/// Random non-increasing table with 2–8 strictly increasing days in 2..=60.
fn arb_table() -> impl Strategy<Value = Vec<(u32, f64)>> {
    (prop::collection::btree_set(2u32..=60, 2..=8), prop::collection::vec(0.0f64..=1.0, 8))
        .prop_map(|(days, mut fractions)| {
            fractions.truncate(days.len());
            fractions.sort_by(|a, b| b.partial_cmp(a).unwrap());
            days.into_iter().zip(fractions).collect()
        })
}

proptest! {
    #[test]
    fn install_day_and_exact_keys(points in arb_table()) {
        let table = PointTableRetention::new(points.clone()).unwrap();
        prop_assert_eq!(table.retention(1).unwrap(), 1.0);
        for (day, fraction) in points {
            prop_assert_eq!(table.retention(i64::from(day)).unwrap(), fraction);
        }
    }
}

proptest! {
    #[test]
    fn interpolation_lies_between_neighbours(points in arb_table()) {
        let table = PointTableRetention::new(points.clone()).unwrap();
        for pair in points.windows(2) {
            let (d1, r1) = pair[0];
            let (d2, r2) = pair[1];
            let (lo, hi) = (r1.min(r2), r1.max(r2));
            for day in (d1 + 1)..d2 {
                let r = table.retention(i64::from(day)).unwrap();
                prop_assert!(
                    r >= lo - 1e-12 && r <= hi + 1e-12,
                    "day {} -> {} outside [{}, {}]", day, r, lo, hi
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn extrapolation_never_negative(
        points in arb_table(),
        ahead in 1i64..10_000,
    ) {
        let table = PointTableRetention::new(points).unwrap();
        let day = i64::from(table.last_day()) + ahead;
        prop_assert!(table.retention(day).unwrap() >= 0.0);
    }
}

proptest! {
    #[test]
    fn steep_slopes_clamp_to_zero(
        r_last in 0.0f64..0.5,
        drop in 0.1f64..0.5,
        ahead in 20i64..500,
    ) {
        let table = PointTableRetention::new([(2, r_last + drop), (3, r_last)]).unwrap();
        prop_assert_eq!(table.retention(3 + ahead).unwrap(), 0.0);
    }
}

proptest! {
    #[test]
    fn exponential_is_non_increasing_and_bounded(
        r0 in 0.0f64..=1.0,
        k in 0.0f64..2.0,
    ) {
        let decay = ExponentialRetention::new(r0, k).unwrap();
        let mut prev = decay.retention(1);
        prop_assert_eq!(prev, r0);
        for age in 2..=90 {
            let r = decay.retention(age);
            prop_assert!(r <= prev);
            prop_assert!(r >= 0.0);
            prev = r;
        }
    }
}
