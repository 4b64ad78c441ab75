use cohortsim_core::config::{InstallSegment, SourceConfig};
use cohortsim_core::models::{SaleWindow, VariantConfig};
use proptest::prelude::*;

fn arb_source() -> impl Strategy<Value = SourceConfig> {
    prop::collection::vec((0usize..40, -1_000i64..50_000), 0..6).prop_map(|segments| SourceConfig {
        name: "src".to_string(),
        installs: segments
            .into_iter()
            .map(|(days, installs)| InstallSegment { days, installs })
            .collect(),
    })
}

proptest! {
    #[test]
    fn expand_always_fills_the_horizon(source in arb_source(), horizon in 0usize..120) {
        let series = source.expand(horizon);
        prop_assert_eq!(series.len(), horizon);

        let scheduled: usize = source.installs.iter().map(|s| s.days).sum();
        for &n in series.iter().skip(scheduled) {
            prop_assert_eq!(n, 0);
        }
    }
}

proptest! {
    #[test]
    fn expand_is_a_prefix_of_longer_horizons(source in arb_source(), short in 0usize..60, extra in 0usize..60) {
        let shorter = source.expand(short);
        let longer = source.expand(short + extra);
        prop_assert_eq!(&longer[..short], &shorter[..]);
    }
}

proptest! {
    #[test]
    fn sale_contains_matches_inclusive_range(
        start in 1u32..60,
        len in 0u32..30,
        day in 0usize..120,
    ) {
        let end = start + len;
        let sale = SaleWindow::new(start, end, 0.01).unwrap();
        let expected = start as usize <= day && day <= end as usize;
        prop_assert_eq!(sale.contains(day), expected);
        prop_assert_eq!(sale.len_days(), (len + 1) as usize);
    }
}

proptest! {
    #[test]
    fn inverted_sale_windows_are_rejected(start in 2u32..60, back in 1u32..60) {
        let end = start.saturating_sub(back);
        prop_assert!(SaleWindow::new(start, end, 0.01).is_err());
    }
}

proptest! {
    #[test]
    fn variant_rates_inside_unit_interval_validate(
        rate in 0.0f64..=1.0,
        ecpm in 0.0f64..100.0,
        impressions in 0.0f64..20.0,
    ) {
        prop_assert!(VariantConfig::new("v", rate, ecpm, impressions).validate().is_ok());
    }
}
