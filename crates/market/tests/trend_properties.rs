//! Property-based tests for trend classification.

use chrono::{Duration, TimeZone, Utc};
use core_types::{MarketObservation, Trend};
use market::MarketTrendAnalyzer;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn observations(older: &[i64], recent: &[i64]) -> Vec<MarketObservation> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    older
        .iter()
        .chain(recent)
        .enumerate()
        .map(|(i, &price)| MarketObservation {
            price: Decimal::from(price),
            days_on_market: 30,
            date: start + Duration::days(7 * i as i64),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A recent window at least 6% above the older one always reads as rising.
    #[test]
    fn prop_clear_increase_is_rising(
        base in 50_000i64..2_000_000,
        older_len in 1usize..20,
        lift_pct in 6i64..60,
    ) {
        let older = vec![base; older_len];
        let recent = vec![base + base * lift_pct / 100 + 1; 6];
        let snapshot = MarketTrendAnalyzer::default()
            .analyze(&observations(&older, &recent))
            .unwrap();
        prop_assert_eq!(snapshot.trend, Trend::Rising);
    }

    /// A recent window at least 6% below the older one always reads as falling.
    #[test]
    fn prop_clear_decrease_is_falling(
        base in 50_000i64..2_000_000,
        older_len in 1usize..20,
        drop_pct in 6i64..60,
    ) {
        let older = vec![base; older_len];
        let recent = vec![base - base * drop_pct / 100 - 1; 6];
        let snapshot = MarketTrendAnalyzer::default()
            .analyze(&observations(&older, &recent))
            .unwrap();
        prop_assert_eq!(snapshot.trend, Trend::Falling);
    }

    /// A flat series is stable at any length.
    #[test]
    fn prop_flat_series_is_stable(price in 1i64..5_000_000, len in 2usize..40) {
        let snapshot = MarketTrendAnalyzer::default()
            .analyze(&observations(&vec![price; len], &[]))
            .unwrap();
        prop_assert_eq!(snapshot.trend, Trend::Stable);
        prop_assert_eq!(snapshot.inventory_count, len);
    }

    /// Identical inputs always give identical snapshots.
    #[test]
    fn prop_analysis_is_deterministic(prices in proptest::collection::vec(1i64..1_000_000, 2..30)) {
        let series = observations(&prices, &[]);
        let analyzer = MarketTrendAnalyzer::default();
        prop_assert_eq!(analyzer.analyze(&series).unwrap(), analyzer.analyze(&series).unwrap());
    }
}
