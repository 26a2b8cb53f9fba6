//! End-to-end checks that wire each engine from a parsed configuration and
//! JSON inputs, the way the command-line tool does.

use configuration::load_config_from_str;
use core_types::{ComparableSale, MarketObservation, SalePrice, SubjectProperty, SuggestionType, Trend};
use market::MarketTrendAnalyzer;
use mortgage::MortgageCalculator;
use negotiation::NegotiationAdvisor;
use rust_decimal_macros::dec;
use valuation::ValuationEstimator;

const COMPARABLES: &str = r#"[
    {"price": 300000, "square_footage": 1500, "bedrooms": 3, "bathrooms": 2,
     "year_built": 1998, "lot_size": 6000, "date": "2024-02-10T00:00:00Z"},
    {"price": 700000, "square_footage": 3500, "bedrooms": 5, "bathrooms": 3.5,
     "year_built": 2010, "lot_size": 9000, "date": "2024-04-22T00:00:00Z"},
    {"price": 500000, "square_footage": 2500, "bedrooms": 4, "bathrooms": 2.5,
     "year_built": 2005, "lot_size": 7500, "date": "2024-05-30T00:00:00Z"}
]"#;

#[test]
fn default_policy_reproduces_baseline_results() {
    let config = load_config_from_str("").unwrap();
    let comparables: Vec<ComparableSale> = serde_json::from_str(COMPARABLES).unwrap();

    let subject = SubjectProperty {
        square_footage: dec!(1000),
        bedrooms: 4,
        bathrooms: dec!(3),
        year_built: 1994,
        lot_size: dec!(5000),
    };
    let valuation = ValuationEstimator::new(config.valuation.clone())
        .unwrap()
        .estimate_value(&subject, &comparables, 2024)
        .unwrap();
    assert_eq!(valuation.estimated_value, dec!(205485));
    assert_eq!(valuation.factors.len(), 3);

    let sales: Vec<SalePrice> = comparables.iter().map(SalePrice::from).collect();
    let suggestion = NegotiationAdvisor::new(config.negotiation.clone())
        .unwrap()
        .suggest_strategy(dec!(600000), dec!(480000), &sales, 45)
        .unwrap();
    assert_eq!(suggestion.suggestion_type, SuggestionType::CounterOffer);
    assert_eq!(suggestion.suggested_amount, Some(dec!(475000)));
    assert_eq!(suggestion.confidence, dec!(0.8));
}

#[test]
fn comparables_json_also_reads_as_sale_prices() {
    let sales: Vec<SalePrice> = serde_json::from_str(COMPARABLES).unwrap();
    assert_eq!(sales.len(), 3);
    assert_eq!(sales[1].price, dec!(700000));
}

#[test]
fn tuned_policy_flows_into_every_engine() {
    let config = load_config_from_str(
        r#"
        [mortgage]
        closing_cost_rate = "0.02"

        [market]
        trend_band = "0.20"

        [valuation]
        confidence = "0.6"
        adjustments = []

        [negotiation]
        stale_listing_days = 90
        "#,
    )
    .unwrap();

    let breakdown = MortgageCalculator::new(config.mortgage.clone())
        .unwrap()
        .build_cost_breakdown(dec!(500000), dec!(100000), dec!(0.06), None)
        .unwrap();
    assert_eq!(breakdown.closing_costs, dec!(10000));

    let series: Vec<MarketObservation> = serde_json::from_str(
        r#"[
            {"price": 100, "days_on_market": 10, "date": "2024-01-01T00:00:00Z"},
            {"price": 110, "days_on_market": 10, "date": "2024-02-01T00:00:00Z"},
            {"price": 110, "days_on_market": 10, "date": "2024-03-01T00:00:00Z"},
            {"price": 110, "days_on_market": 10, "date": "2024-04-01T00:00:00Z"},
            {"price": 110, "days_on_market": 10, "date": "2024-05-01T00:00:00Z"},
            {"price": 110, "days_on_market": 10, "date": "2024-06-01T00:00:00Z"},
            {"price": 110, "days_on_market": 10, "date": "2024-07-01T00:00:00Z"}
        ]"#,
    )
    .unwrap();
    let snapshot = MarketTrendAnalyzer::new(config.market.clone())
        .unwrap()
        .analyze(&series)
        .unwrap();
    assert_eq!(snapshot.trend, Trend::Stable);

    let comparables: Vec<ComparableSale> = serde_json::from_str(COMPARABLES).unwrap();
    let valuation = ValuationEstimator::new(config.valuation.clone())
        .unwrap()
        .estimate_value(
            &SubjectProperty {
                square_footage: dec!(2000),
                bedrooms: 6,
                bathrooms: dec!(4),
                year_built: 1900,
                lot_size: dec!(8000),
            },
            &comparables,
            2024,
        )
        .unwrap();
    assert_eq!(valuation.estimated_value, dec!(400000));
    assert!(valuation.factors.is_empty());
    assert_eq!(valuation.confidence, dec!(0.6));

    let sales: Vec<SalePrice> = comparables.iter().map(SalePrice::from).collect();
    let suggestion = NegotiationAdvisor::new(config.negotiation.clone())
        .unwrap()
        .suggest_strategy(dec!(600000), dec!(480000), &sales, 45)
        .unwrap();
    assert_eq!(suggestion.suggested_amount, Some(dec!(588000)));
}
