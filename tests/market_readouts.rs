//! Risk scoring and advisor decisions on the reference gold series.

mod fixtures;

use fixtures::load_reference_closes;
use tradewindow::{
    AdvisorConfig, MarketSnapshot, Recommendation, RiskLevel, Sentiment, Volume, advise,
    summarize_trend,
};

/// Percentage change between consecutive closes.
fn daily_change_pcts(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0] * 100.0)
        .collect()
}

#[test]
fn daily_gold_moves_rarely_score_extreme() {
    let closes = load_reference_closes();

    let levels: Vec<RiskLevel> = daily_change_pcts(&closes)
        .into_iter()
        .map(RiskLevel::from_change_pct)
        .collect();

    // Daily bars in the fixture move at most 20 points on a ~4150 price,
    // i.e. under 0.5%.
    assert!(levels.iter().all(|l| *l <= RiskLevel::Low), "{levels:?}");
}

#[test]
fn period_change_drives_risk() {
    let closes = load_reference_closes();
    let summary = summarize_trend(&closes).unwrap().unwrap();

    let level = RiskLevel::try_from_change_pct(summary.change_pct()).unwrap();
    assert_eq!(level, RiskLevel::from_change_pct(summary.change_pct()));
    assert!((1..=5).contains(&level.score()));
}

#[test]
fn advisor_scenarios() {
    let config = AdvisorConfig::builder().buy_threshold(4250.0).build();
    let snapshot = |price, change_pct, sentiment, volume| MarketSnapshot {
        price,
        change_pct,
        sentiment,
        volume,
        near_52w_high: false,
    };

    let cases = [
        (
            snapshot(4200.0, 2.5, Sentiment::Bullish, Volume::High),
            Recommendation::StrongBuy,
        ),
        (
            snapshot(4300.0, 2.5, Sentiment::Bullish, Volume::High),
            Recommendation::HoldPriceTooHigh,
        ),
        (
            snapshot(4200.0, -3.0, Sentiment::Bearish, Volume::High),
            Recommendation::StrongSell,
        ),
        (
            snapshot(4200.0, -3.0, Sentiment::Bearish, Volume::Low),
            Recommendation::ConsiderSelling,
        ),
        (
            snapshot(4200.0, -0.2, Sentiment::Neutral, Volume::Low),
            Recommendation::Hold,
        ),
    ];

    for (market, expected) in cases {
        assert_eq!(advise(&market, &config), expected, "{market:?}");
    }
}
