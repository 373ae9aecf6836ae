#![allow(dead_code)]

use serde::{Deserialize, de::DeserializeOwned};
use tradewindow::{Ohlcv, Price, Timestamp, Trade};

/// Daily XAU/USD bar parsed from CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Ohlcv for RefBar {
    fn open(&self) -> Price {
        self.open
    }

    fn high(&self) -> Price {
        self.high
    }

    fn low(&self) -> Price {
        self.low
    }

    fn close(&self) -> Price {
        self.close
    }

    fn open_time(&self) -> Timestamp {
        self.open_time
    }
}

/// Expected best trade after the bar at `open_time`. Empty columns mean
/// no profitable trade yet.
#[derive(Debug, Deserialize)]
pub struct RefTrade {
    pub open_time: u64,
    pub buy_index: Option<usize>,
    pub sell_index: Option<usize>,
    pub profit: Option<f64>,
}

/// Expected trend summary after the bar at `open_time`.
#[derive(Debug, Deserialize)]
pub struct RefTrend {
    pub open_time: u64,
    pub high: f64,
    pub low: f64,
    pub average: f64,
    pub up_moves: usize,
    pub down_moves: usize,
}

const OHLCV_PATH: &str = "tests/fixtures/data/xauusd-1d.csv";

/// Load reference daily bars.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_records(OHLCV_PATH, "invalid OHLCV record")
}

pub fn load_reference_closes() -> Vec<Price> {
    load_reference_ohlcvs().iter().map(|b| b.close).collect()
}

/// Load per-bar best trade expectations.
pub fn load_ref_trades(path: &str) -> Vec<RefTrade> {
    load_records(path, "invalid reference trade")
}

/// Load per-bar trend expectations.
pub fn load_ref_trends(path: &str) -> Vec<RefTrend> {
    load_records(path, "invalid reference trend")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Asserts a computed trade against a reference row.
pub fn assert_trade_matches(actual: Option<Trade>, expected: &RefTrade, tolerance: f64) {
    let t = expected.open_time;
    match (actual, expected.buy_index, expected.sell_index, expected.profit) {
        (None, None, None, None) => {}
        (Some(trade), Some(buy), Some(sell), Some(profit)) => {
            assert_eq!(
                (trade.buy_index(), trade.sell_index()),
                (buy, sell),
                "trade indices at t={t}"
            );
            assert_near(trade.profit(), profit, tolerance, &format!("profit at t={t}"));
        }
        (actual, ..) => panic!("trade mismatch at t={t}: got {actual:?}, expected {expected:?}"),
    }
}

/// O(n²) reference: every (buy, sell) pair in outer-then-inner order,
/// keeping the first strictly better one.
pub fn brute_force_best(prices: &[f64]) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;

    for i in 0..prices.len() {
        for j in i + 1..prices.len() {
            let profit = prices[j] - prices[i];
            if profit > best.map_or(0.0, |b| b.2) {
                best = Some((i, j, profit));
            }
        }
    }

    best
}

/// Creates intermediate ticks for a bar to simulate live repaints.
///
/// Returns 2 ticks with shifted close followed by the original bar. All
/// share the same `open_time`.
pub fn repaint_sequence(bar: &RefBar) -> Vec<RefBar> {
    let t = bar.open_time;
    vec![
        // Sharp dip right after the open
        RefBar {
            open: bar.open,
            high: bar.open,
            low: bar.low,
            close: bar.low,
            volume: bar.volume - 2.0,
            open_time: t,
        },
        // Spike towards the high
        RefBar {
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.high,
            volume: bar.volume - 1.0,
            open_time: t,
        },
        bar.clone(),
    ]
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
