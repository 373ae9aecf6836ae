use std::fmt::{Debug, Display};

use crate::{
    AnalysisError, Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, Ohlcv, Price, PriceSource,
    bar_fold::{Accumulator, BarFold, fold_series},
};

/// Overall direction of a series, by counting step moves.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Trend {
    /// More up moves than down moves.
    Bullish,
    /// More down moves than up moves.
    Bearish,
    /// As many up moves as down moves.
    Neutral,
}

impl Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Direction of one step.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

/// Descriptive statistics of a price series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendSummary {
    len: usize,
    first: Price,
    last: Price,
    high: Price,
    low: Price,
    sum: Price,
    up_moves: usize,
    down_moves: usize,
}

impl TrendSummary {
    /// Number of prices summarized.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a summary needs at least one price.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn first(&self) -> Price {
        self.first
    }

    #[must_use]
    pub fn last(&self) -> Price {
        self.last
    }

    #[must_use]
    pub fn high(&self) -> Price {
        self.high
    }

    #[must_use]
    pub fn low(&self) -> Price {
        self.low
    }

    /// Arithmetic mean of all prices.
    #[must_use]
    pub fn average(&self) -> Price {
        #[allow(clippy::cast_precision_loss)]
        let len = self.len as f64;
        self.sum / len
    }

    /// Steps where the price rose.
    #[must_use]
    pub fn up_moves(&self) -> usize {
        self.up_moves
    }

    /// Steps where the price fell.
    #[must_use]
    pub fn down_moves(&self) -> usize {
        self.down_moves
    }

    /// Steps where the price did not change.
    #[must_use]
    pub fn unchanged_moves(&self) -> usize {
        self.len - 1 - self.up_moves - self.down_moves
    }

    /// `last - first`.
    #[must_use]
    pub fn net_change(&self) -> Price {
        self.last - self.first
    }

    /// Net change as a percentage of the first price.
    #[must_use]
    pub fn change_pct(&self) -> f64 {
        self.net_change() / self.first * 100.0
    }

    #[must_use]
    pub fn trend(&self) -> Trend {
        match self.up_moves.cmp(&self.down_moves) {
            std::cmp::Ordering::Greater => Trend::Bullish,
            std::cmp::Ordering::Less => Trend::Bearish,
            std::cmp::Ordering::Equal => Trend::Neutral,
        }
    }
}

impl Display for TrendSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} over {} (high {}, low {}, avg {:.2}, {} up / {} down)",
            self.trend(),
            self.len,
            self.high,
            self.low,
            self.average(),
            self.up_moves,
            self.down_moves
        )
    }
}

#[derive(Clone, Copy, Default, Debug)]
struct TrendScan {
    summary: Option<TrendSummary>,
}

impl Accumulator for TrendScan {
    #[inline]
    fn push(&mut self, _index: usize, price: Price) {
        let Some(s) = self.summary.as_mut() else {
            self.summary = Some(TrendSummary {
                len: 1,
                first: price,
                last: price,
                high: price,
                low: price,
                sum: price,
                up_moves: 0,
                down_moves: 0,
            });
            return;
        };

        if price > s.last {
            s.up_moves += 1;
        } else if price < s.last {
            s.down_moves += 1;
        }

        s.len += 1;
        s.last = price;
        s.high = s.high.max(price);
        s.low = s.low.min(price);
        s.sum += price;
    }
}

/// Summarizes `prices`: range, average and up/down step counts.
///
/// Returns `Ok(None)` for an empty series.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] for the first non-finite price.
///
/// # Example
///
/// ```
/// use tradewindow::{Trend, summarize_trend};
///
/// let summary = summarize_trend(&[10.0, 12.0, 11.0, 13.0]).unwrap().unwrap();
/// assert_eq!(summary.high(), 13.0);
/// assert_eq!(summary.average(), 11.5);
/// assert_eq!(summary.trend(), Trend::Bullish);
/// ```
pub fn summarize_trend(prices: &[Price]) -> Result<Option<TrendSummary>, AnalysisError> {
    let scan: TrendScan = fold_series(prices)?;
    Ok(scan.summary)
}

/// One step of a series compared to the step before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceMove {
    index: usize,
    price: Price,
    change: Price,
}

impl PriceMove {
    /// Position of this price in the series (never 0).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Difference to the previous price.
    #[must_use]
    pub fn change(&self) -> Price {
        self.change
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.change > 0.0 {
            Direction::Up
        } else if self.change < 0.0 {
            Direction::Down
        } else {
            Direction::Flat
        }
    }
}

impl Display for PriceMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {} ({:+})", self.index, self.price, self.change)
    }
}

/// Step-by-step changes of `prices`, one entry per price after the first.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] for the first non-finite price.
pub fn daily_moves(prices: &[Price]) -> Result<Vec<PriceMove>, AnalysisError> {
    crate::error::check_series(prices)?;

    Ok(prices
        .windows(2)
        .enumerate()
        .map(|(i, pair)| PriceMove {
            index: i + 1,
            price: pair[1],
            change: pair[1] - pair[0],
        })
        .collect())
}

/// Configuration for the [`TrendTracker`] analyzer.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TrendConfig {
    source: PriceSource,
}

impl AnalyzerConfig for TrendConfig {
    type Builder = TrendConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        TrendConfigBuilder {
            source: PriceSource::Close,
        }
    }

    #[inline]
    fn source(&self) -> &PriceSource {
        &self.source
    }
}

impl TrendConfig {
    /// Trend on closing prices.
    #[must_use]
    pub fn close() -> Self {
        Self::builder().build()
    }
}

impl Display for TrendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TrendConfig({})", self.source)
    }
}

/// Builder for [`TrendConfig`].
///
/// Defaults: source = [`PriceSource::Close`].
pub struct TrendConfigBuilder {
    source: PriceSource,
}

impl AnalyzerConfigBuilder<TrendConfig> for TrendConfigBuilder {
    #[inline]
    fn source(mut self, source: PriceSource) -> Self {
        self.source = source;
        self
    }

    #[inline]
    fn build(self) -> TrendConfig {
        TrendConfig {
            source: self.source,
        }
    }
}

/// Streaming [`TrendSummary`].
///
/// Produces a summary from the first bar on. Repaints replace the open
/// bar, so a tick that reverses direction within a bar is not counted
/// twice.
#[derive(Clone, Debug)]
pub struct TrendTracker {
    config: TrendConfig,
    fold: BarFold<TrendScan>,
}

impl Analyzer for TrendTracker {
    type Config = TrendConfig;
    type Output = TrendSummary;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            fold: BarFold::new(config.source),
        }
    }

    #[inline]
    fn compute(&mut self, kline: &impl Ohlcv) -> Result<Option<TrendSummary>, AnalysisError> {
        self.fold.add(kline).map(|scan| scan.summary)
    }

    #[inline]
    fn value(&self) -> Option<TrendSummary> {
        self.fold.current().summary
    }
}

impl Display for TrendTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Trend({})", self.config.source)
    }
}
