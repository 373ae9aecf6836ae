use std::fmt::{Debug, Display};

use crate::{
    AnalysisError, Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, Ohlcv, Price, PriceSource,
    bar_fold::{Accumulator, BarFold, fold_series},
};

/// A buy followed by a later sell, with positive profit.
///
/// Indices are 0-based positions in the series (or bar indices for
/// [`BestTrade`]). `buy_index < sell_index` and `profit > 0` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trade {
    buy_index: usize,
    sell_index: usize,
    buy_price: Price,
    sell_price: Price,
    profit: Price,
}

impl Trade {
    /// Position of the buy.
    #[must_use]
    #[inline]
    pub fn buy_index(&self) -> usize {
        self.buy_index
    }

    /// Position of the sell. Always after [`buy_index`](Self::buy_index).
    #[must_use]
    #[inline]
    pub fn sell_index(&self) -> usize {
        self.sell_index
    }

    #[must_use]
    #[inline]
    pub fn buy_price(&self) -> Price {
        self.buy_price
    }

    #[must_use]
    #[inline]
    pub fn sell_price(&self) -> Price {
        self.sell_price
    }

    /// `sell_price - buy_price`, strictly positive.
    ///
    /// Prices are only checked to be finite, so two prices near the
    /// opposite ends of the `f64` range can overflow to `+inf`. The indices
    /// still identify the best trade.
    #[must_use]
    #[inline]
    pub fn profit(&self) -> Price {
        self.profit
    }

    /// Number of steps the position is held.
    #[must_use]
    #[inline]
    pub fn holding_period(&self) -> usize {
        self.sell_index - self.buy_index
    }

    /// Profit as a percentage of the buy price.
    #[must_use]
    #[inline]
    pub fn return_pct(&self) -> f64 {
        self.profit / self.buy_price * 100.0
    }
}

impl Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "buy #{} @ {} -> sell #{} @ {} (+{})",
            self.buy_index, self.buy_price, self.sell_index, self.sell_price, self.profit
        )
    }
}

/// Running minimum plus best trade so far.
#[derive(Clone, Copy, Default, Debug)]
struct TradeScan {
    min: Option<(usize, Price)>,
    best: Option<Trade>,
}

impl Accumulator for TradeScan {
    #[inline]
    fn push(&mut self, index: usize, price: Price) {
        let Some((min_index, min_price)) = self.min else {
            self.min = Some((index, price));
            return;
        };

        let profit = price - min_price;
        if profit > self.best.map_or(0.0, |t| t.profit) {
            self.best = Some(Trade {
                buy_index: min_index,
                sell_index: index,
                buy_price: min_price,
                sell_price: price,
                profit,
            });
        }

        // Strictly lower keeps the earliest of equal minima.
        if price < min_price {
            self.min = Some((index, price));
        }
    }
}

/// Finds the most profitable single buy-then-sell over `prices`.
///
/// Returns `Ok(None)` when no pair yields a strictly positive profit,
/// including series with fewer than two prices. Among trades with equal
/// profit the one with the earliest buy wins, then the earliest sell.
///
/// Runs in one linear pass: the best sell at position `i` always buys at
/// the lowest price seen before `i`.
///
/// # Errors
///
/// [`AnalysisError::InvalidInput`] for the first non-finite price. The
/// whole series is checked before the scan starts.
///
/// # Example
///
/// ```
/// use tradewindow::find_best_trade;
///
/// let trade = find_best_trade(&[1.0, 10.0, 2.0, 9.0]).unwrap().unwrap();
/// assert_eq!((trade.buy_index(), trade.sell_index()), (0, 1));
/// assert_eq!(trade.profit(), 9.0);
///
/// assert_eq!(find_best_trade(&[10.0, 9.0, 8.0, 7.0]), Ok(None));
/// ```
pub fn find_best_trade(prices: &[Price]) -> Result<Option<Trade>, AnalysisError> {
    let scan: TradeScan = fold_series(prices)?;

    match &scan.best {
        Some(trade) => tracing::trace!(len = prices.len(), %trade, "best trade found"),
        None => tracing::trace!(len = prices.len(), "no profitable trade"),
    }

    Ok(scan.best)
}

/// [`find_best_trade`] over the `source` price of each bar.
///
/// # Errors
///
/// Same as [`find_best_trade`]; `index` is the bar position.
pub fn find_best_trade_in<B: Ohlcv>(
    bars: &[B],
    source: PriceSource,
) -> Result<Option<Trade>, AnalysisError> {
    let prices: Vec<Price> = bars.iter().map(|bar| source.extract(bar)).collect();
    find_best_trade(&prices)
}

/// Configuration for the [`BestTrade`] analyzer.
///
/// # Example
///
/// ```rust
/// use tradewindow::{AnalyzerConfig, BestTradeConfig, PriceSource};
///
/// let config = BestTradeConfig::close();
/// assert_eq!(*config.source(), PriceSource::Close);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct BestTradeConfig {
    source: PriceSource,
}

impl AnalyzerConfig for BestTradeConfig {
    type Builder = BestTradeConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        BestTradeConfigBuilder::new()
    }

    #[inline]
    fn source(&self) -> &PriceSource {
        &self.source
    }
}

impl BestTradeConfig {
    /// Best trade on closing prices.
    #[must_use]
    pub fn close() -> Self {
        Self::builder().build()
    }

    /// Best trade on median price: `(high + low) / 2`.
    #[must_use]
    pub fn hl2() -> Self {
        Self::builder().source(PriceSource::HL2).build()
    }
}

impl Display for BestTradeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BestTradeConfig({})", self.source)
    }
}

/// Builder for [`BestTradeConfig`].
///
/// Defaults: source = [`PriceSource::Close`].
pub struct BestTradeConfigBuilder {
    source: PriceSource,
}

impl BestTradeConfigBuilder {
    fn new() -> Self {
        Self {
            source: PriceSource::Close,
        }
    }
}

impl AnalyzerConfigBuilder<BestTradeConfig> for BestTradeConfigBuilder {
    #[inline]
    fn source(mut self, source: PriceSource) -> Self {
        self.source = source;
        self
    }

    #[inline]
    fn build(self) -> BestTradeConfig {
        BestTradeConfig {
            source: self.source,
        }
    }
}

/// Streaming best-trade finder.
///
/// After every bar, [`value`](Self::value) equals [`find_best_trade`] run
/// over all bars seen so far. Each update is O(1). Repainting the open bar
/// (same `open_time`) replaces its price instead of appending.
///
/// # Example
///
/// ```rust
/// use tradewindow::{BestTrade, BestTradeConfig};
/// # use tradewindow::{Ohlcv, Price, Timestamp};
/// #
/// # struct Bar(f64, u64);
/// # impl Ohlcv for Bar {
/// #     fn open(&self) -> Price { self.0 }
/// #     fn high(&self) -> Price { self.0 }
/// #     fn low(&self) -> Price { self.0 }
/// #     fn close(&self) -> Price { self.0 }
/// #     fn open_time(&self) -> Timestamp { self.1 }
/// # }
///
/// let mut finder = BestTrade::new(BestTradeConfig::close());
///
/// assert_eq!(finder.compute(&Bar(4185.0, 1)), Ok(None));
/// let trade = finder.compute(&Bar(4210.0, 2)).unwrap().unwrap();
/// assert_eq!(trade.profit(), 25.0);
///
/// // Repaint day 2 below the day 1 price: the opportunity disappears.
/// assert_eq!(finder.compute(&Bar(4180.0, 2)), Ok(None));
/// ```
#[derive(Clone, Debug)]
pub struct BestTrade {
    config: BestTradeConfig,
    fold: BarFold<TradeScan>,
}

impl Analyzer for BestTrade {
    type Config = BestTradeConfig;
    type Output = Trade;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            fold: BarFold::new(config.source),
        }
    }

    #[inline]
    fn compute(&mut self, kline: &impl Ohlcv) -> Result<Option<Trade>, AnalysisError> {
        self.fold.add(kline).map(|scan| scan.best)
    }

    #[inline]
    fn value(&self) -> Option<Trade> {
        self.fold.current().best
    }
}

impl Display for BestTrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BestTrade({})", self.config.source)
    }
}
