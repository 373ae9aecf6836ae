use crate::{AnalysisError, Ohlcv, PriceSource};

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Configuration for a streaming [`Analyzer`].
///
/// Configs are value types: cheap to copy, compare, and hash, so they can
/// key a map of running analyzers.
pub trait AnalyzerConfig: Sized + Copy + PartialEq + Eq + Hash + Display + Debug {
    /// Builder type for constructing this config.
    type Builder: AnalyzerConfigBuilder<Self>;

    /// Returns a new builder with default values.
    fn builder() -> Self::Builder;

    /// Price source to extract from each bar.
    fn source(&self) -> &PriceSource;
}

/// Builder for an [`AnalyzerConfig`].
pub trait AnalyzerConfigBuilder<Config>
where
    Config: AnalyzerConfig,
{
    /// Sets the price source.
    #[must_use]
    fn source(self, source: PriceSource) -> Self;

    /// Builds the config.
    #[must_use]
    fn build(self) -> Config;
}

/// A streaming price-series analysis.
///
/// Analyzers update incrementally on each call to
/// [`compute`](Analyzer::compute). Feeding a bar with the same
/// `open_time` as the previous one repaints that bar instead of appending
/// a new one, so live ticks can be streamed straight in.
///
/// # Example
///
/// ```
/// use tradewindow::{Analyzer, AnalyzerConfig, BestTrade, BestTradeConfig};
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
/// assert_eq!(finder.compute(&Bar(10.0, 1)), Ok(None));
/// let trade = finder.compute(&Bar(14.0, 2)).unwrap().unwrap();
/// assert_eq!(trade.profit(), 4.0);
/// ```
pub trait Analyzer: Sized + Clone + Display + Debug {
    /// Configuration type for this analyzer.
    type Config: AnalyzerConfig;

    /// Computed output type.
    type Output: Send + Sync + Display + Debug;

    /// Creates a new analyzer from the given config.
    fn new(config: Self::Config) -> Self;

    /// Feeds a bar and returns the updated result.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] if the configured price of
    /// `kline` is not finite. The analyzer state is left untouched.
    fn compute(&mut self, kline: &impl Ohlcv) -> Result<Option<Self::Output>, AnalysisError>;

    /// Returns the last computed result without advancing state.
    fn value(&self) -> Option<Self::Output>;
}
