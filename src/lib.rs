//! Best-trade search and related analyses over price series.
//!
//! The core is [`find_best_trade`]: the single buy-then-sell with the
//! largest profit, found in one linear pass. [`summarize_trend`],
//! [`RiskLevel`] and [`advise`] cover the surrounding market read-outs.
//!
//! Every series analysis has a streaming counterpart ([`BestTrade`],
//! [`TrendTracker`]) that accepts any type implementing [`Ohlcv`] and
//! supports repainting the open bar. They expose
//! [`new`](BestTrade::new), [`compute`](BestTrade::compute), and
//! [`value`](BestTrade::value) as inherent methods, no trait import
//! needed. Import [`Analyzer`] only for generic code.
//!
//! No profitable trade is `Ok(None)`, never an error. Errors are reserved
//! for non-finite prices ([`AnalysisError::InvalidInput`]).

mod advisor;
mod analyzer;
mod bar_fold;
mod error;
mod ohlcv;
mod price_source;
mod risk;
mod trade;
mod trend;

pub use crate::analyzer::{Analyzer, AnalyzerConfig, AnalyzerConfigBuilder};
pub use crate::error::AnalysisError;
pub use crate::ohlcv::{Ohlcv, Price, Timestamp};
pub use crate::price_source::PriceSource;

pub use crate::advisor::{
    AdvisorConfig, AdvisorConfigBuilder, MarketSnapshot, Recommendation, Sentiment, Volume,
    advise,
};
pub use crate::risk::RiskLevel;
pub use crate::trade::{
    BestTrade, BestTradeConfig, BestTradeConfigBuilder, Trade, find_best_trade,
    find_best_trade_in,
};
pub use crate::trend::{
    Direction, PriceMove, Trend, TrendConfig, TrendConfigBuilder, TrendSummary, TrendTracker,
    daily_moves, summarize_trend,
};

macro_rules! impl_analyzer_methods {
    ($type:ty, $config:ty, $output:ty) => {
        impl $type {
            /// See [`Analyzer::new`].
            #[must_use]
            pub fn new(config: $config) -> Self {
                <Self as Analyzer>::new(config)
            }

            /// See [`Analyzer::compute`].
            ///
            /// # Errors
            ///
            /// See [`Analyzer::compute`].
            #[inline]
            pub fn compute(
                &mut self,
                kline: &impl Ohlcv,
            ) -> Result<Option<$output>, AnalysisError> {
                <Self as Analyzer>::compute(self, kline)
            }

            /// See [`Analyzer::value`].
            #[must_use]
            #[inline]
            pub fn value(&self) -> Option<$output> {
                <Self as Analyzer>::value(self)
            }
        }
    };
}

impl_analyzer_methods!(BestTrade, BestTradeConfig, Trade);
impl_analyzer_methods!(TrendTracker, TrendConfig, TrendSummary);

#[cfg(test)]
mod test_util;
