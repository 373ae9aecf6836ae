/// A price value.
///
/// Semantic alias for [`f64`]. Analyses reject non-finite prices with
/// [`AnalysisError::InvalidInput`](crate::AnalysisError::InvalidInput).
pub type Price = f64;

/// Bar open timestamp or sequence number (e.g. a trading day).
///
/// Must be non-decreasing between consecutive calls to
/// [`Analyzer::compute`](crate::Analyzer::compute).
pub type Timestamp = u64;

/// Bar data fed into the streaming analyzers.
///
/// Implement this on your own candle or daily-quote type. Analyzers take
/// `&impl Ohlcv` and pull the configured [`PriceSource`](crate::PriceSource)
/// out of it, so no per-bar conversion is needed.
///
/// A quote feed that only carries one price per day can return that
/// price from all four accessors.
///
/// # Example
///
/// ```
/// use tradewindow::{Ohlcv, Price, Timestamp};
///
/// struct DailyQuote {
///     day: u64,
///     price: f64,
/// }
///
/// impl Ohlcv for DailyQuote {
///     fn open(&self) -> Price { self.price }
///     fn high(&self) -> Price { self.price }
///     fn low(&self) -> Price { self.price }
///     fn close(&self) -> Price { self.price }
///     fn open_time(&self) -> Timestamp { self.day }
/// }
/// ```
pub trait Ohlcv {
    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing (or latest) price of the bar.
    fn close(&self) -> Price;

    /// Bar open timestamp or sequence number.
    ///
    /// Repeating the previous value repaints the current bar; a larger
    /// value starts the next one.
    fn open_time(&self) -> Timestamp;
}
