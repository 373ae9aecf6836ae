use thiserror::Error;

/// Errors returned by the analyses in this crate.
///
/// A series with no profitable trade is *not* an error; it is reported as
/// `Ok(None)`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    /// A price that is not a finite number (`NaN` or infinite).
    ///
    /// `index` is the position in the series, or the bar index for
    /// streaming analyzers. Input is validated before any computation, so
    /// nothing is partially applied.
    #[error("invalid price {value} at index {index}")]
    InvalidInput { index: usize, value: f64 },
}

/// Rejects non-finite prices.
#[inline]
pub(crate) fn check_price(index: usize, value: f64) -> Result<f64, AnalysisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(index, value, "rejecting non-finite price");
        Err(AnalysisError::InvalidInput { index, value })
    }
}

/// Validates a whole series up front.
pub(crate) fn check_series(prices: &[f64]) -> Result<(), AnalysisError> {
    prices
        .iter()
        .enumerate()
        .try_for_each(|(index, &value)| check_price(index, value).map(|_| ()))
}
