use crate::{AnalysisError, Ohlcv, Price, PriceSource, Timestamp, error::check_price};

/// Single-pass state folded over a price series, one price per bar.
pub(crate) trait Accumulator: Copy + Default {
    fn push(&mut self, index: usize, price: Price);
}

/// Folds an [`Accumulator`] over a bar stream with repaint support.
///
/// `committed` holds the state of every closed bar; `current` is
/// `committed` plus the latest price of the open bar. A repaint rebuilds
/// `current` from `committed`, so intermediate ticks leave no trace.
#[derive(Clone, Debug)]
pub(crate) struct BarFold<A> {
    source: PriceSource,
    committed: A,
    current: A,
    bars: usize,
    last_open_time: Option<Timestamp>,
}

impl<A: Accumulator> BarFold<A> {
    pub fn new(source: PriceSource) -> Self {
        Self {
            source,
            committed: A::default(),
            current: A::default(),
            bars: 0,
            last_open_time: None,
        }
    }

    #[inline]
    pub fn add(&mut self, ohlcv: &impl Ohlcv) -> Result<&A, AnalysisError> {
        debug_assert!(
            self.last_open_time.is_none_or(|t| t <= ohlcv.open_time()),
            "open_time must be non-decreasing: last={}, got={}",
            self.last_open_time.unwrap_or(0),
            ohlcv.open_time(),
        );

        let is_next_timeframe = self.last_open_time.is_none_or(|t| t < ohlcv.open_time());
        let index = if is_next_timeframe {
            self.bars
        } else {
            self.bars - 1
        };

        let price = check_price(index, self.source.extract(ohlcv))?;

        if is_next_timeframe {
            self.committed = self.current;
            self.last_open_time = Some(ohlcv.open_time());
            self.bars += 1;
        }

        self.current = self.committed;
        self.current.push(index, price);

        Ok(&self.current)
    }

    /// State including the open bar.
    #[inline]
    pub fn current(&self) -> &A {
        &self.current
    }

    /// Number of distinct bars seen.
    #[cfg(test)]
    pub fn bars(&self) -> usize {
        self.bars
    }
}

/// Runs an [`Accumulator`] over a plain series, validating it first.
pub(crate) fn fold_series<A: Accumulator>(prices: &[Price]) -> Result<A, AnalysisError> {
    crate::error::check_series(prices)?;

    let mut acc = A::default();
    for (index, &price) in prices.iter().enumerate() {
        acc.push(index, price);
    }

    Ok(acc)
}
