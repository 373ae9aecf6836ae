use crate::{Ohlcv, Price, Timestamp};

/// Prices and percentages derived by division only need to agree to about
/// twelve significant digits.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e): (f64, f64) = ($actual, $expected);
        let tolerance = e.abs().max(1.0) * 1e-12;
        assert!(
            (a - e).abs() <= tolerance,
            "{a} is not within {tolerance} of {e}",
        );
    }};
}

pub(crate) use assert_approx;

/// Candle for unit tests. `day` doubles as the bar's `open_time`.
pub struct Bar {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub day: Timestamp,
}

impl Bar {
    /// Candle on day 0.
    pub fn ohlc(open: Price, high: Price, low: Price, close: Price) -> Self {
        Self {
            open,
            high,
            low,
            close,
            day: 0,
        }
    }

    pub fn on_day(self, day: Timestamp) -> Self {
        Self { day, ..self }
    }
}

/// Single quote for `day`: every OHLC field holds `price`.
pub fn bar(price: Price, day: Timestamp) -> Bar {
    Bar::ohlc(price, price, price, price).on_day(day)
}

impl Ohlcv for Bar {
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
        self.day
    }
}
