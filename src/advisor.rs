use std::fmt::Display;

use crate::Price;

/// Prevailing market mood.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum Sentiment {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

/// Coarse trading volume bucket.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum Volume {
    High,
    #[default]
    Low,
}

/// Market conditions at the time of a decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketSnapshot {
    pub price: Price,
    /// Percentage change over the last 24 hours.
    pub change_pct: f64,
    pub sentiment: Sentiment,
    pub volume: Volume,
    /// Whether the price trades close to its 52-week high.
    pub near_52w_high: bool,
}

/// Outcome of [`advise`].
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Recommendation {
    StrongBuy,
    Buy,
    StrongSell,
    ConsiderSelling,
    /// Momentum is positive but the price is above the buy threshold.
    HoldPriceTooHigh,
    Hold,
}

impl Recommendation {
    #[must_use]
    pub fn reasoning(self) -> &'static str {
        match self {
            Self::StrongBuy => {
                "Strong momentum, positive sentiment, high volume, and price is below threshold."
            }
            Self::Buy => "Moderate upward trend, price below threshold.",
            Self::StrongSell => {
                "Significant drop with negative sentiment. Exiting while volume is high."
            }
            Self::ConsiderSelling => {
                "Downward trend with bearish sentiment. Check volume before selling."
            }
            Self::HoldPriceTooHigh => "Momentum is positive, but price is above the buy threshold.",
            Self::Hold => "No clear directional signal, or conditions are too risky.",
        }
    }
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::StrongBuy => "STRONG BUY",
            Self::Buy => "BUY",
            Self::StrongSell => "STRONG SELL",
            Self::ConsiderSelling => "CONSIDER SELLING",
            Self::HoldPriceTooHigh => "HOLD (Price Too High)",
            Self::Hold => "HOLD",
        };
        f.write_str(label)
    }
}

/// Thresholds used by [`advise`].
///
/// # Example
///
/// ```rust
/// use tradewindow::AdvisorConfig;
///
/// let config = AdvisorConfig::builder().buy_threshold(4250.0).build();
/// assert_eq!(config.strong_move_pct(), 2.0);
/// ```
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct AdvisorConfig {
    buy_threshold: Price,
    strong_move_pct: f64,
    move_pct: f64,
}

impl AdvisorConfig {
    /// Returns a new builder with default values.
    #[must_use]
    pub fn builder() -> AdvisorConfigBuilder {
        AdvisorConfigBuilder::new()
    }

    /// Highest price at which buying is considered.
    #[must_use]
    pub fn buy_threshold(&self) -> Price {
        self.buy_threshold
    }

    /// 24h change (in %) that counts as a strong move.
    #[must_use]
    pub fn strong_move_pct(&self) -> f64 {
        self.strong_move_pct
    }

    /// 24h change (in %) that counts as a move at all.
    #[must_use]
    pub fn move_pct(&self) -> f64 {
        self.move_pct
    }
}

impl Display for AdvisorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AdvisorConfig({}, {}%, {}%)",
            self.buy_threshold, self.strong_move_pct, self.move_pct
        )
    }
}

/// Builder for [`AdvisorConfig`].
///
/// Defaults: strong move = 2%, move = 0.5%.
/// Buy threshold must be set before calling [`build`](Self::build).
pub struct AdvisorConfigBuilder {
    buy_threshold: Option<Price>,
    strong_move_pct: f64,
    move_pct: f64,
}

impl AdvisorConfigBuilder {
    fn new() -> Self {
        Self {
            buy_threshold: None,
            strong_move_pct: 2.0,
            move_pct: 0.5,
        }
    }

    #[must_use]
    pub fn buy_threshold(mut self, price: Price) -> Self {
        self.buy_threshold.replace(price);
        self
    }

    #[must_use]
    pub fn strong_move_pct(mut self, pct: f64) -> Self {
        self.strong_move_pct = pct;
        self
    }

    #[must_use]
    pub fn move_pct(mut self, pct: f64) -> Self {
        self.move_pct = pct;
        self
    }

    /// Builds the config. Panics if the buy threshold is missing.
    #[must_use]
    pub fn build(self) -> AdvisorConfig {
        AdvisorConfig {
            buy_threshold: self.buy_threshold.expect("buy_threshold is required"),
            strong_move_pct: self.strong_move_pct,
            move_pct: self.move_pct,
        }
    }
}

/// Rule-based buy/sell/hold decision. The first matching rule wins:
///
/// 1. strong buy: strong rise, bullish, below threshold, high volume
/// 2. buy: rise, not bearish, below threshold
/// 3. strong sell: strong drop, bearish, high volume and not near the 52w high
/// 4. consider selling: drop, bearish
/// 5. hold, flagged as price-too-high when only the threshold blocked a buy
///
/// # Example
///
/// ```
/// use tradewindow::{AdvisorConfig, MarketSnapshot, Recommendation, Sentiment, Volume, advise};
///
/// let config = AdvisorConfig::builder().buy_threshold(4250.0).build();
/// let market = MarketSnapshot {
///     price: 4200.0,
///     change_pct: 2.5,
///     sentiment: Sentiment::Bullish,
///     volume: Volume::High,
///     near_52w_high: false,
/// };
///
/// assert_eq!(advise(&market, &config), Recommendation::StrongBuy);
/// ```
#[must_use]
pub fn advise(market: &MarketSnapshot, config: &AdvisorConfig) -> Recommendation {
    let below_threshold = market.price < config.buy_threshold;
    let high_volume = market.volume == Volume::High;
    let safe_to_sell = high_volume && !market.near_52w_high;
    let change = market.change_pct;

    let recommendation = if change > config.strong_move_pct
        && market.sentiment == Sentiment::Bullish
        && below_threshold
        && high_volume
    {
        Recommendation::StrongBuy
    } else if change > config.move_pct && market.sentiment != Sentiment::Bearish && below_threshold
    {
        Recommendation::Buy
    } else if change < -config.strong_move_pct
        && market.sentiment == Sentiment::Bearish
        && safe_to_sell
    {
        Recommendation::StrongSell
    } else if change < -config.move_pct && market.sentiment == Sentiment::Bearish {
        Recommendation::ConsiderSelling
    } else if !below_threshold
        && (change > config.move_pct || market.sentiment == Sentiment::Bullish)
    {
        Recommendation::HoldPriceTooHigh
    } else {
        Recommendation::Hold
    };

    tracing::debug!(
        price = market.price,
        change_pct = change,
        sentiment = ?market.sentiment,
        %recommendation,
        "advisor decision"
    );

    recommendation
}
