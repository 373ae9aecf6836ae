use std::fmt::Display;

use crate::{AnalysisError, error::check_price};

/// Volatility bucket for a percentage price change over a period
/// (typically 24h).
///
/// Direction is ignored: a 2% drop scores the same as a 2% gain.
///
/// # Example
///
/// ```
/// use tradewindow::RiskLevel;
///
/// let level = RiskLevel::from_change_pct(-1.2);
/// assert_eq!(level, RiskLevel::High);
/// assert_eq!(level.score(), 4);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum RiskLevel {
    /// `|change| < 0.2%`.
    Flat,
    /// `0.2% <= |change| < 0.5%`.
    Low,
    /// `0.5% <= |change| < 1.0%`.
    Moderate,
    /// `1.0% <= |change| < 1.5%`.
    High,
    /// `|change| >= 1.5%`.
    Extreme,
}

impl RiskLevel {
    /// Buckets `change_pct` by its absolute value.
    ///
    /// An infinite change scores [`Extreme`](Self::Extreme); `NaN` compares
    /// below every bound and scores [`Flat`](Self::Flat). Use
    /// [`try_from_change_pct`](Self::try_from_change_pct) to reject both.
    #[must_use]
    pub fn from_change_pct(change_pct: f64) -> Self {
        let abs = change_pct.abs();

        if abs >= 1.5 {
            Self::Extreme
        } else if abs >= 1.0 {
            Self::High
        } else if abs >= 0.5 {
            Self::Moderate
        } else if abs >= 0.2 {
            Self::Low
        } else {
            Self::Flat
        }
    }

    /// Like [`from_change_pct`](Self::from_change_pct) but rejects `NaN`
    /// and infinities.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidInput`] with index 0.
    pub fn try_from_change_pct(change_pct: f64) -> Result<Self, AnalysisError> {
        check_price(0, change_pct).map(Self::from_change_pct)
    }

    /// Score from 1 (flat) to 5 (extreme).
    #[must_use]
    pub fn score(self) -> u8 {
        match self {
            Self::Flat => 1,
            Self::Low => 2,
            Self::Moderate => 3,
            Self::High => 4,
            Self::Extreme => 5,
        }
    }

    /// Human readable assessment.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Flat => "Very low volatility. Market currently flat.",
            Self::Low => "Low volatility. Consolidation period.",
            Self::Moderate => "Moderate volatility. Standard market movement.",
            Self::High => "High volatility detected. Watch closely.",
            Self::Extreme => "EXTREME VOLATILITY. Potential major market shift.",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5 {}", self.score(), self.summary())
    }
}
