//! Economic factor taxonomy types.

use serde::{Deserialize, Serialize};

/// One of the five fixed economic factors features are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    /// Valuation multiples.
    Value,
    /// Profitability and ownership quality.
    Quality,
    /// Revenue and earnings growth.
    Growth,
    /// Trading activity.
    Momentum,
    /// Volatility, leverage, and size.
    Risk,
}

impl Factor {
    /// All factors in display order.
    pub const ALL: [Self; 5] =
        [Self::Value, Self::Quality, Self::Growth, Self::Momentum, Self::Risk];
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Value => "value",
            Self::Quality => "quality",
            Self::Growth => "growth",
            Self::Momentum => "momentum",
            Self::Risk => "risk",
        };
        f.write_str(name)
    }
}

/// Normalized per-factor weights.
///
/// Outside the equal-weight fallback the five entries are non-negative and
/// sum to 1 within floating tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Weight of the value factor.
    pub value: f64,
    /// Weight of the quality factor.
    pub quality: f64,
    /// Weight of the growth factor.
    pub growth: f64,
    /// Weight of the momentum factor.
    pub momentum: f64,
    /// Weight of the risk factor.
    pub risk: f64,
}

impl FactorWeights {
    /// Equal-weight fallback used when total feature importance is zero.
    pub const EQUAL: Self =
        Self { value: 0.2, quality: 0.2, growth: 0.2, momentum: 0.2, risk: 0.2 };

    /// Look up the weight for a factor.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Value => self.value,
            Factor::Quality => self.quality,
            Factor::Growth => self.growth,
            Factor::Momentum => self.momentum,
            Factor::Risk => self.risk,
        }
    }

    /// Sum of the five weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.value + self.quality + self.growth + self.momentum + self.risk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_fallback_sums_to_one() {
        assert_eq!(FactorWeights::EQUAL.sum(), 1.0);
    }

    #[test]
    fn get_matches_fields() {
        let weights =
            FactorWeights { value: 0.5, quality: 0.2, growth: 0.1, momentum: 0.1, risk: 0.1 };
        assert_eq!(weights.get(Factor::Value), 0.5);
        assert_eq!(weights.get(Factor::Risk), 0.1);
    }

    #[test]
    fn factor_serializes_lowercase() {
        let json = serde_json::to_string(&Factor::Quality).unwrap();
        assert_eq!(json, "\"quality\"");
    }
}
