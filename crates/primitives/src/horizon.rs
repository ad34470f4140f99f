//! Forward-return horizons.

use serde::{Deserialize, Serialize};

/// A forward-return window used as a regression target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    /// 30 calendar days.
    D30,
    /// 90 calendar days.
    D90,
    /// 180 calendar days.
    D180,
    /// 365 calendar days.
    D365,
}

impl Horizon {
    /// All horizons in the fixed processing order.
    pub const ALL: [Self; 4] = [Self::D30, Self::D90, Self::D180, Self::D365];

    /// Window length in calendar days.
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::D30 => 30,
            Self::D90 => 90,
            Self::D180 => 180,
            Self::D365 => 365,
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.days())
    }
}

/// Realized percentage returns per horizon.
///
/// A `None` entry means the price series had no observation old enough to
/// anchor that horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizonReturns {
    /// 30-day realized return, percent.
    pub d30: Option<f64>,
    /// 90-day realized return, percent.
    pub d90: Option<f64>,
    /// 180-day realized return, percent.
    pub d180: Option<f64>,
    /// 365-day realized return, percent.
    pub d365: Option<f64>,
}

impl HorizonReturns {
    /// Look up the return for a horizon.
    #[must_use]
    pub const fn get(self, horizon: Horizon) -> Option<f64> {
        match horizon {
            Horizon::D30 => self.d30,
            Horizon::D90 => self.d90,
            Horizon::D180 => self.d180,
            Horizon::D365 => self.d365,
        }
    }

    /// Set the return for a horizon.
    pub const fn set(&mut self, horizon: Horizon, value: Option<f64>) {
        match horizon {
            Horizon::D30 => self.d30 = value,
            Horizon::D90 => self.d90 = value,
            Horizon::D180 => self.d180 = value,
            Horizon::D365 => self.d365 = value,
        }
    }

    /// Whether any of the 30/90/180-day returns is present.
    ///
    /// This is the collector's inclusion rule: a snapshot carrying only a
    /// 365-day return is excluded. The 365-day horizon is intentionally not
    /// consulted here.
    #[must_use]
    pub const fn has_recent(self) -> bool {
        self.d30.is_some() || self.d90.is_some() || self.d180.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_display() {
        assert_eq!(Horizon::D30.to_string(), "30d");
        assert_eq!(Horizon::D365.to_string(), "365d");
    }

    #[test]
    fn processing_order_is_ascending() {
        let days: Vec<i64> = Horizon::ALL.iter().map(|h| h.days()).collect();
        assert_eq!(days, vec![30, 90, 180, 365]);
    }

    #[test]
    fn has_recent_ignores_365d() {
        let only_long = HorizonReturns { d365: Some(42.0), ..HorizonReturns::default() };
        assert!(!only_long.has_recent());

        let with_180 = HorizonReturns { d180: Some(-3.0), ..HorizonReturns::default() };
        assert!(with_180.has_recent());
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut returns = HorizonReturns::default();
        returns.set(Horizon::D90, Some(12.5));
        assert_eq!(returns.get(Horizon::D90), Some(12.5));
        assert_eq!(returns.get(Horizon::D30), None);
    }
}
