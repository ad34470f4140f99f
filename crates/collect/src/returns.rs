//! Realized forward-return calculation.

use chrono::Duration;
use quantrank_primitives::{Date, Horizon, HorizonReturns, PricePoint};

/// Compute realized percentage returns over the fixed horizons.
///
/// `history` is ordered most-recent-first; the current price is its first
/// entry. For each horizon the anchor is the most recent observation at or
/// before `as_of` minus the horizon length — no interpolation between
/// dates. A horizon with no old-enough observation, or whose anchor price
/// is not positive, stays `None`.
#[must_use]
pub fn realized_returns(history: &[PricePoint], as_of: Date) -> HorizonReturns {
    let mut returns = HorizonReturns::default();

    let Some(current) = history.first() else {
        return returns;
    };

    for horizon in Horizon::ALL {
        let target = as_of - Duration::days(horizon.days());
        let anchor = history.iter().find(|point| point.date <= target);

        if let Some(anchor) = anchor {
            if anchor.close > 0.0 {
                let pct = (current.close - anchor.close) / anchor.close * 100.0;
                returns.set(horizon, Some(pct));
            }
        }
    }

    returns
}
