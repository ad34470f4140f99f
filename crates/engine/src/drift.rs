//! Run-over-run factor drift.

use quantrank_primitives::{AnalysisSnapshot, Factor, Horizon};

/// Change in one factor's ridge weight between two runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorDelta {
    /// Factor being compared.
    pub factor: Factor,
    /// Weight in the previous snapshot.
    pub previous: f64,
    /// Weight in the current snapshot.
    pub current: f64,
    /// Absolute change.
    pub delta: f64,
    /// Percentage change relative to the previous weight; 0 when the
    /// previous weight was 0.
    pub pct_change: f64,
}

/// Informational comparison of two consecutive runs for one horizon.
///
/// Computed from the ridge-regression results; it never feeds back into
/// the model.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftReport {
    /// Horizon the comparison was made on.
    pub horizon: Horizon,
    /// Per-factor weight changes, in [`Factor::ALL`] order.
    pub factors: Vec<FactorDelta>,
    /// Change in ridge R².
    pub r2_delta: f64,
    /// Change in usable sample count.
    pub samples_delta: i64,
}

/// Compare two snapshots on the reference horizon.
///
/// Returns `None` when either snapshot has no results for that horizon.
#[must_use]
pub fn compute_drift(
    previous: &AnalysisSnapshot,
    current: &AnalysisSnapshot,
    horizon: Horizon,
) -> Option<DriftReport> {
    let prev = previous.report(horizon)?;
    let curr = current.report(horizon)?;

    let factors = Factor::ALL
        .iter()
        .map(|&factor| {
            let previous = prev.ridge_regression.factors.get(factor);
            let current = curr.ridge_regression.factors.get(factor);
            let delta = current - previous;
            let pct_change = if previous == 0.0 { 0.0 } else { delta / previous * 100.0 };
            FactorDelta { factor, previous, current, delta, pct_change }
        })
        .collect();

    Some(DriftReport {
        horizon,
        factors,
        r2_delta: curr.ridge_regression.r2 - prev.ridge_regression.r2,
        samples_delta: curr.samples as i64 - prev.samples as i64,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};
    use quantrank_primitives::{
        Date, FactorWeights, HorizonReport, LinearReport, RidgeReport,
    };

    use super::*;

    fn snapshot_with(weights: FactorWeights, r2: f64, samples: usize) -> AnalysisSnapshot {
        let mut snapshot = AnalysisSnapshot::new(
            Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap(),
            Date::from_ymd_opt(2026, 8, 7).unwrap(),
            samples,
        );
        snapshot.insert(
            Horizon::D90,
            HorizonReport {
                samples,
                features: 16,
                linear_regression: LinearReport { r2: r2 + 0.05, factors: weights },
                ridge_regression: RidgeReport { r2, lambda: 1.0, factors: weights },
                top_features: Vec::new(),
            },
        );
        snapshot
    }

    #[test]
    fn deltas_compare_ridge_factors() {
        let previous = snapshot_with(
            FactorWeights { value: 0.4, quality: 0.2, growth: 0.2, momentum: 0.0, risk: 0.2 },
            0.30,
            40,
        );
        let current = snapshot_with(
            FactorWeights { value: 0.3, quality: 0.25, growth: 0.2, momentum: 0.05, risk: 0.2 },
            0.36,
            44,
        );

        let drift = compute_drift(&previous, &current, Horizon::D90).unwrap();
        assert_eq!(drift.factors.len(), 5);

        let value = drift.factors[0];
        assert_eq!(value.factor, Factor::Value);
        assert_relative_eq!(value.delta, -0.1, epsilon = 1e-12);
        assert_relative_eq!(value.pct_change, -25.0, epsilon = 1e-9);

        // Previous momentum weight was 0: pct change pins to 0.
        let momentum = drift.factors[3];
        assert_relative_eq!(momentum.delta, 0.05, epsilon = 1e-12);
        assert_eq!(momentum.pct_change, 0.0);

        assert_relative_eq!(drift.r2_delta, 0.06, epsilon = 1e-12);
        assert_eq!(drift.samples_delta, 4);
    }

    #[test]
    fn absent_horizon_yields_none() {
        let with_report = snapshot_with(FactorWeights::EQUAL, 0.2, 30);
        let empty = AnalysisSnapshot::new(
            Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap(),
            Date::from_ymd_opt(2026, 8, 7).unwrap(),
            30,
        );

        assert!(compute_drift(&empty, &with_report, Horizon::D90).is_none());
        assert!(compute_drift(&with_report, &empty, Horizon::D90).is_none());
        assert!(compute_drift(&with_report, &with_report, Horizon::D180).is_none());
    }
}
