//! Feature-matrix assembly from instrument snapshots.

use ndarray::{Array1, Array2};
use quantrank_primitives::{Feature, FeatureMatrix, Horizon, InstrumentSnapshot};

/// Build the design matrix for one target horizon.
///
/// A snapshot contributes a row only when the target return is present and
/// every feature in [`Feature::ALL`] is a finite number; rows with any
/// missing, NaN, or infinite value are dropped whole, with no imputation.
/// Realized returns are targets only and never appear as columns.
#[must_use]
pub fn build_feature_matrix(
    snapshots: &[InstrumentSnapshot],
    horizon: Horizon,
) -> FeatureMatrix {
    let features: Vec<Feature> = Feature::ALL.to_vec();

    let mut rows: Vec<[f64; 16]> = Vec::new();
    let mut targets: Vec<f64> = Vec::new();
    let mut symbols = Vec::new();

    'snapshots: for snapshot in snapshots {
        let Some(target) = snapshot.returns.get(horizon) else {
            continue;
        };
        if !target.is_finite() {
            continue;
        }

        let mut row = [0.0; 16];
        for (j, &feature) in features.iter().enumerate() {
            match snapshot.feature(feature) {
                Some(value) if value.is_finite() => row[j] = value,
                _ => continue 'snapshots,
            }
        }

        rows.push(row);
        targets.push(target);
        symbols.push(snapshot.symbol.clone());
    }

    let n = rows.len();
    let p = features.len();
    let mut x = Array2::zeros((n, p));
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            x[[i, j]] = value;
        }
    }

    FeatureMatrix { horizon, features, x, y: Array1::from_vec(targets), symbols }
}

#[cfg(test)]
mod tests {
    use quantrank_primitives::{FundamentalMetrics, HorizonReturns, Symbol};

    use super::*;

    fn complete_metrics(seed: f64) -> FundamentalMetrics {
        FundamentalMetrics {
            pe_ratio: Some(15.0 + seed),
            pb_ratio: Some(2.0 + seed),
            ps_ratio: Some(3.0 + seed),
            forward_pe: Some(12.0 + seed),
            roe: Some(0.15),
            roa: Some(0.08),
            profit_margin: Some(0.2),
            debt_to_equity: Some(0.9),
            revenue_growth_qoq: Some(0.05),
            earnings_growth_qoq: Some(0.04),
            beta: Some(1.1),
            market_cap: Some(1.0e10 * (1.0 + seed)),
            avg_volume: Some(2.0e6),
            shares_outstanding: Some(5.0e8),
            insider_percent: Some(1.5),
            institution_percent: Some(70.0),
        }
    }

    fn snapshot(symbol: &str, metrics: FundamentalMetrics, d90: Option<f64>) -> InstrumentSnapshot {
        InstrumentSnapshot::new(
            Symbol::new(symbol),
            metrics,
            HorizonReturns { d90, ..HorizonReturns::default() },
        )
    }

    #[test]
    fn complete_rows_survive() {
        let snapshots = vec![
            snapshot("A", complete_metrics(0.0), Some(5.0)),
            snapshot("B", complete_metrics(1.0), Some(-2.0)),
        ];

        let matrix = build_feature_matrix(&snapshots, Horizon::D90);
        assert_eq!(matrix.n_samples(), 2);
        assert_eq!(matrix.n_features(), Feature::ALL.len());
        assert_eq!(matrix.symbols, vec![Symbol::new("A"), Symbol::new("B")]);
        assert!(matrix.x.iter().all(|v| v.is_finite()));
        assert!(matrix.y.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn missing_target_drops_row() {
        let snapshots = vec![
            snapshot("A", complete_metrics(0.0), None),
            snapshot("B", complete_metrics(1.0), Some(3.0)),
        ];

        let matrix = build_feature_matrix(&snapshots, Horizon::D90);
        assert_eq!(matrix.n_samples(), 1);
        assert_eq!(matrix.symbols, vec![Symbol::new("B")]);
    }

    #[test]
    fn incomplete_features_drop_whole_row() {
        let mut holey = complete_metrics(0.0);
        holey.roe = None;
        let mut poisoned = complete_metrics(0.0);
        poisoned.beta = Some(f64::NAN);
        let mut infinite = complete_metrics(0.0);
        infinite.market_cap = Some(f64::INFINITY);

        let snapshots = vec![
            snapshot("A", holey, Some(1.0)),
            snapshot("B", poisoned, Some(1.0)),
            snapshot("C", infinite, Some(1.0)),
            snapshot("D", complete_metrics(0.5), Some(1.0)),
        ];

        let matrix = build_feature_matrix(&snapshots, Horizon::D90);
        assert_eq!(matrix.n_samples(), 1);
        assert_eq!(matrix.symbols, vec![Symbol::new("D")]);
    }

    #[test]
    fn target_horizon_is_scoped() {
        // Only a 90-day return; the 30-day matrix must be empty.
        let snapshots = vec![snapshot("A", complete_metrics(0.0), Some(4.0))];

        let matrix = build_feature_matrix(&snapshots, Horizon::D30);
        assert!(matrix.is_empty());
        assert_eq!(matrix.n_features(), Feature::ALL.len());
    }

    #[test]
    fn feature_order_is_canonical() {
        let matrix = build_feature_matrix(&[], Horizon::D180);
        assert_eq!(matrix.features, Feature::ALL.to_vec());
    }
}
