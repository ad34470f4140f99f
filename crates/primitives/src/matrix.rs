//! Aligned design-matrix container.

use ndarray::{Array1, Array2};

use crate::{Feature, Horizon, Symbol};

/// A complete design matrix for one target horizon.
///
/// Invariants: every entry of `x` and `y` is finite, `x` has one column per
/// entry of `features`, and `symbols` is row-aligned with `x` and `y`.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    /// Target horizon the `y` vector was taken from.
    pub horizon: Horizon,
    /// Column order of `x`.
    pub features: Vec<Feature>,
    /// Samples-by-features design matrix.
    pub x: Array2<f64>,
    /// Target vector.
    pub y: Array1<f64>,
    /// Row-aligned instrument symbols.
    pub symbols: Vec<Symbol>,
}

impl FeatureMatrix {
    /// Number of samples (rows).
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// Number of features (columns).
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Whether the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_samples() == 0
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn dimensions_reflect_storage() {
        let matrix = FeatureMatrix {
            horizon: Horizon::D90,
            features: vec![Feature::Beta, Feature::MarketCap],
            x: array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
            y: array![0.1, 0.2, 0.3],
            symbols: vec!["A".into(), "B".into(), "C".into()],
        };
        assert_eq!(matrix.n_samples(), 3);
        assert_eq!(matrix.n_features(), 2);
        assert!(!matrix.is_empty());
    }
}
