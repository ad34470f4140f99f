//! Column-wise z-score standardization.

use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Retained per-column standardization parameters.
///
/// Kept alongside every fitted model so future observations can be scored
/// on the same scale the model was trained on.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    /// Per-column arithmetic means.
    pub means: Array1<f64>,
    /// Per-column population standard deviations.
    pub stds: Array1<f64>,
}

impl Normalization {
    /// Standardize one observation with the retained parameters.
    ///
    /// Columns whose training standard deviation was zero map to zero.
    #[must_use]
    pub fn apply(&self, row: ArrayView1<'_, f64>) -> Array1<f64> {
        Array1::from_iter(row.iter().zip(self.means.iter().zip(self.stds.iter())).map(
            |(&v, (&mean, &std))| if std == 0.0 { 0.0 } else { (v - mean) / std },
        ))
    }
}

/// Z-score standardize every column of a matrix.
///
/// Uses the population standard deviation (divide by N). Constant columns
/// standardize to all zeros instead of dividing by zero.
///
/// # Returns
/// The standardized matrix and the retained parameters.
#[must_use]
pub fn standardize(x: &Array2<f64>) -> (Array2<f64>, Normalization) {
    let n = x.nrows();
    let p = x.ncols();

    if n == 0 {
        return (
            x.clone(),
            Normalization { means: Array1::zeros(p), stds: Array1::zeros(p) },
        );
    }

    let mut means = Array1::zeros(p);
    let mut stds = Array1::zeros(p);

    for (j, column) in x.axis_iter(Axis(1)).enumerate() {
        let mean = column.sum() / n as f64;
        let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        means[j] = mean;
        stds[j] = variance.sqrt();
    }

    let mut z = Array2::zeros((n, p));
    for i in 0..n {
        for j in 0..p {
            if stds[j] != 0.0 {
                z[[i, j]] = (x[[i, j]] - means[j]) / stds[j];
            }
        }
    }

    (z, Normalization { means, stds })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Axis, array};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]])]
    #[case(array![[-5.0, 0.1], [3.5, 0.2], [0.0, 0.9]])]
    fn standardized_columns_have_zero_mean_unit_std(#[case] x: ndarray::Array2<f64>) {
        let n = x.nrows() as f64;
        let (z, _) = standardize(&x);

        for column in z.axis_iter(Axis(1)) {
            let mean = column.sum() / n;
            let std = (column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
            assert_relative_eq!(mean, 0.0, epsilon = 1e-9);
            assert_relative_eq!(std, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn constant_column_maps_to_zeros() {
        let x = array![[7.0, 1.0], [7.0, 2.0], [7.0, 3.0]];
        let (z, params) = standardize(&x);

        assert_eq!(params.stds[0], 0.0);
        for i in 0..3 {
            assert_eq!(z[[i, 0]], 0.0);
        }
    }

    #[test]
    fn uses_population_standard_deviation() {
        let x = array![[1.0], [3.0]];
        let (_, params) = standardize(&x);
        // Population std of {1, 3} is 1, sample std would be sqrt(2).
        assert_relative_eq!(params.stds[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn apply_reuses_training_scale() {
        let x = array![[1.0, 5.0], [3.0, 5.0]];
        let (_, params) = standardize(&x);

        let scored = params.apply(array![2.0, 9.0].view());
        assert_relative_eq!(scored[0], 0.0, epsilon = 1e-12);
        // Constant training column stays pinned to zero for any input.
        assert_eq!(scored[1], 0.0);
    }

    #[test]
    fn empty_matrix_is_passed_through() {
        let x = ndarray::Array2::<f64>::zeros((0, 4));
        let (z, params) = standardize(&x);
        assert_eq!(z.nrows(), 0);
        assert_eq!(params.means.len(), 4);
    }
}
