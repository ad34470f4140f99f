//! Normal-equation regression with optional L2 regularization.

use ndarray::{Array1, Array2, s};
use quantrank_math::solve_linear_system;

use crate::ModelError;

/// Fixed regularization strengths swept by [`fit_best_ridge`].
pub const RIDGE_GRID: [f64; 3] = [0.1, 1.0, 10.0];

/// Diagonal jitter applied once when the OLS normal matrix is singular.
const FALLBACK_LAMBDA: f64 = 1e-8;

/// A fitted linear model.
#[derive(Debug, Clone)]
pub struct LinearFit {
    /// Coefficients aligned with the design-matrix columns.
    pub coefficients: Array1<f64>,
    /// Intercept term (never regularized).
    pub intercept: f64,
    /// In-sample coefficient of determination.
    pub r_squared: f64,
    /// Regularization strength; `None` for ordinary least squares.
    pub lambda: Option<f64>,
}

/// Fit a linear model via the Normal Equation.
///
/// The design matrix is intercept-augmented internally. With
/// `lambda: Some(l)`, `l` is added to every diagonal entry of XᵗX except
/// the intercept row, yielding the ridge estimator; with `None` this is
/// ordinary least squares. Both paths solve the same dense system.
///
/// # Errors
/// Returns an error on malformed input or a singular normal matrix.
pub fn fit_least_squares(
    x: &Array2<f64>,
    y: &Array1<f64>,
    lambda: Option<f64>,
) -> Result<LinearFit, ModelError> {
    let n = x.nrows();
    let p = x.ncols();

    if n == 0 {
        return Err(ModelError::EmptyDesign);
    }
    if y.len() != n {
        return Err(ModelError::TargetLength { expected: n, actual: y.len() });
    }

    // Intercept-augmented design [1 | X]
    let mut xb = Array2::ones((n, p + 1));
    xb.slice_mut(s![.., 1..]).assign(x);

    let mut xtx = xb.t().dot(&xb);
    let xty = xb.t().dot(y);

    if let Some(lambda) = lambda {
        for j in 1..=p {
            xtx[[j, j]] += lambda;
        }
    }

    let beta = solve_linear_system(&xtx, &xty)?;

    let fitted = xb.dot(&beta);
    let y_mean = y.sum() / n as f64;
    let ss_tot: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let ss_res: f64 = y.iter().zip(fitted.iter()).map(|(yi, fi)| (yi - fi).powi(2)).sum();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

    Ok(LinearFit {
        coefficients: beta.slice(s![1..]).to_owned(),
        intercept: beta[0],
        r_squared,
        lambda,
    })
}

/// Fit an ordinary least squares model.
///
/// A rank-deficient normal matrix (fewer independent samples than
/// coefficients, or collinear features) is retried once with a small
/// diagonal jitter so the run keeps a defined OLS surface; the fit still
/// reports `lambda: None` because the jitter is a numerical rescue, not a
/// model choice.
///
/// # Errors
/// Returns an error on malformed input, or when even the jittered system
/// cannot be solved.
pub fn fit_ols(x: &Array2<f64>, y: &Array1<f64>) -> Result<LinearFit, ModelError> {
    match fit_least_squares(x, y, None) {
        Err(err) if err.is_singular() => {
            tracing::warn!(
                samples = x.nrows(),
                features = x.ncols(),
                "singular normal matrix, refitting with diagonal jitter"
            );
            let fit = fit_least_squares(x, y, Some(FALLBACK_LAMBDA))?;
            Ok(LinearFit { lambda: None, ..fit })
        }
        other => other,
    }
}

/// Fit ridge models over [`RIDGE_GRID`] and keep the best in-sample R².
///
/// Selection is by in-sample fit, not cross-validated; ties keep the
/// smallest regularization strength.
///
/// # Errors
/// Returns an error when any candidate fit fails.
pub fn fit_best_ridge(x: &Array2<f64>, y: &Array1<f64>) -> Result<LinearFit, ModelError> {
    let mut best: Option<LinearFit> = None;

    for lambda in RIDGE_GRID {
        let fit = fit_least_squares(x, y, Some(lambda))?;
        let improved = best.as_ref().is_none_or(|b| fit.r_squared > b.r_squared);
        if improved {
            best = Some(fit);
        }
    }

    // The grid is non-empty, so a best fit always exists here.
    best.ok_or(ModelError::EmptyDesign)
}
