//! Dense linear system solving.

use ndarray::{Array1, Array2};

use crate::MathError;

/// Pivots with absolute value below this are treated as singular.
const PIVOT_TOLERANCE: f64 = 1e-14;

/// Solve a linear system Ax = b using Gaussian elimination with partial
/// pivoting.
///
/// Both regression formulations route their normal-equation systems through
/// this function. Partial pivoting is required for numerical stability and a
/// vanishing pivot is reported as [`MathError::SingularSystem`] rather than
/// propagated as NaNs.
///
/// # Arguments
/// * `a` - Square coefficient matrix (n x n)
/// * `b` - Right-hand side vector (n,)
///
/// # Returns
/// The solution vector x.
///
/// # Errors
/// Returns an error on dimension mismatch or a singular system.
pub fn solve_linear_system(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, MathError> {
    let n = a.nrows();
    if n == 0 {
        return Err(MathError::EmptyData);
    }
    if a.ncols() != n {
        return Err(MathError::NotSquare { rows: n, cols: a.ncols() });
    }
    if b.len() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: b.len() });
    }

    // Augmented matrix [A | b]
    let mut aug = Array2::zeros((n, n + 1));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = a[[i, j]];
        }
        aug[[i, n]] = b[i];
    }

    // Forward elimination with partial pivoting
    for col in 0..n {
        let mut max_row = col;
        let mut max_val = aug[[col, col]].abs();
        for row in (col + 1)..n {
            if aug[[row, col]].abs() > max_val {
                max_val = aug[[row, col]].abs();
                max_row = row;
            }
        }

        if max_val < PIVOT_TOLERANCE {
            return Err(MathError::SingularSystem { column: col });
        }

        if max_row != col {
            for j in 0..=n {
                let tmp = aug[[col, j]];
                aug[[col, j]] = aug[[max_row, j]];
                aug[[max_row, j]] = tmp;
            }
        }

        for row in (col + 1)..n {
            let factor = aug[[row, col]] / aug[[col, col]];
            for j in col..=n {
                aug[[row, j]] -= factor * aug[[col, j]];
            }
        }
    }

    // Back substitution
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = aug[[i, n]];
        for j in (i + 1)..n {
            sum -= aug[[i, j]] * x[j];
        }
        x[i] = sum / aug[[i, i]];
    }

    Ok(x)
}
