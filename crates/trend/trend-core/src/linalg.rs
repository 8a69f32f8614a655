//! Dense linear solves for small normal-equation systems.

use trend_spi::{TsError, TsResult};

const PIVOT_EPSILON: f64 = 1e-12;

/// Solve `a · x = b` for a square row-major `a` of size `n × n`.
///
/// Gauss-Jordan elimination with partial pivoting. A pivot below
/// `PIVOT_EPSILON` relative to the largest entry of `a` means the system
/// is singular and is reported as a numerical error rather than
/// producing an arbitrary solution.
pub fn solve(a: &[f64], b: &[f64], n: usize) -> TsResult<Vec<f64>> {
    if a.len() != n * n || b.len() != n {
        return Err(TsError::InvalidData(format!(
            "system shape mismatch: {} coefficients and {} right-hand values for n={}",
            a.len(),
            b.len(),
            n
        )));
    }

    let mut a = a.to_vec();
    let mut x = b.to_vec();

    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs())).max(1.0);

    for i in 0..n {
        // Find pivot
        let mut max_row = i;
        for k in (i + 1)..n {
            if a[k * n + i].abs() > a[max_row * n + i].abs() {
                max_row = k;
            }
        }

        if a[max_row * n + i].abs() < PIVOT_EPSILON * scale {
            return Err(TsError::NumericalError(
                "singular matrix in least squares fit".to_string(),
            ));
        }

        // Swap rows
        if max_row != i {
            for j in 0..n {
                a.swap(i * n + j, max_row * n + j);
            }
            x.swap(i, max_row);
        }

        // Scale row
        let pivot = a[i * n + i];
        for j in 0..n {
            a[i * n + j] /= pivot;
        }
        x[i] /= pivot;

        // Eliminate column
        for k in 0..n {
            if k != i {
                let factor = a[k * n + i];
                if factor != 0.0 {
                    for j in 0..n {
                        a[k * n + j] -= factor * a[i * n + j];
                    }
                    x[k] -= factor * x[i];
                }
            }
        }
    }

    Ok(x)
}
