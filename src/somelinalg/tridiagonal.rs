//! Thomas algorithm (TDMA) for tridiagonal linear systems.
//!
//! Direct O(m) solver by forward elimination and back substitution. No
//! pivoting is performed: the solver targets the diagonally dominant
//! matrices produced by finite-difference discretizations, trading
//! generality for O(m) time. Diagonal dominance of the input is an
//! explicit precondition of [`solve_tridiagonal`]; it is checked on entry
//! and a violation only produces a warning, while a zero or near-zero
//! pivot met during elimination aborts with `NumericalInstability`.
use crate::global::BvpError;
use log::warn;
use nalgebra::DVector;

/// relative pivot threshold: a pivot smaller than this times the band scale
/// is treated as zero
const PIVOT_REL_TOL: f64 = 1e-13;

/// Checks weak diagonal dominance |b[i]| >= |a[i]| + |c[i]| for every row
/// (a[0] and c[m-1] are unused and ignored).
pub fn is_diagonally_dominant(a: &DVector<f64>, b: &DVector<f64>, c: &DVector<f64>) -> bool {
    let m = b.len();
    for i in 0..m {
        let sub = if i > 0 { a[i].abs() } else { 0.0 };
        let sup = if i < m - 1 { c[i].abs() } else { 0.0 };
        if b[i].abs() < sub + sup {
            return false;
        }
    }
    true
}

/// Solves the tridiagonal system A*x = d by the Thomas algorithm.
///
/// Bands are given as vectors of equal length m >= 1: sub-diagonal `a`
/// (a[0] unused), main diagonal `b`, super-diagonal `c` (c[m-1] unused).
/// The inputs are not mutated; elimination runs on working copies of `b`
/// and `d`.
///
/// Forward elimination, for i = 1..m-1:
///   factor = a[i]/b[i-1];  b[i] -= factor*c[i-1];  d[i] -= factor*d[i-1]
/// Back substitution:
///   x[m-1] = d[m-1]/b[m-1];  x[i] = (d[i] - c[i]*x[i+1]) / b[i]
pub fn solve_tridiagonal(
    a: &DVector<f64>,
    b: &DVector<f64>,
    c: &DVector<f64>,
    d: &DVector<f64>,
) -> Result<DVector<f64>, BvpError> {
    let m = b.len();
    if m == 0 {
        return Err(BvpError::InvalidArgument(
            "tridiagonal system must have at least one equation".to_string(),
        ));
    }
    if a.len() != m || c.len() != m || d.len() != m {
        return Err(BvpError::InvalidArgument(format!(
            "band length mismatch: a = {}, b = {}, c = {}, d = {}",
            a.len(),
            m,
            c.len(),
            d.len()
        )));
    }
    if !is_diagonally_dominant(a, b, c) {
        warn!("tridiagonal matrix is not diagonally dominant, elimination without pivoting may be unstable");
    }
    // pivot magnitudes are compared against the overall band scale
    let scale = a
        .iter()
        .chain(b.iter())
        .chain(c.iter())
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    let pivot_tol = PIVOT_REL_TOL * scale.max(1.0);

    let mut beta = b.clone();
    let mut rhs = d.clone();
    for i in 1..m {
        if beta[i - 1].abs() <= pivot_tol {
            return Err(BvpError::NumericalInstability(format!(
                "zero pivot b[{}] = {} during forward elimination",
                i - 1,
                beta[i - 1]
            )));
        }
        let factor = a[i] / beta[i - 1];
        beta[i] -= factor * c[i - 1];
        rhs[i] -= factor * rhs[i - 1];
    }
    if beta[m - 1].abs() <= pivot_tol {
        return Err(BvpError::NumericalInstability(format!(
            "zero pivot b[{}] = {} after forward elimination",
            m - 1,
            beta[m - 1]
        )));
    }

    let mut x = DVector::zeros(m);
    x[m - 1] = rhs[m - 1] / beta[m - 1];
    for i in (0..m - 1).rev() {
        x[i] = (rhs[i] - c[i] * x[i + 1]) / beta[i];
    }
    Ok(x)
}
