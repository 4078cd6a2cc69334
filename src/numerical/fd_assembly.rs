//! Finite-difference assembly of -u'' = f with Dirichlet boundary conditions.
//!
//! The standard second-order central-difference stencil on a uniform grid
//! gives a tridiagonal system for the m = n - 2 interior unknowns with
//! constant bands: main diagonal 2, sub- and super-diagonals -1, and
//! right-hand side h^2 * f(x_i). The known boundary values enter the first
//! and last interior equations through [`apply_dirichlet_to_rhs`]. The
//! assembled matrix is strictly diagonally dominant (|2| > |-1| + |-1|)
//! for every m >= 1, which is exactly the precondition of the pivotless
//! Thomas solver.
use crate::global::BvpError;
use crate::numerical::grid::UniformGrid;
use crate::somelinalg::tridiagonal::solve_tridiagonal;
use log::debug;
use nalgebra::DVector;

/// Discrete solution of the BVP on one grid: nodes, nodal values (boundary
/// slots hold the exact Dirichlet data, interior slots the solved values)
/// and the grid spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct BvpSolution {
    pub x: DVector<f64>,
    pub u: DVector<f64>,
    pub h: f64,
}

/// Builds the interior tridiagonal system (a, b, c, d) for the grid and
/// source function: constant 2/-1 bands and d_i = h^2 * f(x_i) at each
/// interior node. Boundary data is NOT folded in here.
pub fn assemble_interior_system<F>(
    grid: &UniformGrid,
    f: F,
) -> (DVector<f64>, DVector<f64>, DVector<f64>, DVector<f64>)
where
    F: Fn(f64) -> f64,
{
    let m = grid.interior_points();
    let h2 = grid.h * grid.h;
    let a = DVector::from_element(m, -1.0);
    let b = DVector::from_element(m, 2.0);
    let c = DVector::from_element(m, -1.0);
    let d = DVector::from_fn(m, |i, _| h2 * f(grid.x[i + 1]));
    (a, b, c, d)
}

/// Folds the Dirichlet boundary values into the right-hand side: the first
/// interior equation gains u(xmin), the last gains u(xmax). For m = 1 both
/// increments land on the single equation.
pub fn apply_dirichlet_to_rhs(d: &mut DVector<f64>, u_left: f64, u_right: f64) {
    let m = d.len();
    d[0] += u_left;
    d[m - 1] += u_right;
}

/// Solves -u'' = f on the grid with Dirichlet conditions taken from
/// `u_exact` at the two endpoints (u_exact is never evaluated at interior
/// nodes). Returns the full nodal solution.
pub fn solve_poisson_dirichlet<F, G>(
    grid: &UniformGrid,
    f: F,
    u_exact: G,
) -> Result<BvpSolution, BvpError>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let n = grid.n;
    let u_left = u_exact(grid.x[0]);
    let u_right = u_exact(grid.x[n - 1]);

    let (a, b, c, mut d) = assemble_interior_system(grid, f);
    apply_dirichlet_to_rhs(&mut d, u_left, u_right);
    debug!(
        "assembled tridiagonal system of size {} with h = {}",
        d.len(),
        grid.h
    );
    let interior = solve_tridiagonal(&a, &b, &c, &d)?;

    let mut u = DVector::zeros(n);
    u[0] = u_left;
    u[n - 1] = u_right;
    for i in 0..interior.len() {
        u[i + 1] = interior[i];
    }
    Ok(BvpSolution {
        x: grid.x.clone(),
        u,
        h: grid.h,
    })
}
