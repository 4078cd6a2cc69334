use crate::global::BvpError;
use nalgebra::DVector;

/// Uniform one-dimensional grid over [xmin, xmax] with n nodes and
/// spacing h = (xmax - xmin)/(n - 1). Nodes are strictly increasing and
/// the endpoints are exact.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGrid {
    pub x: DVector<f64>,
    pub h: f64,
    pub n: usize,
}

impl UniformGrid {
    /// Builds the uniform grid. At least one interior point is required
    /// (n >= 3) so that the discretized BVP has unknowns to solve for.
    pub fn new(xmin: f64, xmax: f64, n: usize) -> Result<UniformGrid, BvpError> {
        if n < 3 {
            return Err(BvpError::InvalidArgument(format!(
                "grid needs at least 3 nodes (one interior point), got n = {}",
                n
            )));
        }
        if !(xmax > xmin) {
            return Err(BvpError::InvalidArgument(format!(
                "grid bounds must satisfy xmax > xmin, got [{}, {}]",
                xmin, xmax
            )));
        }
        let h = (xmax - xmin) / ((n - 1) as f64);
        let mut x = DVector::from_fn(n, |i, _| xmin + (i as f64) * h);
        x[n - 1] = xmax;
        Ok(UniformGrid { x, h, n })
    }

    /// number of interior unknowns m = n - 2
    pub fn interior_points(&self) -> usize {
        self.n - 2
    }
}
