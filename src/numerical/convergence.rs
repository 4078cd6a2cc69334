//! Mesh-refinement convergence study for the finite-difference BVP solver.
//!
//! Solves -u'' = f on a sequence of progressively refined grids, measures
//! the maximum pointwise error against the exact solution and estimates
//! the observed order of convergence from each pair of consecutive
//! resolutions. The rate uses the general ratio
//! p = ln(err_prev/err_curr) / ln(h_prev/h_curr), so the resolution
//! sequence does not have to double at each step.
use crate::global::BvpError;
use crate::numerical::fd_assembly::{BvpSolution, solve_poisson_dirichlet};
use crate::numerical::grid::UniformGrid;
use log::info;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

/// One row of the convergence study: grid spacing, maximum error and the
/// observed rate. The coarsest grid has no preceding point, so its rate
/// is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceRecord {
    pub h: f64,
    pub max_error: f64,
    pub rate: Option<f64>,
}

/// maximum pointwise difference between exact and computed nodal values
pub fn max_abs_error<G>(u_exact: G, sol: &BvpSolution) -> f64
where
    G: Fn(f64) -> f64,
{
    sol.x
        .iter()
        .zip(sol.u.iter())
        .fold(0.0f64, |acc, (&x, &u)| acc.max((u_exact(x) - u).abs()))
}

fn observed_rate(prev: &ConvergenceRecord, h: f64, max_error: f64) -> f64 {
    (prev.max_error / max_error).ln() / (prev.h / h).ln()
}

/// Convergence study driver. Owns the problem definition (interval, source
/// function, exact solution) and the requested resolution sequence; each
/// resolution is solved to completion before the next begins and every
/// iteration owns its own grid, system and solution vector.
pub struct ConvergenceStudy {
    pub xmin: f64,
    pub xmax: f64,
    pub resolutions: Vec<usize>,
    pub f: Box<dyn Fn(f64) -> f64>,
    pub u_exact: Box<dyn Fn(f64) -> f64>,
    pub loglevel: Option<String>,
    records: Vec<ConvergenceRecord>,
}

impl ConvergenceStudy {
    pub fn new(
        xmin: f64,
        xmax: f64,
        resolutions: Vec<usize>,
        f: Box<dyn Fn(f64) -> f64>,
        u_exact: Box<dyn Fn(f64) -> f64>,
    ) -> ConvergenceStudy {
        ConvergenceStudy {
            xmin,
            xmax,
            resolutions,
            f,
            u_exact,
            loglevel: None,
            records: Vec::new(),
        }
    }

    /// main loop of the study: one solve and one error measurement per
    /// requested resolution
    pub fn run(&mut self) -> Result<Vec<ConvergenceRecord>, BvpError> {
        self.records.clear();
        for &n in &self.resolutions {
            let grid = UniformGrid::new(self.xmin, self.xmax, n)?;
            let sol = solve_poisson_dirichlet(&grid, &self.f, &self.u_exact)?;
            let max_error = max_abs_error(&self.u_exact, &sol);
            let rate = self
                .records
                .last()
                .map(|prev| observed_rate(prev, grid.h, max_error));
            info!(
                "n = {}, h = {:.6}, max error = {:.4e}, rate = {:?}",
                n, grid.h, max_error, rate
            );
            self.records.push(ConvergenceRecord {
                h: grid.h,
                max_error,
                rate,
            });
        }
        Ok(self.records.clone())
    }

    // wrapper around run function to implement logging
    pub fn solve(&mut self) -> Result<Vec<ConvergenceRecord>, BvpError> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            self.run()
        } else {
            let loglevel = self.loglevel.clone();
            let log_option = if let Some(level) = loglevel {
                match level.as_str() {
                    "debug" => LevelFilter::Debug,
                    "info" => LevelFilter::Info,
                    "warn" => LevelFilter::Warn,
                    "error" => LevelFilter::Error,
                    _ => panic!("loglevel must be debug, info, warn or error"),
                }
            } else {
                LevelFilter::Info
            };
            let logger_instance = CombinedLogger::init(vec![TermLogger::new(
                log_option,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]);

            match logger_instance {
                Ok(()) => {
                    let res = self.run();
                    info!("convergence study ended");
                    res
                }
                Err(_) => self.run(),
            }
        }
    }

    pub fn get_records(&self) -> &[ConvergenceRecord] {
        &self.records
    }

    /// parallel (h, error) sequences for log-log plotting
    pub fn h_and_errors(&self) -> (Vec<f64>, Vec<f64>) {
        let h = self.records.iter().map(|r| r.h).collect();
        let err = self.records.iter().map(|r| r.max_error).collect();
        (h, err)
    }
}
