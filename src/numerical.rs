/// uniform grid generator for the 1D interval
pub mod grid;
/// finite-difference assembly of -u'' = f with Dirichlet conditions and
/// the solve on one grid
pub mod fd_assembly;
/// mesh refinement loop, error norms and observed convergence rates
pub mod convergence;

mod convergence_tests;
