//! different utility modules used throughout the project
/// tiny module to plot the error curve of a convergence study
pub mod plots;
/// tiny module to render convergence records as a text table
pub mod reporting;
