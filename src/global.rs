use std::fmt;

/// Error kinds shared by the grid generator and the tridiagonal solver.
/// The assembler and the convergence driver never catch these; a malformed
/// mesh or a degenerate pivot has no meaningful local recovery, so they
/// propagate straight to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BvpError {
    InvalidArgument(String),
    NumericalInstability(String),
}

impl fmt::Display for BvpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BvpError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BvpError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for BvpError {}
