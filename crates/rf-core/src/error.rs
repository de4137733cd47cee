use thiserror::Error;

pub type RfResult<T> = Result<T, RfError>;

#[derive(Error, Debug)]
pub enum RfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },

    #[error("No sign change for {what} on [{lo}, {hi}]")]
    BracketFailed { what: &'static str, lo: f64, hi: f64 },

    #[error("Convergence failed for {what} after {iterations} iterations (residual = {residual})")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
        residual: f64,
    },
}
