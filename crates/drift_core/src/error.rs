use thiserror::Error;

pub type IntegrationResult<T> = Result<T, IntegrationError>;

/// Precondition failures detected before any step is taken.
///
/// Numerical blow-up during a run is not an error: NaN and infinity flow
/// through to the observer unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrationError {
    #[error("Step size dt must be positive and finite (dt = {dt})")]
    InvalidStepSize { dt: f64 },

    #[error("Integration bounds must be finite (t_start = {t_start}, t_end = {t_end})")]
    NonFiniteBounds { t_start: f64, t_end: f64 },

    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Step count {steps} is not representable")]
    TooManySteps { steps: f64 },
}
