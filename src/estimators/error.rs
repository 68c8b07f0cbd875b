use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from input validation or from the fit/predict sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimatorError {
    /// The named input array has no elements
    #[error("the array {0} must be non-empty")]
    EmptyInput(&'static str),
    /// The input has more than two dimensions
    #[error("input must be at most 2-dimensional, got {0} dimensions")]
    InvalidShape(usize),
    #[error("argument y is required")]
    MissingTarget,
    #[error("fit method should be called first")]
    NotFitted,
    /// A model hook was invoked without a concrete implementation
    #[error("{0} is not implemented for this model")]
    NotImplemented(&'static str),
}
