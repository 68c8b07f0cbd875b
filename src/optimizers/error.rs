use thiserror::Error;

use crate::estimators::error::EstimatorError;

/// Simplified `Result` using [`OptimizerError`] as error type
pub type Result<T> = std::result::Result<T, OptimizerError>;

/// Error variants from optimizer construction, batching or optimization
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerError {
    /// An optimizer hook was invoked without a concrete implementation
    #[error("{0} is not implemented for this optimizer")]
    NotImplemented(&'static str),
    #[error("invalid learning rate {0}")]
    InvalidLearningRate(f32),
    #[error("invalid batch size {0}")]
    InvalidBatchSize(usize),
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f32),
    #[error("invalid max_iter {0}")]
    InvalidMaxIter(usize),
    #[error("cannot draw batches from an empty dataset")]
    EmptyInput,
    #[error("cannot optimize an empty parameter vector")]
    EmptyParameters,
    /// Design matrix and targets disagree on the number of samples
    #[error("design matrix has {features} samples but targets have {targets}")]
    SampleMismatch { features: usize, targets: usize },
    #[error("gradient has {found} entries, expected {expected}")]
    GradientDimMismatch { expected: usize, found: usize },
    #[error("parameters have {found} entries, expected {expected}")]
    ParameterDimMismatch { expected: usize, found: usize },
    /// A tracked metric became NaN or infinite
    #[error("metric {metric} is not finite at iteration {iteration}")]
    NonFiniteMetric {
        metric: &'static str,
        iteration: usize,
    },
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
}
