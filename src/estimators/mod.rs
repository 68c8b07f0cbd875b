#[cfg(test)]
mod tests;

pub mod error;
pub mod estimator;
pub mod hyperparams;
pub mod traits;

pub use estimator::{Estimator, FitState};
pub use hyperparams::{EstimatorParams, EstimatorValidParams};
pub use traits::{BaseModel, Model};
