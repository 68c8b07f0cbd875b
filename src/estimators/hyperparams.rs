use super::error::{EstimatorError, Result};
use crate::param_guard::ParamGuard;

/// A verified configuration for the fit/predict sequence of an estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorValidParams {
    y_required: bool,
    requires_fit: bool,
}

impl Default for EstimatorValidParams {
    fn default() -> Self {
        EstimatorValidParams {
            y_required: true,
            requires_fit: true,
        }
    }
}

impl EstimatorValidParams {
    pub fn y_required(&self) -> bool {
        self.y_required
    }

    pub fn requires_fit(&self) -> bool {
        self.requires_fit
    }
}

/// An estimator configuration during construction
///
/// Both flags are set once, before the estimator is built, and never change
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorParams(EstimatorValidParams);

impl Default for EstimatorParams {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimatorParams {
    /// Create the default configuration: targets are required and `predict`
    /// demands a prior successful `fit`.
    pub fn new() -> EstimatorParams {
        Self(EstimatorValidParams::default())
    }

    /// Whether `fit` rejects calls without targets. Unsupervised models
    /// unset it.
    /// Defaults to `true` if not set.
    pub fn y_required(mut self, y_required: bool) -> Self {
        self.0.y_required = y_required;
        self
    }

    /// Whether `predict` fails with [`EstimatorError::NotFitted`] until `fit`
    /// has succeeded once.
    /// Defaults to `true` if not set.
    pub fn requires_fit(mut self, requires_fit: bool) -> Self {
        self.0.requires_fit = requires_fit;
        self
    }
}

impl ParamGuard for EstimatorParams {
    type Checked = EstimatorValidParams;
    type Error = EstimatorError;

    /// Every combination of flags is valid.
    fn check_ref(&self) -> Result<&Self::Checked> {
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl ParamGuard for EstimatorValidParams {
    type Checked = EstimatorValidParams;
    type Error = EstimatorError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        Ok(self)
    }

    fn check(self) -> Result<Self::Checked> {
        Ok(self)
    }
}
