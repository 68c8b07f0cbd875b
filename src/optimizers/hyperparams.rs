use super::error::{OptimizerError, Result};
use crate::param_guard::ParamGuard;
use crate::Float;

/// A verified configuration ready for mini-batch optimization
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerValidParams<F> {
    learning_rate: F,
    batch_size: usize,
    tolerance: F,
    max_iter: usize,
    seed: Option<u64>,
    verbose: bool,
}

impl<F: Float> OptimizerValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// An optimizer configuration during construction
///
/// The learning rate and the batch size have no sensible default and are
/// given upfront; every other setting can be overridden before checking.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerParams<F>(OptimizerValidParams<F>);

impl<F: Float> OptimizerParams<F> {
    pub fn new(learning_rate: F, batch_size: usize) -> OptimizerParams<F> {
        Self(OptimizerValidParams {
            learning_rate,
            batch_size,
            tolerance: F::cast(1e-8),
            max_iter: 1000,
            seed: None,
            verbose: false,
        })
    }

    /// Set the step size applied to the gradients.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the number of samples per mini-batch. The last batch of an epoch
    /// may hold fewer.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.0.batch_size = batch_size;
        self
    }

    /// Set the stopping criterion: optimization stops once the tracked metric
    /// changes by less than `tolerance` over one iteration.
    ///
    /// Defaults to `1e-8` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Set the maximum number of iterations (epochs) of a single `optimize`
    /// call.
    ///
    /// Defaults to `1000` if not set.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.0.max_iter = max_iter;
        self
    }

    /// Seed the shuffling of the mini-batches. Each `optimize` call then draws
    /// the same sequence of epochs.
    ///
    /// Unseeded by default.
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = Some(seed);
        self
    }

    /// Log every iteration at `info` level instead of `debug`.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

fn check_params<F: Float>(params: &OptimizerValidParams<F>) -> Result<()> {
    let learning_rate = params.learning_rate;
    if !learning_rate.is_finite() || learning_rate <= F::zero() {
        Err(OptimizerError::InvalidLearningRate(
            learning_rate.to_f32().unwrap_or(f32::NAN),
        ))
    } else if params.batch_size == 0 {
        Err(OptimizerError::InvalidBatchSize(params.batch_size))
    } else if !params.tolerance.is_finite() || params.tolerance < F::zero() {
        Err(OptimizerError::InvalidTolerance(
            params.tolerance.to_f32().unwrap_or(f32::NAN),
        ))
    } else if params.max_iter == 0 {
        Err(OptimizerError::InvalidMaxIter(params.max_iter))
    } else {
        Ok(())
    }
}

impl<F: Float> ParamGuard for OptimizerParams<F> {
    type Checked = OptimizerValidParams<F>;
    type Error = OptimizerError;

    /// Validate the configuration
    fn check_ref(&self) -> Result<&Self::Checked> {
        check_params(&self.0)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float> ParamGuard for OptimizerValidParams<F> {
    type Checked = OptimizerValidParams<F>;
    type Error = OptimizerError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        check_params(self)?;
        Ok(self)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self)
    }
}
