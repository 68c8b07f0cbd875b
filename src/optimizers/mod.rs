extern crate ndarray;

use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension, Ix2};

use crate::batches::Batch;
use crate::datasets::DatasetBase;
use crate::param_guard::ParamGuard;
use crate::Float;

use self::error::{OptimizerError, Result};
use self::history::History;
use self::hyperparams::OptimizerValidParams;


pub mod descent;
pub mod error;
pub mod history;
pub mod hyperparams;

pub use descent::{run_epochs, GradientDescent};
pub use history::Metric;
pub use hyperparams::OptimizerParams;

/// Outcome of one `optimize` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convergence {
    /// Number of iterations (epochs) run by the call.
    pub n_iter: usize,
    /// Whether the call stopped because the tracked metric settled below the
    /// tolerance, rather than by exhausting `max_iter`.
    pub converged: bool,
}

/// Everything an optimizer owns between `optimize` calls: the gradient
/// function, the current parameters, its configuration and its history.
pub struct OptimizerState<F, G> {
    gradient_fn: G,
    parameters: Array1<F>,
    params: OptimizerValidParams<F>,
    history: History<F>,
}

impl<F: Float, G> OptimizerState<F, G> {
    /// This method checks the configuration and instantiates the state with
    /// an empty history.
    pub fn new<P>(gradient_fn: G, parameters: Array1<F>, params: P) -> Result<Self>
    where
        G: Fn(ArrayView1<F>, &Batch<F>) -> Array1<F>,
        P: ParamGuard<Checked = OptimizerValidParams<F>, Error = OptimizerError>,
    {
        if parameters.is_empty() {
            return Err(OptimizerError::EmptyParameters);
        }
        Ok(OptimizerState {
            gradient_fn,
            parameters,
            params: params.check()?,
            history: History::new(),
        })
    }

    pub fn parameters(&self) -> ArrayView1<F> {
        self.parameters.view()
    }

    /// This method replaces the current parameters, which must keep their
    /// length.
    pub fn set_parameters(&mut self, parameters: Array1<F>) -> Result<()> {
        if parameters.len() != self.parameters.len() {
            return Err(OptimizerError::ParameterDimMismatch {
                expected: self.parameters.len(),
                found: parameters.len(),
            });
        }
        self.parameters = parameters;
        Ok(())
    }

    pub fn params(&self) -> &OptimizerValidParams<F> {
        &self.params
    }

    pub fn history(&self) -> &History<F> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History<F> {
        &mut self.history
    }

    pub fn into_parameters(self) -> Array1<F> {
        self.parameters
    }
}

impl<F: Float, G> OptimizerState<F, G>
where
    G: Fn(ArrayView1<F>, &Batch<F>) -> Array1<F>,
{
    /// This method evaluates the gradient function at the current parameters.
    pub fn gradient(&self, batch: &Batch<F>) -> Array1<F> {
        (self.gradient_fn)(self.parameters.view(), batch)
    }
}

/// Optimizer trait
///
/// A gradient-based optimizer iteratively adjusts its parameters over
/// mini-batches of a dataset. Concrete optimizers provide the update rule and
/// the loop; both hooks fail with [`OptimizerError::NotImplemented`] until
/// they are overridden. [`run_epochs`] implements the usual loop for any
/// optimizer with an update rule.
pub trait Optimizer<F: Float> {
    /// The externally supplied `(parameters, batch) -> gradient` function.
    type Gradient;

    fn state(&self) -> &OptimizerState<F, Self::Gradient>;

    fn state_mut(&mut self) -> &mut OptimizerState<F, Self::Gradient>;

    fn parameters(&self) -> ArrayView1<F> {
        self.state().parameters()
    }

    fn params(&self) -> &OptimizerValidParams<F> {
        self.state().params()
    }

    fn history(&self) -> &History<F> {
        self.state().history()
    }

    /// Drops every recorded metric. Parameters are left untouched.
    fn clear_history(&mut self) {
        self.state_mut().history_mut().clear();
    }

    /// Loss of the parameters on a batch, if the optimizer knows its loss
    /// function. Without one, convergence is judged on parameter changes.
    fn loss(&self, parameters: ArrayView1<F>, batch: &Batch<F>) -> Option<F> {
        let _ = (parameters, batch);
        None
    }

    /// Pure update rule producing new parameters from a gradient.
    fn update_parameters(
        &self,
        parameters: ArrayView1<F>,
        gradient: ArrayView1<F>,
    ) -> Result<Array1<F>> {
        let _ = (parameters, gradient);
        Err(OptimizerError::NotImplemented("update_parameters"))
    }

    /// Runs the optimization loop on a dataset.
    fn optimize<S, T, D>(
        &mut self,
        dataset: &DatasetBase<ArrayBase<S, Ix2>, ArrayBase<T, D>>,
    ) -> Result<Convergence>
    where
        S: Data<Elem = F>,
        T: Data<Elem = F>,
        D: Dimension,
    {
        let _ = dataset;
        Err(OptimizerError::NotImplemented("optimize"))
    }
}

/// The bare optimizer contract, with neither an update rule nor a loop.
pub struct BaseOptimizer<F, G> {
    state: OptimizerState<F, G>,
}

impl<F: Float, G> BaseOptimizer<F, G>
where
    G: Fn(ArrayView1<F>, &Batch<F>) -> Array1<F>,
{
    pub fn new<P>(gradient_fn: G, parameters: Array1<F>, params: P) -> Result<Self>
    where
        P: ParamGuard<Checked = OptimizerValidParams<F>, Error = OptimizerError>,
    {
        Ok(BaseOptimizer {
            state: OptimizerState::new(gradient_fn, parameters, params)?,
        })
    }
}

impl<F: Float, G> Optimizer<F> for BaseOptimizer<F, G> {
    type Gradient = G;

    fn state(&self) -> &OptimizerState<F, G> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut OptimizerState<F, G> {
        &mut self.state
    }
}
