use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension, Ix2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::{OptimizerError, Result};
use super::history::Metric;
use super::hyperparams::OptimizerValidParams;
use super::{Convergence, Optimizer, OptimizerState};
use crate::batches::{dataset_batches_with_rng, Batch};
use crate::datasets::DatasetBase;
use crate::helpers::helpers::{l2_norm, mean};
use crate::param_guard::ParamGuard;
use crate::Float;

/// Boxed `(parameters, batch) -> loss` function.
pub type LossFn<F> = Box<dyn Fn(ArrayView1<F>, &Batch<F>) -> F>;

/// This function runs epochs of mini-batch updates until convergence or until
/// `max_iter` epochs have run.
///
/// Every epoch reshuffles the dataset. For each batch the gradient is evaluated
/// at the current parameters and handed to [`Optimizer::update_parameters`].
/// At the end of an epoch the parameter change and the mean gradient norm are
/// recorded, as well as the mean batch loss when [`Optimizer::loss`] provides
/// one.
///
/// With a loss, optimization stops once two consecutive epoch losses of this
/// call differ by less than the tolerance; without, once an epoch moves the
/// parameters by less than the tolerance.
///
/// An error halfway through an epoch leaves the parameters as the last
/// successful update left them, and nothing is recorded for that epoch.
pub fn run_epochs<F, O, S, T, D>(
    optimizer: &mut O,
    dataset: &DatasetBase<ArrayBase<S, Ix2>, ArrayBase<T, D>>,
) -> Result<Convergence>
where
    F: Float,
    O: Optimizer<F> + ?Sized,
    O::Gradient: Fn(ArrayView1<F>, &Batch<F>) -> Array1<F>,
    S: Data<Elem = F>,
    T: Data<Elem = F>,
    D: Dimension,
{
    let params = optimizer.params().clone();
    let mut rng = match params.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let level = if params.verbose() {
        log::Level::Info
    } else {
        log::Level::Debug
    };

    let mut previous_loss: Option<F> = None;

    for iteration in 1..=params.max_iter() {
        let start = optimizer.parameters().to_owned();
        let mut gradient_norms = Vec::new();
        let mut losses = Vec::new();

        for batch in dataset_batches_with_rng(dataset, params.batch_size(), &mut rng)? {
            let gradient = optimizer.state().gradient(&batch);
            if gradient.len() != start.len() {
                return Err(OptimizerError::GradientDimMismatch {
                    expected: start.len(),
                    found: gradient.len(),
                });
            }
            let updated = optimizer.update_parameters(optimizer.parameters(), gradient.view())?;
            optimizer.state_mut().set_parameters(updated)?;

            gradient_norms.push(l2_norm(&gradient));
            if let Some(loss) = optimizer.loss(optimizer.parameters(), &batch) {
                losses.push(loss);
            }
        }

        let change = l2_norm(&(&optimizer.parameters() - &start));
        let gradient_norm = mean(&gradient_norms).unwrap_or_else(F::zero);
        let loss = mean(&losses);

        check_finite(Metric::ParameterChange, change, iteration)?;
        check_finite(Metric::GradientNorm, gradient_norm, iteration)?;
        if let Some(loss) = loss {
            check_finite(Metric::Loss, loss, iteration)?;
        }

        let history = optimizer.state_mut().history_mut();
        history.record(Metric::ParameterChange, change);
        history.record(Metric::GradientNorm, gradient_norm);
        if let Some(loss) = loss {
            history.record(Metric::Loss, loss);
        }

        match loss {
            Some(loss) => log::log!(
                level,
                "iteration: {} :: loss: {} :: grad norm: {} :: change: {}",
                iteration,
                loss,
                gradient_norm,
                change
            ),
            None => log::log!(
                level,
                "iteration: {} :: grad norm: {} :: change: {}",
                iteration,
                gradient_norm,
                change
            ),
        }

        let converged = match (loss, previous_loss) {
            (Some(loss), Some(previous)) => {
                num_traits::Float::abs(loss - previous) < params.tolerance()
            }
            (Some(_), None) => false,
            (None, _) => change < params.tolerance(),
        };
        if converged {
            log::info!("converged after {} iterations", iteration);
            return Ok(Convergence {
                n_iter: iteration,
                converged: true,
            });
        }
        previous_loss = loss;
    }

    log::warn!(
        "stopped after max_iter={} iterations without converging",
        params.max_iter()
    );
    Ok(Convergence {
        n_iter: params.max_iter(),
        converged: false,
    })
}

fn check_finite<F: Float>(metric: Metric, value: F, iteration: usize) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OptimizerError::NonFiniteMetric {
            metric: metric.name(),
            iteration,
        })
    }
}

/// Mini-batch gradient descent
///
/// Each batch moves the parameters by `-learning_rate * gradient`. When a loss
/// function is attached, convergence is judged on the epoch loss instead of
/// the parameter change.
pub struct GradientDescent<F, G> {
    state: OptimizerState<F, G>,
    loss_fn: Option<LossFn<F>>,
}

impl<F: Float, G> GradientDescent<F, G>
where
    G: Fn(ArrayView1<F>, &Batch<F>) -> Array1<F>,
{
    pub fn new<P>(gradient_fn: G, parameters: Array1<F>, params: P) -> Result<Self>
    where
        P: ParamGuard<Checked = OptimizerValidParams<F>, Error = OptimizerError>,
    {
        Ok(GradientDescent {
            state: OptimizerState::new(gradient_fn, parameters, params)?,
            loss_fn: None,
        })
    }

    /// This method attaches a loss function to track in the history.
    pub fn with_loss<L>(mut self, loss_fn: L) -> Self
    where
        L: Fn(ArrayView1<F>, &Batch<F>) -> F + 'static,
    {
        self.loss_fn = Some(Box::new(loss_fn));
        self
    }

    pub fn into_parameters(self) -> Array1<F> {
        self.state.into_parameters()
    }
}

impl<F: Float, G> Optimizer<F> for GradientDescent<F, G>
where
    G: Fn(ArrayView1<F>, &Batch<F>) -> Array1<F>,
{
    type Gradient = G;

    fn state(&self) -> &OptimizerState<F, G> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut OptimizerState<F, G> {
        &mut self.state
    }

    fn loss(&self, parameters: ArrayView1<F>, batch: &Batch<F>) -> Option<F> {
        self.loss_fn.as_ref().map(|loss_fn| loss_fn(parameters, batch))
    }

    fn update_parameters(
        &self,
        parameters: ArrayView1<F>,
        gradient: ArrayView1<F>,
    ) -> Result<Array1<F>> {
        if parameters.len() != gradient.len() {
            return Err(OptimizerError::GradientDimMismatch {
                expected: parameters.len(),
                found: gradient.len(),
            });
        }
        let mut updated = parameters.to_owned();
        updated.scaled_add(-self.state.params().learning_rate(), &gradient);
        Ok(updated)
    }

    fn optimize<S, T, D>(
        &mut self,
        dataset: &DatasetBase<ArrayBase<S, Ix2>, ArrayBase<T, D>>,
    ) -> Result<Convergence>
    where
        S: Data<Elem = F>,
        T: Data<Elem = F>,
        D: Dimension,
    {
        run_epochs(self, dataset)
    }
}
