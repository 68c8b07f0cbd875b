use ndarray::{ArrayBase, ArrayViewD, Data, Dimension};
use num_traits::AsPrimitive;

use super::error::{EstimatorError, Result};
use super::hyperparams::EstimatorValidParams;
use super::traits::Model;
use crate::datasets::validation::{normalize_features, validate_dataset};
use crate::datasets::DatasetBase;
use crate::param_guard::ParamGuard;
use crate::Float;

/// Where an estimator stands in its lifecycle. There is no way back from
/// [`FitState::Fitted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitState {
    Unfitted,
    Fitted,
}

/// The Estimator
///
/// An estimator wraps a [`Model`] and enforces its lifecycle: every input goes
/// through validation before reaching the model hooks, and prediction is
/// refused until a fit has succeeded when the configuration requires it.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimator<M> {
    model: M,
    params: EstimatorValidParams,
    state: FitState,
}

impl<M> Estimator<M> {
    /// This method instantiates an unfitted estimator with the default
    /// configuration.
    pub fn new(model: M) -> Self {
        Estimator {
            model,
            params: EstimatorValidParams::default(),
            state: FitState::Unfitted,
        }
    }

    /// This method instantiates an unfitted estimator with a custom
    /// configuration.
    pub fn with_params<P>(model: M, params: P) -> Result<Self>
    where
        P: ParamGuard<Checked = EstimatorValidParams, Error = EstimatorError>,
    {
        Ok(Estimator {
            model,
            params: params.check()?,
            state: FitState::Unfitted,
        })
    }

    pub fn params(&self) -> &EstimatorValidParams {
        &self.params
    }

    pub fn state(&self) -> FitState {
        self.state
    }

    pub fn is_fitted(&self) -> bool {
        self.state == FitState::Fitted
    }

    /// This method is a getter for the wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    /// This method validates the dataset and hands it to the model fit hook.
    /// Inputs of any primitive numeric type are cast to the model float.
    ///
    /// The estimator is marked fitted only when the hook succeeds. A failed
    /// fit leaves the state untouched, so an estimator fitted earlier stays
    /// fitted with whatever the hook left in the model.
    pub fn fit<F, A, S, D>(
        &mut self,
        x: &ArrayBase<S, D>,
        y: Option<ArrayViewD<A>>,
    ) -> std::result::Result<(), M::Error>
    where
        F: Float,
        A: AsPrimitive<F>,
        S: Data<Elem = A>,
        D: Dimension,
        M: Model<F>,
    {
        let (x, y) = validate_dataset(x, y, self.params.y_required())?;
        let dataset = DatasetBase::new(x, y);
        log::debug!(
            "fitting model on {} samples with {} features",
            dataset.n_samples(),
            dataset.n_features()
        );

        self.model.fit_model(&dataset)?;
        self.state = FitState::Fitted;
        Ok(())
    }

    /// This method normalizes the design matrix and hands it to the model
    /// predict hook.
    pub fn predict<F, A, S, D>(
        &self,
        x: &ArrayBase<S, D>,
    ) -> std::result::Result<M::Prediction, M::Error>
    where
        F: Float,
        A: AsPrimitive<F>,
        S: Data<Elem = A>,
        D: Dimension,
        M: Model<F>,
    {
        let x = normalize_features(x)?;
        if self.params.requires_fit() && self.state == FitState::Unfitted {
            log::debug!("refusing to predict with an unfitted model");
            return Err(EstimatorError::NotFitted.into());
        }
        self.model.predict_model(x.view())
    }
}
