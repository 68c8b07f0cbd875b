use std::marker::PhantomData;

use ndarray::{Array1, ArrayView2};

use super::error::EstimatorError;
use crate::datasets::ValidDataset;
use crate::Float;

/// Model trait
///
/// The model trait holds the model-specific part of an estimator: how its
/// coefficients are learnt from a validated dataset and how predictions are
/// made from them. The [`Estimator`](super::Estimator) wrapping a model takes
/// care of input validation and of the fit-before-predict ordering, so hooks
/// always receive non-empty 2-dimensional design matrices.
///
/// Both hooks default to [`EstimatorError::NotImplemented`]; a concrete model
/// overrides the ones it supports.
pub trait Model<F: Float> {
    /// What `predict_model` returns, usually an array of predicted targets.
    type Prediction;
    /// Hook errors. Validation and lifecycle errors are converted into it.
    type Error: std::error::Error + From<EstimatorError>;

    fn fit_model(&mut self, dataset: &ValidDataset<F>) -> Result<(), Self::Error> {
        let _ = dataset;
        Err(EstimatorError::NotImplemented("fit_model").into())
    }

    fn predict_model(&self, x: ArrayView2<F>) -> Result<Self::Prediction, Self::Error> {
        let _ = x;
        Err(EstimatorError::NotImplemented("predict_model").into())
    }
}

/// A model without any hook, the bare contract.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BaseModel<F> {
    marker: PhantomData<F>,
}

impl<F> BaseModel<F> {
    pub fn new() -> Self {
        BaseModel {
            marker: PhantomData,
        }
    }
}

impl<F: Float> Model<F> for BaseModel<F> {
    type Prediction = Array1<F>;
    type Error = EstimatorError;
}
