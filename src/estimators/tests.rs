extern crate ndarray;

use ndarray::{array, Array, Array1, ArrayView2, Axis, Ix3};
use thiserror::Error;

use super::error::EstimatorError;
use super::*;
use crate::datasets::ValidDataset;
use crate::helpers::test_helpers::assert_array_all_close;

/// Predicts the mean of the targets seen during fit.
#[derive(Debug, Default)]
struct MeanRegressor {
    mean: f64,
}

impl Model<f64> for MeanRegressor {
    type Prediction = Array1<f64>;
    type Error = EstimatorError;

    fn fit_model(&mut self, dataset: &ValidDataset<f64>) -> Result<(), EstimatorError> {
        let y = dataset.targets().as_ref().ok_or(EstimatorError::MissingTarget)?;
        self.mean = y.mean().unwrap_or(0.);
        Ok(())
    }

    fn predict_model(&self, x: ArrayView2<f64>) -> Result<Array1<f64>, EstimatorError> {
        Ok(Array1::from_elem(x.nrows(), self.mean))
    }
}

/// Learns per-feature means without targets.
#[derive(Debug, Default)]
struct Centering {
    means: Option<Array1<f64>>,
}

impl Model<f64> for Centering {
    type Prediction = ndarray::Array2<f64>;
    type Error = EstimatorError;

    fn fit_model(&mut self, dataset: &ValidDataset<f64>) -> Result<(), EstimatorError> {
        self.means = dataset.design_matrix().mean_axis(Axis(0));
        Ok(())
    }

    fn predict_model(&self, x: ArrayView2<f64>) -> Result<ndarray::Array2<f64>, EstimatorError> {
        match &self.means {
            Some(means) => Ok(&x - means),
            None => Ok(x.to_owned()),
        }
    }
}

#[derive(Debug, Error)]
enum DivergingError {
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
    #[error("the solver diverged")]
    Diverged,
}

/// Only implements the fit hook, which always fails.
#[derive(Debug, Default)]
struct Diverging {
    attempts: usize,
}

impl Model<f64> for Diverging {
    type Prediction = Array1<f64>;
    type Error = DivergingError;

    fn fit_model(&mut self, _dataset: &ValidDataset<f64>) -> Result<(), DivergingError> {
        self.attempts += 1;
        Err(DivergingError::Diverged)
    }
}

#[test]
fn test_fit_then_predict() {
    let x = array![[1.], [2.], [3.], [4.]];
    let y = array![1., 2., 3., 6.];

    let mut estimator = Estimator::new(MeanRegressor::default());
    assert_eq!(estimator.state(), FitState::Unfitted);

    estimator.fit(&x, Some(y.view().into_dyn())).unwrap();
    assert!(estimator.is_fitted());

    let pred = estimator.predict(&array![10., 20.]).unwrap();
    assert_array_all_close(pred.view(), array![3., 3.].view(), 1e-12);
}

#[test]
fn test_fit_then_predict_on_integers() {
    let x = array![1, 2, 3];
    let y = array![1, 2, 6];

    let mut estimator = Estimator::new(MeanRegressor::default());
    estimator.fit(&x, Some(y.view().into_dyn())).unwrap();
    assert!(estimator.is_fitted());

    let pred = estimator.predict(&array![[7u32], [8]]).unwrap();
    assert_array_all_close(pred.view(), array![3., 3.].view(), 1e-12);
}

#[test]
fn test_predict_before_fit() {
    let estimator = Estimator::new(MeanRegressor::default());
    let res = estimator.predict(&array![[1.], [2.]]);
    assert_eq!(res, Err(EstimatorError::NotFitted));
}

#[test]
fn test_predict_validates_before_fit_check() {
    let estimator = Estimator::new(MeanRegressor::default());
    let res = estimator.predict(&Array::<f64, Ix3>::zeros((1, 1, 1)));
    assert_eq!(res, Err(EstimatorError::InvalidShape(3)));
}

#[test]
fn test_predict_without_fit_requirement() {
    let params = EstimatorParams::new().requires_fit(false);
    let estimator = Estimator::with_params(MeanRegressor::default(), params).unwrap();
    let pred = estimator.predict(&array![1., 2., 3.]).unwrap();
    assert_eq!(pred.len(), 3);
    assert!(!estimator.is_fitted());
}

#[test]
fn test_fit_missing_target() {
    let mut estimator = Estimator::new(MeanRegressor::default());
    let res = estimator.fit(&array![[1.], [2.]], None);
    assert_eq!(res, Err(EstimatorError::MissingTarget));
    assert_eq!(estimator.state(), FitState::Unfitted);
}

#[test]
fn test_fit_empty_input() {
    let mut estimator = Estimator::new(MeanRegressor::default());
    let y = array![1., 2.];
    let res = estimator.fit(&Array1::<f64>::zeros(0), Some(y.view().into_dyn()));
    assert_eq!(res, Err(EstimatorError::EmptyInput("X")));

    let y = Array1::<f64>::zeros(0);
    let res = estimator.fit(&array![[1.], [2.]], Some(y.view().into_dyn()));
    assert_eq!(res, Err(EstimatorError::EmptyInput("y")));
    assert!(!estimator.is_fitted());
}

#[test]
fn test_fit_without_targets() {
    let params = EstimatorParams::new().y_required(false);
    let mut estimator = Estimator::with_params(Centering::default(), params).unwrap();
    let x = array![[1., 10.], [3., 30.]];

    estimator.fit(&x, None).unwrap();
    assert!(estimator.is_fitted());

    let centered = estimator.predict(&x).unwrap();
    assert_eq!(centered, array![[-1., -10.], [1., 10.]]);
}

#[test]
fn test_failed_fit_stays_unfitted() {
    let mut estimator = Estimator::new(Diverging::default());
    let y = array![1., 2.];
    let res = estimator.fit(&array![1., 2.], Some(y.view().into_dyn()));

    assert!(matches!(res, Err(DivergingError::Diverged)));
    assert_eq!(estimator.state(), FitState::Unfitted);
    assert_eq!(estimator.model().attempts, 1);

    // Validation errors are converted into the model error type and the hook
    // is never reached.
    let res = estimator.fit(&array![1., 2.], None);
    assert!(matches!(
        res,
        Err(DivergingError::Estimator(EstimatorError::MissingTarget))
    ));
    assert_eq!(estimator.into_model().attempts, 1);
}

#[test]
fn test_missing_predict_hook() {
    let params = EstimatorParams::new().requires_fit(false);
    let estimator = Estimator::with_params(Diverging::default(), params).unwrap();
    let res = estimator.predict(&array![1., 2.]);
    assert!(matches!(
        res,
        Err(DivergingError::Estimator(EstimatorError::NotImplemented(
            "predict_model"
        )))
    ));
}

#[test]
fn test_base_model_is_not_implemented() {
    let mut estimator = Estimator::new(BaseModel::<f64>::new());
    let y = array![1.];
    let res = estimator.fit(&array![[1.]], Some(y.view().into_dyn()));
    assert_eq!(res, Err(EstimatorError::NotImplemented("fit_model")));
    assert!(!estimator.is_fitted());

    let params = EstimatorParams::new().requires_fit(false);
    let estimator = Estimator::with_params(BaseModel::<f64>::new(), params).unwrap();
    let res = estimator.predict(&array![[1.]]);
    assert_eq!(res, Err(EstimatorError::NotImplemented("predict_model")));
}

#[test]
fn test_params_are_kept() {
    let params = EstimatorParams::default().y_required(false);
    let estimator = Estimator::with_params(BaseModel::<f32>::new(), params).unwrap();
    assert!(!estimator.params().y_required());
    assert!(estimator.params().requires_fit());
}
