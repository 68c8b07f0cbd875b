extern crate ndarray;

use ndarray::{array, Array, Array1, Array2, ArrayD, Ix3, IxDyn};

use super::validation::{normalize_features, validate_dataset};
use super::{DatasetBase, Targets};
use crate::estimators::error::EstimatorError;

#[test]
fn test_normalize_1d_becomes_column() {
    let x = array![1., 2., 3.];
    let normalized = normalize_features::<f64, _, _, _>(&x).unwrap();
    assert_eq!(normalized, array![[1.], [2.], [3.]]);
}

#[test]
fn test_normalize_1d_shape_for_all_lengths() {
    for n in 1..20 {
        let x = Array1::<f64>::linspace(0., 1., n);
        let normalized = normalize_features::<f64, _, _, _>(&x).unwrap();
        assert_eq!(normalized.shape(), &[n, 1]);
    }
}

#[test]
fn test_normalize_2d_is_unchanged() {
    let x = array![[1., 2.], [3., 4.], [5., 6.]];
    let normalized = normalize_features::<f64, _, _, _>(&x.view()).unwrap();
    assert_eq!(normalized, x);
}

#[test]
fn test_normalize_scalar() {
    let x = ArrayD::from_elem(IxDyn(&[]), 4.2);
    let normalized = normalize_features::<f64, _, _, _>(&x).unwrap();
    assert_eq!(normalized, array![[4.2]]);
}

#[test]
fn test_normalize_rejects_more_than_two_dimensions() {
    let x = Array::<f64, Ix3>::zeros((2, 2, 2));
    assert_eq!(normalize_features::<f64, _, _, _>(&x), Err(EstimatorError::InvalidShape(3)));

    let x = ArrayD::<f32>::ones(IxDyn(&[1, 2, 1, 3]));
    assert_eq!(normalize_features::<f32, _, _, _>(&x), Err(EstimatorError::InvalidShape(4)));
}

#[test]
fn test_normalize_rejects_empty() {
    let x = Array1::<f64>::zeros(0);
    assert_eq!(normalize_features::<f64, _, _, _>(&x), Err(EstimatorError::EmptyInput("X")));

    let x = Array2::<f64>::zeros((0, 3));
    assert_eq!(normalize_features::<f64, _, _, _>(&x), Err(EstimatorError::EmptyInput("X")));

    // Emptiness is checked before dimensionality.
    let x = Array::<f64, Ix3>::zeros((0, 2, 2));
    assert_eq!(normalize_features::<f64, _, _, _>(&x), Err(EstimatorError::EmptyInput("X")));
}

#[test]
fn test_normalize_casts_integers() {
    let normalized = normalize_features::<f64, _, _, _>(&array![1, 2, 3]).unwrap();
    assert_eq!(normalized, array![[1.], [2.], [3.]]);

    let x = array![[1u8, 2], [3, 4]];
    let normalized = normalize_features::<f32, _, _, _>(&x).unwrap();
    assert_eq!(normalized, array![[1f32, 2.], [3., 4.]]);

    let x = Array1::<i64>::zeros(0);
    assert_eq!(
        normalize_features::<f64, _, _, _>(&x),
        Err(EstimatorError::EmptyInput("X"))
    );
}

#[test]
fn test_validate_casts_integer_targets() {
    let x = array![1, 2, 3];
    let y = array![0, 1, 1];
    let (x, y) = validate_dataset::<f64, _, _, _>(&x, Some(y.view().into_dyn()), true).unwrap();
    assert_eq!(x, array![[1.], [2.], [3.]]);
    assert_eq!(y.unwrap(), array![0., 1., 1.].into_dyn());
}

#[test]
fn test_validate_missing_target() {
    let x = array![[1.], [2.]];
    let res = validate_dataset::<f64, _, _, _>(&x, None, true);
    assert_eq!(res, Err(EstimatorError::MissingTarget));
}

#[test]
fn test_validate_empty_target() {
    let x = array![[1.], [2.]];
    let y = Array1::<f64>::zeros(0);
    let res = validate_dataset::<f64, _, _, _>(&x, Some(y.view().into_dyn()), true);
    assert_eq!(res, Err(EstimatorError::EmptyInput("y")));
}

#[test]
fn test_validate_checks_features_first() {
    let x = Array1::<f64>::zeros(0);
    let res = validate_dataset::<f64, _, _, _>(&x, None, true);
    assert_eq!(res, Err(EstimatorError::EmptyInput("X")));
}

#[test]
fn test_validate_passes_targets_through() {
    let x = array![1., 2., 3.];
    let y = array![[1., 0.], [0., 1.], [1., 1.]];
    let (x, y_valid) =
        validate_dataset::<f64, _, _, _>(&x, Some(y.view().into_dyn()), true).unwrap();
    assert_eq!(x.shape(), &[3, 1]);
    assert_eq!(y_valid.unwrap(), y.into_dyn());
}

#[test]
fn test_validate_optional_target() {
    let x = array![[1., 2.]];
    let (_, y) = validate_dataset::<f64, _, _, _>(&x, None, false).unwrap();
    assert!(y.is_none());

    // Targets that are not required are not checked either.
    let empty = Array1::<f64>::zeros(0);
    let (_, y) =
        validate_dataset::<f64, _, _, _>(&x, Some(empty.view().into_dyn()), false).unwrap();
    assert_eq!(y.unwrap().len(), 0);
}

#[test]
fn test_dataset_dimensions() {
    let x = array![[1., 2., 3.], [4., 5., 6.]];
    let y = array![[1., 0.], [0., 1.]];
    let dataset = DatasetBase::from((x, y));
    assert_eq!(dataset.n_samples(), 2);
    assert_eq!(dataset.n_features(), 3);
    assert_eq!(dataset.n_tasks(), 2);

    let y = array![1., 0., 1.];
    assert_eq!(y.n_samples(), 3);
    assert_eq!(y.n_tasks(), 1);
}
