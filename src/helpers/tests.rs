use ndarray::{array, Array1};

use super::helpers::{l2_norm, mean};
use super::test_helpers::{generate_random_data, least_squares_gradient, least_squares_loss};
use crate::batches::Batch;

#[test]
fn test_l2_norm() {
    assert_eq!(l2_norm(&array![3., 4.]), 5.);
    assert_eq!(l2_norm(&array![[1., 1.], [1., 1.]]), 2.);
    assert_eq!(l2_norm(&Array1::<f32>::zeros(3)), 0.);
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[1., 2., 6.]), Some(3.));
    assert_eq!(mean::<f64>(&[]), None);
}

#[test]
fn test_least_squares_at_optimum() {
    let (x, y, true_w) = generate_random_data(20, 3);
    let batch = Batch {
        features: x,
        targets: y.into_dyn(),
        indices: (0..20).collect(),
    };
    let grad = least_squares_gradient(true_w.view(), &batch);
    assert!(grad.iter().all(|g| g.abs() < 1e-10));
    assert!(least_squares_loss(true_w.view(), &batch) < 1e-20);
}
