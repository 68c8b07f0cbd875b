#[cfg(test)]
mod tests;

/// This module contains small numerical helpers shared by the optimizers.
pub mod helpers {
    use crate::Float;
    use ndarray::{ArrayBase, Data, Dimension};

    /// This function computes the Euclidean norm of an array of any
    /// dimension.
    pub fn l2_norm<F: Float, S: Data<Elem = F>, D: Dimension>(x: &ArrayBase<S, D>) -> F {
        x.fold(F::zero(), |acc, &xi| acc + xi * xi).sqrt()
    }

    /// This function averages a sequence of values, `None` when it is empty.
    pub fn mean<F: Float>(values: &[F]) -> Option<F> {
        if values.is_empty() {
            return None;
        }
        let total: F = values.iter().copied().sum();
        Some(total / F::cast(values.len()))
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::batches::Batch;
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::prelude::*;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn assert_array2d_all_close<F>(x: ArrayView2<F>, y: ArrayView2<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.shape()[0], y.shape()[0]);
        assert_eq!(x.shape()[1], y.shape()[1]);
        for i in 0..x.shape()[0] {
            for j in 0..x.shape()[1] {
                if x[[i, j]].abs_diff_ne(&y[[i, j]], delta) {
                    panic!(
                        "x: {}, y: {} ; with precision level {}",
                        x[[i, j]],
                        y[[i, j]],
                        delta
                    );
                }
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Generates a noiseless linear regression problem and returns the design
    /// matrix, the targets and the true coefficients.
    pub fn generate_random_data(
        n_samples: usize,
        n_features: usize,
    ) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features, 43);
        let X = Array2::from_shape_vec((n_samples, n_features).f(), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let y = X.dot(&true_w);

        (X, y, true_w)
    }

    /// Gradient of the least-squares loss `1 / (2 * n) * ||y - Xw||^2_2` on a
    /// batch with 1-dimensional targets.
    pub fn least_squares_gradient(w: ArrayView1<f64>, batch: &Batch<f64>) -> Array1<f64> {
        let y = batch.targets.view().into_dimensionality::<Ix1>().unwrap();
        let residuals = batch.features.dot(&w) - y;
        batch.features.t().dot(&residuals) / batch.len() as f64
    }

    /// Least-squares loss `1 / (2 * n) * ||y - Xw||^2_2` on a batch with
    /// 1-dimensional targets.
    pub fn least_squares_loss(w: ArrayView1<f64>, batch: &Batch<f64>) -> f64 {
        let y = batch.targets.view().into_dimensionality::<Ix1>().unwrap();
        let residuals = batch.features.dot(&w) - y;
        residuals.dot(&residuals) / (2. * batch.len() as f64)
    }
}
