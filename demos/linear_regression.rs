extern crate mllib;

use ndarray::{Array1, ArrayView2, Ix1};

use mllib::{
    datasets::{DatasetBase, ValidDataset},
    estimators::{error::EstimatorError, Estimator, Model},
    helpers::test_helpers::{generate_random_data, least_squares_gradient, least_squares_loss},
    optimizers::{error::OptimizerError, GradientDescent, Metric, Optimizer, OptimizerParams},
};

/// Least-squares linear regression fitted by mini-batch gradient descent.
struct LinearRegression {
    params: OptimizerParams<f64>,
    coefficients: Option<Array1<f64>>,
}

impl LinearRegression {
    fn new(params: OptimizerParams<f64>) -> Self {
        LinearRegression {
            params,
            coefficients: None,
        }
    }
}

impl Model<f64> for LinearRegression {
    type Prediction = Array1<f64>;
    type Error = OptimizerError;

    fn fit_model(&mut self, dataset: &ValidDataset<f64>) -> Result<(), OptimizerError> {
        let y = match dataset.targets() {
            Some(y) => y
                .view()
                .into_dimensionality::<Ix1>()
                .map_err(|_| EstimatorError::InvalidShape(y.ndim()))?,
            None => return Err(EstimatorError::MissingTarget.into()),
        };
        let training = DatasetBase::new(dataset.design_matrix().view(), y);

        let mut optimizer = GradientDescent::new(
            least_squares_gradient,
            Array1::zeros(dataset.n_features()),
            self.params.clone(),
        )?
        .with_loss(least_squares_loss);
        let convergence = optimizer.optimize(&training)?;

        println!(
            "converged: {} after {} epochs, final loss {:?}",
            convergence.converged,
            convergence.n_iter,
            optimizer.history().last(Metric::Loss)
        );
        self.coefficients = Some(optimizer.into_parameters());
        Ok(())
    }

    fn predict_model(&self, x: ArrayView2<f64>) -> Result<Array1<f64>, OptimizerError> {
        let w = self.coefficients.as_ref().ok_or(EstimatorError::NotFitted)?;
        Ok(x.dot(w))
    }
}

fn main() {
    env_logger::init();

    let (x, y, true_w) = generate_random_data(200, 5);

    let params = OptimizerParams::new(0.05, 16).tolerance(1e-12).seed(42);
    let mut estimator = Estimator::new(LinearRegression::new(params));

    // Predicting before fitting is refused.
    assert!(estimator.predict(&x).is_err());

    estimator.fit(&x, Some(y.view().into_dyn())).unwrap();
    let predictions = estimator.predict(&x).unwrap();

    let coefficients = estimator.model().coefficients.as_ref().unwrap();
    println!("true coefficients:   {}", true_w);
    println!("fitted coefficients: {}", coefficients);

    let residuals = &predictions - &y;
    println!("max abs residual: {}", residuals.fold(0., |m: f64, r| m.max(r.abs())));
}
