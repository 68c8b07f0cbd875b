extern crate ndarray;

use ndarray::{Array2, ArrayD};

mod impl_datasets;
mod impl_targets;
pub mod validation;

#[cfg(test)]
mod tests;

/// A design matrix paired with its targets.
///
/// Datasets handed to model hooks have already been through
/// [`validation::validate_dataset`], so their design matrix is always
/// 2-dimensional and non-empty.
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
{
    pub design_matrix: DM,
    pub targets: T,
}

/// The output of input validation: targets are absent when the estimator
/// does not require them and none were supplied.
pub type ValidDataset<F> = DatasetBase<Array2<F>, Option<ArrayD<F>>>;

pub trait DesignMatrix: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_features(&self) -> usize;
}

pub trait Targets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_tasks(&self) -> usize;
}
