extern crate ndarray;

use ndarray::{Array2, ArrayBase, ArrayD, ArrayView2, ArrayViewD, Axis, Data, Dimension, Ix2};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::datasets::{DatasetBase, Targets};
use crate::optimizers::error::{OptimizerError, Result};
use crate::Float;


/// One mini-batch: a subset of the rows of a dataset.
///
/// `indices` are the row numbers, in the original dataset, of the rows of
/// `features` and `targets`, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<F> {
    pub features: Array2<F>,
    pub targets: ArrayD<F>,
    pub indices: Vec<usize>,
}

impl<F> Batch<F> {
    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// One epoch of mini-batches.
///
/// The rows are shuffled once when the iterator is built, then handed out in
/// contiguous chunks of `batch_size`; only the last chunk may be smaller. Every
/// row is yielded exactly once. The iterator cannot be rewound: a new epoch
/// needs a new call to [`batches`], which reshuffles.
#[derive(Debug, Clone)]
pub struct Batches<'a, F> {
    features: ArrayView2<'a, F>,
    targets: ArrayViewD<'a, F>,
    permutation: Vec<usize>,
    batch_size: usize,
    position: usize,
}

impl<'a, F: Float> Batches<'a, F> {
    fn new<R: Rng + ?Sized>(
        features: ArrayView2<'a, F>,
        targets: ArrayViewD<'a, F>,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(OptimizerError::InvalidBatchSize(batch_size));
        }
        let n_samples = features.nrows();
        if n_samples == 0 {
            return Err(OptimizerError::EmptyInput);
        }
        let n_targets = Targets::n_samples(&targets);
        if n_targets != n_samples {
            return Err(OptimizerError::SampleMismatch {
                features: n_samples,
                targets: n_targets,
            });
        }

        let mut permutation: Vec<usize> = (0..n_samples).collect();
        permutation.shuffle(rng);

        Ok(Batches {
            features,
            targets,
            permutation,
            batch_size,
            position: 0,
        })
    }

    /// Number of batches in a full epoch, `ceil(n_samples / batch_size)`.
    pub fn n_batches(&self) -> usize {
        ceil_div(self.permutation.len(), self.batch_size)
    }

    /// The shuffled row order of this epoch.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }
}

impl<'a, F: Float> Iterator for Batches<'a, F> {
    type Item = Batch<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.permutation.len() {
            return None;
        }
        let end = usize::min(
            self.position.saturating_add(self.batch_size),
            self.permutation.len(),
        );
        let indices = self.permutation[self.position..end].to_vec();
        self.position = end;

        let features = self.features.select(Axis(0), &indices);
        let targets = if self.targets.ndim() == 0 {
            // A 0-dimensional target is a single sample.
            self.targets.to_owned()
        } else {
            self.targets.select(Axis(0), &indices)
        };

        Some(Batch {
            features,
            targets,
            indices,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.permutation.len() - self.position;
        let n = ceil_div(remaining, self.batch_size);
        (n, Some(n))
    }
}

impl<'a, F: Float> ExactSizeIterator for Batches<'a, F> {}

/// `ceil(n / d)` without overflowing for large `d`.
fn ceil_div(n: usize, d: usize) -> usize {
    n / d + usize::from(n % d != 0)
}

/// This function draws one epoch of shuffled mini-batches from a design matrix
/// and its targets, using the thread-local random source.
///
/// Runs are not reproducible; use [`batches_with_rng`] with a seeded generator
/// when they need to be.
pub fn batches<'a, F, S, T, D>(
    x: &'a ArrayBase<S, Ix2>,
    y: &'a ArrayBase<T, D>,
    batch_size: usize,
) -> Result<Batches<'a, F>>
where
    F: Float,
    S: Data<Elem = F>,
    T: Data<Elem = F>,
    D: Dimension,
{
    batches_with_rng(x, y, batch_size, &mut rand::thread_rng())
}

/// This function draws one epoch of shuffled mini-batches, shuffling with the
/// given random generator.
pub fn batches_with_rng<'a, F, S, T, D, R>(
    x: &'a ArrayBase<S, Ix2>,
    y: &'a ArrayBase<T, D>,
    batch_size: usize,
    rng: &mut R,
) -> Result<Batches<'a, F>>
where
    F: Float,
    S: Data<Elem = F>,
    T: Data<Elem = F>,
    D: Dimension,
    R: Rng + ?Sized,
{
    Batches::new(x.view(), y.view().into_dyn(), batch_size, rng)
}

/// This function draws one epoch of mini-batches from a dataset.
pub fn dataset_batches_with_rng<'a, F, S, T, D, R>(
    dataset: &'a DatasetBase<ArrayBase<S, Ix2>, ArrayBase<T, D>>,
    batch_size: usize,
    rng: &mut R,
) -> Result<Batches<'a, F>>
where
    F: Float,
    S: Data<Elem = F>,
    T: Data<Elem = F>,
    D: Dimension,
    R: Rng + ?Sized,
{
    batches_with_rng(dataset.design_matrix(), dataset.targets(), batch_size, rng)
}
