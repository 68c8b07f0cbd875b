use super::Targets;
use ndarray::{ArrayBase, Axis, Data, Dimension};

/// Targets are indexed by sample along their first axis; every remaining axis
/// counts towards the number of tasks.
impl<F, S: Data<Elem = F>, D: Dimension> Targets for ArrayBase<S, D> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        if self.ndim() == 0 {
            1
        } else {
            self.len_of(Axis(0))
        }
    }

    fn n_tasks(&self) -> usize {
        self.shape().iter().skip(1).product()
    }
}
