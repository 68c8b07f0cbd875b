use ndarray::{Array1, Array2, ArrayBase, ArrayD, ArrayViewD, Axis, Data, Dimension, Ix2};
use num_traits::AsPrimitive;

use crate::estimators::error::{EstimatorError, Result};
use crate::Float;

/// This function turns any array into a non-empty 2-dimensional design matrix
/// of floats.
///
/// Elements of any primitive numeric type are cast to `F`. A 1-dimensional
/// input of length `n` becomes a single column of shape `(n, 1)`, a
/// 0-dimensional scalar becomes `(1, 1)`. Inputs with more than two dimensions
/// are rejected with [`EstimatorError::InvalidShape`] and inputs without any
/// element with [`EstimatorError::EmptyInput`].
pub fn normalize_features<F, A, S, D>(x: &ArrayBase<S, D>) -> Result<Array2<F>>
where
    F: Float,
    A: AsPrimitive<F>,
    S: Data<Elem = A>,
    D: Dimension,
{
    if x.is_empty() {
        log::debug!("rejecting empty design matrix of shape {:?}", x.shape());
        return Err(EstimatorError::EmptyInput("X"));
    }
    match x.ndim() {
        0 | 1 => Ok(x
            .iter()
            .map(|&xi| xi.as_())
            .collect::<Array1<F>>()
            .insert_axis(Axis(1))),
        2 => {
            let x = x
                .view()
                .into_dimensionality::<Ix2>()
                .map_err(|_| EstimatorError::InvalidShape(x.ndim()))?;
            Ok(x.mapv(|xi| xi.as_()))
        }
        ndim => {
            log::debug!("rejecting design matrix with {} dimensions", ndim);
            Err(EstimatorError::InvalidShape(ndim))
        }
    }
}

/// This function validates a design matrix and its targets before fitting.
///
/// The design matrix goes through [`normalize_features`]. When `y_required` is
/// set, targets must be supplied and non-empty; they are otherwise passed
/// through unchecked, whatever their shape. Targets share the element type of
/// the design matrix and are cast to `F` the same way.
pub fn validate_dataset<F, A, S, D>(
    x: &ArrayBase<S, D>,
    y: Option<ArrayViewD<A>>,
    y_required: bool,
) -> Result<(Array2<F>, Option<ArrayD<F>>)>
where
    F: Float,
    A: AsPrimitive<F>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let x = normalize_features(x)?;

    if y_required {
        match &y {
            None => {
                log::debug!("targets are required but none were supplied");
                return Err(EstimatorError::MissingTarget);
            }
            Some(y) if y.is_empty() => {
                log::debug!("rejecting empty targets of shape {:?}", y.shape());
                return Err(EstimatorError::EmptyInput("y"));
            }
            Some(_) => {}
        }
    }

    Ok((x, y.map(|y| y.mapv(|yi| yi.as_()))))
}
