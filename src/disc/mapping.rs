use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{SpectralError, SpectralResult};

fn check_interval(lower: f64, upper: f64) -> SpectralResult<()> {
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(SpectralError::InvalidInterval { lower, upper });
    }
    Ok(())
}

/// Affine map of reference points in [-1, 1] onto [lower, upper].
pub fn map_to_interval(
    points: ArrayView1<f64>,
    lower: f64,
    upper: f64,
) -> SpectralResult<Array1<f64>> {
    check_interval(lower, upper)?;
    let half_length = 0.5 * (upper - lower);
    let midpoint = 0.5 * (upper + lower);
    Ok(points.mapv(|xi| midpoint + half_length * xi))
}

/// Rescales a reference differentiation matrix of order `order` to [lower, upper].
///
/// With `x = (a + b) / 2 + (b - a) / 2 * xi`, every derivative picks up a factor
/// `2 / (b - a)`, so the order-m operator is scaled by `(2 / (b - a))^m`.
pub fn scale_differentiation_matrix(
    dmatrix: ArrayView2<f64>,
    order: i32,
    lower: f64,
    upper: f64,
) -> SpectralResult<Array2<f64>> {
    if order < 1 {
        return Err(SpectralError::InvalidDerivativeOrder { order });
    }
    check_interval(lower, upper)?;
    let factor = (2.0 / (upper - lower)).powi(order);
    Ok(dmatrix.mapv(|d| d * factor))
}
