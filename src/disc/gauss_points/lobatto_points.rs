use std::f64::consts::PI;

use ndarray::{Array, Array1, ArrayView1, Ix1};

use crate::error::{SpectralError, SpectralResult};

/// Chebyshev-Gauss-Lobatto points (Chebyshev points of the second kind) on [-1, 1].
///
/// The points are `x_j = -cos(j π / (n - 1))`, returned in ascending order. They
/// are evaluated through the equivalent form `sin(π (2j - (n - 1)) / (2 (n - 1)))`,
/// which is exactly antisymmetric about 0, hits both endpoints exactly and puts
/// the midpoint of an odd grid at exactly 0.
pub fn get_chebyshev_lobatto_points(points_num: usize) -> SpectralResult<Array<f64, Ix1>> {
    if points_num < 2 {
        return Err(SpectralError::InvalidNodeCount {
            n_nodes: points_num,
        });
    }
    let n = (points_num - 1) as f64;
    let points = Array1::from_shape_fn(points_num, |j| {
        let k = 2.0 * j as f64 - n;
        let value = (PI * k.abs() / (2.0 * n)).sin();
        if k < 0.0 { -value } else { value }
    });
    tracing::debug!(points_num, "generated Chebyshev-Gauss-Lobatto points");
    Ok(points)
}

/// Barycentric weights for Chebyshev-Gauss-Lobatto points.
///
/// `w_j = (-1)^j`, halved at both ends. Only the length of `nodes` is used; the
/// node family is not checked, so passing any other point set silently gives
/// wrong weights.
pub fn get_barycentric_weights(nodes: ArrayView1<f64>) -> Array<f64, Ix1> {
    let mut weights = Array1::from_shape_fn(nodes.len(), |j| if j % 2 == 0 { 1.0 } else { -1.0 });
    let n = weights.len();
    if n > 0 {
        weights[0] /= 2.0;
        weights[n - 1] /= 2.0;
    }
    weights
}
