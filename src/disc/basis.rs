use ndarray::{Array1, Array};

use crate::error::{SpectralError, SpectralResult};

pub mod lagrange1d;

/// Absolute distance below which a sample point is treated as sitting on a node.
///
/// Inside the band the barycentric quotient is replaced by its limit, the
/// Kronecker delta. Points live on [-1, 1], so an absolute tolerance a few
/// dozen ulps wide is enough to catch nodes such as `-cos(π/2)` that land near,
/// but not on, an equidistant sample.
pub const NODE_COINCIDENCE_TOL: f64 = 1e-14;

/// `points_num` equidistant points spanning [-1, 1], `s_i = -1 + 2i / (n - 1)`.
///
/// A single point is placed at -1. Both endpoints are produced exactly.
pub fn equidistant_points(points_num: usize) -> SpectralResult<Array1<f64>> {
    match points_num {
        0 => Err(SpectralError::InvalidSampleCount),
        1 => Ok(Array::from_elem(1, -1.0)),
        n => {
            let denominator = (n - 1) as f64;
            Ok(Array::from_shape_fn(n, |i| 2.0 * i as f64 / denominator - 1.0))
        }
    }
}
