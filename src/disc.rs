use ndarray::ArrayView1;

use crate::error::{SpectralError, SpectralResult};

pub mod basis;
pub mod differentiation;
pub mod gauss_points;
pub mod mapping;

/// Checks that `nodes` and `weights` form a usable matched pair.
pub(crate) fn check_node_weight_pair(
    nodes: ArrayView1<f64>,
    weights: ArrayView1<f64>,
) -> SpectralResult<()> {
    if nodes.len() != weights.len() {
        return Err(SpectralError::DimensionMismatch {
            context: "barycentric weights",
            expected: nodes.len(),
            found: weights.len(),
        });
    }
    if nodes.len() < 2 {
        return Err(SpectralError::InvalidNodeCount {
            n_nodes: nodes.len(),
        });
    }
    Ok(())
}
