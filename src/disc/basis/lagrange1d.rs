use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::{
    disc::{
        basis::{NODE_COINCIDENCE_TOL, equidistant_points},
        check_node_weight_pair,
        differentiation::{apply_derivative, differentiation_matrix},
        gauss_points::lobatto_points::{get_barycentric_weights, get_chebyshev_lobatto_points},
    },
    error::{SpectralError, SpectralResult},
};

/// Lagrange basis functions `l_j(s_i)` at arbitrary sample points, shape `(nodes, points)`.
///
/// Uses the second (true) barycentric form
/// `l_j(s) = [w_j / (s - x_j)] / Σ_k [w_k / (s - x_k)]`.
/// A sample closer than [`NODE_COINCIDENCE_TOL`] to a node gets the Kronecker
/// delta column for that node instead of the quotient.
pub fn evaluate_basis_at(
    nodes: ArrayView1<f64>,
    weights: ArrayView1<f64>,
    points: ArrayView1<f64>,
) -> SpectralResult<Array2<f64>> {
    check_node_weight_pair(nodes, weights)?;
    let mut phis = Array2::zeros((nodes.len(), points.len()));
    for (i, &s) in points.iter().enumerate() {
        // Check if s is (almost) equal to one of the interpolation points
        if let Some(j) = nodes
            .iter()
            .position(|&x| (s - x).abs() <= NODE_COINCIDENCE_TOL)
        {
            tracing::trace!(sample = i, node = j, "sample coincides with node");
            phis[(j, i)] = 1.0;
            continue;
        }
        let mut column = phis.column_mut(i);
        let mut denominator = 0.0;
        for (j, (&x, &w)) in nodes.iter().zip(weights.iter()).enumerate() {
            let term = w / (s - x);
            column[j] = term;
            denominator += term;
        }
        column /= denominator;
    }
    Ok(phis)
}

/// Lagrange basis functions on `points_num` equidistant points of [-1, 1].
///
/// # Returns
/// Array of shape `(nodes.len(), points_num)`; entry `(j, i)` is `l_j(s_i)`.
pub fn evaluate_basis(
    nodes: ArrayView1<f64>,
    weights: ArrayView1<f64>,
    points_num: usize,
) -> SpectralResult<Array2<f64>> {
    check_node_weight_pair(nodes, weights)?;
    let points = equidistant_points(points_num)?;
    let phis = evaluate_basis_at(nodes, weights, points.view())?;
    tracing::debug!(
        nodes = nodes.len(),
        points = points_num,
        "evaluated barycentric basis"
    );
    Ok(phis)
}

/// Resamples node values through a basis matrix: `p_i = Σ_j values_j l_j(s_i)`.
pub fn interpolate(values: ArrayView1<f64>, phis: ArrayView2<f64>) -> SpectralResult<Array1<f64>> {
    if values.len() != phis.len_of(Axis(0)) {
        return Err(SpectralError::DimensionMismatch {
            context: "interpolation values",
            expected: phis.len_of(Axis(0)),
            found: values.len(),
        });
    }
    Ok(values.dot(&phis))
}

/// A Chebyshev-Gauss-Lobatto node set together with its matched barycentric weights.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevLobattoBasis {
    pub nodes: Array1<f64>,
    pub weights: Array1<f64>,
}

impl ChebyshevLobattoBasis {
    pub fn new(nodes_num: usize) -> SpectralResult<Self> {
        let nodes = get_chebyshev_lobatto_points(nodes_num)?;
        let weights = get_barycentric_weights(nodes.view());
        Ok(Self { nodes, weights })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Basis matrix on `points_num` equidistant points.
    pub fn basis_functions(&self, points_num: usize) -> SpectralResult<Array2<f64>> {
        evaluate_basis(self.nodes.view(), self.weights.view(), points_num)
    }

    /// Basis matrix on arbitrary points.
    pub fn basis_functions_at(&self, points: ArrayView1<f64>) -> SpectralResult<Array2<f64>> {
        evaluate_basis_at(self.nodes.view(), self.weights.view(), points)
    }

    /// Evaluates the interpolant of `values` at `points_num` equidistant points.
    pub fn interpolate(
        &self,
        values: ArrayView1<f64>,
        points_num: usize,
    ) -> SpectralResult<Array1<f64>> {
        let phis = self.basis_functions(points_num)?;
        interpolate(values, phis.view())
    }

    pub fn dmatrix(&self, order: i32) -> SpectralResult<Array2<f64>> {
        differentiation_matrix(order, self.nodes.view(), self.weights.view())
    }

    /// `order`-th derivative of the interpolant of `values`, at the nodes.
    pub fn derivative(&self, order: i32, values: ArrayView1<f64>) -> SpectralResult<Array1<f64>> {
        let dmatrix = self.dmatrix(order)?;
        apply_derivative(values, dmatrix.view())
    }
}
