use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};

use crate::{
    disc::check_node_weight_pair,
    error::{SpectralError, SpectralResult},
};

/// Spectral differentiation matrix of order `order` for a barycentric node set.
///
/// With `W_ij = w_j / w_i` and `S_ij = x_i - x_j`, the first-order off-diagonal
/// entries are `W_ij / S_ij`, and order `k` follows from order `k - 1` through
///
/// `D_ij = k / S_ij * (W_ij D_ii - D_ij)`, `i != j`.
///
/// The diagonal is never taken from the formula: each diagonal entry is set to
/// minus the sum of its row's off-diagonal entries, so every row sums to zero
/// and constants are differentiated to exactly zero.
///
/// # Arguments
/// * `order` - Derivative order, at least 1
/// * `nodes` - Interpolation nodes
/// * `weights` - Barycentric weights matched to `nodes`
///
/// # Returns
/// Array of shape `(nodes.len(), nodes.len())` mapping node values to node
/// values of the `order`-th derivative
pub fn differentiation_matrix(
    order: i32,
    nodes: ArrayView1<f64>,
    weights: ArrayView1<f64>,
) -> SpectralResult<Array2<f64>> {
    if order < 1 {
        return Err(SpectralError::InvalidDerivativeOrder { order });
    }
    check_node_weight_pair(nodes, weights)?;
    let n = nodes.len();
    let w_ratio = Array2::from_shape_fn((n, n), |(i, j)| weights[j] / weights[i]);
    let x_diff = Array2::from_shape_fn((n, n), |(i, j)| nodes[i] - nodes[j]);

    let mut dmatrix = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            0.0
        } else {
            w_ratio[(i, j)] / x_diff[(i, j)]
        }
    });
    fill_negative_sum_diagonal(&mut dmatrix);

    for k in 2..=order {
        let k = k as f64;
        let diagonal = dmatrix.diag().to_owned();
        Zip::indexed(&mut dmatrix)
            .and(&w_ratio)
            .and(&x_diff)
            .for_each(|(i, _), d, &w, &s| {
                let next = k / s * (w * diagonal[i] - *d);
                // S_ii = 0, the diagonal is overwritten below
                *d = if next.is_finite() { next } else { 0.0 };
            });
        fill_negative_sum_diagonal(&mut dmatrix);
    }
    tracing::debug!(order, nodes = n, "built differentiation matrix");
    Ok(dmatrix)
}

fn fill_negative_sum_diagonal(dmatrix: &mut Array2<f64>) {
    for (i, mut row) in dmatrix.axis_iter_mut(Axis(0)).enumerate() {
        row[i] = 0.0;
        row[i] = -row.sum();
    }
}

/// Applies a differentiation matrix to node values.
///
/// # Returns
/// Approximated derivative values at the same nodes
pub fn apply_derivative(
    values: ArrayView1<f64>,
    dmatrix: ArrayView2<f64>,
) -> SpectralResult<Array1<f64>> {
    let (rows, cols) = dmatrix.dim();
    if rows != cols {
        return Err(SpectralError::DimensionMismatch {
            context: "differentiation matrix columns",
            expected: rows,
            found: cols,
        });
    }
    if values.len() != cols {
        return Err(SpectralError::DimensionMismatch {
            context: "derivative values",
            expected: cols,
            found: values.len(),
        });
    }
    Ok(dmatrix.dot(&values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::gauss_points::lobatto_points::{
        get_barycentric_weights, get_chebyshev_lobatto_points,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::{Array1, array};

    fn lobatto(n: usize) -> (Array1<f64>, Array1<f64>) {
        let nodes = get_chebyshev_lobatto_points(n).unwrap();
        let weights = get_barycentric_weights(nodes.view());
        (nodes, weights)
    }

    #[test]
    fn test_three_node_first_derivative() {
        let (nodes, weights) = lobatto(3);
        let d1 = differentiation_matrix(1, nodes.view(), weights.view()).unwrap();
        let expected = array![[-1.5, 2.0, -0.5], [-0.5, 0.0, 0.5], [0.5, -2.0, 1.5]];
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(d1[[i, j]], expected[[i, j]], epsilon = 1e-14);
            }
        }
        let values = array![-1.0, 0.0, 1.0];
        let slope = apply_derivative(values.view(), d1.view()).unwrap();
        for v in slope.iter() {
            assert_abs_diff_eq!(*v, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_three_node_second_derivative() {
        let (nodes, weights) = lobatto(3);
        let d2 = differentiation_matrix(2, nodes.view(), weights.view()).unwrap();
        let expected = array![[1.0, -2.0, 1.0], [1.0, -2.0, 1.0], [1.0, -2.0, 1.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(d2[[i, j]], expected[[i, j]], epsilon = 1e-13);
            }
        }
        // Third derivative of a quadratic interpolant vanishes.
        let d3 = differentiation_matrix(3, nodes.view(), weights.view()).unwrap();
        assert!(d3.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_rows_sum_to_zero() {
        for n in [2, 3, 6, 11, 16] {
            let (nodes, weights) = lobatto(n);
            for order in 1..=4 {
                let d = differentiation_matrix(order, nodes.view(), weights.view()).unwrap();
                assert!(d.iter().all(|v| v.is_finite()));
                for row in d.rows() {
                    let scale = row.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
                    assert!(row.sum().abs() <= 1e-12 * scale);
                }
            }
        }
    }

    #[test]
    fn test_constant_maps_to_zero() {
        let (nodes, weights) = lobatto(12);
        let values = Array1::from_elem(12, 3.25);
        for order in 1..=5 {
            let d = differentiation_matrix(order, nodes.view(), weights.view()).unwrap();
            let derivative = apply_derivative(values.view(), d.view()).unwrap();
            let scale = d.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
            for v in derivative.iter() {
                assert!(v.abs() <= 1e-11 * scale);
            }
        }
    }

    #[test]
    fn test_polynomial_derivatives_exact() {
        // p(x) = x^5 - 2x^3 + x on 8 nodes is resolved exactly.
        let (nodes, weights) = lobatto(8);
        let p = nodes.mapv(|x| x.powi(5) - 2.0 * x.powi(3) + x);
        let exact: [fn(f64) -> f64; 4] = [
            |x| 5.0 * x.powi(4) - 6.0 * x * x + 1.0,
            |x| 20.0 * x.powi(3) - 12.0 * x,
            |x| 60.0 * x * x - 12.0,
            |x| 120.0 * x,
        ];
        let tolerances = [1e-11, 1e-9, 1e-7, 1e-5];
        for (m, (df, tol)) in exact.iter().zip(tolerances).enumerate() {
            let d = differentiation_matrix(m as i32 + 1, nodes.view(), weights.view()).unwrap();
            let derivative = apply_derivative(p.view(), d.view()).unwrap();
            for (j, &x) in nodes.iter().enumerate() {
                assert_abs_diff_eq!(derivative[j], df(x), epsilon = tol);
            }
        }
    }

    #[test]
    fn test_smooth_function_derivatives() {
        let (nodes, weights) = lobatto(24);
        let f = nodes.mapv(|x| x.sin());
        let d1 = differentiation_matrix(1, nodes.view(), weights.view()).unwrap();
        let d2 = differentiation_matrix(2, nodes.view(), weights.view()).unwrap();
        let df = apply_derivative(f.view(), d1.view()).unwrap();
        let ddf = apply_derivative(f.view(), d2.view()).unwrap();
        for (j, &x) in nodes.iter().enumerate() {
            assert_abs_diff_eq!(df[j], x.cos(), epsilon = 1e-11);
            assert_abs_diff_eq!(ddf[j], -x.sin(), epsilon = 1e-8);
        }
    }

    #[test]
    fn test_second_order_matches_squared_first_order() {
        let (nodes, weights) = lobatto(9);
        let d1 = differentiation_matrix(1, nodes.view(), weights.view()).unwrap();
        let d2 = differentiation_matrix(2, nodes.view(), weights.view()).unwrap();
        let d1d1 = d1.dot(&d1);
        for (a, b) in d2.iter().zip(d1d1.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_matches_vandermonde_construction() {
        // D = V' V^-1 with V_ij = x_i^j.
        let (nodes, weights) = lobatto(7);
        let n = nodes.len();
        let v = nalgebra::DMatrix::from_fn(n, n, |i, j| nodes[i].powi(j as i32));
        let dv = nalgebra::DMatrix::from_fn(n, n, |i, j| {
            if j == 0 {
                0.0
            } else {
                j as f64 * nodes[i].powi(j as i32 - 1)
            }
        });
        let reference = dv * v.try_inverse().unwrap();
        let d1 = differentiation_matrix(1, nodes.view(), weights.view()).unwrap();
        for i in 0..n {
            for j in 0..n {
                assert_abs_diff_eq!(d1[[i, j]], reference[(i, j)], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_invalid_order() {
        let (nodes, weights) = lobatto(4);
        for order in [0, -1, -7] {
            assert_eq!(
                differentiation_matrix(order, nodes.view(), weights.view()),
                Err(SpectralError::InvalidDerivativeOrder { order })
            );
        }
    }

    #[test]
    fn test_mismatched_inputs() {
        let (nodes, weights) = lobatto(4);
        let short = weights.slice(ndarray::s![..3]);
        assert!(matches!(
            differentiation_matrix(1, nodes.view(), short),
            Err(SpectralError::DimensionMismatch { .. })
        ));

        let d = differentiation_matrix(1, nodes.view(), weights.view()).unwrap();
        let values = array![1.0, 2.0];
        assert_eq!(
            apply_derivative(values.view(), d.view()),
            Err(SpectralError::DimensionMismatch {
                context: "derivative values",
                expected: 4,
                found: 2,
            })
        );
        let rectangular = Array2::<f64>::zeros((4, 3));
        assert!(matches!(
            apply_derivative(values.view(), rectangular.view()),
            Err(SpectralError::DimensionMismatch { .. })
        ));
    }
}
