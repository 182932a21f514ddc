//! Barycentric Lagrange interpolation and spectral differentiation on
//! Chebyshev-Gauss-Lobatto grids.
//!
//! The pipeline is strictly forward: nodes, then weights, then either a basis
//! matrix (for resampling onto an equidistant grid) or a differentiation matrix
//! (for derivatives at the nodes). Every routine is a free function over
//! `ndarray` arrays and keeps no state between calls.
//!
//! ```
//! use cheb_spectral::disc::{
//!     differentiation::{apply_derivative, differentiation_matrix},
//!     gauss_points::lobatto_points::{get_barycentric_weights, get_chebyshev_lobatto_points},
//! };
//!
//! let nodes = get_chebyshev_lobatto_points(3).unwrap();
//! let weights = get_barycentric_weights(nodes.view());
//! let d1 = differentiation_matrix(1, nodes.view(), weights.view()).unwrap();
//! let slope = apply_derivative(nodes.view(), d1.view()).unwrap();
//! assert!(slope.iter().all(|&v| (v - 1.0).abs() < 1e-10));
//! ```
pub mod disc;
pub mod error;
pub mod initialization;
pub mod io;

pub use error::{SpectralError, SpectralResult};
