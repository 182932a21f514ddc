use ndarray::{ArrayView1, ArrayView2};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("diagnostics I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV diagnostics: {0}")]
    Csv(#[from] csv::Error),
    #[error("curve '{label}' has {x_len} abscissae but {y_len} values")]
    CurveLength {
        label: String,
        x_len: usize,
        y_len: usize,
    },
}

/// Receiver for arrays worth looking at: node layouts, basis functions,
/// resampled functions, differentiation matrices.
///
/// The numerical routines never call a sink themselves; a driver hands arrays
/// over after each stage when it has one.
pub trait DiagnosticsSink {
    fn record_curve(
        &mut self,
        label: &str,
        x: ArrayView1<f64>,
        y: ArrayView1<f64>,
    ) -> Result<(), DiagnosticsError>;

    fn record_matrix(&mut self, label: &str, matrix: ArrayView2<f64>) -> Result<(), DiagnosticsError>;
}

/// Sends every row of `phis` (one basis function each) to `sink` as a curve over `points`.
pub fn record_basis_functions<S: DiagnosticsSink + ?Sized>(
    sink: &mut S,
    points: ArrayView1<f64>,
    phis: ArrayView2<f64>,
) -> Result<(), DiagnosticsError> {
    for (j, phi) in phis.rows().into_iter().enumerate() {
        sink.record_curve(&format!("basis_{j}"), points, phi)?;
    }
    Ok(())
}

pub(crate) fn check_curve(
    label: &str,
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
) -> Result<(), DiagnosticsError> {
    if x.len() != y.len() {
        return Err(DiagnosticsError::CurveLength {
            label: label.to_string(),
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}
