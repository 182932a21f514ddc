use std::{error::Error, f64::consts::PI};

use cheb_spectral::{
    disc::{
        basis::{equidistant_points, lagrange1d::interpolate},
        differentiation::apply_derivative,
        mapping::{map_to_interval, scale_differentiation_matrix},
    },
    initialization::{
        DEFAULT_PARAM_FILE, initialize_basis, initialize_diagnostics, initialize_interval,
        initialize_params_by_file,
    },
    io::diagnostics::{DiagnosticsSink, record_basis_functions},
};
use ndarray_stats::QuantileExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let param_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PARAM_FILE.to_string());
    let params = initialize_params_by_file(&param_file)?;
    let basis = initialize_basis(params.node_num)?;
    let (lower, upper) = initialize_interval(&params);
    let mut diagnostics = initialize_diagnostics(&params)?;

    // f(x) = sin(c (x - mid)) is sin(pi xi) on the reference interval
    let mid = 0.5 * (lower + upper);
    let c = 2.0 * PI / (upper - lower);
    let order = params.derivative_order;
    let f = |x: f64| (c * (x - mid)).sin();
    let df = |x: f64| c.powi(order) * (c * (x - mid) + f64::from(order) * 0.5 * PI).sin();

    let x = map_to_interval(basis.nodes.view(), lower, upper)?;
    let values = x.mapv(f);

    let reference_dmatrix = basis.dmatrix(order)?;
    let dmatrix = scale_differentiation_matrix(reference_dmatrix.view(), order, lower, upper)?;
    let derivative = apply_derivative(values.view(), dmatrix.view())?;
    let derivative_error = (&derivative - &x.mapv(df)).mapv(f64::abs);
    println!(
        "order {order} derivative on {} nodes: max error {:.3e}",
        basis.len(),
        derivative_error.max()?
    );

    let phis = basis.basis_functions(params.sample_num)?;
    let samples = map_to_interval(equidistant_points(params.sample_num)?.view(), lower, upper)?;
    let resampled = interpolate(values.view(), phis.view())?;
    let interpolation_error = (&resampled - &samples.mapv(f)).mapv(f64::abs);
    println!(
        "interpolation on {} equidistant points: max error {:.3e}",
        params.sample_num,
        interpolation_error.max()?
    );

    if let Some(sink) = diagnostics.as_mut() {
        sink.record_curve("nodes", x.view(), basis.weights.view())?;
        record_basis_functions(sink, samples.view(), phis.view())?;
        sink.record_curve("interpolant", samples.view(), resampled.view())?;
        sink.record_curve("derivative", x.view(), derivative.view())?;
        sink.record_matrix(&format!("dmatrix_{order}"), dmatrix.view())?;
        tracing::info!("diagnostics written");
    }
    Ok(())
}
