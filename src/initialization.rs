use std::path::Path;

use crate::{
    disc::basis::lagrange1d::ChebyshevLobattoBasis,
    error::SpectralResult,
    io::{
        diagnostics::DiagnosticsError,
        param_parser::{ParamError, SpectralParamParser},
        write_to_csv::CsvDiagnostics,
    },
};

pub const DEFAULT_PARAM_FILE: &str = "inputs/spectralparam.json";

pub fn initialize_params_by_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<SpectralParamParser, ParamError> {
    let params = SpectralParamParser::parse(file_path.as_ref())?;
    tracing::info!(
        node_num = params.node_num,
        sample_num = params.sample_num,
        derivative_order = params.derivative_order,
        "loaded parameters from {}",
        file_path.as_ref().display()
    );
    Ok(params)
}
pub fn initialize_basis(node_num: usize) -> SpectralResult<ChebyshevLobattoBasis> {
    ChebyshevLobattoBasis::new(node_num)
}
/// Reference interval [-1, 1] unless the parameters name a physical one.
pub fn initialize_interval(params: &SpectralParamParser) -> (f64, f64) {
    params.interval.map_or((-1.0, 1.0), |[lower, upper]| (lower, upper))
}
pub fn initialize_diagnostics(
    params: &SpectralParamParser,
) -> Result<Option<CsvDiagnostics>, DiagnosticsError> {
    params
        .diagnostics_dir
        .as_deref()
        .map(CsvDiagnostics::new)
        .transpose()
}
