use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse parameter file: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_derivative_order() -> i32 {
    1
}

/// Run parameters read from a JSON file such as `inputs/spectralparam.json`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SpectralParamParser {
    pub node_num: usize,
    pub sample_num: usize,
    #[serde(default = "default_derivative_order")]
    pub derivative_order: i32,
    /// Physical interval `[a, b]`; the reference interval [-1, 1] when absent.
    #[serde(default)]
    pub interval: Option<[f64; 2]>,
    /// Directory receiving CSV diagnostics; nothing is written when absent.
    #[serde(default)]
    pub diagnostics_dir: Option<String>,
}
impl SpectralParamParser {
    pub fn parse<P: AsRef<Path>>(file_path: P) -> Result<Self, ParamError> {
        let file_content = fs::read_to_string(file_path)?;
        Self::from_json(&file_content)
    }
    pub fn from_json(content: &str) -> Result<Self, ParamError> {
        let param: SpectralParamParser = serde_json::from_str(content)?;
        Ok(param)
    }
}
