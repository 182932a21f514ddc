use std::{
    fs,
    path::{Path, PathBuf},
};

use csv::{Writer, WriterBuilder};
use ndarray::{ArrayView1, ArrayView2};
use serde::Serialize;

use crate::io::diagnostics::{DiagnosticsError, DiagnosticsSink, check_curve};

#[derive(Serialize)]
struct PointData {
    x: f64,
    y: f64,
}

/// Writes every curve and matrix to `<dir>/<label>.csv`.
///
/// Curves are written as `x,y` records with a header; matrices as one headerless
/// record per row.
pub struct CsvDiagnostics {
    dir: PathBuf,
}

impl CsvDiagnostics {
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, DiagnosticsError> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    pub fn path_for(&self, label: &str) -> PathBuf {
        self.dir.join(format!("{label}.csv"))
    }
}

impl DiagnosticsSink for CsvDiagnostics {
    fn record_curve(
        &mut self,
        label: &str,
        x: ArrayView1<f64>,
        y: ArrayView1<f64>,
    ) -> Result<(), DiagnosticsError> {
        check_curve(label, x, y)?;
        let mut writer = Writer::from_path(self.path_for(label))?;
        for (&x, &y) in x.iter().zip(y.iter()) {
            writer.serialize(PointData { x, y })?;
        }
        writer.flush()?;
        tracing::debug!(label, points = x.len(), "wrote curve diagnostics");
        Ok(())
    }

    fn record_matrix(&mut self, label: &str, matrix: ArrayView2<f64>) -> Result<(), DiagnosticsError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(self.path_for(label))?;
        for row in matrix.rows() {
            writer.serialize(row.to_vec())?;
        }
        writer.flush()?;
        tracing::debug!(label, shape = ?matrix.dim(), "wrote matrix diagnostics");
        Ok(())
    }
}
