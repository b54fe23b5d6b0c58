use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot open {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path:?}: {reason}")]
    DataFormat { path: PathBuf, reason: String },
    #[error("invalid time series: {reason}")]
    InvalidInput { reason: String },
    #[error("non-uniform sampling at row {index}: interval {actual:e}s, expected {expected:e}s")]
    NonUniformSampling {
        index: usize,
        expected: f64,
        actual: f64,
    },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("cannot average an empty spectrum group")]
    EmptyGroup,
    #[error("cannot average spectra with mismatched bin counts: expected {expected}, got {actual}")]
    BinCountMismatch { expected: usize, actual: usize },
    #[error("cannot average spectra whose frequency axes disagree at bin {index}")]
    FrequencyAxisMismatch { index: usize },
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for AnalysisError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        AnalysisError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for AnalysisError {
    fn from(value: image::ImageError) -> Self {
        AnalysisError::Plot(value.to_string())
    }
}
