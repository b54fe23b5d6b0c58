// src/analysis/mod.rs
pub mod average;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod plot;
pub mod smooth;
pub mod spectrum;
pub use average::average_spectra;
pub use error::AnalysisError;
pub use loader::{load_trace, TimeSeries, TIME_COLUMN, VOLTAGE_COLUMN};
pub use pipeline::{run_comparison, ComparisonPlan, GroupSpec};
pub use plot::{PlotStyle, SpectrumFigure};
pub use smooth::{savgol_filter, smooth_series, SmoothingParams};
pub use spectrum::{amplitude_spectrum, Spectrum};
