use std::collections::HashSet;
use std::path::PathBuf;
use log::{debug, info};
use crate::analysis::average::average_spectra;
use crate::analysis::error::AnalysisError;
use crate::analysis::loader::load_trace;
use crate::analysis::plot::{PlotStyle, SpectrumFigure};
use crate::analysis::smooth::{smooth_series, SmoothingParams};
use crate::analysis::spectrum::{amplitude_spectrum, Spectrum};
/// One labeled condition and the recordings captured for it.
#[derive(Clone, Debug)]
pub struct GroupSpec {
    pub label: String,
    pub sources: Vec<PathBuf>,
}
impl GroupSpec {
    pub fn single(label: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            sources: vec![source.into()],
        }
    }
    pub fn repeated<P: Into<PathBuf>>(
        label: impl Into<String>,
        sources: impl IntoIterator<Item = P>,
    ) -> Self {
        Self {
            label: label.into(),
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }
}
/// Full description of one comparison run. Groups are processed and plotted in
/// declaration order.
#[derive(Clone, Debug)]
pub struct ComparisonPlan {
    pub title: String,
    pub smoothing: Option<SmoothingParams>,
    pub groups: Vec<GroupSpec>,
}
impl ComparisonPlan {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.groups.is_empty() {
            return Err(AnalysisError::InvalidParameter(
                "comparison plan has no groups".into(),
            ));
        }
        let mut labels = HashSet::new();
        for group in &self.groups {
            if group.sources.is_empty() {
                return Err(AnalysisError::InvalidParameter(format!(
                    "group {:?} has no sources",
                    group.label
                )));
            }
            if !labels.insert(group.label.as_str()) {
                return Err(AnalysisError::InvalidParameter(format!(
                    "duplicate group label {:?}",
                    group.label
                )));
            }
        }
        Ok(())
    }
}
/// Loads every recording of a group, optionally smooths it, and reduces the
/// per-recording spectra to the group's single curve.
fn group_spectrum(
    group: &GroupSpec,
    smoothing: Option<&SmoothingParams>,
) -> Result<Spectrum, AnalysisError> {
    let mut spectra = Vec::with_capacity(group.sources.len());
    for path in &group.sources {
        let trace = load_trace(path)?;
        let trace = match smoothing {
            Some(params) => smooth_series(&trace, params)?,
            None => trace,
        };
        debug!(
            "{}: {} samples over {:.6}s",
            path.display(),
            trace.len(),
            trace.duration_seconds()
        );
        spectra.push(amplitude_spectrum(&trace)?);
    }
    if spectra.len() == 1 {
        Ok(spectra.remove(0))
    } else {
        average_spectra(&spectra)
    }
}
/// Runs the whole plan: one curve per group, rendered once at the end.
/// Fail-fast; any error aborts the run before a figure is produced.
pub fn run_comparison(
    plan: &ComparisonPlan,
    style: PlotStyle,
) -> Result<Vec<u8>, AnalysisError> {
    plan.validate()?;
    let mut figure = SpectrumFigure::new(style);
    for group in &plan.groups {
        let spectrum = group_spectrum(group, plan.smoothing.as_ref())?;
        info!(
            "{}: {} recording(s), {} bins",
            group.label,
            group.sources.len(),
            spectrum.len()
        );
        figure.add_curve(group.label.clone(), spectrum);
    }
    figure.render_png(&plan.title, "Frequency (Hz)", "Amplitude")
}
