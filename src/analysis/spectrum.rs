use rustfft::{num_complex::Complex64, FftPlanner};
use crate::analysis::error::AnalysisError;
use crate::analysis::loader::TimeSeries;
/// Relative deviation tolerated between the inferred sampling interval and
/// each successive timestamp delta.
const UNIFORMITY_TOLERANCE: f64 = 1e-3;
/// Single-sided amplitude spectrum of one trace.
#[derive(Clone, Debug)]
pub struct Spectrum {
    pub frequencies_hz: Vec<f64>,
    pub amplitudes: Vec<f64>,
}
impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies_hz.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frequencies_hz.is_empty()
    }
    pub fn max_frequency(&self) -> f64 {
        self.frequencies_hz.last().copied().unwrap_or(0.0)
    }
    pub fn max_amplitude(&self) -> f64 {
        self.amplitudes.iter().copied().fold(0.0f64, f64::max)
    }
}
/// Infers the sampling interval from the first two samples and checks that the
/// rest of the time column stays within tolerance of it.
fn sample_interval(series: &TimeSeries) -> Result<f64, AnalysisError> {
    let time = &series.time;
    if time.len() < 2 {
        return Err(AnalysisError::InvalidInput {
            reason: format!("needs at least 2 samples, got {}", time.len()),
        });
    }
    let step = time[1] - time[0];
    if step <= 0.0 {
        return Err(AnalysisError::InvalidInput {
            reason: format!("timestamps are not strictly increasing (interval {step}s)"),
        });
    }
    for (index, pair) in time.windows(2).enumerate().skip(1) {
        let actual = pair[1] - pair[0];
        if ((actual - step) / step).abs() > UNIFORMITY_TOLERANCE {
            return Err(AnalysisError::NonUniformSampling {
                index: index + 1,
                expected: step,
                actual,
            });
        }
    }
    Ok(step)
}
/// Computes the single-sided amplitude spectrum: forward FFT of the voltage
/// column, the first floor(N/2) bins, each magnitude scaled by 2/N.
pub fn amplitude_spectrum(series: &TimeSeries) -> Result<Spectrum, AnalysisError> {
    if series.time.len() != series.voltage.len() {
        return Err(AnalysisError::InvalidInput {
            reason: format!(
                "time and voltage lengths differ ({} vs {})",
                series.time.len(),
                series.voltage.len()
            ),
        });
    }
    let step = sample_interval(series)?;
    let n = series.voltage.len();
    let mut buffer: Vec<Complex64> = series
        .voltage
        .iter()
        .map(|&v| Complex64::new(v, 0.0))
        .collect();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);
    let half = n / 2;
    let scale = 2.0 / n as f64;
    let bin_width = 1.0 / (n as f64 * step);
    let frequencies_hz = (0..half).map(|k| k as f64 * bin_width).collect();
    let amplitudes = buffer.iter().take(half).map(|c| scale * c.norm()).collect();
    Ok(Spectrum {
        frequencies_hz,
        amplitudes,
    })
}
