use crate::analysis::error::AnalysisError;
use crate::analysis::spectrum::Spectrum;
/// Frequency axes must agree within this relative tolerance before averaging.
const BIN_TOLERANCE: f64 = 1e-9;
/// Element-wise mean amplitude across repeated recordings of one condition.
/// All inputs must share the same frequency axis; the result reuses it.
pub fn average_spectra(spectra: &[Spectrum]) -> Result<Spectrum, AnalysisError> {
    let first = spectra.first().ok_or(AnalysisError::EmptyGroup)?;
    let bins = first.len();
    for other in &spectra[1..] {
        if other.len() != bins {
            return Err(AnalysisError::BinCountMismatch {
                expected: bins,
                actual: other.len(),
            });
        }
        for (index, (a, b)) in first
            .frequencies_hz
            .iter()
            .zip(&other.frequencies_hz)
            .enumerate()
        {
            if (a - b).abs() > BIN_TOLERANCE * a.abs().max(1.0) {
                return Err(AnalysisError::FrequencyAxisMismatch { index });
            }
        }
    }
    let mut amplitudes = vec![0.0; bins];
    for spectrum in spectra {
        for (sum, value) in amplitudes.iter_mut().zip(&spectrum.amplitudes) {
            *sum += value;
        }
    }
    let count = spectra.len() as f64;
    for value in amplitudes.iter_mut() {
        *value /= count;
    }
    Ok(Spectrum {
        frequencies_hz: first.frequencies_hz.clone(),
        amplitudes,
    })
}
#[cfg(test)]
mod tests {
    use super::*;
    fn spectrum(frequencies_hz: Vec<f64>, amplitudes: Vec<f64>) -> Spectrum {
        Spectrum {
            frequencies_hz,
            amplitudes,
        }
    }
    #[test]
    fn averages_elementwise() {
        let a = spectrum(vec![0.0, 10.0], vec![0.0, 1.0]);
        let b = spectrum(vec![0.0, 10.0], vec![2.0, 4.0]);
        let mean = average_spectra(&[a, b]).unwrap();
        assert_eq!(mean.frequencies_hz, vec![0.0, 10.0]);
        assert_eq!(mean.amplitudes, vec![1.0, 2.5]);
    }
    #[test]
    fn mean_of_identical_spectra_is_that_spectrum() {
        let one = spectrum(vec![0.0, 5.0, 10.0], vec![0.1, 0.7, 0.3]);
        let mean = average_spectra(&[one.clone(), one.clone(), one.clone()]).unwrap();
        for (expected, actual) in one.amplitudes.iter().zip(&mean.amplitudes) {
            assert!((expected - actual).abs() < 1e-12);
        }
        assert_eq!(mean.frequencies_hz, one.frequencies_hz);
    }
    #[test]
    fn order_of_inputs_does_not_matter() {
        let a = spectrum(vec![0.0, 5.0], vec![0.25, 0.5]);
        let b = spectrum(vec![0.0, 5.0], vec![1.0, 0.125]);
        let c = spectrum(vec![0.0, 5.0], vec![0.5, 2.0]);
        let forward = average_spectra(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let backward = average_spectra(&[c, b, a]).unwrap();
        for (x, y) in forward.amplitudes.iter().zip(&backward.amplitudes) {
            assert!((x - y).abs() < 1e-12);
        }
    }
    #[test]
    fn empty_group_is_rejected() {
        let err = average_spectra(&[]).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyGroup));
    }
    #[test]
    fn mismatched_bin_counts_are_rejected() {
        let a = spectrum(vec![0.0, 10.0], vec![1.0, 1.0]);
        let b = spectrum(vec![0.0, 10.0, 20.0], vec![1.0, 1.0, 1.0]);
        let err = average_spectra(&[a, b]).unwrap_err();
        match err {
            AnalysisError::BinCountMismatch { expected, actual } => {
                assert_eq!((expected, actual), (2, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    #[test]
    fn mismatched_frequency_axes_are_rejected() {
        let a = spectrum(vec![0.0, 10.0], vec![1.0, 1.0]);
        let b = spectrum(vec![0.0, 12.0], vec![1.0, 1.0]);
        let err = average_spectra(&[a, b]).unwrap_err();
        match err {
            AnalysisError::FrequencyAxisMismatch { index } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }
}
