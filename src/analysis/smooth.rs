use ndarray::{Array1, Array2};
use crate::analysis::error::AnalysisError;
use crate::analysis::loader::TimeSeries;
/// Savitzky-Golay settings: a centered window of `window_size` samples fitted
/// with a polynomial of degree `poly_order`.
#[derive(Clone, Copy, Debug)]
pub struct SmoothingParams {
    pub window_size: usize,
    pub poly_order: usize,
}
impl SmoothingParams {
    pub fn new(window_size: usize, poly_order: usize) -> Self {
        Self {
            window_size,
            poly_order,
        }
    }
    fn validate(&self, len: usize) -> Result<(), AnalysisError> {
        if self.window_size == 0 || self.window_size % 2 == 0 {
            return Err(AnalysisError::InvalidParameter(format!(
                "window size must be a positive odd integer, got {}",
                self.window_size
            )));
        }
        if self.window_size <= self.poly_order {
            return Err(AnalysisError::InvalidParameter(format!(
                "window size {} must exceed polynomial order {}",
                self.window_size, self.poly_order
            )));
        }
        if self.window_size > len {
            return Err(AnalysisError::InvalidParameter(format!(
                "window size {} exceeds series length {len}",
                self.window_size
            )));
        }
        Ok(())
    }
}
/// Smooths `values` with a sliding least-squares polynomial fit. Interior
/// points use the central convolution kernel; points within half a window of
/// either end are evaluated from a polynomial fitted over the first/last full
/// window.
pub fn savgol_filter(
    values: &[f64],
    params: &SmoothingParams,
) -> Result<Vec<f64>, AnalysisError> {
    params.validate(values.len())?;
    let window = params.window_size;
    let order = params.poly_order;
    let half = window / 2;
    let n = values.len();
    let xs = design_positions(window);
    let kernel = central_kernel(&xs, order)?;
    let mut smoothed = values.to_vec();
    for i in half..n - half {
        smoothed[i] = kernel
            .iter()
            .zip(&values[i - half..=i + half])
            .map(|(c, v)| c * v)
            .sum();
    }
    if half > 0 {
        let head = polyfit(&xs, &values[..window], order)?;
        for i in 0..half {
            smoothed[i] = polyval(&head, xs[i]);
        }
        let tail = polyfit(&xs, &values[n - window..], order)?;
        for i in n - half..n {
            smoothed[i] = polyval(&tail, xs[i - (n - window)]);
        }
    }
    Ok(smoothed)
}
/// Applies the filter to the voltage column only; timestamps and sample count
/// are untouched.
pub fn smooth_series(
    series: &TimeSeries,
    params: &SmoothingParams,
) -> Result<TimeSeries, AnalysisError> {
    Ok(TimeSeries {
        path: series.path.clone(),
        time: series.time.clone(),
        voltage: savgol_filter(&series.voltage, params)?,
    })
}
// Window positions centered on zero and scaled into [-1, 1] to keep the
// normal equations well conditioned.
fn design_positions(window: usize) -> Vec<f64> {
    let half = (window / 2) as f64;
    let scale = half.max(1.0);
    (0..window).map(|i| (i as f64 - half) / scale).collect()
}
fn vandermonde(xs: &[f64], order: usize) -> Array2<f64> {
    Array2::from_shape_fn((xs.len(), order + 1), |(i, j)| xs[i].powi(j as i32))
}
// Convolution weights that evaluate the least-squares polynomial at the
// window center (position zero).
fn central_kernel(xs: &[f64], order: usize) -> Result<Vec<f64>, AnalysisError> {
    let design = vandermonde(xs, order);
    let gram = design.t().dot(&design);
    let mut rhs = Array1::<f64>::zeros(order + 1);
    rhs[0] = 1.0;
    let z = solve(gram, rhs)?;
    Ok(xs
        .iter()
        .map(|&x| (0..=order).map(|j| z[j] * x.powi(j as i32)).sum())
        .collect())
}
fn polyfit(xs: &[f64], values: &[f64], order: usize) -> Result<Array1<f64>, AnalysisError> {
    let design = vandermonde(xs, order);
    let y = Array1::from_vec(values.to_vec());
    let gram = design.t().dot(&design);
    let rhs = design.t().dot(&y);
    solve(gram, rhs)
}
fn polyval(coeffs: &Array1<f64>, x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>, AnalysisError> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&r, &s| {
                a[[r, col]]
                    .abs()
                    .partial_cmp(&a[[s, col]].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);
        if a[[pivot, col]].abs() < 1e-12 {
            return Err(AnalysisError::InvalidParameter(
                "smoothing fit produced a singular system".into(),
            ));
        }
        if pivot != col {
            for k in 0..n {
                a.swap([pivot, k], [col, k]);
            }
            b.swap(pivot, col);
        }
        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }
    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in row + 1..n {
            acc -= a[[row, k]] * x[k];
        }
        x[row] = acc / a[[row, row]];
    }
    Ok(x)
}
