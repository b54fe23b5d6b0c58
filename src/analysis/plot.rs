use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::analysis::error::AnalysisError;
use crate::analysis::spectrum::Spectrum;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub palette: Vec<RGBColor>,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            background: WHITE,
            foreground: BLACK,
            palette: vec![BLUE, RED, GREEN, MAGENTA, CYAN, BLACK],
        }
    }
}
struct LabeledCurve {
    label: String,
    spectrum: Spectrum,
}
/// Accumulates labeled spectra and renders them onto one shared chart.
/// Legend order is registration order.
pub struct SpectrumFigure {
    style: PlotStyle,
    curves: Vec<LabeledCurve>,
}
impl SpectrumFigure {
    pub fn new(style: PlotStyle) -> Self {
        Self {
            style,
            curves: Vec::new(),
        }
    }
    pub fn add_curve(&mut self, label: impl Into<String>, spectrum: Spectrum) {
        self.curves.push(LabeledCurve {
            label: label.into(),
            spectrum,
        });
    }
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }
    pub fn render_png(
        &self,
        title: &str,
        x_label: &str,
        y_label: &str,
    ) -> Result<Vec<u8>, AnalysisError> {
        if self.curves.is_empty() {
            return Err(AnalysisError::Plot("figure has no curves".into()));
        }
        let style = &self.style;
        let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
                .into_drawing_area();
            root.fill(&style.background)?;
            let x_max = self
                .curves
                .iter()
                .map(|c| c.spectrum.max_frequency())
                .fold(0.0f64, f64::max)
                .max(1.0);
            let y_max = self
                .curves
                .iter()
                .map(|c| c.spectrum.max_amplitude())
                .fold(0.0f64, f64::max)
                .max(1e-3);
            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .caption(title, ("sans-serif", 24).into_font().color(&style.foreground))
                .set_label_area_size(LabelAreaPosition::Left, 60)
                .set_label_area_size(LabelAreaPosition::Bottom, 45)
                .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;
            chart
                .configure_mesh()
                .x_desc(x_label)
                .y_desc(y_label)
                .axis_desc_style(("sans-serif", 18).into_font().color(&style.foreground))
                .label_style(("sans-serif", 14).into_font().color(&style.foreground))
                .light_line_style(&style.foreground.mix(0.1))
                .draw()?;
            for (idx, curve) in self.curves.iter().enumerate() {
                let color = style.palette[idx % style.palette.len()];
                let series = curve
                    .spectrum
                    .frequencies_hz
                    .iter()
                    .cloned()
                    .zip(curve.spectrum.amplitudes.iter().cloned());
                chart
                    .draw_series(LineSeries::new(series, &color))?
                    .label(curve.label.clone())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], &color)
                    });
            }
            chart
                .configure_series_labels()
                .border_style(&style.foreground.mix(0.2))
                .background_style(&style.background)
                .draw()?;
            root.present()?;
        }
        encode_png(&buffer, style.width, style.height)
    }
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AnalysisError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| AnalysisError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];
    fn sample_spectrum() -> Spectrum {
        Spectrum {
            frequencies_hz: (0..32).map(|k| k as f64 * 10.0).collect(),
            amplitudes: (0..32).map(|k| 1.0 / (k + 1) as f64).collect(),
        }
    }
    #[test]
    fn rendering_returns_png_bytes() {
        let mut figure = SpectrumFigure::new(PlotStyle::default());
        figure.add_curve("baseline", sample_spectrum());
        figure.add_curve("noisy", sample_spectrum());
        assert_eq!(figure.curve_count(), 2);
        let png = figure
            .render_png("Frequency Spectrum Comparison", "Frequency (Hz)", "Amplitude")
            .unwrap();
        assert!(!png.is_empty());
        assert_eq!(&png[..4], &PNG_MAGIC);
    }
    #[test]
    fn empty_figure_is_an_error() {
        let figure = SpectrumFigure::new(PlotStyle::default());
        let err = figure
            .render_png("Frequency Spectrum Comparison", "Frequency (Hz)", "Amplitude")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Plot(_)));
    }
}
