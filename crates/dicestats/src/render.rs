//! Plain-text bar chart renderer.

use crate::ChartConfig;
use dicestats_core::{Chart, ChartRenderer};
use dicestats_error::{RenderError, RenderErrorKind};
use std::io::Write;

/// Renders a chart as UTF-8 horizontal bars, one line per value.
///
/// # Examples
///
/// ```
/// use dicestats::{Chart, ChartConfig, ChartRenderer, Distribution, TextChartRenderer};
///
/// let renderer = TextChartRenderer::new(ChartConfig::default().with_bar_width(4));
/// let bytes = renderer.render(&Chart::new("coin", &Distribution::die(2)?))?;
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.starts_with("coin\n"));
/// assert!(text.contains("1 | ####"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextChartRenderer {
    config: ChartConfig,
}

impl TextChartRenderer {
    /// Create a renderer with the given chart settings.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for TextChartRenderer {
    fn render(&self, chart: &Chart) -> Result<Vec<u8>, RenderError> {
        let points = chart.points();
        let peak = points.iter().map(|point| point.y).fold(0.0f64, f64::max);
        if points.is_empty() || peak <= 0.0 {
            return Err(RenderError::new(RenderErrorKind::Encoding(format!(
                "chart '{}' has no mass to draw",
                chart.title()
            ))));
        }

        let label_width = points
            .iter()
            .map(|point| point.x.to_string().len())
            .max()
            .unwrap_or(1);
        let bar_width = *self.config.bar_width();
        let precision = *self.config.precision();

        let mut out = Vec::new();
        writeln!(out, "{}", chart.title())?;
        for point in points {
            let filled = ((point.y / peak) * bar_width as f64).round() as usize;
            writeln!(
                out,
                "{:>label$} | {:<bar$} {:.prec$}%",
                point.x,
                "#".repeat(filled),
                point.y * 100.0,
                label = label_width,
                bar = bar_width,
                prec = precision,
            )?;
        }
        Ok(out)
    }
}
