//! Chart boundary between exact distributions and a renderer.
//!
//! This is the one place exact masses are converted to floats.

use crate::Distribution;
use derive_getters::Getters;
use dicestats_error::RenderError;
use num_traits::ToPrimitive;
use serde::Serialize;

/// One bar of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Outcome value
    pub x: i64,
    /// Probability of the outcome
    pub y: f64,
}

/// A titled series of points, ascending by `x`.
///
/// # Examples
///
/// ```
/// use dicestats_core::{Chart, Distribution};
///
/// let chart = Chart::new("d4", &Distribution::die(4)?);
/// assert_eq!(chart.points().len(), 4);
/// assert_eq!(chart.points()[0].y, 0.25);
/// # Ok::<(), dicestats_error::DistributionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct Chart {
    title: String,
    points: Vec<ChartPoint>,
}

impl Chart {
    /// Converts a distribution into chart points under `title`.
    pub fn new(title: impl Into<String>, distribution: &Distribution) -> Self {
        let points = distribution
            .iter()
            .map(|(x, mass)| ChartPoint {
                x,
                y: mass.to_f64().unwrap_or(0.0),
            })
            .collect();
        Self {
            title: title.into(),
            points,
        }
    }
}

/// Turns a chart into an encoded image or text buffer.
pub trait ChartRenderer {
    /// Renders `chart`, returning the encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart cannot be drawn or encoded.
    fn render(&self, chart: &Chart) -> Result<Vec<u8>, RenderError>;
}
