//! The rendering boundary.
//!
//! Rendering is display logic, not detection: the numeric core never draws, and this
//! module only defines the contract a renderer consumes — the original dataset plus the
//! [`DetectionResult`] computed from it. Backends implement [`Plotter`]; the crate ships
//! [`PlottersBackend`] behind the `plotters` cargo feature (enabled by default).
//!
//! Like the detection core's, a renderer's view of outlier membership is positional:
//! indices are recovered from the result's in-order `outliers` sequence rather than by
//! global value lookup, so duplicate values cannot be mis-flagged.
//!
//! [`DetectionResult`]: crate::DetectionResult
//! [`PlottersBackend`]: plotters_backend::PlottersBackend

use std::path::Path;

use crate::detector::DetectionResult;

#[cfg(feature = "plotters")]
pub mod plotters_backend;

#[cfg(feature = "plotters")]
pub use self::plotters_backend::PlottersBackend;

/// Where and how a figure should be rendered
#[derive(Clone, Copy)]
pub struct PlotContext<'a> {
    /// Output path of the rendered figure
    pub path: &'a Path,
    /// Optional figure title
    pub title: Option<&'a str>,
    /// Figure dimensions in pixels; backends fall back to their own default
    pub size: Option<(u32, u32)>,
}

/// What a figure is rendered from
#[derive(Clone, Copy)]
pub struct PlotData<'a> {
    /// The dataset, in original input order
    pub data: &'a [f64],
    /// The detection result computed from `data`
    pub result: &'a DetectionResult<f64>,
}

/// Abstracts a rendering backend away from the detection core.
///
/// A backend draws a single kind of figure: the data sequence with its outliers
/// highlighted and, when the result carries fences, horizontal reference lines at the
/// fence values.
pub trait Plotter {
    /// Renders the data series with its outlier subset highlighted
    fn series(&mut self, ctx: PlotContext<'_>, data: PlotData<'_>);

    /// Blocks until all rendering started by this backend has finished
    fn wait(&mut self) {}
}

/// Recovers the positions of the outliers within `data`.
///
/// `outliers` must be the in-order outlier sequence of a result computed from `data`.
/// Classification never splits duplicate values across the partition, so a refined value
/// can never equal the next pending outlier value and a single forward cursor recovers
/// the positions exactly.
#[cfg(feature = "plotters")]
fn outlier_indices(data: &[f64], outliers: &[f64]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(outliers.len());
    let mut cursor = 0;

    for (i, x) in data.iter().enumerate() {
        if cursor < outliers.len() && *x == outliers[cursor] {
            indices.push(i);
            cursor += 1;
        }
    }

    indices
}

#[cfg(all(test, feature = "plotters"))]
mod tests {
    use super::outlier_indices;

    #[test]
    fn recovers_positions() {
        let data = [10., 12., 15., 102., 108., 13., 14., 17.];
        let outliers = [102., 108.];

        assert_eq!(outlier_indices(&data, &outliers), [3, 4]);
    }

    #[test]
    fn duplicate_outlier_values() {
        let data = [100., 1., 2., 100., 3.];
        let outliers = [100., 100.];

        assert_eq!(outlier_indices(&data, &outliers), [0, 3]);
    }

    #[test]
    fn no_outliers() {
        let data = [1., 2., 3.];

        assert_eq!(outlier_indices(&data, &[]), Vec::<usize>::new());
    }
}
