//! A statistics-driven outlier detection library for one-dimensional data.
//!
//! Two classical detection methods are provided, selected at construction time:
//!
//! - **IQR fences**: data points strictly beyond `q1 - k * iqr` or `q3 + k * iqr` are
//!   outliers. Quartiles are computed with linear interpolation between closest ranks.
//! - **Z-score**: data points whose standard score against the population standard
//!   deviation strictly exceeds `k` in magnitude are outliers.
//!
//! Detection is pure and deterministic: a detector is immutable once constructed, a call
//! borrows the dataset, and the result is a fresh value owned by the caller. The result
//! always partitions the input into `outliers` and `refined_data`, both in original input
//! order.
//!
//! ```
//! use outliers::OutlierDetector;
//!
//! let data = [10., 12., 15., 102., 108., 13., 14., 17.];
//!
//! let detector = OutlierDetector::default();
//! let result = detector.detect_outliers(&data)?;
//!
//! assert_eq!(result.outliers(), [102., 108.]);
//! # Ok::<(), outliers::Error>(())
//! ```
//!
//! Rendering lives behind the [`plot::Plotter`] trait so the numeric core carries no
//! graphics dependency; an SVG backend built on `plotters` ships behind the default
//! `plotters` cargo feature.

#![warn(missing_docs)]
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod detector;
mod error;

pub mod plot;
pub mod stats;

pub use crate::detector::{DetectionResult, IqrResult, Method, OutlierDetector, ZscoreResult};
pub use crate::error::{Error, Result};
