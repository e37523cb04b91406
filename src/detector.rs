//! The outlier detector and its published results.

use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::stats::univariate::outliers::{fences, zscore};
use crate::stats::univariate::Sample;
use crate::stats::Float;

/// Outlier detection method
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Interquartile-range fences: a point is an outlier when it lies strictly beyond
    /// `q1 - k * iqr` or `q3 + k * iqr`
    Iqr,
    /// Standard scores: a point is an outlier when `|z| > k`, with `z` computed against the
    /// population standard deviation
    Zscore,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Method> {
        match s {
            "iqr" => Ok(Method::Iqr),
            "zscore" => Ok(Method::Zscore),
            _ => Err(Error::InvalidConfiguration {
                method: s.to_owned(),
            }),
        }
    }
}

/// A configured outlier detector.
///
/// The configuration is fixed at construction: a detection [`Method`] and the threshold
/// multiplier it interprets (fence multiplier for IQR, score cutoff for Z-score). The
/// detector holds no other state, so a single instance can serve any number of
/// [`detect_outliers`] calls, from any number of threads.
///
/// The threshold is deliberately not validated: zero and negative multipliers are legal and
/// simply fall out of the arithmetic (the fences collapse onto the quartiles, every strictly
/// outside point is an outlier).
///
/// [`detect_outliers`]: OutlierDetector::detect_outliers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlierDetector<A>
where
    A: Float,
{
    method: Method,
    threshold: A,
}

impl<A> Default for OutlierDetector<A>
where
    A: Float,
{
    /// Tukey's classic configuration: IQR fences with a multiplier of 1.5
    fn default() -> OutlierDetector<A> {
        OutlierDetector {
            method: Method::Iqr,
            threshold: A::cast(1.5_f32),
        }
    }
}

impl<A> OutlierDetector<A>
where
    A: Float,
    usize: cast::From<A, Output = ::std::result::Result<usize, cast::Error>>,
{
    /// Creates a detector from a threshold and a method name (`"iqr"` or `"zscore"`).
    ///
    /// This is the string-keyed constructor; prefer [`Default`] plus the builder methods
    /// when the method is known at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an unrecognized method name.
    pub fn new(threshold: A, method: &str) -> Result<OutlierDetector<A>> {
        Ok(OutlierDetector {
            method: method.parse()?,
            threshold,
        })
    }

    /// Changes the detection method
    pub fn method(mut self, method: Method) -> OutlierDetector<A> {
        self.method = method;
        self
    }

    /// Changes the threshold multiplier
    pub fn threshold(mut self, threshold: A) -> OutlierDetector<A> {
        self.threshold = threshold;
        self
    }

    /// Detects the outliers in `data`.
    ///
    /// `data` is read in its original order and the order is preserved in every sequence of
    /// the result. The call is deterministic: the same data and configuration produce an
    /// identical result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDataset`] when `data` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `data` contains any `NaN`.
    pub fn detect_outliers(&self, data: &[A]) -> Result<DetectionResult<A>> {
        if data.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let sample = Sample::new(data);

        match self.method {
            Method::Iqr => Ok(DetectionResult::Iqr(self.iqr_method(sample))),
            Method::Zscore => Ok(DetectionResult::Zscore(self.zscore_method(sample))),
        }
    }

    fn iqr_method(&self, sample: &Sample<A>) -> IqrResult<A> {
        let labeled = fences::classify(sample, self.threshold);
        let (q1, q3) = labeled.quartiles();
        let (lower_fence, upper_fence) = labeled.fences();

        let mut outliers = Vec::new();
        let mut refined_data = Vec::with_capacity(sample.len());
        for (x, label) in &labeled {
            if label.is_outlier() {
                outliers.push(x);
            } else {
                refined_data.push(x);
            }
        }

        debug!(
            "iqr: classified {}/{} data points as outliers",
            outliers.len(),
            sample.len()
        );

        IqrResult {
            sorted_data: labeled.sorted().to_vec(),
            outliers,
            refined_data,
            q1,
            q3,
            iqr: q3 - q1,
            lower_fence,
            upper_fence,
        }
    }

    fn zscore_method(&self, sample: &Sample<A>) -> ZscoreResult<A> {
        let scored = zscore::classify(sample, self.threshold);

        let mut outliers = Vec::new();
        let mut refined_data = Vec::with_capacity(sample.len());
        for (x, _, label) in scored.iter() {
            if label.is_outlier() {
                outliers.push(x);
            } else {
                refined_data.push(x);
            }
        }

        debug!(
            "zscore: classified {}/{} data points as outliers",
            outliers.len(),
            sample.len()
        );

        ZscoreResult {
            mean: scored.mean(),
            std_dev: scored.std_dev(),
            outliers,
            refined_data,
            z_scores: scored.scores().to_vec(),
        }
    }
}

/// The outcome of a detection call.
///
/// A tagged variant per method; the untagged serde representation reproduces the flat
/// per-variant key set, so a serialized result reads as a plain associative structure.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DetectionResult<A> {
    /// Produced by [`Method::Iqr`]
    Iqr(IqrResult<A>),
    /// Produced by [`Method::Zscore`]
    Zscore(ZscoreResult<A>),
}

impl<A> DetectionResult<A> {
    /// Returns the values classified as outliers, in original input order
    pub fn outliers(&self) -> &[A] {
        match self {
            DetectionResult::Iqr(res) => &res.outliers,
            DetectionResult::Zscore(res) => &res.outliers,
        }
    }

    /// Returns the values not classified as outliers, in original input order
    pub fn refined_data(&self) -> &[A] {
        match self {
            DetectionResult::Iqr(res) => &res.refined_data,
            DetectionResult::Zscore(res) => &res.refined_data,
        }
    }
}

/// Result of an IQR-fence detection.
///
/// `outliers` and `refined_data` partition the input by value, each in original input
/// order; values sitting exactly on a fence count as refined.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IqrResult<A> {
    /// The input sorted in ascending order
    pub sorted_data: Vec<A>,
    /// Values strictly beyond either fence
    pub outliers: Vec<A>,
    /// Values within the fences, fences inclusive
    pub refined_data: Vec<A>,
    /// First quartile (25th percentile, linear rank interpolation)
    pub q1: A,
    /// Third quartile (75th percentile, linear rank interpolation)
    pub q3: A,
    /// Interquartile range, `q3 - q1`
    pub iqr: A,
    /// `q1 - threshold * iqr`
    pub lower_fence: A,
    /// `q3 + threshold * iqr`
    pub upper_fence: A,
}

/// Result of a Z-score detection.
///
/// `z_scores` is aligned index-for-index with the input dataset. `outliers` and
/// `refined_data` partition the input by value, each in original input order; a score of
/// exactly the threshold counts as refined, and non-finite scores (zero standard
/// deviation) never classify as outliers.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ZscoreResult<A> {
    /// Arithmetic mean of the input
    pub mean: A,
    /// Population standard deviation of the input
    pub std_dev: A,
    /// Values whose absolute score strictly exceeds the threshold
    pub outliers: Vec<A>,
    /// Values whose absolute score is at most the threshold
    pub refined_data: Vec<A>,
    /// Per-element standard scores, same length and order as the input
    pub z_scores: Vec<A>,
}

#[cfg(test)]
mod tests {
    use super::{Method, OutlierDetector};
    use crate::error::Error;

    #[test]
    fn method_names() {
        assert_eq!("iqr".parse::<Method>().unwrap(), Method::Iqr);
        assert_eq!("zscore".parse::<Method>().unwrap(), Method::Zscore);
    }

    #[test]
    fn unrecognized_method() {
        let err = OutlierDetector::<f64>::new(1.5, "bogus").unwrap_err();

        match err {
            Error::InvalidConfiguration { method } => assert_eq!(method, "bogus"),
            _ => panic!("expected InvalidConfiguration, got {:?}", err),
        }
    }

    #[test]
    fn default_configuration() {
        let detector = OutlierDetector::<f64>::default();

        assert_eq!(detector.method, Method::Iqr);
        assert_eq!(detector.threshold, 1.5);
    }

    #[test]
    fn empty_dataset() {
        let detector = OutlierDetector::<f64>::default();

        match detector.detect_outliers(&[]) {
            Err(Error::EmptyDataset) => {}
            other => panic!("expected EmptyDataset, got {:?}", other),
        }
    }
}
