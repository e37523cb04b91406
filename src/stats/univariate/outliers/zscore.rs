//! Z-score classification (standard score)
//!
//! Each data point is standardized against the sample it was drawn from:
//!
//! ``` ignore
//! let z = (x - mean) / std_dev;  // population standard deviation
//! ```
//!
//! Points whose absolute score exceeds a configurable threshold `k` are classified as
//! outliers. A score of exactly `k` is *not* an outlier.
//!
//! A constant sample has a standard deviation of zero, which makes every score non-finite
//! (`0 / 0` is `NaN`). This degeneracy is deliberately not guarded: IEEE-754 semantics
//! propagate, a `NaN` score satisfies neither threshold comparison, and the point is
//! labeled normal. A warning is logged when this happens.

use std::iter::Zip;
use std::ops::Deref;
use std::slice;

use log::warn;

use crate::stats::float::Float;
use crate::stats::univariate::outliers::Label::{self, *};
use crate::stats::univariate::Sample;

/// A sample annotated with the z-score of every data point.
///
/// The scored data can be accessed using the `iter` method. The order of the data points is
/// retained, and `scores()` is aligned index-for-index with the sample.
pub struct ScoredSample<'a, A>
where
    A: Float,
{
    mean: A,
    std_dev: A,
    threshold: A,
    scores: Box<[A]>,
    sample: &'a Sample<A>,
}

impl<'a, A> ScoredSample<'a, A>
where
    A: Float,
{
    /// Returns the number of data points per label
    ///
    /// - Time: `O(length)`
    pub fn count(&self) -> (usize, usize, usize) {
        let (mut low, mut normal, mut high) = (0, 0, 0);

        for (_, _, label) in self.iter() {
            match label {
                Low => {
                    low += 1;
                }
                NotAnOutlier => {
                    normal += 1;
                }
                High => {
                    high += 1;
                }
            }
        }

        (low, normal, high)
    }

    /// Returns the arithmetic average the scores were derived from
    pub fn mean(&self) -> A {
        self.mean
    }

    /// Returns the population standard deviation the scores were derived from
    pub fn std_dev(&self) -> A {
        self.std_dev
    }

    /// Returns the z-scores, aligned index-for-index with the sample
    pub fn scores(&self) -> &[A] {
        &self.scores
    }

    /// Returns an iterator over the scored data
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            threshold: self.threshold,
            iter: self.sample.iter().zip(self.scores.iter()),
        }
    }
}

impl<'a, A> Deref for ScoredSample<'a, A>
where
    A: Float,
{
    type Target = Sample<A>;

    fn deref(&self) -> &Sample<A> {
        self.sample
    }
}

impl<'a, 'b, A> IntoIterator for &'b ScoredSample<'a, A>
where
    A: Float,
{
    type Item = (A, A, Label);
    type IntoIter = Iter<'b, A>;

    fn into_iter(self) -> Iter<'b, A> {
        self.iter()
    }
}

/// Iterator over the scored data
pub struct Iter<'a, A>
where
    A: Float,
{
    threshold: A,
    iter: Zip<slice::Iter<'a, A>, slice::Iter<'a, A>>,
}

impl<'a, A> Iterator for Iter<'a, A>
where
    A: Float,
{
    type Item = (A, A, Label);

    fn next(&mut self) -> Option<(A, A, Label)> {
        self.iter.next().map(|(&x, &z)| {
            let k = self.threshold;

            // NB a NaN score fails both comparisons and falls through to NotAnOutlier
            let label = if z < -k {
                Low
            } else if z > k {
                High
            } else {
                NotAnOutlier
            };

            (x, z, label)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Standardizes the sample and classifies the data points whose absolute z-score exceeds `k`
/// as outliers.
///
/// - Time: `O(length)`
/// - Memory: `O(length)`
pub fn classify<A>(sample: &Sample<A>, k: A) -> ScoredSample<'_, A>
where
    A: Float,
{
    let mean = sample.mean();
    let std_dev = sample.std_dev(Some(mean));

    if std_dev == A::cast(0) {
        warn!("sample has zero standard deviation; z-scores will not be finite");
    }

    let scores = sample
        .iter()
        .map(|&x| (x - mean) / std_dev)
        .collect::<Vec<_>>()
        .into_boxed_slice();

    ScoredSample {
        mean,
        std_dev,
        threshold: k,
        scores,
        sample,
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::stats::univariate::outliers::zscore;
            use crate::stats::univariate::Sample;

            quickcheck! {
                // One score per data point, in input order
                fn aligned(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let slice = &v[start..];
                        let sample = Sample::new(slice);
                        let scored = zscore::classify(sample, 2.);

                        TestResult::from_bool(
                            scored.scores().len() == slice.len()
                                && scored
                                    .iter()
                                    .zip(slice.iter())
                                    .all(|((x, _, _), &orig)| x == orig),
                        )
                    } else {
                        TestResult::discard()
                    }
                }

                // Raising the threshold never labels more points as outliers
                fn monotonic_in_k(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let sample = Sample::new(&v[start..]);

                        let narrow = zscore::classify(sample, 1.);
                        let wide = zscore::classify(sample, 2.);
                        let (nl, _, nh) = narrow.count();
                        let (wl, _, wh) = wide.count();

                        TestResult::from_bool(wl + wh <= nl + nh)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            #[test]
            fn classify() {
                let v: &[$ty] = &[10., 12., 15., 102., 108., 13., 14., 17.];
                let sample = Sample::new(v);
                let scored = zscore::classify(sample, 1.5);

                let outliers: Vec<$ty> = scored
                    .iter()
                    .filter(|(_, _, label)| label.is_outlier())
                    .map(|(x, _, _)| x)
                    .collect();
                assert_eq!(outliers, [102., 108.]);
            }

            // 0 / 0 scores are NaN; every point stays in the normal partition
            #[test]
            fn constant_sample() {
                let v: &[$ty] = &[5., 5., 5., 5.];
                let sample = Sample::new(v);
                let scored = zscore::classify(sample, 2.);

                assert_eq!(scored.std_dev(), 0.);
                assert!(scored.scores().iter().all(|z| z.is_nan()));

                let (low, normal, high) = scored.count();
                assert_eq!((low, normal, high), (0, 4, 0));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    test!(f32);
    test!(f64);
}
