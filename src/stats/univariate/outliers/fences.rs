//! Fence-based classification (Tukey's method)
//!
//! The method uses two "fences" to classify the data. All the observations "inside" the
//! fences are considered "normal", and the rest are considered outliers.
//!
//! The fences are computed from the quartiles of the sample, according to the following formula:
//!
//! ``` ignore
//! // q1, q3 are the first and third quartiles
//! let iqr = q3 - q1;  // The interquartile range
//! let (f1, f2) = (q1 - k * iqr, q3 + k * iqr);  // the "fences"
//!
//! let is_outlier = |x| x < f1 || x > f2;
//! ```
//!
//! `k` is a configurable multiplier. Tukey's original method fixes it at `1.5`; larger values
//! widen the fences and classify fewer points as outliers. Values sitting exactly on a fence
//! are *not* outliers.
//!
//! Some ASCII art for the visually oriented people:
//!
//! ``` ignore
//!       LOW-ish                 NORMAL-ish                  HIGH-ish
//!         x     |      o o  o    o   o o  o      |       x      x
//!               f1                                f2
//!
//! Legend:
//! o: "normal" data (not an outlier)
//! x: outlier
//! ```

use std::ops::Deref;
use std::slice;

use crate::stats::float::Float;
use crate::stats::univariate::outliers::Label::{self, *};
use crate::stats::univariate::{Percentiles, Sample};

/// A classified/labeled sample.
///
/// The labeled data can be accessed using the `iter` method. The order of the data points is
/// retained.
pub struct LabeledSample<'a, A>
where
    A: Float,
{
    fences: (A, A),
    percentiles: Percentiles<A>,
    sample: &'a Sample<A>,
}

impl<'a, A> LabeledSample<'a, A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Returns the number of data points per label
    ///
    /// - Time: `O(length)`
    pub fn count(&self) -> (usize, usize, usize) {
        let (mut low, mut normal, mut high) = (0, 0, 0);

        for (_, label) in self {
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

    /// Returns the fences used to classify the outliers
    pub fn fences(&self) -> (A, A) {
        self.fences
    }

    /// Returns the first and third quartiles the fences were derived from
    pub fn quartiles(&self) -> (A, A) {
        (
            self.percentiles.at(A::cast(25)),
            self.percentiles.at(A::cast(75)),
        )
    }

    /// Returns the sample sorted in ascending order
    pub fn sorted(&self) -> &[A] {
        self.percentiles.as_slice()
    }

    /// Returns an iterator over the labeled data
    pub fn iter(&self) -> Iter<'a, A> {
        Iter {
            fences: self.fences,
            iter: self.sample.iter(),
        }
    }
}

impl<'a, A> Deref for LabeledSample<'a, A>
where
    A: Float,
{
    type Target = Sample<A>;

    fn deref(&self) -> &Sample<A> {
        self.sample
    }
}

impl<'a, 'b, A> IntoIterator for &'b LabeledSample<'a, A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    type Item = (A, Label);
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

/// Iterator over the labeled data
pub struct Iter<'a, A>
where
    A: Float,
{
    fences: (A, A),
    iter: slice::Iter<'a, A>,
}

impl<'a, A> Iterator for Iter<'a, A>
where
    A: Float,
{
    type Item = (A, Label);

    fn next(&mut self) -> Option<(A, Label)> {
        self.iter.next().map(|&x| {
            let (lower, upper) = self.fences;

            let label = if x < lower {
                Low
            } else if x > upper {
                High
            } else {
                NotAnOutlier
            };

            (x, label)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Classifies the sample against fences placed `k` interquartile ranges beyond the quartiles,
/// and returns a labeled sample.
///
/// - Time: `O(N log N) where N = length`
pub fn classify<A>(sample: &Sample<A>, k: A) -> LabeledSample<'_, A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    let percentiles = sample.percentiles();
    let (q1, q3) = (percentiles.at(A::cast(25)), percentiles.at(A::cast(75)));
    let iqr = q3 - q1;

    LabeledSample {
        fences: (q1 - k * iqr, q3 + k * iqr),
        percentiles,
        sample,
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::stats::univariate::outliers::fences;
            use crate::stats::univariate::Sample;

            quickcheck! {
                // Every data point carries exactly one label
                fn partition(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let slice = &v[start..];
                        let sample = Sample::new(slice);
                        let labeled = fences::classify(sample, 1.5);
                        let (low, normal, high) = labeled.count();

                        TestResult::from_bool(low + normal + high == slice.len())
                    } else {
                        TestResult::discard()
                    }
                }

                // Widening the fences never labels more points as outliers
                fn monotonic_in_k(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let sample = Sample::new(&v[start..]);

                        let narrow = fences::classify(sample, 1.5);
                        let wide = fences::classify(sample, 3.);
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
                let labeled = fences::classify(sample, 1.5);

                let (q1, q3) = labeled.quartiles();
                assert!(relative_eq!(q1, 12.75));
                assert!(relative_eq!(q3, 38.25));

                let (lower, upper) = labeled.fences();
                assert!(relative_eq!(lower, -25.5));
                assert!(relative_eq!(upper, 76.5));

                let outliers: Vec<$ty> = labeled
                    .iter()
                    .filter(|(_, label)| label.is_outlier())
                    .map(|(x, _)| x)
                    .collect();
                assert_eq!(outliers, [102., 108.]);
            }

            // A value sitting exactly on a fence is not an outlier
            #[test]
            fn fence_is_inclusive() {
                let v: &[$ty] = &[0., 1., 2., 3., 4.];
                let sample = Sample::new(v);
                // q1 = 1, q3 = 3, iqr = 2, k = 0.5 -> fences at 0 and 4
                let labeled = fences::classify(sample, 0.5);
                let (low, normal, high) = labeled.count();

                assert_eq!((low, normal, high), (0, 5, 0));
            }

            #[test]
            fn sorted_view() {
                let v: &[$ty] = &[3., 1., 2.];
                let sample = Sample::new(v);
                let labeled = fences::classify(sample, 1.5);

                assert_eq!(labeled.sorted(), [1., 2., 3.]);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    test!(f32);
    test!(f64);
}
