use crate::stats::float::Float;
use cast::usize;

/// A "view" into the percentiles of a sample
pub struct Percentiles<A>(Box<[A]>)
where
    A: Float;

// TODO(rust-lang/rfcs#735) move this `impl` into a private percentiles module
impl<A> Percentiles<A>
where
    A: Float,
    usize: cast::From<A, Output = Result<usize, cast::Error>>,
{
    /// Returns the percentile at `p`%
    ///
    /// Percentiles are computed by linear interpolation between closest
    /// ranks: `rank = p / 100 * (length - 1)`.
    ///
    /// Safety:
    ///
    /// - Make sure that `p` is in the range `[0, 100]`
    unsafe fn at_unchecked(&self, p: A) -> A {
        let _100 = A::cast(100);
        debug_assert!(p >= A::cast(0) && p <= _100);
        debug_assert!(!self.0.is_empty());
        let len = self.0.len() - 1;

        // NB every percentile of a single data point is that data point
        if p == _100 || len == 0 {
            self.0[len]
        } else {
            let rank = (p / _100) * A::cast(len);
            let integer = rank.floor();
            let fraction = rank - integer;
            let n = usize(integer).unwrap();
            let &floor = self.0.get_unchecked(n);
            let &ceiling = self.0.get_unchecked(n + 1);

            floor + (ceiling - floor) * fraction
        }
    }

    /// Returns the percentile at `p`%
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the closed `[0, 100]` range
    pub fn at(&self, p: A) -> A {
        let _0 = A::cast(0);
        let _100 = A::cast(100);

        assert!(p >= _0 && p <= _100);
        assert!(!self.0.is_empty());

        unsafe { self.at_unchecked(p) }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> A {
        let q1 = self.at(A::cast(25));
        let q3 = self.at(A::cast(75));

        q3 - q1
    }

    /// Returns the 50th percentile
    pub fn median(&self) -> A {
        self.at(A::cast(50))
    }

    /// Returns the 25th, 50th and 75th percentiles
    pub fn quartiles(&self) -> (A, A, A) {
        (
            self.at(A::cast(25)),
            self.at(A::cast(50)),
            self.at(A::cast(75)),
        )
    }

    /// Returns the sorted data the view was built from
    pub fn as_slice(&self) -> &[A] {
        &self.0
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::stats::univariate::Sample;

            quickcheck! {
                fn monotonic(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;

                    if let Some(v) = crate::stats::test::vec::<$ty>(size, start) {
                        let percentiles = Sample::new(&v[start..]).percentiles();
                        let (q1, q2, q3) = percentiles.quartiles();

                        TestResult::from_bool(q1 <= q2 && q2 <= q3)
                    } else {
                        TestResult::discard()
                    }
                }
            }

            // Quartiles of 1..=8 under linear rank interpolation
            #[test]
            fn quartiles() {
                let v: &[$ty] = &[1., 2., 3., 4., 5., 6., 7., 8.];
                let percentiles = Sample::new(v).percentiles();
                let (q1, q2, q3) = percentiles.quartiles();

                assert!(relative_eq!(q1, 2.75));
                assert!(relative_eq!(q2, 4.5));
                assert!(relative_eq!(q3, 6.25));
                assert!(relative_eq!(percentiles.iqr(), 3.5));
            }

            #[test]
            fn endpoints() {
                let v: &[$ty] = &[3., 1., 2.];
                let percentiles = Sample::new(v).percentiles();

                assert!(relative_eq!(percentiles.at(0.), 1.));
                assert!(relative_eq!(percentiles.at(100.), 3.));
            }

            #[test]
            fn singleton() {
                let v: &[$ty] = &[7.];
                let percentiles = Sample::new(v).percentiles();

                assert!(relative_eq!(percentiles.at(25.), 7.));
                assert!(relative_eq!(percentiles.at(75.), 7.));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    test!(f32);
    test!(f64);
}
