//! The statistics kernel.
//!
//! Everything in here operates on a borrowed [`Sample`], is deterministic,
//! and performs no I/O. The outlier classifiers build on the `Sample` and
//! `Percentiles` primitives and label data points by position, so results
//! derived from them stay correct in the presence of duplicate values.
//!
//! [`Sample`]: univariate::Sample

#[cfg(test)]
pub mod test;

pub mod univariate;

mod float;

pub use self::float::Float;

fn sum<A>(xs: &[A]) -> A
where
    A: Float,
{
    use std::ops::Add;

    xs.iter().cloned().fold(A::cast(0), Add::add)
}
