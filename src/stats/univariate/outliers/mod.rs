//! Classification of outliers
//!
//! WARNING: There's no formal/mathematical definition of what an outlier actually is. Therefore,
//! all outlier classifiers are *subjective*, however some classifiers that have become *de facto*
//! standard are provided here.
//!
//! Every classifier in this module labels data points *by position*: iterating a classified
//! sample yields the original sequence with a label attached to each element. Duplicate values
//! therefore always carry the same label, and positional information is never lost.

pub mod fences;
pub mod zscore;

use self::Label::*;

/// Labels used to classify outliers
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Label {
    /// A data point with an "unusually" high value
    High,
    /// A data point with an "unusually" low value
    Low,
    /// A normal data point
    NotAnOutlier,
}

impl Label {
    /// Checks if the data point has an "unusually" high value
    pub fn is_high(&self) -> bool {
        matches!(*self, High)
    }

    /// Checks if the data point has an "unusually" low value
    pub fn is_low(&self) -> bool {
        matches!(*self, Low)
    }

    /// Checks if the data point is labeled as an outlier
    pub fn is_outlier(&self) -> bool {
        !matches!(*self, NotAnOutlier)
    }
}
