//! Buckets represent one discrete sub-range of a numeric domain, exposed as a
//! selectable outcome.

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A bucket is a range of values together with its position in the partition
/// and a single value that represents it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Bucket {
    pub(crate) index: usize,
    pub(crate) low: f64,
    pub(crate) high: f64,
    pub(crate) midpoint: f64,
}

impl Bucket {
    /// Returns the position of the bucket, starting from zero.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the range for the bucket.
    pub fn range(&self) -> std::ops::RangeInclusive<f64> {
        std::ops::RangeInclusive::new(self.low, self.high)
    }

    /// Returns the lower bound for the bucket.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound for the bucket.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the value that stands in for the whole bucket.
    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }
}
