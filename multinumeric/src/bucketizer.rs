use crate::label::format_label;
use crate::{round_to_epsilon, Bucket, Builder, Domain, Error, Formatter, LargeNumber};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Selects how the upper bound of the last bucket is computed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum UpperEdge {
    /// Every upper bound, including the last, is `min - 1 + (i + 1) * size`.
    /// The last upper bound equals `max` up to float rounding.
    #[default]
    Literal,
    /// The last bucket's upper bound is exactly the domain `max`.
    ClampToMax,
}

/// Splits a numeric domain into a fixed number of uniform buckets.
///
/// All bounds and midpoints are canonicalized with
/// [`crate::round_to_epsilon`], so the results are stable across calls and
/// safe to compare for equality.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bucketizer {
    pub(crate) domain: Domain,
    pub(crate) buckets: usize,
    pub(crate) size: f64,
    pub(crate) upper_edge: UpperEdge,
}

impl Bucketizer {
    /// Construct a bucketizer for the `[min, max]` domain with the given
    /// number of buckets.
    pub fn new(min: f64, max: f64, buckets: usize) -> Result<Self, Error> {
        Self::builder(min, max).buckets(buckets).build()
    }

    /// Construct a bucketizer for an existing domain.
    pub fn from_domain(domain: &Domain, buckets: usize) -> Result<Self, Error> {
        Self::new(domain.min(), domain.max(), buckets)
    }

    /// Returns a builder for a bucketizer over the `[min, max]` domain.
    pub fn builder(min: f64, max: f64) -> Builder {
        Builder::new(min, max)
    }

    /// Returns the domain that is being split.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the number of buckets.
    pub fn buckets(&self) -> usize {
        self.buckets
    }

    /// Returns the width of each bucket.
    pub fn bucket_size(&self) -> f64 {
        self.size
    }

    /// Returns how the last bucket's upper bound is computed.
    pub fn upper_edge(&self) -> UpperEdge {
        self.upper_edge
    }

    fn index_to_lower_bound(&self, index: usize) -> f64 {
        round_to_epsilon(self.domain.min() + index as f64 * self.size)
    }

    fn index_to_upper_bound(&self, index: usize) -> f64 {
        // with `Literal` this index is never reached
        let clamped = match self.upper_edge {
            UpperEdge::Literal => self.buckets,
            UpperEdge::ClampToMax => self.buckets - 1,
        };

        if index == clamped {
            return self.domain.max();
        }

        round_to_epsilon(self.domain.min() - 1.0 + (index + 1) as f64 * self.size)
    }

    fn index_to_midpoint(&self, index: usize) -> f64 {
        round_to_epsilon(self.domain.min() + index as f64 * self.size + self.size / 2.0)
    }

    fn index_to_bucket(&self, index: usize) -> Bucket {
        Bucket {
            index,
            low: self.index_to_lower_bound(index),
            high: self.index_to_upper_bound(index),
            midpoint: self.index_to_midpoint(index),
        }
    }

    /// Returns the bucket at `index`.
    pub fn bucket(&self, index: usize) -> Result<Bucket, Error> {
        if index >= self.buckets {
            return Err(Error::OutOfRange);
        }

        Ok(self.index_to_bucket(index))
    }

    /// Iterate over all buckets in index order.
    pub fn iter(&self) -> impl Iterator<Item = Bucket> + '_ {
        (0..self.buckets).map(|index| self.index_to_bucket(index))
    }

    /// Returns the midpoint of every bucket, in index order.
    pub fn midpoints(&self) -> Vec<f64> {
        (0..self.buckets)
            .map(|index| self.index_to_midpoint(index))
            .collect()
    }

    /// Returns the `(low, high)` bounds of every bucket, in index order.
    pub fn ranges(&self) -> Vec<(f64, f64)> {
        (0..self.buckets)
            .map(|index| {
                (
                    self.index_to_lower_bound(index),
                    self.index_to_upper_bound(index),
                )
            })
            .collect()
    }

    /// Returns the label of every bucket, in index order, using the
    /// [`LargeNumber`] formatter.
    pub fn labels(&self) -> Vec<String> {
        self.labels_with(&LargeNumber::default())
    }

    /// Returns the label of every bucket, in index order, using the provided
    /// formatter for the bounds.
    pub fn labels_with<F: Formatter + ?Sized>(&self, formatter: &F) -> Vec<String> {
        self.ranges()
            .into_iter()
            .map(|(low, high)| format_label(formatter, low, high))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Bucketizer {
    type Item = Bucket;
    type IntoIter = Box<dyn Iterator<Item = Bucket> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
