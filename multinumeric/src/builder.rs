use crate::{Bucketizer, Domain, Error, UpperEdge, DEFAULT_BUCKETS};
use log::debug;

/// A builder that can be used to construct a [`Bucketizer`].
///
/// By default the bucketizer uses [`DEFAULT_BUCKETS`] buckets and
/// [`UpperEdge::Literal`].
#[derive(Copy, Clone, Debug)]
pub struct Builder {
    min: f64,
    max: f64,
    buckets: usize,
    upper_edge: UpperEdge,
}

impl Builder {
    pub(crate) fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            buckets: DEFAULT_BUCKETS,
            upper_edge: UpperEdge::default(),
        }
    }

    /// Set the number of buckets the domain is split into. This must match
    /// the bucket count used by whatever consumes the labels, otherwise labels
    /// will not map back onto the same buckets.
    pub fn buckets(mut self, buckets: usize) -> Self {
        self.buckets = buckets;
        self
    }

    /// Set how the upper bound of the last bucket is determined.
    pub fn upper_edge(mut self, upper_edge: UpperEdge) -> Self {
        self.upper_edge = upper_edge;
        self
    }

    /// Consumes this `Builder` and produces a `Bucketizer`.
    ///
    /// # Constraints:
    /// * `min` and `max` must be finite with `max > min`
    /// * `buckets` must be at least 1
    pub fn build(self) -> Result<Bucketizer, Error> {
        let domain = Domain::new(self.min, self.max)?;
        let size = domain.bucket_size(self.buckets)?;

        debug!(
            "bucketizer: min: {} max: {} buckets: {} size: {} upper edge: {:?}",
            self.min, self.max, self.buckets, size, self.upper_edge
        );

        Ok(Bucketizer {
            domain,
            buckets: self.buckets,
            size,
            upper_edge: self.upper_edge,
        })
    }
}
