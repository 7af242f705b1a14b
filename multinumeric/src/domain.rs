use crate::Error;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The continuous outcome space of a numeric market.
///
/// # Constraints:
/// * `min` and `max` must be finite
/// * `max` must be greater than `min`
/// * `max - min + 1` must be finite
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(try_from = "RawDomain"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Domain {
    min: f64,
    max: f64,
}

// unchecked form that deserialization goes through
#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct RawDomain {
    min: f64,
    max: f64,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<RawDomain> for Domain {
    type Error = Error;

    fn try_from(raw: RawDomain) -> Result<Self, Error> {
        Domain::new(raw.min, raw.max)
    }
}

impl Domain {
    /// Construct a domain, checking the constraints listed above.
    pub fn new(min: f64, max: f64) -> Result<Self, Error> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(Error::InvalidDomain);
        }

        // the inflated width must not overflow
        if !(max - min + 1.0).is_finite() {
            return Err(Error::InvalidDomain);
        }

        Ok(Self { min, max })
    }

    /// Returns the lower bound of the domain.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound of the domain.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the width of each of `buckets` uniform buckets.
    ///
    /// The domain width is inflated by one before dividing, so the buckets
    /// together span `max - min + 1`.
    pub fn bucket_size(&self, buckets: usize) -> Result<f64, Error> {
        if buckets == 0 {
            return Err(Error::InvalidBucketCount);
        }

        Ok((self.max - self.min + 1.0) / buckets as f64)
    }
}
