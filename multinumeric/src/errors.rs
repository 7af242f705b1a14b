use thiserror::Error;

/// Errors returned for bucketizer construction and label parsing.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid domain, check that min and max are finite and max > min")]
    InvalidDomain,
    #[error("invalid bucket count, must be at least 1")]
    InvalidBucketCount,
    #[error("label does not contain exactly two numeric bounds: {0:?}")]
    UnparsableLabel(String),
    #[error("the bucket index is outside of the bucket count")]
    OutOfRange,
}
