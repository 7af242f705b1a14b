// Copyright 2023 IOP Systems, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! This crate represents a continuous numeric market as a multiple choice
//! market by splitting its `[min, max]` domain into a fixed number of uniform
//! buckets.
//!
//! Each bucket has a lower and upper bound, a midpoint which stands in for
//! the whole bucket, and a label of the form `<low>-<high>` which is used as
//! the answer text for the outcome. Labels can be parsed back into a range or
//! a midpoint.
//!
//! ```
//! use multinumeric::{Bucketizer, ParseMode};
//!
//! let bucketizer = Bucketizer::new(0.0, 99.0, 20).unwrap();
//!
//! assert_eq!(bucketizer.bucket_size(), 5.0);
//! assert_eq!(bucketizer.midpoints()[0], 2.5);
//! assert_eq!(bucketizer.labels()[0], "0-4");
//!
//! let midpoint = multinumeric::label_to_midpoint("0-4", ParseMode::Strict).unwrap();
//! assert_eq!(midpoint, 2.0);
//! ```
//!
//! The bucket count is always passed explicitly. It must match the count used
//! by every other system that produces or consumes the labels.

mod bucket;
mod bucketizer;
mod builder;
mod domain;
mod errors;
mod format;
mod label;
mod round;

pub use bucket::Bucket;
pub use bucketizer::{Bucketizer, UpperEdge};
pub use builder::Builder;
pub use domain::Domain;
pub use errors::Error;
pub use format::{Formatter, LargeNumber};
pub use label::{label_to_midpoint, label_to_range, ParseMode};
pub use round::{round_to_epsilon, EPSILON};

/// The bucket count used by numeric markets unless configured otherwise.
pub const DEFAULT_BUCKETS: usize = 20;

/// Returns the width of each of `buckets` buckets over the domain.
pub fn bucket_size(domain: &Domain, buckets: usize) -> Result<f64, Error> {
    domain.bucket_size(buckets)
}

/// Returns the midpoint of each bucket, in bucket order.
pub fn midpoints(min: f64, max: f64, buckets: usize) -> Result<Vec<f64>, Error> {
    Ok(Bucketizer::new(min, max, buckets)?.midpoints())
}

/// Returns the `(low, high)` bounds of each bucket, in bucket order.
pub fn bucket_ranges(min: f64, max: f64, buckets: usize) -> Result<Vec<(f64, f64)>, Error> {
    Ok(Bucketizer::new(min, max, buckets)?.ranges())
}

/// Returns the label of each bucket, in bucket order.
pub fn bucket_range_labels(min: f64, max: f64, buckets: usize) -> Result<Vec<String>, Error> {
    Ok(Bucketizer::new(min, max, buckets)?.labels())
}
