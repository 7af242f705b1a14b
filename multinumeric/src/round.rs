/// The granularity that bucket boundaries and midpoints are canonicalized to.
pub const EPSILON: f64 = 0.000001;

// digits kept after canonicalization, strips noise left by the multiply
const DECIMALS: usize = 10;

/// Round a value to the nearest multiple of [`EPSILON`] and then truncate the
/// result to ten decimal digits.
///
/// Halfway cases round toward positive infinity. The function is idempotent
/// for all finite inputs. Non-finite inputs are returned unchanged.
pub fn round_to_epsilon(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let steps = (value / EPSILON + 0.5).floor();
    let rounded = steps * EPSILON;

    // parse the decimal text back to get the closest double to it
    format!("{:.*}", DECIMALS, rounded)
        .parse::<f64>()
        .map(|v| v + 0.0)
        .unwrap_or(rounded)
}
