//! Formatting of bucket bounds into label text.

// magnitude suffixes, one per power of one thousand
pub(crate) const SUFFIXES: [&str; 6] = ["", "K", "M", "B", "T", "Q"];

/// Renders a bucket bound as label text.
///
/// Implementations should be deterministic and collision-free for the bounds
/// produced by a bucketizer. Any `Fn(f64) -> String` is a formatter.
pub trait Formatter {
    /// Render a single bound.
    fn format(&self, value: f64) -> String;
}

impl<F> Formatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// The default label formatter. Small values are shown with a few
/// significant figures, values of ten thousand and above are scaled down and
/// given a magnitude suffix (`12K`, `1.5M`, `3B`, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LargeNumber {
    sigfigs: usize,
}

impl Default for LargeNumber {
    fn default() -> Self {
        Self { sigfigs: 2 }
    }
}

impl LargeNumber {
    /// Create a formatter that uses `sigfigs` significant figures for values
    /// below one and for suffixed values. At least one significant figure is
    /// always used.
    pub fn new(sigfigs: usize) -> Self {
        Self {
            sigfigs: std::cmp::max(1, sigfigs),
        }
    }

    /// Returns the number of significant figures in use.
    pub fn sigfigs(&self) -> usize {
        self.sigfigs
    }
}

impl Formatter for LargeNumber {
    fn format(&self, value: f64) -> String {
        let abs = value.abs();

        if abs < 1.0 {
            return show_precision(value, self.sigfigs);
        }
        if abs < 100.0 {
            return show_precision(value, 2);
        }
        if abs < 1000.0 {
            return show_precision(value, 3);
        }
        if abs < 10000.0 {
            return show_precision(value, 4);
        }

        let power = (abs.log10() / 3.0).floor() as i32;
        let scaled = value / 1000_f64.powi(power);
        let suffix = SUFFIXES.get(power as usize).copied().unwrap_or("");

        format!("{}{}", show_precision(scaled, self.sigfigs), suffix)
    }
}

/// Round to `sigfigs` significant figures and render the shortest text that
/// reads back as the rounded value, without trailing zeros.
fn show_precision(value: f64, sigfigs: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.*e}", sigfigs.saturating_sub(1), value)
        .parse::<f64>()
        .unwrap_or(value)
        + 0.0;

    // very small magnitudes switch to exponent notation
    if rounded != 0.0 && rounded.abs() < 1e-6 {
        format!("{rounded:e}")
    } else {
        rounded.to_string()
    }
}
