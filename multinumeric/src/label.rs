//! Bucket labels have the form `<low>-<high>`, with each bound rendered by a
//! [`crate::Formatter`]. This module turns labels back into numeric ranges.

use crate::format::SUFFIXES;
use crate::{Error, Formatter};
use log::trace;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Selects how labels are split into their two bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ParseMode {
    /// Finds the single hyphen that separates two numeric bounds, so negative
    /// bounds such as `-100--91` parse correctly. Bounds may carry a magnitude
    /// suffix (`1.5K`). Anything else is an [`Error::UnparsableLabel`].
    #[default]
    Strict,
    /// Splits on every hyphen and reads the leading number of the first two
    /// pieces, ignoring trailing text. Pieces without a leading number, and a
    /// missing second piece, become `NaN`. Never fails. Kept for labels that
    /// were stored by systems with this behavior.
    Legacy,
}

/// Join two bounds into a label.
pub(crate) fn format_label<F: Formatter + ?Sized>(formatter: &F, low: f64, high: f64) -> String {
    format!("{}-{}", formatter.format(low), formatter.format(high))
}

/// Recover the `(low, high)` bounds from a bucket label.
///
/// Labels carry display-rounded bounds, so the result generally differs from
/// the bounds that produced the label.
pub fn label_to_range(label: &str, mode: ParseMode) -> Result<(f64, f64), Error> {
    match mode {
        ParseMode::Strict => strict_range(label),
        ParseMode::Legacy => Ok(legacy_range(label)),
    }
}

/// The representative value of a label, halfway between its bounds.
pub fn label_to_midpoint(label: &str, mode: ParseMode) -> Result<f64, Error> {
    let (low, high) = label_to_range(label, mode)?;
    Ok((high + low) / 2.0)
}

// At most one hyphen can separate two valid bounds: any other hyphen is
// either a leading sign or an exponent sign, and a bound never ends in `e`.
fn strict_range(label: &str) -> Result<(f64, f64), Error> {
    label
        .match_indices('-')
        // a leading hyphen is always a sign
        .filter(|(idx, _)| *idx > 0)
        .find_map(|(idx, _)| {
            let low = parse_bound(&label[..idx])?;
            let high = parse_bound(&label[idx + 1..])?;
            Some((low, high))
        })
        .ok_or_else(|| {
            trace!("unparsable label: {label:?}");
            Error::UnparsableLabel(label.to_string())
        })
}

/// Parse a single finite bound with an optional magnitude suffix.
fn parse_bound(token: &str) -> Option<f64> {
    let (mantissa, power) = match SUFFIXES[1..]
        .iter()
        .position(|suffix| token.ends_with(suffix))
    {
        Some(i) => (&token[..token.len() - 1], 3 * (i + 1)),
        None => (token, 0),
    };

    // rejects the words the float parser would otherwise take (`inf`, `NaN`)
    if mantissa.is_empty()
        || !mantissa
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }

    let value = if power == 0 {
        mantissa.parse::<f64>().ok()?
    } else {
        if mantissa.contains(['e', 'E']) {
            return None;
        }
        format!("{mantissa}e{power}").parse::<f64>().ok()?
    };

    value.is_finite().then_some(value)
}

fn legacy_range(label: &str) -> (f64, f64) {
    let mut tokens = label.split('-');
    let low = tokens.next().map(parse_float).unwrap_or(f64::NAN);
    let high = tokens.next().map(parse_float).unwrap_or(f64::NAN);

    if low.is_nan() || high.is_nan() {
        trace!("legacy parse of {label:?} produced NaN");
    }

    (low, high)
}

/// Read the longest numeric prefix of `text`, after leading whitespace.
/// Returns `NaN` if there is none.
fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut mantissa_digits = digits(end);
    end += mantissa_digits;

    if bytes.get(end) == Some(&b'.') {
        let fraction = digits(end + 1);
        mantissa_digits += fraction;
        end += 1 + fraction;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}
