//! Per-cell numeric parsing and width narrowing rules.
//!
//! Every parse attempt returns an `Option`; an unparseable cell is a missing
//! value, never an error. The downcast rules pick the narrowest storage that
//! holds every value without loss and fall back to the original width when
//! nothing narrower fits.

use tablecast_model::{FloatWidth, IntWidth, RawCell};

/// A successfully parsed numeric cell, with integer identity preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    Int(i64),
    Float(f64),
}

/// Attempt to read a cell as a number.
///
/// Booleans count as 1/0, matching the behavior of coercing a mixed column
/// through a numeric conversion. Text parses as `i64` first so large
/// integers keep their identity; a text cell that parses to NaN is treated
/// as missing rather than a value.
pub fn cell_to_number(cell: &RawCell) -> Option<ParsedNumber> {
    match cell {
        RawCell::Int(v) => Some(ParsedNumber::Int(*v)),
        RawCell::Float(v) => Some(ParsedNumber::Float(*v)),
        RawCell::Bool(b) => Some(ParsedNumber::Int(i64::from(*b))),
        RawCell::Text(s) => parse_number(s),
        RawCell::DateTime(_) | RawCell::Missing => None,
    }
}

/// Parse a string as a number, `None` for empty or invalid input.
pub fn parse_number(value: &str) -> Option<ParsedNumber> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(v) = value.parse::<i64>() {
        return Some(ParsedNumber::Int(v));
    }
    match value.parse::<f64>() {
        Ok(v) if !v.is_nan() => Some(ParsedNumber::Float(v)),
        _ => None,
    }
}

/// Convert a float to `i64` if it is exactly integral and in range.
pub fn integral_to_i64(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // The upper bound is exclusive: 2^63 is representable as f64, i64::MAX
    // is not.
    if value >= -(2f64.powi(63)) && value < 2f64.powi(63) {
        Some(value as i64)
    } else {
        None
    }
}

/// Whether a float survives an f32 round trip without loss.
pub fn float_fits_f32(value: f64) -> bool {
    f64::from(value as f32) == value
}

/// Narrowest integer width for the observed values; `fallback` when the
/// column holds no values at all.
pub fn narrow_int_width(values: &[Option<i64>], fallback: IntWidth) -> IntWidth {
    let mut bounds: Option<(i64, i64)> = None;
    for value in values.iter().flatten() {
        bounds = Some(match bounds {
            None => (*value, *value),
            Some((min, max)) => (min.min(*value), max.max(*value)),
        });
    }
    match bounds {
        Some((min, max)) => IntWidth::fitting(min, max),
        None => fallback,
    }
}

/// Narrowest float width for the observed values; `fallback` when the
/// column holds no values at all.
pub fn narrow_float_width(values: &[Option<f64>], fallback: FloatWidth) -> FloatWidth {
    let mut any = false;
    for value in values.iter().flatten() {
        any = true;
        if !float_fits_f32(*value) {
            return FloatWidth::F64;
        }
    }
    if any { FloatWidth::F32 } else { fallback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_prefers_integer() {
        assert_eq!(parse_number("42"), Some(ParsedNumber::Int(42)));
        assert_eq!(parse_number("-7"), Some(ParsedNumber::Int(-7)));
        assert_eq!(parse_number("3.5"), Some(ParsedNumber::Float(3.5)));
        assert_eq!(parse_number(" 12 "), Some(ParsedNumber::Int(12)));
    }

    #[test]
    fn parse_number_rejects_garbage_and_nan() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("nan"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn parse_number_accepts_infinity() {
        // Non-finite text still parses; the normalizer only scrubs decoded
        // float cells, and a textual "inf" is a legitimate float value here.
        assert_eq!(
            parse_number("inf"),
            Some(ParsedNumber::Float(f64::INFINITY))
        );
    }

    #[test]
    fn cell_to_number_covers_variants() {
        assert_eq!(
            cell_to_number(&RawCell::Bool(true)),
            Some(ParsedNumber::Int(1))
        );
        assert_eq!(cell_to_number(&RawCell::Missing), None);
        assert_eq!(
            cell_to_number(&RawCell::Text("2.5".into())),
            Some(ParsedNumber::Float(2.5))
        );
    }

    #[test]
    fn integral_conversion_bounds() {
        assert_eq!(integral_to_i64(2.0), Some(2));
        assert_eq!(integral_to_i64(-3.0), Some(-3));
        assert_eq!(integral_to_i64(2.5), None);
        assert_eq!(integral_to_i64(f64::INFINITY), None);
        assert_eq!(integral_to_i64(1e19), None);
    }

    #[test]
    fn narrow_int_width_picks_smallest() {
        assert_eq!(
            narrow_int_width(&[Some(1), Some(100), None], IntWidth::I64),
            IntWidth::I8
        );
        assert_eq!(
            narrow_int_width(&[Some(1), Some(40_000)], IntWidth::I64),
            IntWidth::I32
        );
        assert_eq!(narrow_int_width(&[None, None], IntWidth::I64), IntWidth::I64);
    }

    #[test]
    fn narrow_float_width_requires_lossless_round_trip() {
        assert_eq!(
            narrow_float_width(&[Some(1.5), Some(-2.25)], FloatWidth::F64),
            FloatWidth::F32
        );
        // 0.1 is not exactly representable in f32.
        assert_eq!(
            narrow_float_width(&[Some(0.1)], FloatWidth::F64),
            FloatWidth::F64
        );
        assert_eq!(
            narrow_float_width(&[None], FloatWidth::F64),
            FloatWidth::F64
        );
    }
}
