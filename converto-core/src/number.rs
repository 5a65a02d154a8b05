//! Magnitude parsing and display rendering
//!
//! Converted values keep full `f64` precision. Rounding only ever happens
//! here, when a value is turned into text for display.

use thiserror::Error;

/// Fractional digits shown for a conversion result
pub const RESULT_DIGITS: usize = 10;

/// Fractional digits shown in a history entry
pub const HISTORY_DIGITS: usize = 2;

/// Largest digit count accepted by `to_fixed`
const MAX_FIXED_DIGITS: usize = 100;

/// Enough fractional digits to print any finite f64 exactly (2^-1074)
const EXACT_DIGITS: usize = 1074;

/// Magnitudes from here on are rendered in exponent form
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Errors from turning text into a magnitude
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Empty input")]
    Empty,

    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Not a finite number: {0}")]
    NonFinite(String),
}

/// Parse user text into a finite magnitude.
///
/// Surrounding whitespace is ignored. Accepts an optional sign, decimal
/// digits with an optional fraction and exponent (`"1e3"`, `".5"`, `"5."`).
/// NaN and infinity, whether spelled out or reached by overflow, are
/// rejected.
pub fn parse_number(text: &str) -> Result<f64, NumberError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(NumberError::Empty);
    }

    // f64::from_str also takes "inf"/"nan" spellings; they end up non-finite below
    let value: f64 = s.parse()
        .map_err(|_| NumberError::ParseError(s.to_string()))?;

    if !value.is_finite() {
        return Err(NumberError::NonFinite(s.to_string()));
    }
    Ok(value)
}

/// Parse user text, treating anything unusable as "no value yet"
pub fn parse_magnitude(text: &str) -> Option<f64> {
    parse_number(text).ok()
}

/// Render `value` with exactly `digits` fractional digits.
///
/// Matches JavaScript's `Number.prototype.toFixed`: the exact binary value
/// is rounded with ties going away from zero, negative values keep their
/// sign even when they round to zero, and magnitudes of 1e21 or more come
/// out in exponent form.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= EXPONENT_THRESHOLD {
        return exponent_form(value);
    }

    let digits = digits.min(MAX_FIXED_DIGITS);
    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut buf: Vec<u8> = int_part.bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5') {
        increment_decimal(&mut buf);
    }

    let split = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 2);
    out.push_str(sign);
    out.extend(buf[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(buf[split..].iter().map(|&b| b as char));
    }
    out
}

/// Add one unit in the last place of an ASCII digit string
fn increment_decimal(buf: &mut Vec<u8>) {
    for digit in buf.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    buf.insert(0, b'1');
}

/// Shortest round-trip digits with an explicit exponent sign ("1.5e+30")
fn exponent_form(value: f64) -> String {
    let s = format!("{:e}", value);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

/// Render a conversion result for display.
///
/// Up to `RESULT_DIGITS` fractional digits, then trailing zeros and a bare
/// trailing point are dropped: `1000.0000000000` shows as `1000`.
pub fn format_result(value: f64) -> String {
    let fixed = to_fixed(value, RESULT_DIGITS);
    if fixed.contains('e') || !fixed.contains('.') {
        return fixed;
    }

    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// One line of conversion history: `"<input> <from> = <value> <to>"`
pub fn format_history_entry(input: &str, from_symbol: &str, value: f64, to_symbol: &str) -> String {
    format!("{} {} = {} {}", input, from_symbol, to_fixed(value, HISTORY_DIGITS), to_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("42"), Ok(42.0));
        assert_eq!(parse_number("  -3.5 "), Ok(-3.5));
        assert_eq!(parse_number("1e3"), Ok(1000.0));
        assert_eq!(parse_number(".5"), Ok(0.5));
        assert_eq!(parse_number("5."), Ok(5.0));
        assert_eq!(parse_number("+7"), Ok(7.0));
    }

    #[test]
    fn test_parse_rejects_blank_and_garbage() {
        assert_eq!(parse_number(""), Err(NumberError::Empty));
        assert_eq!(parse_number("   "), Err(NumberError::Empty));
        assert!(matches!(parse_number("12abc"), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_number("-"), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_number("1,5"), Err(NumberError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(parse_number("NaN"), Err(NumberError::NonFinite(_))));
        assert!(matches!(parse_number("inf"), Err(NumberError::NonFinite(_))));
        assert!(matches!(parse_number("-Infinity"), Err(NumberError::NonFinite(_))));
        assert!(matches!(parse_number("1e400"), Err(NumberError::NonFinite(_))));
        assert_eq!(parse_magnitude("1e400"), None);
    }

    #[test]
    fn test_to_fixed_pads_and_rounds() {
        assert_eq!(to_fixed(1000.0, 10), "1000.0000000000");
        assert_eq!(to_fixed(1.5, 2), "1.50");
        assert_eq!(to_fixed(2.0 / 3.0, 4), "0.6667");
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_ties_round_away_from_zero() {
        // Exactly representable ties
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(1.0 / 2048.0, 10), "0.0004882813");
        // 1.005 is really 1.00499999..., so no tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_to_fixed_sign_and_special_values() {
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(-1.5e30, 2), "-1.5e+30");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn test_format_result_strips_trailing_zeros() {
        assert_eq!(format_result(1000.0), "1000");
        assert_eq!(format_result(32.0), "32");
        assert_eq!(format_result(273.15), "273.15");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_result(1e-12), "0");
        assert_eq!(format_result(-1e-12), "0");
        assert_eq!(format_result(-40.0), "-40");
    }

    #[test]
    fn test_format_result_keeps_exponent_form() {
        assert_eq!(format_result(1e30), "1e+30");
        assert_eq!(format_result(1208925819614629174706176.0), "1.2089258196146292e+24");
    }

    #[test]
    fn test_format_history_entry() {
        assert_eq!(format_history_entry("100", "°C", 212.0, "°F"), "100 °C = 212.00 °F");
        assert_eq!(format_history_entry("1", "bit", 0.125, "B"), "1 bit = 0.13 B");
    }
}
