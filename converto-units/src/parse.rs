//! Conversion query parsing - text like "5 km to mile" or "temperature: 98.6 fahrenheit -> celsius"

use serde::Serialize;
use converto_core::parse_number;
use crate::ConversionError;

/// Words and arrows accepted between the source and target unit
const SEPARATORS: [&str; 2] = ["to", "in"];
const ARROWS: [&str; 2] = ["->", "→"];

/// A parsed, not yet resolved, conversion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionQuery {
    /// Explicit category prefix, if any
    pub category: Option<String>,
    /// The magnitude as typed
    pub input: String,
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// Parse a conversion query.
///
/// Supported formats:
/// - "5 kilometer to mile", "5 kilometer in mile"
/// - "5 kilometer -> mile", "5kilometer→mile"
/// - "length: 5 kilometer to mile"
///
/// Category and unit keys are matched case-insensitively.
pub fn parse_query(text: &str) -> Result<ConversionQuery, ConversionError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(invalid(text, "empty query"));
    }

    let (category, rest) = split_category(s);

    let mut normalized = rest.to_string();
    for arrow in ARROWS {
        normalized = normalized.replace(arrow, " to ");
    }
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let sep = match tokens.iter().position(|t| SEPARATORS.contains(&t.to_lowercase().as_str())) {
        Some(pos) if pos > 0 => pos,
        _ => return Err(invalid(text, "expected '<value> <from> to <to>'")),
    };

    let (left, right) = (&tokens[..sep], &tokens[sep + 1..]);
    let to = match right {
        [to] => to.to_lowercase(),
        _ => return Err(invalid(text, "expected exactly one target unit")),
    };

    let (input, from) = match left {
        [quantity] => split_quantity(quantity)
            .ok_or_else(|| invalid(text, "no number found"))?,
        [value, from] => (value.to_string(), from.to_string()),
        _ => return Err(invalid(text, "expected '<value> <from>' before the separator")),
    };

    let value = parse_number(&input)
        .map_err(|e| invalid(text, &e.to_string()))?;

    Ok(ConversionQuery {
        category,
        input,
        value,
        from: from.to_lowercase(),
        to,
    })
}

/// Split off a "category:" prefix
fn split_category(s: &str) -> (Option<String>, &str) {
    if let Some((prefix, rest)) = s.split_once(':') {
        let prefix = prefix.trim();
        if !prefix.is_empty() && prefix.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return (Some(prefix.to_lowercase()), rest.trim());
        }
    }
    (None, s)
}

/// Split a token like "5km" or "1e3meter" into number and unit.
/// The longest numeric prefix wins.
fn split_quantity(token: &str) -> Option<(String, String)> {
    let boundaries: Vec<usize> = token.char_indices().map(|(i, _)| i).skip(1).collect();
    for &i in boundaries.iter().rev() {
        let (number, unit) = token.split_at(i);
        if unit.starts_with(|c: char| c.is_alphabetic()) && parse_number(number).is_ok() {
            return Some((number.to_string(), unit.to_string()));
        }
    }
    None
}

fn invalid(text: &str, reason: &str) -> ConversionError {
    ConversionError::InvalidQuery(format!("{} ({})", text.trim(), reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_query() {
        let q = parse_query("5 kilometer to mile").unwrap();
        assert_eq!(q.category, None);
        assert_eq!(q.input, "5");
        assert_eq!(q.value, 5.0);
        assert_eq!(q.from, "kilometer");
        assert_eq!(q.to, "mile");
    }

    #[test]
    fn test_parse_separators() {
        for text in ["2 foot in inch", "2 foot -> inch", "2 foot→inch", "2 foot->inch", "2 FOOT TO INCH"] {
            let q = parse_query(text).unwrap();
            assert_eq!((q.value, q.from.as_str(), q.to.as_str()), (2.0, "foot", "inch"), "{}", text);
        }
    }

    #[test]
    fn test_parse_category_prefix() {
        let q = parse_query("Temperature: -40 fahrenheit to celsius").unwrap();
        assert_eq!(q.category.as_deref(), Some("temperature"));
        assert_eq!(q.value, -40.0);
    }

    #[test]
    fn test_parse_attached_number() {
        let q = parse_query("1e3meter to kilometer").unwrap();
        assert_eq!(q.input, "1e3");
        assert_eq!(q.from, "meter");

        let q = parse_query("2exabyte to byte").unwrap();
        assert_eq!(q.input, "2");
        assert_eq!(q.from, "exabyte");
    }

    #[test]
    fn test_parse_invalid_queries() {
        for text in ["", "   ", "5 meter", "to meter", "meter to foot", "5 meter to", "5 meter to foot inch", "x meter to foot", "inf meter to foot"] {
            assert!(
                matches!(parse_query(text), Err(ConversionError::InvalidQuery(_))),
                "{:?} should be rejected", text
            );
        }
    }
}
