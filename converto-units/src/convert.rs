//! Conversion between units of one category

use thiserror::Error;
use converto_core::ConvertoError;
use crate::{Category, ConversionPolicy, Unit};

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unknown category: {0}")]
    CategoryNotFound(String),

    #[error("unknown unit '{unit}' in category '{category}'")]
    UnitNotFound { category: String, unit: String },

    #[error("not a finite number: {0}")]
    InvalidMagnitude(String),

    #[error("units '{from}' and '{to}' exist in several categories: {}", .candidates.join(", "))]
    AmbiguousUnits { from: String, to: String, candidates: Vec<String> },

    #[error("invalid conversion query: {0}")]
    InvalidQuery(String),
}

impl From<ConversionError> for ConvertoError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::CategoryNotFound(category) => ConvertoError::category_not_found(&category),
            ConversionError::UnitNotFound { category, unit } => ConvertoError::unit_not_found(&category, &unit),
            ConversionError::InvalidMagnitude(input) => ConvertoError::invalid_magnitude(&input),
            ConversionError::AmbiguousUnits { from, to, candidates } => {
                ConvertoError::ambiguous_units(&from, &to, &candidates)
            }
            ConversionError::InvalidQuery(details) => ConvertoError::parse_error(details),
        }
    }
}

impl Category {
    /// Convert `value` from one unit of this category to another.
    ///
    /// Unit keys are resolved before the magnitude is checked, so an unknown
    /// key is reported even when the value is unusable too.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let from_unit = self.lookup(from)?;
        let to_unit = self.lookup(to)?;

        if !value.is_finite() {
            return Err(ConversionError::InvalidMagnitude(value.to_string()));
        }

        if from_unit.key == to_unit.key {
            return Ok(value);
        }

        match self.policy {
            ConversionPolicy::Linear => Ok(to_unit.from_reference(from_unit.to_reference(value))),
            ConversionPolicy::AffinePivot { pivot, to_pivot, from_pivot } => {
                if from_unit.key == pivot {
                    from_pivot(&to_unit.key, value).ok_or_else(|| self.not_found(to))
                } else if to_unit.key == pivot {
                    to_pivot(&from_unit.key, value).ok_or_else(|| self.not_found(from))
                } else {
                    let at_pivot = to_pivot(&from_unit.key, value).ok_or_else(|| self.not_found(from))?;
                    from_pivot(&to_unit.key, at_pivot).ok_or_else(|| self.not_found(to))
                }
            }
        }
    }

    fn lookup(&self, key: &str) -> Result<&Unit, ConversionError> {
        self.unit(key).ok_or_else(|| self.not_found(key))
    }

    fn not_found(&self, unit: &str) -> ConversionError {
        ConversionError::UnitNotFound {
            category: self.key.clone(),
            unit: unit.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use converto_core::{codes, Severity};
    use crate::{convert, temperature, REGISTRY};

    const SAMPLES: [f64; 7] = [0.0, 1.0, -1.0, 0.1, 42.5, 1e-9, 123456.789];

    #[test]
    fn test_identity_every_unit() {
        for category in REGISTRY.categories() {
            for unit in category.units() {
                for &x in &SAMPLES {
                    let y = category.convert(x, &unit.key, &unit.key).unwrap();
                    assert_eq!(y.to_bits(), x.to_bits(), "{}/{} at {}", category.key, unit.key, x);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_linear() {
        for category in REGISTRY.categories().iter().filter(|c| c.policy.is_linear()) {
            for a in category.units() {
                for b in category.units() {
                    let there = category.convert(42.5, &a.key, &b.key).unwrap();
                    let back = category.convert(there, &b.key, &a.key).unwrap();
                    assert_relative_eq!(back, 42.5, max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_temperature() {
        let temp = REGISTRY.category("temperature").unwrap();
        for a in temp.units() {
            for b in temp.units() {
                let there = temp.convert(36.6, &a.key, &b.key).unwrap();
                let back = temp.convert(there, &b.key, &a.key).unwrap();
                assert_relative_eq!(back, 36.6, epsilon = 1e-9, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_reference_unit_property() {
        for category in REGISTRY.categories().iter().filter(|c| c.policy.is_linear()) {
            let reference = category.reference_unit().unwrap();
            for unit in category.units() {
                let from_ref = category.convert(10.0, &reference.key, &unit.key).unwrap();
                assert_relative_eq!(from_ref, 10.0 / unit.factor, max_relative = 1e-15);
                let to_ref = category.convert(10.0, &unit.key, &reference.key).unwrap();
                assert_relative_eq!(to_ref, 10.0 * unit.factor, max_relative = 1e-15);
            }
        }
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(convert(0.0, "celsius", "fahrenheit", "temperature"), Ok(32.0));
        assert_eq!(convert(100.0, "celsius", "fahrenheit", "temperature"), Ok(212.0));
        assert_eq!(convert(0.0, "celsius", "kelvin", "temperature"), Ok(273.15));
        assert_eq!(convert(32.0, "fahrenheit", "celsius", "temperature"), Ok(0.0));
    }

    #[test]
    fn test_pivot_composition() {
        for x in [-40.0, 0.0, 98.6, 212.0] {
            let direct = convert(x, "fahrenheit", "kelvin", "temperature").unwrap();
            let c = convert(x, "fahrenheit", "celsius", "temperature").unwrap();
            let composed = convert(c, "celsius", "kelvin", "temperature").unwrap();
            assert_eq!(direct, composed);
        }
    }

    #[test]
    fn test_pivot_endpoint_uses_direct_formula() {
        let to_delisle = convert(20.0, "celsius", "delisle", "temperature").unwrap();
        assert_eq!(to_delisle, temperature::TemperatureScale::Delisle.from_celsius(20.0));
        let from_newton = convert(33.0, "newton", "celsius", "temperature").unwrap();
        assert_relative_eq!(from_newton, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_length_scenarios() {
        assert_eq!(convert(1.0, "kilometer", "meter", "length"), Ok(1000.0));
        assert_relative_eq!(convert(1.0, "mile", "meter", "length").unwrap(), 1609.344, max_relative = 1e-12);
        assert_relative_eq!(convert(12.0, "inch", "foot", "length").unwrap(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_data_gigabyte() {
        assert_eq!(convert(1.0, "gigabyte", "byte", "data"), Ok(1073741824.0));
    }

    #[test]
    fn test_unknown_category() {
        assert!(REGISTRY.category("not-a-real-category").is_none());
        assert_eq!(
            convert(1.0, "meter", "meter", "not-a-real-category"),
            Err(ConversionError::CategoryNotFound("not-a-real-category".to_string()))
        );
    }

    #[test]
    fn test_unknown_unit_is_reported_before_magnitude() {
        let err = convert(f64::NAN, "meter", "smoot", "length").unwrap_err();
        assert_eq!(err, ConversionError::UnitNotFound {
            category: "length".to_string(),
            unit: "smoot".to_string(),
        });

        // celsius is a temperature unit, not a length
        let err = convert(1.0, "celsius", "meter", "length").unwrap_err();
        assert!(matches!(err, ConversionError::UnitNotFound { ref unit, .. } if unit == "celsius"));
    }

    #[test]
    fn test_non_finite_magnitude() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert(bad, "meter", "kilometer", "length").unwrap_err();
            assert!(matches!(err, ConversionError::InvalidMagnitude(_)));
            let err = convert(bad, "celsius", "celsius", "temperature").unwrap_err();
            assert!(matches!(err, ConversionError::InvalidMagnitude(_)));
        }
    }

    #[test]
    fn test_into_structured_error() {
        let err: ConvertoError = ConversionError::CategoryNotFound("x".to_string()).into();
        assert_eq!(err.code, codes::CATEGORY_NOT_FOUND);

        let err: ConvertoError = ConversionError::InvalidMagnitude("NaN".to_string()).into();
        assert_eq!(err.code, codes::INVALID_MAGNITUDE);
        assert_eq!(err.severity, Severity::Warning);

        let err: ConvertoError = ConversionError::AmbiguousUnits {
            from: "a".to_string(),
            to: "b".to_string(),
            candidates: vec!["one".to_string(), "two".to_string()],
        }.into();
        assert_eq!(err.code, codes::AMBIGUOUS_UNITS);
        assert_eq!(err.details, Some(serde_json::json!(["one", "two"])));

        let err: ConvertoError = ConversionError::InvalidQuery("?".to_string()).into();
        assert_eq!(err.code, codes::PARSE_ERROR);
    }

    #[test]
    fn test_error_display() {
        let err = ConversionError::UnitNotFound { category: "length".to_string(), unit: "x".to_string() };
        assert_eq!(err.to_string(), "unknown unit 'x' in category 'length'");
    }
}
