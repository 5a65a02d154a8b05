//! Temperature scales
//!
//! Temperature is the one category that cannot use factor ratios. Every
//! scale has an affine formula to and from Celsius, and any other pair is
//! converted with exactly one hop through Celsius.

use crate::ConversionPolicy;

/// Unit key of the pivot scale
pub const PIVOT: &str = "celsius";

/// The eight supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Romer,
    Newton,
    Delisle,
    Reaumur,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 8] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
        TemperatureScale::Rankine,
        TemperatureScale::Romer,
        TemperatureScale::Newton,
        TemperatureScale::Delisle,
        TemperatureScale::Reaumur,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.key() == key)
    }

    /// Registry unit key
    pub fn key(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
            TemperatureScale::Rankine => "rankine",
            TemperatureScale::Romer => "romer",
            TemperatureScale::Newton => "newton",
            TemperatureScale::Delisle => "delisle",
            TemperatureScale::Reaumur => "reaumur",
        }
    }

    /// Value on this scale → degrees Celsius
    pub fn to_celsius(&self, v: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => v,
            TemperatureScale::Fahrenheit => (v - 32.0) / 1.8,
            TemperatureScale::Kelvin => v - 273.15,
            TemperatureScale::Rankine => v / 1.8 - 273.15,
            TemperatureScale::Romer => (v - 7.5) / 0.525,
            TemperatureScale::Newton => v / 0.33,
            TemperatureScale::Delisle => 100.0 - v / 1.5,
            TemperatureScale::Reaumur => v / 0.8,
        }
    }

    /// Degrees Celsius → value on this scale
    pub fn from_celsius(&self, c: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => c,
            TemperatureScale::Fahrenheit => c * 1.8 + 32.0,
            TemperatureScale::Kelvin => c + 273.15,
            TemperatureScale::Rankine => (c + 273.15) * 1.8,
            TemperatureScale::Romer => c * 0.525 + 7.5,
            TemperatureScale::Newton => c * 0.33,
            TemperatureScale::Delisle => (100.0 - c) * 1.5,
            TemperatureScale::Reaumur => c * 0.8,
        }
    }
}

/// `to_pivot` hook: `None` for keys that are not temperature scales
pub fn to_celsius(unit: &str, value: f64) -> Option<f64> {
    TemperatureScale::from_key(unit).map(|scale| scale.to_celsius(value))
}

/// `from_pivot` hook
pub fn from_celsius(unit: &str, value: f64) -> Option<f64> {
    TemperatureScale::from_key(unit).map(|scale| scale.from_celsius(value))
}

/// Policy attached to the temperature category
pub fn policy() -> ConversionPolicy {
    ConversionPolicy::AffinePivot {
        pivot: PIVOT,
        to_pivot: to_celsius,
        from_pivot: from_celsius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_key_roundtrips_every_scale() {
        for scale in TemperatureScale::ALL {
            assert_eq!(TemperatureScale::from_key(scale.key()), Some(scale));
        }
        assert_eq!(TemperatureScale::from_key("gas_mark"), None);
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(TemperatureScale::Fahrenheit.from_celsius(0.0), 32.0);
        assert_eq!(TemperatureScale::Fahrenheit.from_celsius(100.0), 212.0);
        assert_eq!(TemperatureScale::Kelvin.from_celsius(0.0), 273.15);
        assert_eq!(TemperatureScale::Fahrenheit.to_celsius(32.0), 0.0);
        assert_eq!(TemperatureScale::Delisle.from_celsius(100.0), 0.0);
        assert_eq!(TemperatureScale::Romer.from_celsius(0.0), 7.5);
    }

    #[test]
    fn test_formulas_invert_each_other() {
        for scale in TemperatureScale::ALL {
            for c in [-273.15, -40.0, 0.0, 36.6, 100.0, 1000.0] {
                let back = scale.to_celsius(scale.from_celsius(c));
                assert_relative_eq!(back, c, epsilon = 1e-9, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_minus_forty_meets() {
        assert_relative_eq!(TemperatureScale::Fahrenheit.to_celsius(-40.0), -40.0);
    }

    #[test]
    fn test_hooks_reject_unknown_units() {
        assert_eq!(to_celsius("kelvin", 0.0), Some(-273.15));
        assert_eq!(from_celsius("reaumur", 100.0), Some(80.0));
        assert_eq!(to_celsius("meter", 1.0), None);
    }
}
