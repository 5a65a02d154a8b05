//! Unit representation with its conversion factor

use std::fmt;
use serde::{Serialize, Deserialize};

/// A named measurement unit belonging to exactly one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Identifier, unique within its category (e.g. "meter")
    pub key: String,
    /// Human-readable label (e.g. "Meter")
    pub name: String,
    /// Display abbreviation; not unique, several units may share one
    pub symbol: String,
    /// How many reference units one of this unit equals.
    /// Only meaningful in linear categories.
    pub factor: f64,
}

impl Unit {
    pub fn new(key: &str, name: &str, factor: f64, symbol: &str) -> Self {
        Unit {
            key: key.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            factor,
        }
    }

    /// Check if this is the reference unit of a linear category
    pub fn is_reference(&self) -> bool {
        self.factor == 1.0
    }

    /// Express a magnitude of this unit in reference units
    pub fn to_reference(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Express a magnitude given in reference units in this unit
    pub fn from_reference(&self, value: f64) -> f64 {
        value / self.factor
    }

    /// Label used in unit pickers, e.g. "Kilometer (km)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
