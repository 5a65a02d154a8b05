//! Categories of mutually convertible units and their conversion policy

use std::collections::HashMap;
use std::fmt;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use crate::Unit;

/// Maps a magnitude between a unit (by key) and the pivot unit.
/// Returns `None` when the key is outside the hook's domain.
pub type PivotFn = fn(unit: &str, value: f64) -> Option<f64>;

/// How values move between two units of the same category.
///
/// Chosen once, when the category is registered.
#[derive(Clone, Copy)]
pub enum ConversionPolicy {
    /// `value * factor(from) / factor(to)`
    Linear,
    /// Direct formula when one side is the pivot, otherwise one hop through it
    AffinePivot {
        pivot: &'static str,
        to_pivot: PivotFn,
        from_pivot: PivotFn,
    },
}

impl ConversionPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ConversionPolicy::Linear => "linear",
            ConversionPolicy::AffinePivot { .. } => "affine_pivot",
        }
    }

    /// Pivot unit key, for affine categories
    pub fn pivot(&self) -> Option<&'static str> {
        match self {
            ConversionPolicy::Linear => None,
            ConversionPolicy::AffinePivot { pivot, .. } => Some(*pivot),
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, ConversionPolicy::Linear)
    }
}

impl fmt::Debug for ConversionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionPolicy::Linear => write!(f, "Linear"),
            ConversionPolicy::AffinePivot { pivot, .. } => write!(f, "AffinePivot({})", pivot),
        }
    }
}

impl Serialize for ConversionPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ConversionPolicy", 2)?;
        state.serialize_field("kind", self.name())?;
        state.serialize_field("pivot", &self.pivot())?;
        state.end()
    }
}

/// A named group of units that convert into one another
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Identifier (e.g. "length")
    pub key: String,
    /// Human-readable label (e.g. "Length")
    pub display_name: String,
    pub policy: ConversionPolicy,
    /// Units in declaration order
    units: Vec<Unit>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Category {
    /// Category converted by factor ratios
    pub fn linear(key: &str, display_name: &str) -> Self {
        Self::with_policy(key, display_name, ConversionPolicy::Linear)
    }

    pub fn with_policy(key: &str, display_name: &str, policy: ConversionPolicy) -> Self {
        Category {
            key: key.to_string(),
            display_name: display_name.to_string(),
            policy,
            units: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a unit; declaration order is preserved
    pub fn add(&mut self, unit: Unit) {
        debug_assert!(
            !self.index.contains_key(&unit.key),
            "duplicate unit '{}' in category '{}'", unit.key, self.key
        );
        self.index.insert(unit.key.clone(), self.units.len());
        self.units.push(unit);
    }

    pub fn unit(&self, key: &str) -> Option<&Unit> {
        self.index.get(key).map(|&i| &self.units[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All units, in declaration order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit_keys(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|u| u.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Default from/to selection: the first two declared units.
    /// A single-unit category pairs the unit with itself.
    pub fn default_pair(&self) -> Option<(&Unit, &Unit)> {
        let first = self.units.first()?;
        let second = self.units.get(1).unwrap_or(first);
        Some((first, second))
    }

    /// The unit everything else is expressed against: factor 1 for linear
    /// categories, the pivot for affine ones.
    pub fn reference_unit(&self) -> Option<&Unit> {
        match self.policy.pivot() {
            Some(pivot) => self.unit(pivot),
            None => self.units.iter().find(|u| u.is_reference()),
        }
    }
}
