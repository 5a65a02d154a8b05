//! The unit registry - every category, in declaration order

use std::collections::HashMap;
use std::sync::LazyLock;
use serde::Serialize;
use converto_core::format_result;
use crate::{Category, ConversionError, ConversionQuery, Unit};
use crate::parse::parse_query;

/// Global registry, built on first use and never mutated afterwards
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known categories
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

/// A query resolved against the registry and converted
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConversion<'r> {
    pub category: &'r Category,
    pub from: &'r Unit,
    pub to: &'r Unit,
    pub input: String,
    pub value: f64,
    pub result: f64,
}

impl ResolvedConversion<'_> {
    /// Result rendered for display (10 digits, trailing zeros stripped)
    pub fn display(&self) -> String {
        format_result(self.result)
    }
}

impl UnitRegistry {
    /// Registry holding the full unit table
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_all_categories();
        registry
    }

    /// Registry with no categories
    pub fn empty() -> Self {
        UnitRegistry {
            categories: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a category; declaration order is preserved
    pub fn register(&mut self, category: Category) {
        debug_assert!(
            !self.index.contains_key(&category.key),
            "duplicate category '{}'", category.key
        );
        self.index.insert(category.key.clone(), self.categories.len());
        self.categories.push(category);
    }

    /// All categories, in declaration order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.index.get(key).map(|&i| &self.categories[i])
    }

    pub fn unit(&self, category: &str, unit: &str) -> Option<&Unit> {
        self.category(category)?.unit(unit)
    }

    /// First two declared units of a category
    pub fn default_pair(&self, category: &str) -> Option<(&Unit, &Unit)> {
        self.category(category)?.default_pair()
    }

    /// Categories declaring a unit with this key
    pub fn categories_with_unit(&self, unit: &str) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.contains(unit)).collect()
    }

    /// Convert within a category looked up by key
    pub fn convert(&self, value: f64, from: &str, to: &str, category: &str) -> Result<f64, ConversionError> {
        self.category(category)
            .ok_or_else(|| ConversionError::CategoryNotFound(category.to_string()))?
            .convert(value, from, to)
    }

    /// Pick the category a query converts in.
    ///
    /// An explicit category wins. Otherwise the one category declaring both
    /// unit keys is used.
    pub fn resolve_query(&self, query: &ConversionQuery) -> Result<&Category, ConversionError> {
        if let Some(key) = &query.category {
            return self.category(key)
                .ok_or_else(|| ConversionError::CategoryNotFound(key.clone()));
        }

        let candidates: Vec<&Category> = self.categories.iter()
            .filter(|c| c.contains(&query.from) && c.contains(&query.to))
            .collect();

        match candidates.as_slice() {
            [category] => Ok(*category),
            [] => Err(self.explain_missing(&query.from, &query.to)),
            _ => Err(ConversionError::AmbiguousUnits {
                from: query.from.clone(),
                to: query.to.clone(),
                candidates: candidates.iter().map(|c| c.key.clone()).collect(),
            }),
        }
    }

    /// Parse, resolve and convert a textual query
    pub fn run_query(&self, text: &str) -> Result<ResolvedConversion<'_>, ConversionError> {
        let query = parse_query(text)?;
        let category = self.resolve_query(&query)?;
        let result = category.convert(query.value, &query.from, &query.to)?;

        let lookup = |key: &str| category.unit(key).ok_or_else(|| ConversionError::UnitNotFound {
            category: category.key.clone(),
            unit: key.to_string(),
        });

        Ok(ResolvedConversion {
            category,
            from: lookup(&query.from)?,
            to: lookup(&query.to)?,
            input: query.input,
            value: query.value,
            result,
        })
    }

    /// Name the unit that keeps a query from resolving.
    /// "*" stands for "any category".
    fn explain_missing(&self, from: &str, to: &str) -> ConversionError {
        let missing = |category: &str, unit: &str| ConversionError::UnitNotFound {
            category: category.to_string(),
            unit: unit.to_string(),
        };

        match self.categories_with_unit(from).first() {
            None => missing("*", from),
            Some(_) if self.categories_with_unit(to).is_empty() => missing("*", to),
            Some(category) => missing(&category.key, to),
        }
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lookup() {
        let registry = UnitRegistry::new();
        assert_eq!(registry.category("length").map(|c| c.display_name.as_str()), Some("Length"));
        assert!(registry.category("Length").is_none());
        assert_eq!(registry.unit("data", "gigabyte").map(|u| u.symbol.as_str()), Some("GB"));
        assert!(registry.unit("data", "meter").is_none());
        assert!(registry.unit("nope", "meter").is_none());
    }

    #[test]
    fn test_default_pair_area() {
        let (from, to) = REGISTRY.default_pair("area").unwrap();
        assert_eq!(from.key, "square_meter");
        assert_eq!(to.key, "square_kilometer");
        assert!(REGISTRY.default_pair("not-a-real-category").is_none());
    }

    #[test]
    fn test_categories_with_unit() {
        let keys: Vec<&str> = REGISTRY.categories_with_unit("newton").iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["temperature", "force"]);
        assert!(REGISTRY.categories_with_unit("smoot").is_empty());

        let keys: Vec<&str> = REGISTRY.categories_with_unit("furlong").iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["length"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = UnitRegistry::empty();
        assert!(registry.categories().is_empty());
        assert_eq!(
            registry.convert(1.0, "meter", "kilometer", "length"),
            Err(ConversionError::CategoryNotFound("length".to_string()))
        );
    }

    #[test]
    fn test_run_query_infers_category() {
        let resolved = REGISTRY.run_query("5 kilometer to meter").unwrap();
        assert_eq!(resolved.category.key, "length");
        assert_eq!(resolved.from.symbol, "km");
        assert_eq!(resolved.result, 5000.0);
        assert_eq!(resolved.display(), "5000");
    }

    #[test]
    fn test_run_query_explicit_category() {
        let resolved = REGISTRY.run_query("temperature: 212 fahrenheit -> celsius").unwrap();
        assert_relative_eq!(resolved.result, 100.0, max_relative = 1e-12);

        let err = REGISTRY.run_query("cooking: 1 cup to liter").unwrap_err();
        assert_eq!(err, ConversionError::CategoryNotFound("cooking".to_string()));

        let err = REGISTRY.run_query("length: 1 gram to meter").unwrap_err();
        assert!(matches!(err, ConversionError::UnitNotFound { ref unit, .. } if unit == "gram"));
    }

    #[test]
    fn test_run_query_ambiguous() {
        let err = REGISTRY.run_query("5 newton to newton").unwrap_err();
        assert_eq!(err, ConversionError::AmbiguousUnits {
            from: "newton".to_string(),
            to: "newton".to_string(),
            candidates: vec!["temperature".to_string(), "force".to_string()],
        });

        let resolved = REGISTRY.run_query("force: 5 newton to newton").unwrap();
        assert_eq!(resolved.result, 5.0);
    }

    #[test]
    fn test_run_query_unresolvable() {
        let err = REGISTRY.run_query("1 smoot to meter").unwrap_err();
        assert_eq!(err, ConversionError::UnitNotFound { category: "*".to_string(), unit: "smoot".to_string() });

        let err = REGISTRY.run_query("1 meter to smoot").unwrap_err();
        assert_eq!(err, ConversionError::UnitNotFound { category: "*".to_string(), unit: "smoot".to_string() });

        let err = REGISTRY.run_query("1 meter to gram").unwrap_err();
        assert_eq!(err, ConversionError::UnitNotFound { category: "length".to_string(), unit: "gram".to_string() });
    }
}
