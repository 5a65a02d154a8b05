//! Converto Units - Unit registry and conversion engine
//!
//! A static table of measurement categories, each holding units that
//! convert into one another. Most categories are linear (a factor per unit
//! relative to a reference unit); temperature converts through Celsius.
//!
//! Categories:
//! - Length, Weight, Temperature, Volume, Time, Energy
//! - Angle, Area, Data, Density, Force, Units (counting)
//! - Speed, Power, Pressure, Frequency, Sound Level, Illuminance

mod unit;
mod category;
mod registry;
mod units;
mod convert;
mod parse;
mod session;
pub mod temperature;

pub use unit::Unit;
pub use category::{Category, ConversionPolicy, PivotFn};
pub use registry::{UnitRegistry, ResolvedConversion, REGISTRY};
pub use convert::ConversionError;
pub use parse::{parse_query, ConversionQuery};
pub use session::{
    ConverterSession, ConversionHistory, ConversionResult, SessionSnapshot, DEFAULT_HISTORY_LIMIT,
};

/// All categories in declaration order
pub fn list_categories() -> &'static [Category] {
    REGISTRY.categories()
}

pub fn get_category(key: &str) -> Option<&'static Category> {
    REGISTRY.category(key)
}

pub fn get_unit(category: &str, unit: &str) -> Option<&'static Unit> {
    REGISTRY.unit(category, unit)
}

/// Convert `value` between two units of the category `category`
pub fn convert(value: f64, from: &str, to: &str, category: &str) -> Result<f64, ConversionError> {
    REGISTRY.convert(value, from, to, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_categories() {
        let keys: Vec<&str> = list_categories().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys.len(), 18);
        assert_eq!(keys[0], "length");
        assert_eq!(keys[2], "temperature");
        assert_eq!(keys[17], "illuminance");
    }

    #[test]
    fn test_get_category_and_unit() {
        assert_eq!(get_category("sound").map(|c| c.display_name.as_str()), Some("Sound Level"));
        assert!(get_category("not-a-real-category").is_none());
        assert_eq!(get_unit("time", "hour").map(|u| u.factor), Some(3600.0));
        assert!(get_unit("time", "parsec").is_none());
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitRegistry>();

        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || convert(i as f64, "kilometer", "meter", "length")))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(i as f64 * 1000.0));
        }
    }
}
