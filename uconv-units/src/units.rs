//! Unit catalog - recognised spellings for every unit

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::trace;
use crate::{Unit, Dimension};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Resolve free text to a unit.
///
/// The text is trimmed and lowercased, then looked up exactly. Anything that
/// is not a recognised spelling resolves to `Unit::Unknown`.
pub fn resolve(text: &str) -> Unit {
    let key = text.trim().to_lowercase();
    let unit = UNITS.get(&key).unwrap_or(Unit::Unknown);
    trace!(text = %key, ?unit, "resolved unit");
    unit
}

/// Registry of all recognised unit spellings
pub struct UnitRegistry {
    tokens: HashMap<&'static str, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            tokens: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by an exact (already lowercased) spelling
    pub fn get(&self, token: &str) -> Option<Unit> {
        self.tokens.get(token).copied()
    }

    /// Get all units of a dimension
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<Unit> {
        Unit::ALL
            .into_iter()
            .filter(|u| u.dimension() == dimension)
            .collect()
    }

    /// All recognised spellings, sorted
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<_> = self.tokens.keys().copied().collect();
        tokens.sort_unstable();
        tokens
    }

    fn alias(&mut self, unit: Unit, spellings: &[&'static str]) {
        for spelling in spellings {
            self.tokens.insert(*spelling, unit);
        }
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        self.alias(Unit::Meter, &["m", "meter", "meters"]);
        self.alias(Unit::Kilometer, &["km", "kilometer", "kilometers"]);
        self.alias(Unit::Centimeter, &["cm", "centimeter", "centimeters"]);
        self.alias(Unit::Millimeter, &["mm", "millimeter", "millimeters"]);
        self.alias(Unit::Mile, &["mi", "mile", "miles"]);
        self.alias(Unit::Yard, &["yd", "yard", "yards"]);
        self.alias(Unit::Foot, &["ft", "foot", "feet"]);
        self.alias(Unit::Inch, &["in", "inch", "inches"]);
    }

    fn register_weight_units(&mut self) {
        self.alias(Unit::Gram, &["g", "gram", "grams"]);
        self.alias(Unit::Kilogram, &["kg", "kilogram", "kilograms"]);
        self.alias(Unit::Milligram, &["mg", "milligram", "milligrams"]);
        self.alias(Unit::Pound, &["lb", "pound", "pounds"]);
        self.alias(Unit::Ounce, &["oz", "ounce", "ounces"]);
    }

    fn register_temperature_units(&mut self) {
        self.alias(
            Unit::Celsius,
            &["degree celsius", "degrees celsius", "celsius", "dc", "c"],
        );
        self.alias(
            Unit::Fahrenheit,
            &["degree fahrenheit", "degrees fahrenheit", "fahrenheit", "df", "f"],
        );
        self.alias(Unit::Kelvin, &["kelvin", "kelvins", "k"]);
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

    #[test]
    fn test_resolve_abbreviation_and_names() {
        assert_eq!(resolve("mi"), Unit::Mile);
        assert_eq!(resolve("mile"), Unit::Mile);
        assert_eq!(resolve("miles"), Unit::Mile);
        assert_eq!(resolve("feet"), Unit::Foot);
        assert_eq!(resolve("lb"), Unit::Pound);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("KM"), Unit::Kilometer);
        assert_eq!(resolve("Degrees Celsius"), Unit::Celsius);
        assert_eq!(resolve("  Kelvin "), Unit::Kelvin);
    }

    #[test]
    fn test_resolve_multi_word() {
        assert_eq!(resolve("degree fahrenheit"), Unit::Fahrenheit);
        assert_eq!(resolve("degrees celsius"), Unit::Celsius);
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve("xyz"), Unit::Unknown);
        assert_eq!(resolve(""), Unit::Unknown);
        // Exact match only, no prefixes
        assert_eq!(resolve("kilomet"), Unit::Unknown);
        assert_eq!(resolve("degree"), Unit::Unknown);
    }

    #[test]
    fn test_every_unit_is_reachable() {
        for unit in Unit::ALL {
            assert_eq!(resolve(unit.singular()), unit);
            assert_eq!(resolve(unit.plural()), unit);
        }
    }

    #[test]
    fn test_by_dimension() {
        assert_eq!(UNITS.by_dimension(Dimension::Length).len(), 8);
        assert_eq!(UNITS.by_dimension(Dimension::Weight).len(), 5);
        assert_eq!(
            UNITS.by_dimension(Dimension::Temperature),
            vec![Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin]
        );
        assert!(UNITS.by_dimension(Dimension::Unknown).is_empty());
    }

    #[test]
    fn test_tokens() {
        let tokens = UNITS.tokens();
        assert_eq!(tokens.len(), 52);
        assert!(!tokens.contains(&"to"));
        assert!(tokens.windows(2).all(|w| w[0] <= w[1]));
    }
}
