//! Conversion engine
//!
//! Length and weight go through their canonical unit (meter, gram).
//! Temperature is affine, so each ordered pair has its own formula.

use tracing::debug;
use crate::{Unit, Dimension};
use crate::unit::ConversionError;

/// Convert `value` from one unit to another.
///
/// Both units must share a dimension; that is the caller's job to check
/// (see [`try_convert`]). Mismatched or unknown units return `value`
/// unchanged.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    match from.dimension() {
        Dimension::Length | Dimension::Weight => convert_scaled(value, from, to),
        Dimension::Temperature => convert_temperature(value, from, to),
        Dimension::Unknown => value,
    }
}

/// Convert `value`, rejecting unknown units and mismatched dimensions
pub fn try_convert(value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    if from.is_unknown() || to.is_unknown() {
        return Err(ConversionError::UnknownUnit { from, to });
    }

    if from.dimension() != to.dimension() {
        return Err(ConversionError::IncompatibleDimensions {
            from,
            to,
            from_dim: from.dimension(),
            to_dim: to.dimension(),
        });
    }

    let result = convert(value, from, to);
    debug!(value, ?from, ?to, result, "converted");
    Ok(result)
}

fn convert_scaled(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to || from.dimension() != to.dimension() {
        return value;
    }
    let canonical = from.scale().to_canonical(value);
    to.scale().from_canonical(canonical)
}

fn convert_temperature(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Celsius, Unit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Unit::Fahrenheit, Unit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Unit::Celsius, Unit::Kelvin) => value + 273.15,
        (Unit::Kelvin, Unit::Celsius) => value - 273.15,
        (Unit::Fahrenheit, Unit::Kelvin) => (value + 459.67) * 5.0 / 9.0,
        (Unit::Kelvin, Unit::Fahrenheit) => value * 9.0 / 5.0 - 459.67,
        _ => value,
    }
}
