//! Unit representation with display names and conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::Dimension;

/// A unit of measure.
///
/// The set is closed: every unit is listed here along with its dimension,
/// names and scale. `Unknown` is the sentinel returned when text does not
/// name any unit; it is never a valid conversion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Celsius,
    Fahrenheit,
    Kelvin,
    Unknown,
}

/// How an amount in a unit relates to the canonical unit of its dimension
/// (meter for length, gram for weight).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// The unit is the canonical unit
    Identity,
    /// canonical = value * factor
    Times(f64),
    /// canonical = value / divisor
    Per(f64),
}

impl Scale {
    /// Convert an amount in this unit to the canonical unit
    pub fn to_canonical(&self, value: f64) -> f64 {
        match *self {
            Scale::Identity => value,
            Scale::Times(factor) => value * factor,
            Scale::Per(divisor) => value / divisor,
        }
    }

    /// Convert an amount in the canonical unit to this unit
    pub fn from_canonical(&self, value: f64) -> f64 {
        match *self {
            Scale::Identity => value,
            Scale::Times(factor) => value / factor,
            Scale::Per(divisor) => value * divisor,
        }
    }
}

impl Unit {
    /// Every concrete unit, grouped by dimension
    pub const ALL: [Unit; 16] = [
        Unit::Meter,
        Unit::Kilometer,
        Unit::Centimeter,
        Unit::Millimeter,
        Unit::Mile,
        Unit::Yard,
        Unit::Foot,
        Unit::Inch,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milligram,
        Unit::Pound,
        Unit::Ounce,
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
    ];

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Meter
            | Unit::Kilometer
            | Unit::Centimeter
            | Unit::Millimeter
            | Unit::Mile
            | Unit::Yard
            | Unit::Foot
            | Unit::Inch => Dimension::Length,
            Unit::Gram | Unit::Kilogram | Unit::Milligram | Unit::Pound | Unit::Ounce => {
                Dimension::Weight
            }
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Dimension::Temperature,
            Unit::Unknown => Dimension::Unknown,
        }
    }

    /// Name used for an amount of exactly one
    pub fn singular(&self) -> &'static str {
        match self {
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Centimeter => "centimeter",
            Unit::Millimeter => "millimeter",
            Unit::Mile => "mile",
            Unit::Yard => "yard",
            Unit::Foot => "foot",
            Unit::Inch => "inch",
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Milligram => "milligram",
            Unit::Pound => "pound",
            Unit::Ounce => "ounce",
            Unit::Celsius => "degree Celsius",
            Unit::Fahrenheit => "degree Fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Unknown => "???",
        }
    }

    /// Name used for every amount other than exactly one
    pub fn plural(&self) -> &'static str {
        match self {
            Unit::Meter => "meters",
            Unit::Kilometer => "kilometers",
            Unit::Centimeter => "centimeters",
            Unit::Millimeter => "millimeters",
            Unit::Mile => "miles",
            Unit::Yard => "yards",
            Unit::Foot => "feet",
            Unit::Inch => "inches",
            Unit::Gram => "grams",
            Unit::Kilogram => "kilograms",
            Unit::Milligram => "milligrams",
            Unit::Pound => "pounds",
            Unit::Ounce => "ounces",
            Unit::Celsius => "degrees Celsius",
            Unit::Fahrenheit => "degrees Fahrenheit",
            Unit::Kelvin => "kelvins",
            Unit::Unknown => "???",
        }
    }

    /// Singular name when `value` is exactly 1.0, plural otherwise
    pub fn name_for(&self, value: f64) -> &'static str {
        if value == 1.0 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Relation to the canonical unit of the dimension.
    ///
    /// Only meaningful for length and weight; temperatures are affine and
    /// converted pairwise, so they report `Identity`.
    pub fn scale(&self) -> Scale {
        match self {
            Unit::Meter | Unit::Gram => Scale::Identity,
            Unit::Kilometer => Scale::Times(1000.0),
            Unit::Centimeter => Scale::Per(100.0),
            Unit::Millimeter => Scale::Per(1000.0),
            Unit::Mile => Scale::Times(1609.35),
            Unit::Yard => Scale::Times(0.9144),
            Unit::Foot => Scale::Times(0.3048),
            Unit::Inch => Scale::Times(0.0254),
            Unit::Kilogram => Scale::Times(1000.0),
            Unit::Milligram => Scale::Per(1000.0),
            Unit::Pound => Scale::Times(453.592),
            Unit::Ounce => Scale::Times(28.3495),
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin | Unit::Unknown => Scale::Identity,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Unit::Unknown)
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension().is_convertible() && self.dimension() == other.dimension()
    }

    /// Convert a value from this unit to another unit
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        crate::convert::try_convert(value, *self, *target)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural())
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Unknown
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// One side of the conversion did not name a unit
    #[error("unknown unit in conversion from {from} to {to}")]
    UnknownUnit { from: Unit, to: Unit },

    /// Units measure different things
    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: Unit,
        to: Unit,
        from_dim: Dimension,
        to_dim: Dimension,
    },
}

impl ConversionError {
    /// The units the failed conversion was between
    pub fn units(&self) -> (Unit, Unit) {
        match *self {
            ConversionError::UnknownUnit { from, to } => (from, to),
            ConversionError::IncompatibleDimensions { from, to, .. } => (from, to),
        }
    }
}
