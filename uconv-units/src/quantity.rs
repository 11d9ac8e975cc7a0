//! Quantity type - a value with an associated unit

use std::fmt;
use crate::Unit;
use crate::number::format_number;
use crate::unit::ConversionError;

/// An amount in a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    /// The numeric value
    pub value: f64,
    /// The unit of measurement
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Convert to another unit
    pub fn convert_to(&self, target: Unit) -> Result<Quantity, ConversionError> {
        let value = self.unit.convert_to(self.value, &target)?;
        Ok(Quantity::new(value, target))
    }

    /// Unit name matching the amount (singular for exactly one)
    pub fn unit_name(&self) -> &'static str {
        self.unit.name_for(self.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit_name())
    }
}

/// A completed conversion: the amount asked about and what it came to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub source: Quantity,
    pub result: Quantity,
}

impl Conversion {
    /// Convert `source` into `target`
    pub fn perform(source: Quantity, target: Unit) -> Result<Conversion, ConversionError> {
        let result = source.convert_to(target)?;
        Ok(Conversion { source, result })
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.source, self.result)
    }
}
