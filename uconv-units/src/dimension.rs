//! Dimension of a unit: the physical quantity it measures

use std::fmt;
use serde::{Serialize, Deserialize};

/// The physical quantity a unit measures.
///
/// Two units can only be converted into each other when they share a
/// dimension, and never when that dimension is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Weight,
    Temperature,
    /// Dimension of the unresolved-unit sentinel
    Unknown,
}

impl Dimension {
    /// All dimensions that have concrete units
    pub const CONVERTIBLE: [Dimension; 3] = [
        Dimension::Length,
        Dimension::Weight,
        Dimension::Temperature,
    ];

    /// Lowercase name ("length", "weight", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Weight => "weight",
            Dimension::Temperature => "temperature",
            Dimension::Unknown => "unknown",
        }
    }

    /// Capitalised name, as used at the start of a sentence
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Length => "Length",
            Dimension::Weight => "Weight",
            Dimension::Temperature => "Temperature",
            Dimension::Unknown => "Unknown",
        }
    }

    /// Whether units of this dimension can take part in a conversion
    pub fn is_convertible(&self) -> bool {
        !matches!(self, Dimension::Unknown)
    }

    /// Whether a negative amount of this dimension is meaningful.
    ///
    /// Lengths and weights are magnitudes; temperatures go below zero.
    pub fn allows_negative(&self) -> bool {
        !matches!(self, Dimension::Length | Dimension::Weight)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Unknown
    }
}
