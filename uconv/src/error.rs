//! Errors reported back to the user for a single command
//!
//! None of these end the session. Each renders as the exact line printed
//! in reply to the command.

use thiserror::Error;
use uconv_units::{ConversionError, Dimension, Unit};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// Too few words, a bad number, or no conversion keyword
    #[error("Parse error.")]
    Parse,

    /// A unit did not resolve, or the units measure different things
    #[error("Conversion from {} to {} is impossible", .from.plural(), .to.plural())]
    Impossible { from: Unit, to: Unit },

    /// A negative length or weight
    #[error("{} shouldn't be negative.", .0.label())]
    Negative(Dimension),
}

impl From<ConversionError> for CommandError {
    fn from(err: ConversionError) -> Self {
        let (from, to) = err.units();
        CommandError::Impossible { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CommandError::Parse.to_string(), "Parse error.");
        assert_eq!(
            CommandError::Negative(Dimension::Length).to_string(),
            "Length shouldn't be negative."
        );
        assert_eq!(
            CommandError::Negative(Dimension::Weight).to_string(),
            "Weight shouldn't be negative."
        );
    }

    #[test]
    fn test_impossible_uses_plurals() {
        let err = CommandError::Impossible { from: Unit::Meter, to: Unit::Kilogram };
        assert_eq!(err.to_string(), "Conversion from meters to kilograms is impossible");

        let err = CommandError::Impossible { from: Unit::Unknown, to: Unit::Celsius };
        assert_eq!(err.to_string(), "Conversion from ??? to degrees Celsius is impossible");
    }

    #[test]
    fn test_from_conversion_error() {
        let err: CommandError = ConversionError::UnknownUnit {
            from: Unit::Foot,
            to: Unit::Unknown,
        }
        .into();
        assert_eq!(err, CommandError::Impossible { from: Unit::Foot, to: Unit::Unknown });
    }
}
