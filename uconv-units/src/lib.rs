//! uconv Units - unit catalog and conversion engine
//!
//! A closed set of units with dimensional checking and display names.
//!
//! Dimensions:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Weight (g, kg, mg, lb, oz)
//! - Temperature (C, F, K)

mod dimension;
mod unit;
mod quantity;
mod convert;
mod number;
mod units;

pub use dimension::Dimension;
pub use unit::{Unit, Scale, ConversionError};
pub use quantity::{Quantity, Conversion};
pub use convert::{convert, try_convert};
pub use number::format_number;
pub use units::{resolve, UnitRegistry, UNITS};
