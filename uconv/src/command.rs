//! Command parsing and evaluation
//!
//! A command reads `<number> <source unit> (to|in|convertto) <target unit>`.
//! Unit phrases may span several words ("degrees celsius"). The first
//! keyword wins, so "5 in to cm" splits at "in".

use tracing::debug;
use uconv_units::{resolve, Conversion, Quantity, Unit};
use crate::error::CommandError;

/// Words that separate the source phrase from the target phrase
pub const KEYWORDS: [&str; 3] = ["to", "in", "convertto"];

const EXIT: &str = "exit";

/// A conversion asked for on one input line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Exit,
    Convert(ConversionRequest),
}

fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|k| word.eq_ignore_ascii_case(k))
}

/// Parse one line of input
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case(EXIT) {
        return Ok(Command::Exit);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 4 {
        return Err(CommandError::Parse);
    }

    let value: f64 = words[0].parse().map_err(|_| CommandError::Parse)?;

    let keyword = words[1..]
        .iter()
        .position(|w| is_keyword(w))
        .map(|i| i + 1)
        .ok_or(CommandError::Parse)?;
    if keyword == words.len() - 1 {
        return Err(CommandError::Parse);
    }

    let source = words[1..keyword].join(" ");
    let target = words[keyword + 1..].join(" ");
    let request = ConversionRequest {
        value,
        from: resolve(&source),
        to: resolve(&target),
    };
    debug!(%source, %target, ?request, "parsed command");

    Ok(Command::Convert(request))
}

/// Check a request and carry it out.
///
/// Units are checked before the sign of the value, so "-3 m to kg" reports
/// the impossible conversion rather than the negative length.
pub fn evaluate(request: ConversionRequest) -> Result<Conversion, CommandError> {
    let ConversionRequest { value, from, to } = request;

    if !from.is_compatible(&to) {
        return Err(CommandError::Impossible { from, to });
    }

    let dimension = from.dimension();
    if value < 0.0 && !dimension.allows_negative() {
        return Err(CommandError::Negative(dimension));
    }

    Ok(Conversion::perform(Quantity::new(value, from), to)?)
}
