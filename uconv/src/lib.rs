//! uconv - interactive unit converter
//!
//! Reads commands like `5 km to m` and answers with
//! `5.0 kilometers is 5000.0 meters`.
//!
//! - `command`: parsing a line and evaluating the request
//! - `error`: the per-command error replies
//! - `session`: the prompt/read/reply loop

mod command;
mod error;
mod session;

pub use command::{evaluate, parse_line, Command, ConversionRequest, KEYWORDS};
pub use error::CommandError;
pub use session::{respond, Reply, Session, PROMPT};
