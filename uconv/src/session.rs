//! Interactive command loop
//!
//! Prompts, reads one line at a time and prints one reply per command. The
//! loop ends on `exit` or at end of input. Blank lines and lines that are
//! not valid UTF-8 are skipped without a reply.

use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use uconv_units::Conversion;
use crate::command::{evaluate, parse_line, Command};
use crate::error::CommandError;

pub const PROMPT: &str = "Enter what you want to convert (or exit): ";

/// What the session does in response to one line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Exit,
    Converted(Conversion),
    Rejected(CommandError),
}

/// Work out the reply to a single non-empty line
pub fn respond(line: &str) -> Reply {
    let request = match parse_line(line) {
        Ok(Command::Exit) => return Reply::Exit,
        Ok(Command::Convert(request)) => request,
        Err(e) => return Reply::Rejected(e),
    };

    match evaluate(request) {
        Ok(conversion) => Reply::Converted(conversion),
        Err(e) => Reply::Rejected(e),
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Run until `exit` or end of input.
    ///
    /// Only I/O failures are returned; bad commands are answered and the loop
    /// carries on.
    pub fn run(&mut self) -> io::Result<()> {
        info!("session started");

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                info!("end of input");
                break;
            }

            let line = match String::from_utf8(raw) {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable line");
                    continue;
                }
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match respond(line) {
                Reply::Exit => break,
                Reply::Converted(conversion) => {
                    // A blank line follows every result
                    writeln!(self.output, "{}\n", conversion)?;
                }
                Reply::Rejected(e) => {
                    warn!(input = line, error = ?e, "command rejected");
                    writeln!(self.output, "{}", e)?;
                }
            }
            self.output.flush()?;
        }

        info!("session ended");
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transcript(input: &[u8]) -> String {
        let mut session = Session::new(Cursor::new(input.to_vec()), Vec::new());
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        assert_eq!(transcript(b"exit\n"), PROMPT);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        assert_eq!(transcript(b""), PROMPT);
        assert_eq!(transcript(b"\n"), format!("{}{}", PROMPT, PROMPT));
    }

    #[test]
    fn test_conversion_then_exit() {
        let out = transcript(b"5 km to m\nEXIT\n");
        let expected = format!("{p}5.0 kilometers is 5000.0 meters\n\n{p}", p = PROMPT);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let out = transcript(b"banana\n5 m to kg\n-3 m to ft\n1 m to cm\nexit\n");
        let expected = format!(
            "{p}Parse error.\n\
             {p}Conversion from meters to kilograms is impossible\n\
             {p}Length shouldn't be negative.\n\
             {p}1.0 meter is 100.0 centimeters\n\n\
             {p}",
            p = PROMPT
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_blank_and_unreadable_lines_are_skipped() {
        let out = transcript(b"   \n\xff\xfe\nexit\n");
        assert_eq!(out, PROMPT.repeat(3));
    }

    #[test]
    fn test_last_line_without_newline() {
        let out = transcript(b"10 kg to lb");
        let expected = format!("{p}10.0 kilograms is 22.046244201837776 pounds\n\n{p}", p = PROMPT);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_respond() {
        assert_eq!(respond("exit"), Reply::Exit);
        assert_eq!(respond("banana"), Reply::Rejected(CommandError::Parse));
        assert!(matches!(respond("0 c to k"), Reply::Converted(_)));
    }
}
