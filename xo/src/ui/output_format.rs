// xo/src/ui/output_format.rs
//! Formatting of diagnostics written to stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes an error line, in red when the writer is a color terminal.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

/// Writes a hint line, in yellow when the writer is a color terminal.
pub fn print_hint_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Hint:".yellow().bold(), msg)
    } else {
        writeln!(writer, "Hint: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_has_no_escape_codes() {
        let mut buf = Vec::new();
        print_error_message(&mut buf, "No matches found", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: No matches found\n");
    }

    #[test]
    fn colored_error_strips_to_plain_text() {
        let mut buf = Vec::new();
        print_error_message(&mut buf, "No matches found", true).unwrap();
        let plain = strip_ansi_escapes::strip(&buf);
        assert_ne!(buf, plain);
        assert_eq!(String::from_utf8(plain).unwrap(), "Error: No matches found\n");
    }

    #[test]
    fn plain_hint() {
        let mut buf = Vec::new();
        print_hint_message(&mut buf, "use '#'", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Hint: use '#'\n");
    }
}
