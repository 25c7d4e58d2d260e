//! Line-oriented I/O seam between menus and the terminal.
//!
//! Menus never touch stdin/stdout directly. Everything goes through
//! [`MenuIo`], which keeps the navigation logic testable with in-memory
//! buffers and lets an embedding application redirect the conversation.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reads user lines and writes menu output.
pub trait MenuIo {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` once the input is exhausted. The returned line has
    /// its line terminator removed but is otherwise untouched. Invalid UTF-8
    /// is replaced with U+FFFD rather than reported as an error.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// [`MenuIo`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Access the writer (e.g., to inspect captured output in tests).
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> MenuIo for Console<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(console: &Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.writer().clone()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = Console::new("first\nsecond\r\nthird".as_bytes(), Vec::new());

        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("third"));
        assert_eq!(console.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut console = Console::new("  spaced  out  \n".as_bytes(), Vec::new());
        assert_eq!(
            console.read_line("").unwrap().as_deref(),
            Some("  spaced  out  ")
        );
    }

    #[test]
    fn test_read_line_writes_prompt() {
        let mut console = Console::new("x\n".as_bytes(), Vec::new());
        console.read_line("Select an option: ").unwrap();
        assert_eq!(output(&console), "Select an option: ");
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        console.write_line("hello").unwrap();
        console.write_line("").unwrap();
        assert_eq!(output(&console), "hello\n\n");
    }

    #[test]
    fn test_empty_input_is_eof() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        assert_eq!(console.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let input: &[u8] = b"\xff\xfe\r\nnext\n";
        let mut console = Console::new(input, Vec::new());

        assert_eq!(
            console.read_line("> ").unwrap().as_deref(),
            Some("\u{FFFD}\u{FFFD}")
        );
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("next"));
        assert_eq!(console.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_eof() {
        let mut console = Console::new("\n".as_bytes(), Vec::new());
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some(""));
    }
}
