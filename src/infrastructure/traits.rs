//! I/O boundary traits for testability
//!
//! The menu loop and handlers only talk to a `Terminal`, so they can be
//! driven with in-memory buffers in tests.

use std::io::{self, BufRead, Write};

/// Line-oriented console abstraction.
pub trait Terminal {
    /// Write `prompt` without a trailing newline, then read one line.
    ///
    /// The line ending is stripped. Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Terminal over any buffered reader and writer.
#[derive(Debug)]
pub struct LineTerminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineTerminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}
