use std::io::{self, Stdout, Write};

use crate::log;

/// Destination for announcements and rendered boards.
pub trait OutputSink {
    fn output(&mut self, message: &str, new_line: bool);
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn output(&mut self, message: &str, new_line: bool) {
        (**self).output(message, new_line);
    }
}

pub struct ConsoleOutput<W: Write = Stdout> {
    writer: W,
}

impl ConsoleOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_message(&mut self, message: &str, new_line: bool) -> io::Result<()> {
        self.writer.write_all(message.as_bytes())?;
        if new_line {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn output(&mut self, message: &str, new_line: bool) {
        if let Err(err) = self.write_message(message, new_line) {
            log!("Failed to write output: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_without_new_line() {
        let mut output = ConsoleOutput::new(Vec::new());
        output.output("hello!", false);
        assert_eq!(output.into_inner(), b"hello!");
    }

    #[test]
    fn test_output_with_new_line() {
        let mut output = ConsoleOutput::new(Vec::new());
        output.output("hello!", true);
        output.output("", true);
        assert_eq!(String::from_utf8(output.into_inner()).unwrap(), "hello!\n\n");
    }

    #[test]
    fn test_output_through_mutable_reference() {
        fn announce(mut sink: impl OutputSink) {
            sink.output("via ref", false);
        }

        let mut output = ConsoleOutput::new(Vec::new());
        announce(&mut output);
        assert_eq!(output.into_inner(), b"via ref");
    }
}
