use std::{convert::Infallible, fmt, io};

/// Destination for streamed output.
///
/// Ordering contract: calls arrive in exactly the order the stream dictates, and a sink must
/// make them visible in that order. `write_str` should be at least as cheap per character as
/// repeated `write_char`.
pub trait TextSink {
    /// Failure reported by the underlying destination.
    type Error;

    /// Append one character.
    fn write_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Append a contiguous run of text.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    type Error = S::Error;

    fn write_char(&mut self, c: char) -> Result<(), Self::Error> {
        (**self).write_char(c)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }
}

impl TextSink for String {
    type Error = Infallible;

    fn write_char(&mut self, c: char) -> Result<(), Infallible> {
        self.push(c);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.push_str(s);
        Ok(())
    }
}

/// Adapts any [`io::Write`] (file, socket, locked stdout) as a [`TextSink`], writing UTF-8.
///
/// The sink does not buffer; wrap the writer in a `BufWriter` if it needs buffering. I/O errors
/// are returned exactly as the writer produced them.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    /// Wrap `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> TextSink for IoSink<W> {
    type Error = io::Error;

    fn write_char(&mut self, c: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.inner.write_all(c.encode_utf8(&mut buf).as_bytes())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())
    }
}

/// Adapts any [`fmt::Write`] (e.g. a `Formatter`) as a [`TextSink`].
#[derive(Debug)]
pub struct FmtSink<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    /// Wrap `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> TextSink for FmtSink<W> {
    type Error = fmt::Error;

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.inner.write_char(c)
    }

    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)
    }
}

/// One call received by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkWrite {
    /// A `write_char` call.
    Char(char),
    /// A `write_str` call.
    Str(String),
}

/// In-memory sink that records every write call, in order. Useful for tests and debugging.
///
/// Can be told to start failing after a number of successful writes to exercise error paths.
#[derive(Debug, Default)]
pub struct RecordingSink {
    writes: Vec<SinkWrite>,
    fail_after: Option<usize>,
}

impl RecordingSink {
    /// Create a sink that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that accepts `n` writes and rejects every write after that.
    pub fn failing_after(n: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_after: Some(n),
        }
    }

    /// Calls received so far.
    pub fn writes(&self) -> &[SinkWrite] {
        &self.writes
    }

    /// Concatenation of everything written.
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for w in &self.writes {
            match w {
                SinkWrite::Char(c) => out.push(*c),
                SinkWrite::Str(s) => out.push_str(s),
            }
        }
        out
    }

    fn record(&mut self, write: SinkWrite) -> io::Result<()> {
        if self.fail_after.is_some_and(|n| self.writes.len() >= n) {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "recording sink is closed",
            ));
        }
        self.writes.push(write);
        Ok(())
    }
}

impl TextSink for RecordingSink {
    type Error = io::Error;

    fn write_char(&mut self, c: char) -> io::Result<()> {
        self.record(SinkWrite::Char(c))
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.record(SinkWrite::Str(s.to_owned()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
