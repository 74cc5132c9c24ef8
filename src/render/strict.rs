use crate::{
    foundation::{indent::spaces, violation::invariant_violation},
    stream::model::DocStream,
};

/// Append-only accumulator with exactly one owner.
///
/// Every operation takes the buffer by value and hands it back, so at most one live handle to
/// the contents exists and growth happens in place. The type is deliberately not `Clone`, and
/// the storage is only reachable through [`Buffer::finish`].
#[derive(Debug, Default)]
pub struct Buffer {
    text: String,
}

impl Buffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `bytes` bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            text: String::with_capacity(bytes),
        }
    }

    /// Append one character.
    #[must_use]
    pub fn push_char(mut self, c: char) -> Self {
        self.text.push(c);
        self
    }

    /// Append a run of text.
    #[must_use]
    pub fn push_str(mut self, s: &str) -> Self {
        self.text.push_str(s);
        self
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Give up ownership of the accumulated text without copying it.
    pub fn finish(self) -> String {
        self.text
    }
}

/// Render `stream` into one contiguous `String` in a single pass.
///
/// # Panics
///
/// On a `Fail` node (see [`crate::invariant_violation`]).
#[tracing::instrument(skip_all)]
pub fn render_strict<A>(stream: DocStream<A>) -> String {
    render_into(Buffer::new(), stream).finish()
}

/// Continue rendering `stream` onto an existing buffer.
pub fn render_into<A>(buf: Buffer, stream: DocStream<A>) -> Buffer {
    let mut buf = buf;
    let mut stream = stream;
    loop {
        (buf, stream) = match stream {
            DocStream::Fail => invariant_violation(),
            DocStream::Empty => break,
            DocStream::Char(c, rest) => (buf.push_char(c), rest.into_inner()),
            DocStream::Text(_, text, rest) => (buf.push_str(&text), rest.into_inner()),
            DocStream::Line(indent, rest) => (
                buf.push_char('\n').push_str(&spaces(indent)),
                rest.into_inner(),
            ),
            DocStream::AnnPush(_, rest) | DocStream::AnnPop(rest) => (buf, rest.into_inner()),
        };
    }
    tracing::debug!(bytes = buf.len(), "strict render finished");
    buf
}

#[cfg(test)]
#[path = "../../tests/unit/render/strict.rs"]
mod tests;
