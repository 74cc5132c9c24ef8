use std::{borrow::Cow, fmt, mem};

use crate::{
    foundation::{indent::spaces, violation::invariant_violation},
    render::sink::TextSink,
    stream::model::DocStream,
};

/// One piece of rendered output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// A single character (`Char` nodes and the newline of `Line` nodes).
    Char(char),
    /// A text chunk or an indentation run.
    Str(Cow<'static, str>),
}

impl Fragment {
    /// Length in bytes once written.
    pub fn len(&self) -> usize {
        match self {
            Self::Char(c) => c.len_utf8(),
            Self::Str(s) => s.len(),
        }
    }

    /// Returns `true` for an empty chunk.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the fragment to `sink`.
    pub fn write_to<S: TextSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        match self {
            Self::Char(c) => sink.write_char(*c),
            Self::Str(s) => sink.write_str(s),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => fmt::Write::write_char(f, *c),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// On-demand walk over a stream, yielding output fragments in order.
///
/// Each `next` consumes only as much of the stream as it needs to produce one fragment.
pub struct Fragments<A> {
    stream: DocStream<A>,
    pending: Option<Fragment>,
}

impl<A> Fragments<A> {
    /// Start walking `stream`.
    pub fn new(stream: DocStream<A>) -> Self {
        Self {
            stream,
            pending: None,
        }
    }
}

impl<A> Iterator for Fragments<A> {
    type Item = Fragment;

    /// # Panics
    ///
    /// On reaching a `Fail` node.
    fn next(&mut self) -> Option<Fragment> {
        if let Some(frag) = self.pending.take() {
            return Some(frag);
        }
        loop {
            match mem::take(&mut self.stream) {
                DocStream::Fail => invariant_violation(),
                DocStream::Empty => return None,
                DocStream::Char(c, rest) => {
                    self.stream = rest.into_inner();
                    return Some(Fragment::Char(c));
                }
                DocStream::Text(_, text, rest) => {
                    self.stream = rest.into_inner();
                    return Some(Fragment::Str(text));
                }
                DocStream::Line(indent, rest) => {
                    self.stream = rest.into_inner();
                    self.pending = Some(Fragment::Str(spaces(indent)));
                    return Some(Fragment::Char('\n'));
                }
                DocStream::AnnPush(_, rest) | DocStream::AnnPop(rest) => {
                    self.stream = rest.into_inner();
                }
            }
        }
    }
}

/// Rendered output kept as a sequence of fragments rather than one contiguous string.
///
/// Appending is amortized O(1) and no text is copied until [`LazyText::into_string`] is
/// called. Consumers that only need to stream the output can use [`LazyText::write_to`] or
/// `Display` and skip compaction entirely.
#[derive(Clone, Debug, Default)]
pub struct LazyText {
    fragments: Vec<Fragment>,
    len: usize,
}

impl LazyText {
    /// Empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment.
    pub fn push(&mut self, frag: Fragment) {
        self.len += frag.len();
        self.fragments.push(frag);
    }

    /// Append all of `other`.
    pub fn append(&mut self, other: &mut LazyText) {
        self.len += mem::take(&mut other.len);
        self.fragments.append(&mut other.fragments);
    }

    /// Total length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fragments, in output order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Write every fragment to `sink`, stopping at the first error.
    pub fn write_to<S: TextSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.fragments.iter().try_for_each(|frag| frag.write_to(sink))
    }

    /// Compact into one `String`, allocating exactly once.
    pub fn into_string(self) -> String {
        let mut out = String::with_capacity(self.len);
        for frag in self.fragments {
            match frag {
                Fragment::Char(c) => out.push(c),
                Fragment::Str(s) => out.push_str(&s),
            }
        }
        out
    }
}

impl Extend<Fragment> for LazyText {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        for frag in iter {
            self.push(frag);
        }
    }
}

impl FromIterator<Fragment> for LazyText {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl fmt::Display for LazyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments
            .iter()
            .try_for_each(|frag| fmt::Display::fmt(frag, f))
    }
}

impl From<LazyText> for String {
    fn from(text: LazyText) -> Self {
        text.into_string()
    }
}

/// Walk `stream` lazily, one fragment per `next`.
pub fn render_fragments<A>(stream: DocStream<A>) -> Fragments<A> {
    Fragments::new(stream)
}

/// Render `stream` into a fragment sequence without compacting it.
///
/// # Panics
///
/// On a `Fail` node (see [`crate::invariant_violation`]).
#[tracing::instrument(skip_all)]
pub fn render_lazy<A>(stream: DocStream<A>) -> LazyText {
    let out: LazyText = render_fragments(stream).collect();
    tracing::debug!(
        fragments = out.fragments().len(),
        bytes = out.len(),
        "lazy render finished"
    );
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/lazy.rs"]
mod tests;
