use std::{borrow::Cow, fmt, mem, ops::Deref};

use crate::stream::token::Token;

/// A laid-out document: a front-to-back list of rendering instructions.
///
/// Produced by a layout engine, handed to exactly one renderer, then discarded. Every
/// non-terminal node owns the remainder of the stream through a [`Tail`].
///
/// `A` is the annotation payload. Plain-text renderers never look at it.
pub enum DocStream<A = ()> {
    /// The layout engine could not satisfy its constraints. Must never reach a renderer.
    Fail,
    /// Clean end of stream.
    Empty,
    /// Emit one character.
    Char(char, Tail<A>),
    /// Emit a chunk of text. The first field is a length hint (in chars) for non-text
    /// consumers; text renderers ignore it.
    Text(usize, Cow<'static, str>, Tail<A>),
    /// Emit a newline followed by the given number of spaces.
    Line(usize, Tail<A>),
    /// Open an annotated region.
    AnnPush(A, Tail<A>),
    /// Close the innermost annotated region.
    AnnPop(Tail<A>),
}

/// Owning pointer to the remainder of a [`DocStream`].
///
/// Dropping a tail unlinks the chain node by node, so streams of any length drop without
/// recursion.
pub struct Tail<A>(Box<DocStream<A>>);

impl<A> Tail<A> {
    /// Box `stream` as the remainder of a node.
    pub fn new(stream: DocStream<A>) -> Self {
        Self(Box::new(stream))
    }

    /// Take the remainder out, leaving `Empty` behind.
    pub fn into_inner(mut self) -> DocStream<A> {
        mem::take(&mut *self.0)
    }
}

impl<A> Deref for Tail<A> {
    type Target = DocStream<A>;

    fn deref(&self) -> &DocStream<A> {
        &self.0
    }
}

impl<A> Drop for Tail<A> {
    fn drop(&mut self) {
        let mut cur = mem::take(&mut *self.0);
        loop {
            let next = match cur.tail_mut() {
                Some(tail) => mem::take(&mut *tail.0),
                None => break,
            };
            // `cur` now ends in `Empty`, so dropping it is shallow.
            cur = next;
        }
    }
}

impl<A> Default for DocStream<A> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<A> DocStream<A> {
    /// `Char` node in front of `rest`.
    pub fn char(c: char, rest: Self) -> Self {
        Self::Char(c, Tail::new(rest))
    }

    /// `Text` node in front of `rest`, with the length hint computed from `text`.
    pub fn text(text: impl Into<Cow<'static, str>>, rest: Self) -> Self {
        let text = text.into();
        Self::Text(text.chars().count(), text, Tail::new(rest))
    }

    /// `Line` node in front of `rest`.
    pub fn line(indent: usize, rest: Self) -> Self {
        Self::Line(indent, Tail::new(rest))
    }

    /// `AnnPush` node in front of `rest`.
    pub fn ann_push(ann: A, rest: Self) -> Self {
        Self::AnnPush(ann, Tail::new(rest))
    }

    /// `AnnPop` node in front of `rest`.
    pub fn ann_pop(rest: Self) -> Self {
        Self::AnnPop(Tail::new(rest))
    }

    /// Returns `true` for `Fail` and `Empty`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Fail | Self::Empty)
    }

    /// Split off the first instruction.
    ///
    /// Returns `None` at `Empty`. `Fail` yields [`Token::Fail`] followed by `Empty`.
    pub fn uncons(self) -> Option<(Token<A>, Self)> {
        match self {
            Self::Empty => None,
            Self::Fail => Some((Token::Fail, Self::Empty)),
            Self::Char(c, rest) => Some((Token::Char { ch: c }, rest.into_inner())),
            Self::Text(len, text, rest) => Some((
                Token::Text {
                    text,
                    hint: Some(len),
                },
                rest.into_inner(),
            )),
            Self::Line(indent, rest) => Some((Token::Line { indent }, rest.into_inner())),
            Self::AnnPush(ann, rest) => Some((Token::AnnPush { ann }, rest.into_inner())),
            Self::AnnPop(rest) => Some((Token::AnnPop, rest.into_inner())),
        }
    }

    /// Consume the stream front to back, one [`Token`] per node.
    pub fn into_tokens(self) -> IntoTokens<A> {
        IntoTokens { stream: self }
    }

    /// Build a stream from tokens in output order.
    ///
    /// Anything after a [`Token::Fail`] is discarded, since `Fail` ends its path.
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token<A>>) -> Self {
        let mut tokens: Vec<Token<A>> = tokens.into_iter().collect();
        if let Some(fail) = tokens.iter().position(|t| matches!(t, Token::Fail)) {
            tokens.truncate(fail + 1);
        }

        tokens
            .into_iter()
            .rev()
            .fold(Self::Empty, |rest, token| match token {
                Token::Fail => Self::Fail,
                Token::Char { ch } => Self::char(ch, rest),
                Token::Text { text, hint } => {
                    let len = hint.unwrap_or_else(|| text.chars().count());
                    Self::Text(len, text, Tail::new(rest))
                }
                Token::Line { indent } => Self::line(indent, rest),
                Token::AnnPush { ann } => Self::ann_push(ann, rest),
                Token::AnnPop => Self::ann_pop(rest),
            })
    }

    /// Walk the nodes by reference, terminal node included.
    pub fn nodes(&self) -> Nodes<'_, A> {
        Nodes { next: Some(self) }
    }

    /// Number of nodes before the terminal one.
    pub fn len(&self) -> usize {
        self.nodes().filter(|n| !n.is_terminal()).count()
    }

    /// Returns `true` if the stream is `Empty` or `Fail`.
    pub fn is_empty(&self) -> bool {
        self.is_terminal()
    }

    fn tail_mut(&mut self) -> Option<&mut Tail<A>> {
        match self {
            Self::Fail | Self::Empty => None,
            Self::Char(_, rest)
            | Self::Text(_, _, rest)
            | Self::Line(_, rest)
            | Self::AnnPush(_, rest)
            | Self::AnnPop(rest) => Some(rest),
        }
    }

    fn tail(&self) -> Option<&Self> {
        match self {
            Self::Fail | Self::Empty => None,
            Self::Char(_, rest)
            | Self::Text(_, _, rest)
            | Self::Line(_, rest)
            | Self::AnnPush(_, rest)
            | Self::AnnPop(rest) => Some(&**rest),
        }
    }
}

/// Consuming iterator returned by [`DocStream::into_tokens`].
pub struct IntoTokens<A> {
    stream: DocStream<A>,
}

impl<A> Iterator for IntoTokens<A> {
    type Item = Token<A>;

    fn next(&mut self) -> Option<Token<A>> {
        let (token, rest) = mem::take(&mut self.stream).uncons()?;
        self.stream = rest;
        Some(token)
    }
}

/// Borrowing iterator returned by [`DocStream::nodes`].
pub struct Nodes<'a, A> {
    next: Option<&'a DocStream<A>>,
}

impl<'a, A> Iterator for Nodes<'a, A> {
    type Item = &'a DocStream<A>;

    fn next(&mut self) -> Option<&'a DocStream<A>> {
        let node = self.next?;
        self.next = node.tail();
        Some(node)
    }
}

impl<A> FromIterator<Token<A>> for DocStream<A> {
    fn from_iter<I: IntoIterator<Item = Token<A>>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

// Clone, Eq and Debug walk the chain iteratively; derived impls would recurse once per node.

impl<A: Clone> Clone for DocStream<A> {
    fn clone(&self) -> Self {
        Self::from_tokens(self.nodes().filter_map(Token::of_node))
    }
}

impl<A: PartialEq> PartialEq for DocStream<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self.nodes();
        let mut b = other.nodes();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if head_eq(x, y) => {}
                _ => return false,
            }
        }
    }
}

impl<A: Eq> Eq for DocStream<A> {}

fn head_eq<A: PartialEq>(x: &DocStream<A>, y: &DocStream<A>) -> bool {
    use DocStream::*;
    match (x, y) {
        (Fail, Fail) | (Empty, Empty) | (AnnPop(_), AnnPop(_)) => true,
        (Char(a, _), Char(b, _)) => a == b,
        (Text(la, a, _), Text(lb, b, _)) => la == lb && a == b,
        (Line(a, _), Line(b, _)) => a == b,
        (AnnPush(a, _), AnnPush(b, _)) => a == b,
        _ => false,
    }
}

impl<A: fmt::Debug> fmt::Debug for DocStream<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for node in self.nodes() {
            match node {
                Self::Fail => list.entry(&format_args!("Fail")),
                Self::Empty => list.entry(&format_args!("Empty")),
                Self::Char(c, _) => list.entry(&format_args!("Char({c:?})")),
                Self::Text(len, text, _) => list.entry(&format_args!("Text({len}, {text:?})")),
                Self::Line(indent, _) => list.entry(&format_args!("Line({indent})")),
                Self::AnnPush(ann, _) => list.entry(&format_args!("AnnPush({ann:?})")),
                Self::AnnPop(_) => list.entry(&format_args!("AnnPop")),
            };
        }
        list.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stream/model.rs"]
mod tests;
