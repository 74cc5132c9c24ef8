use std::borrow::Cow;

use crate::{foundation::error::RenderResult, stream::model::DocStream};

/// Flat view of a single [`DocStream`] node.
///
/// This is the serialized form used for fixtures: a JSON array of tokens tagged by `op`,
/// e.g. `[{"op":"text","text":"lorem"},{"op":"line","indent":2}]`. `Empty` has no token; it is
/// the end of the sequence.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Token<A = ()> {
    /// Unresolved layout failure.
    Fail,
    /// One character.
    Char {
        /// The character.
        ch: char,
    },
    /// A chunk of text.
    Text {
        /// The chunk.
        text: Cow<'static, str>,
        /// Length hint in chars; computed from `text` when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hint: Option<usize>,
    },
    /// Newline plus indentation.
    Line {
        /// Number of spaces after the newline.
        indent: usize,
    },
    /// Start of an annotated region.
    AnnPush {
        /// Opaque annotation payload.
        ann: A,
    },
    /// End of the innermost annotated region.
    AnnPop,
}

impl<A> Token<A> {
    /// Text token without a precomputed hint.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Text {
            text: text.into(),
            hint: None,
        }
    }

    /// Rewrite the annotation payload, leaving every other token untouched.
    pub fn map_ann<B>(self, f: impl FnOnce(A) -> B) -> Token<B> {
        match self {
            Self::Fail => Token::Fail,
            Self::Char { ch } => Token::Char { ch },
            Self::Text { text, hint } => Token::Text { text, hint },
            Self::Line { indent } => Token::Line { indent },
            Self::AnnPush { ann } => Token::AnnPush { ann: f(ann) },
            Self::AnnPop => Token::AnnPop,
        }
    }

    /// Re-type a non-annotation token; `None` for `AnnPush` and `AnnPop`.
    pub fn strip_ann<B>(self) -> Option<Token<B>> {
        match self {
            Self::Fail => Some(Token::Fail),
            Self::Char { ch } => Some(Token::Char { ch }),
            Self::Text { text, hint } => Some(Token::Text { text, hint }),
            Self::Line { indent } => Some(Token::Line { indent }),
            Self::AnnPush { .. } | Self::AnnPop => None,
        }
    }

    /// Returns `true` for `AnnPush` and `AnnPop`.
    pub fn is_annotation(&self) -> bool {
        matches!(self, Self::AnnPush { .. } | Self::AnnPop)
    }
}

impl<A: Clone> Token<A> {
    /// Copy the head of `node`; `None` for `Empty`.
    pub(crate) fn of_node(node: &DocStream<A>) -> Option<Self> {
        Some(match node {
            DocStream::Empty => return None,
            DocStream::Fail => Self::Fail,
            DocStream::Char(ch, _) => Self::Char { ch: *ch },
            DocStream::Text(len, text, _) => Self::Text {
                text: text.clone(),
                hint: Some(*len),
            },
            DocStream::Line(indent, _) => Self::Line { indent: *indent },
            DocStream::AnnPush(ann, _) => Self::AnnPush { ann: ann.clone() },
            DocStream::AnnPop(_) => Self::AnnPop,
        })
    }
}

impl<A: serde::de::DeserializeOwned> DocStream<A> {
    /// Parse a JSON token array into a stream.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let tokens: Vec<Token<A>> = serde_json::from_str(json)?;
        Ok(Self::from_tokens(tokens))
    }
}

impl<A: serde::Serialize> DocStream<A> {
    /// Serialize the stream as a JSON token array, consuming it.
    pub fn into_json(self) -> RenderResult<String> {
        let tokens: Vec<Token<A>> = self.into_tokens().collect();
        Ok(serde_json::to_string(&tokens)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stream/token.rs"]
mod tests;
