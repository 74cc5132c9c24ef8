//! Plain-text renderers for [`DocStream`]s.
//!
//! All three strategies produce byte-identical text for the same stream:
//!
//! - [`lazy`]: a fragment sequence that is never compacted unless asked to
//! - [`strict`]: one `String`, built through a single-owner [`strict::Buffer`]
//! - [`stream`]: direct writes to a caller-owned [`sink::TextSink`]

use crate::stream::model::DocStream;

/// Lazy fragment renderer.
pub mod lazy;
/// Sink contract and built-in sinks.
pub mod sink;
/// Streaming renderer.
pub mod stream;
/// Strict single-pass renderer.
pub mod strict;

/// Selects one of the interchangeable renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStrategy {
    /// [`lazy::render_lazy`], then compaction.
    Lazy,
    /// [`strict::render_strict`].
    Strict,
    /// [`stream::render_to_sink`] into a `String` sink.
    Stream,
}

impl RenderStrategy {
    /// Every strategy, in declaration order.
    pub const ALL: [RenderStrategy; 3] = [Self::Lazy, Self::Strict, Self::Stream];

    /// Render `stream` to a `String` with this strategy.
    ///
    /// # Panics
    ///
    /// On a `Fail` node (see [`crate::invariant_violation`]).
    pub fn render_to_string<A>(self, doc: DocStream<A>) -> String {
        match self {
            Self::Lazy => lazy::render_lazy(doc).into_string(),
            Self::Strict => strict::render_strict(doc),
            Self::Stream => {
                let mut out = String::new();
                let Ok(()) = stream::render_to_sink(doc, &mut out);
                out
            }
        }
    }
}
