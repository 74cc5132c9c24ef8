//! Plain-text rendering for laid-out pretty-printer documents.
//!
//! A layout engine (outside this crate) turns a document tree into a [`DocStream`]: a linear
//! list of characters, text chunks, line breaks with indentation, and annotation markers. This
//! crate turns that stream into text, three ways:
//!
//! 1. **Lazy**: [`render_lazy`] builds a [`LazyText`] fragment sequence, or [`render_fragments`]
//!    yields fragments on demand. Nothing is compacted until the caller asks.
//! 2. **Strict**: [`render_strict`] produces one `String` in a single pass through a
//!    single-owner [`Buffer`].
//! 3. **Streaming**: [`render_to_sink`] writes each node straight to a [`TextSink`], so memory
//!    use does not grow with the document.
//!
//! For any stream without `Fail` the three produce byte-identical output. Annotations are
//! skipped; they never contribute text.
//!
//! # Failure model
//!
//! - A `Fail` node means the layout engine shipped an unresolved fallback. Renderers treat this
//!   as a defect and panic via [`invariant_violation`]; it is not a [`RenderError`].
//! - Sink errors are returned to the caller unchanged.
//!
//! The convenience entry points ([`render_default`], [`render_default_to`]) run a
//! [`LayoutDoc`] with [`LayoutOptions`] and stream the result to an `io::Write`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod entry;
mod foundation;
mod layout;
mod stream;

/// Renderers and sinks.
pub mod render;

pub use entry::{render_default, render_default_to, render_with_options_to};
pub use foundation::error::{RenderError, RenderResult};
pub use foundation::indent::{CACHED_INDENT, spaces};
pub use foundation::violation::{UNCAUGHT_FAIL, invariant_violation};
pub use layout::{LayoutDoc, LayoutOptions, PageWidth};
pub use render::RenderStrategy;
pub use render::lazy::{Fragment, Fragments, LazyText, render_fragments, render_lazy};
pub use render::sink::{FmtSink, IoSink, RecordingSink, SinkWrite, TextSink};
pub use render::stream::render_to_sink;
pub use render::strict::{Buffer, render_into, render_strict};
pub use stream::model::{DocStream, IntoTokens, Nodes, Tail};
pub use stream::token::Token;
