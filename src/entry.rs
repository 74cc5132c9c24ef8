use std::io;

use crate::{
    foundation::error::RenderResult,
    layout::{LayoutDoc, LayoutOptions},
    render::{sink::IoSink, stream::render_to_sink},
};

/// Lay `doc` out with default options and write it to standard output.
///
/// Standard output stays locked for the whole render and is flushed afterwards.
pub fn render_default<D: LayoutDoc>(doc: D) -> RenderResult<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render_default_to(&mut lock, doc)?;
    io::Write::flush(&mut lock)?;
    Ok(())
}

/// Lay `doc` out with default options and write it to `writer`.
///
/// The writer is borrowed, not closed. A write error is returned as [`crate::RenderError::Io`]
/// with the original error inside; whatever was written before it stays written.
pub fn render_default_to<W, D>(writer: &mut W, doc: D) -> RenderResult<()>
where
    W: io::Write + ?Sized,
    D: LayoutDoc,
{
    render_with_options_to(writer, &LayoutOptions::default(), doc)
}

/// Lay `doc` out with `opts` and write it to `writer`.
#[tracing::instrument(skip(writer, doc))]
pub fn render_with_options_to<W, D>(
    writer: &mut W,
    opts: &LayoutOptions,
    doc: D,
) -> RenderResult<()>
where
    W: io::Write + ?Sized,
    D: LayoutDoc,
{
    opts.validate()?;
    let stream = doc.layout(opts);
    let mut sink = IoSink::new(writer);
    render_to_sink(stream, &mut sink)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/entry.rs"]
mod tests;
