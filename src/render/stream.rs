use crate::{
    foundation::{indent::spaces, violation::invariant_violation},
    render::sink::TextSink,
    stream::model::DocStream,
};

/// Write `stream` to `sink` node by node, never holding the rendered output in memory.
///
/// A `Line` produces two writes, the newline and then its indentation. Annotations produce no
/// writes. The first sink error is returned as-is and rendering stops there.
///
/// # Panics
///
/// On a `Fail` node (see [`crate::invariant_violation`]). Everything written before it stays
/// in the sink; nothing is rolled back.
#[tracing::instrument(skip_all)]
pub fn render_to_sink<A, S: TextSink + ?Sized>(
    stream: DocStream<A>,
    sink: &mut S,
) -> Result<(), S::Error> {
    let mut stream = stream;
    let mut writes = 0usize;
    loop {
        stream = match stream {
            DocStream::Fail => invariant_violation(),
            DocStream::Empty => break,
            DocStream::Char(c, rest) => {
                sink.write_char(c)?;
                writes += 1;
                rest.into_inner()
            }
            DocStream::Text(_, text, rest) => {
                sink.write_str(&text)?;
                writes += 1;
                rest.into_inner()
            }
            DocStream::Line(indent, rest) => {
                sink.write_char('\n')?;
                sink.write_str(&spaces(indent))?;
                writes += 2;
                rest.into_inner()
            }
            DocStream::AnnPush(_, rest) | DocStream::AnnPop(rest) => rest.into_inner(),
        };
    }
    tracing::debug!(writes, "stream render finished");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/stream.rs"]
mod tests;
