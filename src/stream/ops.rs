use crate::stream::{model::DocStream, token::Token};

impl<A> DocStream<A> {
    /// Drop every annotation node. The rendered text is unchanged.
    pub fn unannotate<B>(self) -> DocStream<B> {
        self.into_tokens().filter_map(Token::strip_ann).collect()
    }

    /// Rewrite each annotation payload with `f`, in stream order.
    pub fn map_annotations<B>(self, mut f: impl FnMut(A) -> B) -> DocStream<B> {
        self.into_tokens().map(|t| t.map_ann(&mut f)).collect()
    }

    /// Deepest annotation nesting reached along the stream.
    pub fn annotation_depth(&self) -> usize {
        let mut depth = 0usize;
        let mut max = 0usize;
        for node in self.nodes() {
            match node {
                DocStream::AnnPush(..) => {
                    depth += 1;
                    max = max.max(depth);
                }
                DocStream::AnnPop(_) => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        max
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stream/ops.rs"]
mod tests;
