use super::*;
use crate::{LayoutDoc, RenderError, stream::model::DocStream};

/// Toy document: words joined by a single space, wrapped greedily at the page width.
struct Words(Vec<&'static str>);

impl LayoutDoc for Words {
    type Ann = ();

    fn layout(self, opts: &LayoutOptions) -> DocStream {
        let limit = opts.page_width.ribbon_chars().unwrap_or(usize::MAX);
        let mut tokens = Vec::new();
        let mut col = 0usize;
        for (i, w) in self.0.into_iter().enumerate() {
            if i > 0 {
                if col + 1 + w.len() > limit {
                    tokens.push(crate::Token::Line { indent: 2 });
                    col = 2;
                } else {
                    tokens.push(crate::Token::Char { ch: ' ' });
                    col += 1;
                }
            }
            tokens.push(crate::Token::text(w));
            col += w.len();
        }
        DocStream::from_tokens(tokens)
    }
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn default_to_writes_laid_out_document() {
    let mut out = Vec::new();
    render_default_to(&mut out, Words(vec!["lorem", "ipsum"])).unwrap();
    assert_eq!(out, b"lorem ipsum");
}

#[test]
fn options_drive_the_layout() {
    let mut out = Vec::new();
    render_with_options_to(
        &mut out,
        &LayoutOptions::with_width(8),
        Words(vec!["lorem", "ipsum"]),
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "lorem\n  ipsum");
}

#[test]
fn invalid_options_are_rejected_before_writing() {
    let mut out = Vec::new();
    let err = render_with_options_to(
        &mut out,
        &LayoutOptions::with_width(0),
        Words(vec!["x"]),
    )
    .unwrap_err();
    assert!(matches!(err, RenderError::Validation(_)));
    assert!(out.is_empty());
}

#[test]
fn io_errors_surface_as_io_variant() {
    let stream: DocStream = DocStream::text("x", DocStream::Empty);
    let err = render_default_to(&mut BrokenPipe, stream).unwrap_err();
    let RenderError::Io(inner) = err else {
        panic!("expected Io variant");
    };
    assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(inner.to_string(), "reader went away");
}

#[test]
fn dyn_writers_are_accepted() {
    let mut buf = Vec::new();
    let writer: &mut dyn io::Write = &mut buf;
    let stream: DocStream = DocStream::char('k', DocStream::Empty);
    render_default_to(writer, stream).unwrap();
    assert_eq!(buf, b"k");
}
