use super::*;

#[test]
fn buffer_threads_ownership_through_appends() {
    let buf = Buffer::with_capacity(8).push_char('a').push_str("bc");
    assert_eq!(buf.len(), 3);
    assert!(!buf.is_empty());
    assert_eq!(buf.finish(), "abc");
    assert!(Buffer::new().is_empty());
}

#[test]
fn finish_hands_back_the_same_allocation() {
    let buf = Buffer::with_capacity(64).push_str("xy");
    let out = buf.finish();
    assert!(out.capacity() >= 64);
}

#[test]
fn renders_char_line_text() {
    let s: DocStream = DocStream::char(
        'a',
        DocStream::line(2, DocStream::text("bc", DocStream::Empty)),
    );
    assert_eq!(render_strict(s), "a\n  bc");
}

#[test]
fn annotations_pass_the_buffer_through() {
    let s = DocStream::ann_push(
        "x",
        DocStream::ann_push("y", DocStream::ann_pop(DocStream::ann_pop(DocStream::Empty))),
    );
    assert_eq!(render_strict(s), "");
}

#[test]
fn render_into_continues_an_existing_buffer() {
    let s: DocStream = DocStream::text("world", DocStream::Empty);
    let buf = render_into(Buffer::new().push_str("hello "), s);
    assert_eq!(buf.finish(), "hello world");
}

#[test]
#[should_panic(expected = "invariant violation")]
fn fail_panics() {
    let s: DocStream = DocStream::text("partial", DocStream::Fail);
    let _ = render_strict(s);
}
