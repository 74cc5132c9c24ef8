use super::*;

fn sample() -> DocStream<&'static str> {
    DocStream::char(
        'a',
        DocStream::ann_push(
            "em",
            DocStream::line(2, DocStream::text("bc", DocStream::ann_pop(DocStream::Empty))),
        ),
    )
}

#[test]
fn text_constructor_counts_chars_not_bytes() {
    let s: DocStream = DocStream::text("héllo", DocStream::Empty);
    let DocStream::Text(len, text, _) = s else {
        panic!("expected Text");
    };
    assert_eq!(len, 5);
    assert_eq!(text, "héllo");
}

#[test]
fn uncons_walks_front_to_back() {
    let mut s = sample();
    let mut seen = Vec::new();
    while let Some((token, rest)) = s.uncons() {
        seen.push(token);
        s = rest;
    }
    assert_eq!(
        seen,
        vec![
            Token::Char { ch: 'a' },
            Token::AnnPush { ann: "em" },
            Token::Line { indent: 2 },
            Token::Text {
                text: "bc".into(),
                hint: Some(2)
            },
            Token::AnnPop,
        ]
    );
}

#[test]
fn fail_unconses_to_empty() {
    let (token, rest) = DocStream::<()>::Fail.uncons().unwrap();
    assert_eq!(token, Token::Fail);
    assert!(matches!(rest, DocStream::Empty));
    assert!(DocStream::<()>::Empty.uncons().is_none());
}

#[test]
fn from_tokens_round_trips_through_into_tokens() {
    let tokens: Vec<_> = sample().into_tokens().collect();
    let rebuilt = DocStream::from_tokens(tokens);
    assert_eq!(rebuilt, sample());
}

#[test]
fn from_tokens_truncates_after_fail() {
    let s: DocStream = DocStream::from_tokens([
        Token::Char { ch: 'x' },
        Token::Fail,
        Token::Char { ch: 'y' },
    ]);
    let nodes: Vec<_> = s.nodes().map(|n| n.is_terminal()).collect();
    assert_eq!(nodes, vec![false, true]);
    assert!(matches!(s.nodes().last(), Some(DocStream::Fail)));
}

#[test]
fn len_excludes_terminal() {
    assert_eq!(sample().len(), 5);
    assert_eq!(DocStream::<()>::Empty.len(), 0);
    assert!(DocStream::<()>::Empty.is_empty());
    assert!(!sample().is_empty());
}

#[test]
fn clone_and_eq_are_structural() {
    let a = sample();
    let b = a.clone();
    assert_eq!(a, b);

    let c: DocStream<&'static str> = DocStream::char('a', DocStream::Empty);
    assert_ne!(a, c);
}

#[test]
fn debug_lists_nodes() {
    let s: DocStream = DocStream::char('a', DocStream::line(1, DocStream::Empty));
    assert_eq!(format!("{s:?}"), "[Char('a'), Line(1), Empty]");
}

#[test]
fn long_streams_drop_clone_and_compare_without_recursion() {
    let n = 1_000_000;
    let s: DocStream = DocStream::from_tokens((0..n).map(|_| Token::Line { indent: 0 }));
    assert_eq!(s.len(), n);
    let t = s.clone();
    assert!(s == t);
    drop(s);
    drop(t);
}
