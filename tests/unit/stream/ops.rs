use super::*;

fn nested() -> DocStream<u32> {
    DocStream::from_tokens([
        Token::AnnPush { ann: 1 },
        Token::text("a"),
        Token::AnnPush { ann: 2 },
        Token::Char { ch: 'b' },
        Token::AnnPop,
        Token::AnnPop,
        Token::Line { indent: 1 },
    ])
}

#[test]
fn unannotate_removes_push_and_pop() {
    let s: DocStream<()> = nested().unannotate();
    assert_eq!(s.len(), 3);
    assert!(s.into_tokens().all(|t| !t.is_annotation()));
}

#[test]
fn map_annotations_rewrites_in_order() {
    let mut order = Vec::new();
    let s = nested().map_annotations(|n| {
        order.push(n);
        format!("ann{n}")
    });
    assert_eq!(order, vec![1, 2]);
    let anns: Vec<String> = s
        .into_tokens()
        .filter_map(|t| match t {
            Token::AnnPush { ann } => Some(ann),
            _ => None,
        })
        .collect();
    assert_eq!(anns, vec!["ann1".to_string(), "ann2".to_string()]);
}

#[test]
fn annotation_depth_tracks_nesting() {
    assert_eq!(nested().annotation_depth(), 2);
    assert_eq!(DocStream::<u32>::Empty.annotation_depth(), 0);
}
