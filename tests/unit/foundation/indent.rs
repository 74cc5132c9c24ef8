use super::*;

#[test]
fn static_run_matches_cache_width() {
    assert_eq!(SPACES.len(), CACHED_INDENT);
    assert!(SPACES.bytes().all(|b| b == b' '));
}

#[test]
fn zero_is_empty() {
    assert_eq!(spaces(0), "");
    assert!(matches!(spaces(0), Cow::Borrowed(_)));
}

#[test]
fn length_is_exact_and_only_spaces() {
    for n in [1, 2, 7, 63, 64, 127, 128, 129, 500, 4096] {
        let s = spaces(n);
        assert_eq!(s.len(), n, "width {n}");
        assert!(s.chars().all(|c| c == ' '), "width {n}");
    }
}

#[test]
fn small_widths_borrow_and_large_widths_allocate() {
    assert!(matches!(spaces(CACHED_INDENT), Cow::Borrowed(_)));
    assert!(matches!(spaces(CACHED_INDENT + 1), Cow::Owned(_)));
}
