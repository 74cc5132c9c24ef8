use std::borrow::Cow;

/// Widths up to this value are served as borrowed slices of a static run of spaces.
pub const CACHED_INDENT: usize = 128;

const SPACES: &str = concat!(
    "                                                                ",
    "                                                                ",
);

/// Return a run of exactly `n` ASCII spaces.
///
/// Total for every `n`; `spaces(0)` is empty. Indentation recurs on every line break, so small
/// widths borrow from a static string and only wider indents allocate.
pub fn spaces(n: usize) -> Cow<'static, str> {
    match SPACES.get(..n) {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(" ".repeat(n)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/indent.rs"]
mod tests;
