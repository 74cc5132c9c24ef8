pub(crate) mod error;
pub(crate) mod indent;
pub(crate) mod violation;
