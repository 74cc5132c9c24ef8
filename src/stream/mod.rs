//! The laid-out document stream consumed by every renderer.

pub(crate) mod model;
pub(crate) mod ops;
pub(crate) mod token;
