/// Message carried by the panic raised when a `Fail` node reaches a renderer.
pub const UNCAUGHT_FAIL: &str =
    "invariant violation: uncaught Fail in DocStream (unresolved layout fallback)";

/// Abort the current render because the stream contained `Fail`.
///
/// This is a producer-side defect, not an input error, so it is reported by panicking rather
/// than through [`crate::RenderError`]. Unwinding drops whatever the caller holds (sinks
/// included), so scoped resources are still released. Output already written to a sink stays
/// there; nothing is rolled back.
#[cold]
#[track_caller]
pub fn invariant_violation() -> ! {
    tracing::error!(target: "docstream_render", "{UNCAUGHT_FAIL}");
    panic!("{UNCAUGHT_FAIL}");
}
