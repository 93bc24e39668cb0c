/// Emits a `tracing` event at `$level` under the `pixel_sum` target.
///
/// Without the `tracing` feature the whole invocation, fields included,
/// expands to nothing.
#[cfg(feature = "tracing")]
macro_rules! log_event {
    ($level:ident, $($field:tt)*) => {
        tracing::event!(target: "pixel_sum", tracing::Level::$level, $($field)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_event {
    ($level:ident, $($field:tt)*) => {};
}
