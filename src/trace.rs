//! Conditional tracing macros (zero-cost when the feature is disabled).
//!
//! The pipeline reports spans and candidate counts through these macros;
//! with the `tracing` feature off they compile to nothing, keeping the
//! hot path free of instrumentation overhead.

/// Creates an info-level span for a pipeline stage.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an info-level event for key counts.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        // Evaluate the values to silence unused warnings, then discard.
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// No-op span guard standing in for `tracing::Span` when disabled.
///
/// Lets call sites keep the `let _span = trace_span!(...).entered();`
/// shape without conditional compilation.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns self, mimicking `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
