//! Tracing integration for maybe-rail.
//!
//! This module provides taps that report railway state to the `tracing`
//! ecosystem, and helpers that record the active span in failure messages.
//! The containers themselves never log.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! maybe-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::maybe::Maybe;
use crate::outcome::{Outcome, Status};
use crate::types::ErrorMessage;

/// Extension trait adding tracing taps and span context to failures.
///
/// # Example
///
/// ```rust,ignore
/// use maybe_rail::prelude::*;
/// use maybe_rail::tracing_ext::OutcomeTraceExt;
///
/// fn load_user(id: u64) -> Outcome<User> {
///     let span = tracing::info_span!("load_user", user_id = id);
///     let _guard = span.enter();
///
///     repository.find(id)
///         .to_outcome("user not found")
///         .with_current_span()
///         .trace_failure()
/// }
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits one `WARN` event carrying the failure message; successes emit nothing.
    fn trace_failure(self) -> Self;

    /// Prefixes a failure message with the current span's name.
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Prefixes a failure message with the given span's name.
    ///
    /// Unlike `with_current_span()`, this method uses the provided span
    /// instead of the current span.
    fn with_span(self, span: &Span) -> Self;
}

impl<T> OutcomeTraceExt for Outcome<T> {
    fn trace_failure(self) -> Self {
        if let Outcome::Failure(message) = &self {
            tracing::warn!(error = %message, "outcome failed");
        }
        self
    }

    fn with_span(self, span: &Span) -> Self {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(message) => Outcome::Failure(in_span(span, &message)),
        }
    }
}

impl OutcomeTraceExt for Status {
    fn trace_failure(self) -> Self {
        if let Status::Failure(message) = &self {
            tracing::warn!(error = %message, "status failed");
        }
        self
    }

    fn with_span(self, span: &Span) -> Self {
        match self {
            Status::Success => Status::Success,
            Status::Failure(message) => Status::Failure(in_span(span, &message)),
        }
    }
}

/// Extension trait reporting absent values to `tracing`.
pub trait MaybeTraceExt: Sized {
    /// Emits one `DEBUG` event naming `what` when the value is absent.
    fn trace_absent(self, what: &str) -> Self;
}

impl<T> MaybeTraceExt for Maybe<T> {
    fn trace_absent(self, what: &str) -> Self {
        if self.is_absent() {
            tracing::debug!(what, "value absent");
        }
        self
    }
}

/// Renders the span name in front of a failure message.
///
/// A span without metadata (for instance `Span::none()`) is named `unknown`.
fn in_span(span: &Span, message: &str) -> ErrorMessage {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    ErrorMessage::Owned(format!("in span '{}': {}", name, message))
}
