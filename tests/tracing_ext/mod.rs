//! Tests for tracing integration.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use maybe_rail::prelude::*;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Span, Subscriber};

/// Subscriber that counts events per level and accepts every span.
#[derive(Clone, Default)]
struct CountingSubscriber {
    warnings: Arc<AtomicUsize>,
    debugs: Arc<AtomicUsize>,
    next_id: Arc<AtomicUsize>,
}

impl Subscriber for CountingSubscriber {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Id::from_u64(id as u64)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let level = *event.metadata().level();
        if level == Level::WARN {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        } else if level == Level::DEBUG {
            self.debugs.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

#[test]
fn trace_failure_emits_one_warning_for_failure() {
    let subscriber = CountingSubscriber::default();
    let warnings = Arc::clone(&subscriber.warnings);

    let outcome = tracing::subscriber::with_default(subscriber, || {
        Outcome::<i32>::fail("bad input").trace_failure()
    });

    assert_eq!(outcome.error(), "bad input");
    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}

#[test]
fn trace_failure_is_silent_for_success() {
    let subscriber = CountingSubscriber::default();
    let warnings = Arc::clone(&subscriber.warnings);

    let outcome =
        tracing::subscriber::with_default(subscriber, || Outcome::ok(5).trace_failure());

    assert_eq!(outcome, Outcome::ok(5));
    assert_eq!(warnings.load(Ordering::SeqCst), 0);
}

#[test]
fn status_trace_failure_emits_warning() {
    let subscriber = CountingSubscriber::default();
    let warnings = Arc::clone(&subscriber.warnings);

    tracing::subscriber::with_default(subscriber, || {
        let _ = Status::fail("locked").trace_failure();
        let _ = Status::ok().trace_failure();
    });

    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}

#[test]
fn trace_absent_emits_debug_only_when_absent() {
    let subscriber = CountingSubscriber::default();
    let debugs = Arc::clone(&subscriber.debugs);

    tracing::subscriber::with_default(subscriber, || {
        let _ = Maybe::<u8>::none().trace_absent("session");
        let _ = Maybe::some(1u8).trace_absent("session");
    });

    assert_eq!(debugs.load(Ordering::SeqCst), 1);
}

#[test]
fn with_span_prefixes_failure_with_span_name() {
    let subscriber = CountingSubscriber::default();

    let outcome = tracing::subscriber::with_default(subscriber, || {
        let span = tracing::info_span!("load_user");
        Outcome::<()>::fail("not found").with_span(&span)
    });

    assert_eq!(outcome.error(), "in span 'load_user': not found");
}

#[test]
fn with_span_passes_success_through() {
    let outcome = Outcome::ok(42).with_span(&Span::none());
    assert_eq!(outcome, Outcome::ok(42));

    let status = Status::ok().with_current_span();
    assert_eq!(status, Status::ok());
}

#[test]
fn with_current_span_without_subscriber_names_unknown() {
    let outcome = Outcome::<i32>::fail("failed").with_current_span();
    assert_eq!(outcome.error(), "in span 'unknown': failed");
}
