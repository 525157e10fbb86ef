//! Event emission under the `tracing` feature.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use marketguard::testing::failures;
use marketguard::{Classifier, ClassifierConfig, TrustLevel, can_access};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts events emitted from this crate.
#[derive(Clone, Default)]
struct EventCounter(Arc<AtomicUsize>);

impl EventCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target().starts_with("marketguard") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs `f` with a thread-local subscriber and returns the number of
/// crate events it emitted.
fn count_events(f: impl FnOnce()) -> usize {
    let counter = EventCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, f);
    counter.count()
}

#[test]
fn test_classifier_emits_events_by_default() {
    let classifier = Classifier::default();
    let emitted = count_events(|| {
        for raw in failures::all() {
            let _ = classifier.classify(&raw);
        }
    });
    assert!(emitted >= failures::all().len());
}

#[test]
fn test_emit_events_false_silences_classifier() {
    let classifier =
        Classifier::new(ClassifierConfig::builder().emit_events(false).build()).unwrap();
    let emitted = count_events(|| {
        for raw in failures::all() {
            let _ = classifier.classify(&raw);
        }
    });
    assert_eq!(emitted, 0);
}

#[test]
fn test_denial_emits_event() {
    let allowed = count_events(|| {
        let _ = can_access(TrustLevel::Core, TrustLevel::Trusted);
    });
    assert_eq!(allowed, 0);

    let denied = count_events(|| {
        let _ = can_access(TrustLevel::Sandbox, TrustLevel::Trusted);
    });
    assert!(denied > 0);
}
