//! Tests for the tracing events emitted by builders.

use std::sync::{Arc, Mutex};

use collectforge::{lists, Collect};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Debug, Clone, PartialEq)]
struct Captured {
    level: Level,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureLayer {
    fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .push((field.name().to_string(), format!("{:?}", value)));
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("collectforge") {
            return;
        }
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            fields: visitor.fields,
        });
    }
}

fn field<'a>(event: &'a Captured, name: &str) -> Option<&'a str> {
    event
        .fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn capture<F: FnOnce()>(run: F) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, run);
    layer.events()
}

#[test]
fn test_traversal_reports_chosen_path() {
    let events = capture(|| {
        lists::transform(&vec![1, 2, 3], |n| n + 1);
        lists::transform(&std::collections::LinkedList::from([1, 2]), |n| n + 1);
    });

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event.level == Level::TRACE));
    assert_eq!(field(&events[0], "traversal"), Some("indexed"));
    assert_eq!(field(&events[0], "len"), Some("3"));
    assert_eq!(field(&events[1], "traversal"), Some("sequential"));
}

#[test]
fn test_rejection_is_logged_at_debug() {
    let events = capture(|| {
        let result = Collect::new(&vec![1, 2, 3])
            .maybe_filter(None::<fn(&i32) -> bool>)
            .into_vec();
        assert!(result.is_err());
    });

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(field(&events[0], "argument"), Some("predicate"));
}
