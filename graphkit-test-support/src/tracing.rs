//! Recording layer for asserting spans and events in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ::tracing::field::{Field, Visit};
use ::tracing::span::{Attributes, Id, Record};
use ::tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Layer that captures closed spans and emitted events.
///
/// Clones share storage, so a test can keep one handle while the subscriber
/// owns another.
///
/// # Examples
/// ```
/// use graphkit_test_support::tracing::RecordingLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _span = tracing::info_span!("demo.work", items = 3).entered();
/// });
/// let span = layer.span_named("demo.work").expect("span closed");
/// assert_eq!(span.field("items"), Some("3"));
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
    events: Arc<Mutex<Vec<EventRecord>>>,
}

impl RecordingLayer {
    /// Returns the closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        lock(&self.spans).clone()
    }

    /// Returns the emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        lock(&self.events).clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        lock(&self.spans)
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns the events whose `message` field equals `message`.
    #[must_use]
    pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
        lock(&self.events)
            .iter()
            .filter(|event| event.field("message") == Some(message))
            .cloned()
            .collect()
    }
}

fn lock<T>(records: &Mutex<T>) -> MutexGuard<'_, T> {
    records.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A closed span with its name and recorded fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the tracing metadata.
    pub name: String,
    /// Fields recorded at creation or later through `Span::record`.
    pub fields: HashMap<String, String>,
}

impl SpanRecord {
    /// Returns the rendered value of `name`, if recorded.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// An emitted event with its level, target and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Event fields, including `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Returns the rendered value of `name`, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct PendingSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldRecorder(&mut record.fields));
        span.extensions_mut().insert(PendingSpan(record));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut extensions = span.extensions_mut();
        if let Some(PendingSpan(record)) = extensions.get_mut::<PendingSpan>() {
            values.record(&mut FieldRecorder(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        if let Some(PendingSpan(record)) = span.extensions_mut().remove::<PendingSpan>() {
            lock(&self.spans).push(record);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        lock(&self.events).push(EventRecord {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            fields,
        });
    }
}

/// Renders fields with `Display` where tracing hands over a primitive.
struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

impl FieldRecorder<'_> {
    fn insert(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.to_string());
    }
}
