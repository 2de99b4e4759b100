//! In-memory capture of tracing spans and events for assertions.
//!
//! Install a [`CaptureLayer`] on a registry with
//! `tracing::subscriber::with_default`, run the code under test, then query
//! the captured records. Each event remembers the name of the innermost span
//! it was emitted in, so tests can check that an event belongs to the
//! expected operation.

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    span::{Attributes, Id, Record},
};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A span that has been closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedSpan {
    /// Span name from the callsite metadata.
    pub name: String,
    /// Fields recorded at creation or later through `Span::record`.
    pub fields: BTreeMap<String, String>,
}

/// An emitted event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Event level.
    pub level: Level,
    /// Event target, normally the emitting module path.
    pub target: String,
    /// The `message` field, when present.
    pub message: Option<String>,
    /// Every other field, rendered as text.
    pub fields: BTreeMap<String, String>,
    /// Name of the innermost enclosing span, if any.
    pub span: Option<String>,
}

impl CapturedEvent {
    /// Returns the rendered value of `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

#[derive(Default)]
struct Captured {
    spans: Vec<CapturedSpan>,
    events: Vec<CapturedEvent>,
}

/// Layer that stores every closed span and emitted event.
///
/// Clones share storage, so keep one clone for assertions and hand the other
/// to the subscriber.
///
/// # Examples
/// ```
/// use arbor_test_support::tracing::CaptureLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = CaptureLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!(graph_id = 4, "graph analysed");
/// });
/// let event = layer.find_event("graph analysed").expect("event captured");
/// assert_eq!(event.field("graph_id"), Some("4"));
/// ```
#[derive(Clone, Default)]
pub struct CaptureLayer {
    captured: Arc<Mutex<Captured>>,
}

impl CaptureLayer {
    fn lock(&self) -> MutexGuard<'_, Captured> {
        self.captured.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.lock().spans.clone()
    }

    /// Returns the emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().events.clone()
    }

    /// Returns the first event whose message equals `message`.
    #[must_use]
    pub fn find_event(&self, message: &str) -> Option<CapturedEvent> {
        self.lock()
            .events
            .iter()
            .find(|event| event.message.as_deref() == Some(message))
            .cloned()
    }

    /// Returns every event at `level`.
    #[must_use]
    pub fn events_at(&self, level: Level) -> Vec<CapturedEvent> {
        self.lock()
            .events
            .iter()
            .filter(|event| event.level == level)
            .cloned()
            .collect()
    }

    /// Returns the closed spans named `name`.
    #[must_use]
    pub fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
        self.lock()
            .spans
            .iter()
            .filter(|span| span.name == name)
            .cloned()
            .collect()
    }
}

struct OpenSpan(CapturedSpan);

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut fields = BTreeMap::new();
        attrs.record(&mut FieldWriter {
            message: None,
            fields: &mut fields,
        });
        span.extensions_mut().insert(OpenSpan(CapturedSpan {
            name: attrs.metadata().name().to_owned(),
            fields,
        }));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(OpenSpan(open)) = span.extensions_mut().get_mut::<OpenSpan>() {
            values.record(&mut FieldWriter {
                message: None,
                fields: &mut open.fields,
            });
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(OpenSpan(closed)) = span.extensions_mut().remove::<OpenSpan>() else {
            return;
        };
        self.lock().spans.push(closed);
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut message = None;
        let mut fields = BTreeMap::new();
        event.record(&mut FieldWriter {
            message: Some(&mut message),
            fields: &mut fields,
        });
        let span = ctx
            .event_span(event)
            .map(|span| span.name().to_owned());
        self.lock().events.push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            message,
            fields,
            span,
        });
    }
}

struct FieldWriter<'a> {
    message: Option<&'a mut Option<String>>,
    fields: &'a mut BTreeMap<String, String>,
}

impl FieldWriter<'_> {
    fn store(&mut self, field: &Field, value: String) {
        if field.name() == "message"
            && let Some(message) = self.message.as_deref_mut()
        {
            *message = Some(value);
            return;
        }
        self.fields.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldWriter<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.store(field, value.to_string());
    }
}
