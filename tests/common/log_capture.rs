use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// A warn-or-worse event seen by [`WarnCapture`]
#[derive(Debug, Clone, Default)]
pub struct CapturedWarning {
    pub message: String,
    pub item_id: Option<i64>,
    pub error: Option<String>,
}

/// Layer that records every `WARN` event so tests can assert on the log sink
#[derive(Clone, Default)]
pub struct WarnCapture {
    warnings: Arc<Mutex<Vec<CapturedWarning>>>,
}

impl WarnCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<CapturedWarning> {
        self.warnings.lock().unwrap().clone()
    }

    /// Subscriber to install with `tracing::subscriber::set_default`
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync {
        Registry::default().with(self.clone())
    }
}

struct WarningVisitor<'a>(&'a mut CapturedWarning);

impl Visit for WarningVisitor<'_> {
    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "item_id" {
            self.0.item_id = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.0.message = value.to_string(),
            "error" => self.0.error = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.0.message = format!("{value:?}"),
            "error" => self.0.error = Some(format!("{value:?}")),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for WarnCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }

        let mut captured = CapturedWarning::default();
        event.record(&mut WarningVisitor(&mut captured));
        self.warnings.lock().unwrap().push(captured);
    }
}
