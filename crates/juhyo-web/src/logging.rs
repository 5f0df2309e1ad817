//! Tracing layer that forwards events to the browser console.
//!
//! Events are flattened to one line, `LEVEL target: message key=value ...`,
//! and handed to a [`ConsoleSink`]. In the browser the sink is
//! [`BrowserConsole`], which picks the `console` method matching the level.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Destination for formatted log lines
pub trait ConsoleSink: Send + Sync + 'static {
    fn write(&self, level: Level, line: &str);
}

/// A tracing Layer that writes one line per event to a [`ConsoleSink`]
pub struct ConsoleLayer {
    sink: Arc<dyn ConsoleSink>,
}

impl ConsoleLayer {
    pub fn new(sink: Arc<dyn ConsoleSink>) -> Self {
        Self { sink }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = format_line(
            *metadata.level(),
            metadata.target(),
            visitor.message.as_deref().unwrap_or_default(),
            &visitor.fields,
        );
        self.sink.write(*metadata.level(), &line);
    }
}

fn format_line(level: Level, target: &str, message: &str, fields: &[(String, String)]) -> String {
    let mut line = format!("{} {}: {}", level, target, message);
    for (name, value) in fields {
        let _ = write!(line, " {}={}", name, value);
    }
    line
}

/// Collects the message and remaining fields in record order
#[derive(Default)]
struct LineVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl LineVisitor {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for LineVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);
        self.push(field, buf);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, value.to_string());
    }
}

/// Writes to `console.error`, `console.warn`, `console.info` or
/// `console.debug` by level
#[cfg(target_arch = "wasm32")]
pub struct BrowserConsole;

#[cfg(target_arch = "wasm32")]
impl ConsoleSink for BrowserConsole {
    fn write(&self, level: Level, line: &str) {
        let line = wasm_bindgen::JsValue::from_str(line);
        match level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

/// Install the console layer as the global subscriber, filtered to
/// `max_level`. Does nothing if a subscriber is already set.
#[cfg(target_arch = "wasm32")]
pub fn init(max_level: Level) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let layer = ConsoleLayer::new(Arc::new(BrowserConsole)).with_filter(LevelFilter::from_level(max_level));
    let _ = tracing_subscriber::registry().with(layer).try_init();
}
