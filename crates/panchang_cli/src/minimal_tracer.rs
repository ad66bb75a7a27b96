//! Stderr subscriber filtered by `RUST_LOG`.
//!
//! `RUST_LOG` is a comma-separated list of `level`, `target` or
//! `target=level` entries; an event passes when any entry matches it.
//! With `RUST_LOG` unset nothing is printed.

use std::env;
use std::fmt::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::field::Visit;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_core::Field;
use tracing_core::span::{Attributes, Id, Record};

struct FieldWriter<'a> {
    out: &'a mut String,
}

impl Visit for FieldWriter<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let _ = if field.name() == "message" {
            write!(self.out, "{value:?} ")
        } else {
            write!(self.out, "{}={:?} ", field.name(), value)
        };
    }
}

#[derive(Debug, PartialEq)]
struct LogFilter {
    target: Option<String>,
    level: Option<Level>,
}

impl LogFilter {
    fn parse(entry: &str) -> Self {
        let entry = entry.trim();
        if let Some((target, level)) = entry.split_once('=') {
            return Self {
                target: Some(target.to_string()),
                level: parse_level(level),
            };
        }
        match parse_level(entry) {
            Some(level) => Self {
                target: None,
                level: Some(level),
            },
            None => Self {
                target: Some(entry.to_string()),
                level: None,
            },
        }
    }

    /// A level filter admits that level and everything more severe.
    fn admits(&self, metadata: &Metadata<'_>) -> bool {
        let level_ok = self.level.is_none_or(|max| *metadata.level() <= max);
        let target_ok = self
            .target
            .as_deref()
            .is_none_or(|t| metadata.target().starts_with(t));
        level_ok && target_ok
    }
}

fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

pub struct MinimalTracer {
    filters: Option<Vec<LogFilter>>,
}

impl MinimalTracer {
    fn from_env_value(value: Option<&str>) -> Self {
        let filters = value.map(|s| {
            s.split(',')
                .filter(|e| !e.trim().is_empty())
                .map(LogFilter::parse)
                .collect()
        });
        Self { filters }
    }

    /// Install as the global subscriber, configured from `RUST_LOG`.
    pub fn register() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let value = env::var("RUST_LOG").ok();
        tracing::subscriber::set_global_default(Self::from_env_value(value.as_deref()))
    }
}

static NEXT_SPAN: AtomicU64 = AtomicU64::new(1);

impl Subscriber for MinimalTracer {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        match &self.filters {
            None => false,
            Some(filters) if filters.is_empty() => true,
            Some(filters) => filters.iter().any(|f| f.admits(metadata)),
        }
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(NEXT_SPAN.fetch_add(1, Ordering::Relaxed))
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let metadata = event.metadata();
        let mut text = String::new();
        event.record(&mut FieldWriter { out: &mut text });
        eprintln!("{} {}: {}", metadata.level(), metadata.target(), text.trim_end());
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}
