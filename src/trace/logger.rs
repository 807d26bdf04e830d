use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::trace::TraceEvent;

/// Page event trace: one JSON object per line, appended as events are handled.
///
/// An unwritable trace only produces a warning on stderr; the page keeps running.
pub struct TraceLogger {
    sink: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(out) => Self {
                sink: Some(Mutex::new(out)),
            },
            Err(e) => {
                eprintln!(
                    "Warning: page trace '{}' unavailable, events will not be recorded: {}",
                    path, e
                );
                Self { sink: None }
            }
        }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::new(p),
            None => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, event: &TraceEvent) {
        let trace = match &self.sink {
            Some(trace) => trace,
            None => return,
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!(
                    "Warning: could not encode {} event (step {}): {}",
                    event.event, event.step, e
                );
                return;
            }
        };

        let mut out = match trace.lock() {
            Ok(out) => out,
            Err(e) => {
                eprintln!("Warning: page trace unusable after a panic: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            eprintln!("Warning: step {} missing from page trace: {}", event.step, e);
        }
    }
}

impl Default for TraceLogger {
    fn default() -> Self {
        Self::disabled()
    }
}
