use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::trace::AssignEvent;

/// Appends assignment events to a JSONL file. Logging failures degrade to
/// warnings; they never interrupt an assignment pass.
pub struct TraceLogger {
    sink: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                sink: Some(Mutex::new(file)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self { sink: None }
            }
        }
    }

    /// A logger that drops every event.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn log(&self, event: &AssignEvent) {
        let Some(sink) = &self.sink else {
            return; // tracing disabled
        };

        let line = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        match sink.lock() {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", line) {
                    eprintln!("Warning: failed to write trace event: {}", e);
                }
            }
            Err(e) => eprintln!("Warning: trace logger lock poisoned: {}", e),
        }
    }
}
