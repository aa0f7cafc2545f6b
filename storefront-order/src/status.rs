use std::sync::Mutex;

/// Destination for the human-readable status lines produced during checkout
pub trait StatusSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Writes every status line to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn emit(&self, line: &str) {
        tracing::debug!(line, "status");
        println!("{}", line);
    }
}

/// Keeps status lines in memory instead of printing them
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl StatusSink for RecordingSink {
    fn emit(&self, line: &str) {
        tracing::debug!(line, "status");
        let mut lines = self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit("one");
        sink.emit("two");

        assert_eq!(sink.lines(), vec!["one".to_string(), "two".to_string()]);
    }
}
