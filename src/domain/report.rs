//! Ordered text output of one operation

use std::fmt;

use super::error::InspectError;

/// Lines produced by a single operation, title first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            lines: vec![title.into()],
        }
    }

    /// Append a `label: value` line
    pub fn field(mut self, label: &str, value: impl fmt::Display) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    /// Append a raw line
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Single-line rendering of a failed operation. Node and wallet messages
    /// may carry multi-line bodies; whitespace runs collapse to one space.
    pub fn failure(err: &InspectError) -> Self {
        let detail = err.detail().split_whitespace().collect::<Vec<_>>().join(" ");
        Self::new(format!("{}: {}", err.kind().label(), detail))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn title(&self) -> &str {
        &self.lines[0]
    }

    /// Value of the first `label: value` line, if present
    pub fn value(&self, label: &str) -> Option<&str> {
        let prefix = format!("{}: ", label);
        self.lines
            .iter()
            .find_map(|line| line.strip_prefix(prefix.as_str()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
