//! Bounded narrative log for the display

use std::collections::VecDeque;

/// Append-only message sink keeping the most recent lines
#[derive(Debug, Clone)]
pub struct MessageLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!(target: "qrogue::narrative", "{}", line);
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        for line in lines {
            self.push(line);
        }
    }

    /// Oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_most_recent_lines() {
        let mut log = MessageLog::new(3);
        for i in 0..5 {
            log.push(format!("line {}", i));
        }
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines, ["line 2", "line 3", "line 4"]);
        assert_eq!(log.last(), Some("line 4"));
    }

    #[test]
    fn test_zero_capacity_still_keeps_one() {
        let mut log = MessageLog::new(0);
        log.push("a");
        log.push("b");
        assert_eq!(log.len(), 1);
        assert_eq!(log.last(), Some("b"));
    }
}
