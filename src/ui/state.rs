//! Narrative log shown beside the arena

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of entries kept
pub const DEFAULT_LOG_CAPACITY: usize = 10;

/// Presentation tag for a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Normal,
    Reward,
    Damage,
}

/// An entry in the narrative log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub category: LogCategory,
}

/// Capped log of discrete game events, oldest entries evicted first
#[derive(Debug, Clone)]
pub struct NarrativeLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    /// Entries ever pushed, including evicted ones
    total: usize,
}

impl NarrativeLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Add an entry to the log
    pub fn push(&mut self, message: impl Into<String>, category: LogCategory) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            message: message.into(),
            category,
        });
        self.total += 1;
    }

    pub fn normal(&mut self, message: impl Into<String>) {
        self.push(message, LogCategory::Normal);
    }

    pub fn reward(&mut self, message: impl Into<String>) {
        self.push(message, LogCategory::Reward);
    }

    pub fn damage(&mut self, message: impl Into<String>) {
        self.push(message, LogCategory::Damage);
    }

    /// Entries from most recent to oldest
    pub fn recent(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries ever pushed; lets a poller find what is new
    pub fn total_logged(&self) -> usize {
        self.total
    }
}

impl Default for NarrativeLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
