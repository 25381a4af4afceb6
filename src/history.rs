// src/history.rs
use chrono::Local;
use std::collections::VecDeque;

const HISTORY_WINDOW: usize = 3;

/// One generated email kept for display. Timestamps are pre-formatted;
/// nothing downstream does date math on them.
#[derive(Debug, Clone)]
pub struct EmailHistoryEntry {
    pub email: String,
    pub timestamp: String,
    pub job_role: String,
}

/// Rolling window of the most recent generated emails, owned by whoever
/// drives a session. Explicit state rather than a process-wide singleton,
/// so concurrent sessions never share a window. Nothing is persisted.
#[derive(Debug, Default)]
pub struct EmailHistory {
    entries: VecDeque<EmailHistoryEntry>,
}

impl EmailHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, email: String, job_role: String) {
        self.push_entry(EmailHistoryEntry {
            email,
            timestamp: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            job_role,
        });
    }

    fn push_entry(&mut self, entry: EmailHistoryEntry) {
        if self.entries.len() == HISTORY_WINDOW {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Most recent entries, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &EmailHistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
