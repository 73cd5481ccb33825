// src/core/history.rs
use std::collections::VecDeque;
use chrono::{DateTime, Utc};

use crate::models::HistoryEntry;

/// Passwords checked during the current session, oldest first.
///
/// Holds at most `capacity` entries; pushing past that drops the oldest.
#[derive(Debug, Clone)]
pub struct PasswordHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl PasswordHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, password: &str) {
        self.record_at(password, Utc::now());
    }

    pub fn record_at(&mut self, password: &str, entered_at: DateTime<Utc>) {
        if password.is_empty() {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            password: password.to_string(),
            entered_at,
        });
    }

    /// Entries numbered from 1, oldest first.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries.iter().enumerate().map(|(idx, entry)| (idx + 1, entry))
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
}
