use crate::ui::MessageType;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 5;
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: MessageType,
    pub message: String,
    pub expires_at: Instant,
}

/// Bounded FIFO of transient toasts. Oldest entry is dropped on overflow.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    capacity: usize,
    ttl: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_CAPACITY, DEFAULT_NOTIFICATION_TTL)
    }
}

impl NotificationQueue {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            ttl,
        }
    }

    pub fn push(&mut self, kind: MessageType, message: impl Into<String>) {
        self.push_at(Instant::now(), kind, message);
    }

    pub fn push_at(&mut self, now: Instant, kind: MessageType, message: impl Into<String>) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            kind,
            message: message.into(),
            expires_at: now + self.ttl,
        });
    }

    /// Drops expired entries and returns the earliest remaining expiry, if any.
    pub fn prune(&mut self, now: Instant) -> Option<Instant> {
        self.entries.retain(|entry| entry.expires_at > now);
        self.entries.iter().map(|entry| entry.expires_at).min()
    }

    pub fn dismiss(&mut self, index: usize) {
        self.entries.remove(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
