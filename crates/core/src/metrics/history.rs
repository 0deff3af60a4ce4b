//! Fixed-capacity, newest-first record log.

use std::collections::VecDeque;

/// An ordered log that keeps at most `capacity` entries, newest first.
///
/// Inserting past capacity drops the oldest entries from the back.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedLog<T> {
    capacity: usize,
    entries: VecDeque<T>,
}

impl<T> BoundedLog<T> {
    /// Create an empty log holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Build a log from entries that are already newest-first.
    ///
    /// Anything beyond `capacity` is discarded.
    pub fn from_newest_first(capacity: usize, entries: impl IntoIterator<Item = T>) -> Self {
        let entries: VecDeque<T> = entries.into_iter().take(capacity).collect();
        Self { capacity, entries }
    }

    /// Insert a single entry at the front.
    pub fn push(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Insert a batch at the front, keeping the batch's own order.
    ///
    /// After `push_batch([a, b])` the log reads `a, b, <older entries>`.
    pub fn push_batch(&mut self, batch: Vec<T>) {
        for entry in batch.into_iter().rev() {
            self.entries.push_front(entry);
        }
        self.entries.truncate(self.capacity);
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
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

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Clone> BoundedLog<T> {
    /// Copy the entries out, newest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

impl<T> From<BoundedLog<T>> for Vec<T> {
    fn from(log: BoundedLog<T>) -> Self {
        log.entries.into()
    }
}

/// Round a mean the way the dashboards display it; empty input yields 0.
pub(crate) fn rounded_mean(total: f64, count: usize) -> u64 {
    if count == 0 {
        return 0;
    }
    (total / count as f64).round() as u64
}
