use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Ordering convention of a feed.
///
/// Provisioning logs read top-to-bottom like a terminal (oldest first, new
/// lines appended at the bottom); the security event feed shows the newest
/// record at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedOrder {
    OldestFirst,
    NewestFirst,
}

/// Bounded, ordered record buffer.
///
/// `append` inserts at the "new" end of the feed and evicts from the "old"
/// end until the length is back within `capacity`. There is no other way to
/// remove or change a record. A capacity of 0 is legal: every appended
/// record is evicted immediately and the buffer stays empty.
#[derive(Debug, Clone)]
pub struct FeedBuffer<R> {
    records: VecDeque<R>,
    capacity: usize,
    order: FeedOrder,
}

impl<R> FeedBuffer<R> {
    pub fn new(capacity: usize, order: FeedOrder) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            order,
        }
    }

    /// Insert `record` at the new end, then evict oldest records until the
    /// capacity invariant holds again.
    pub fn append(&mut self, record: R) {
        match self.order {
            FeedOrder::OldestFirst => self.records.push_back(record),
            FeedOrder::NewestFirst => self.records.push_front(record),
        }
        while self.records.len() > self.capacity {
            match self.order {
                FeedOrder::OldestFirst => self.records.pop_front(),
                FeedOrder::NewestFirst => self.records.pop_back(),
            };
        }
    }

    /// One-shot initial population. `records` must already be in feed order;
    /// anything beyond `capacity` is dropped.
    pub fn seed<I: IntoIterator<Item = R>>(&mut self, records: I) {
        for record in records {
            if self.records.len() == self.capacity {
                break;
            }
            self.records.push_back(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn order(&self) -> FeedOrder {
        self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    /// Most recently appended record, regardless of feed order.
    pub fn newest(&self) -> Option<&R> {
        match self.order {
            FeedOrder::OldestFirst => self.records.back(),
            FeedOrder::NewestFirst => self.records.front(),
        }
    }
}

impl<R: Clone> FeedBuffer<R> {
    /// Owned copy of the current contents, safe to iterate while the buffer
    /// keeps mutating.
    pub fn snapshot(&self) -> Vec<R> {
        self.records.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_invariant_holds_after_every_append() {
        let mut buffer = FeedBuffer::new(3, FeedOrder::OldestFirst);
        for n in 0..10 {
            buffer.append(n);
            assert_eq!(buffer.len(), (n + 1).min(3));
        }
    }

    #[test]
    fn test_evicts_oldest_keeps_append_order() {
        let mut buffer = FeedBuffer::new(3, FeedOrder::OldestFirst);
        for label in ["A", "B", "C", "D"] {
            buffer.append(label);
        }
        assert_eq!(buffer.snapshot(), vec!["B", "C", "D"]);
        assert_eq!(buffer.newest(), Some(&"D"));
    }

    #[test]
    fn test_newest_first_prepends_and_evicts_from_back() {
        let mut buffer = FeedBuffer::new(3, FeedOrder::NewestFirst);
        for label in ["A", "B", "C", "D"] {
            buffer.append(label);
        }
        assert_eq!(buffer.snapshot(), vec!["D", "C", "B"]);
        assert_eq!(buffer.newest(), Some(&"D"));
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut buffer = FeedBuffer::new(0, FeedOrder::OldestFirst);
        buffer.append(1);
        buffer.append(2);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_seed_preserves_given_order_and_clamps() {
        let mut buffer = FeedBuffer::new(3, FeedOrder::NewestFirst);
        buffer.seed(vec!["newest", "mid", "oldest", "dropped"]);
        assert_eq!(buffer.snapshot(), vec!["newest", "mid", "oldest"]);
        // A later append still lands at the top.
        buffer.append("live");
        assert_eq!(buffer.snapshot(), vec!["live", "newest", "mid"]);
    }
}
