//! Minimal indexed priority queue with float priorities.
//!
//! Entries are kept sorted by `(priority, insertion sequence)`, so equal
//! priorities come out in insertion order. Every mutation is a linear scan
//! plus a sorted insert, which is plenty for mazes of a few hundred cells per
//! side. A binary heap with an element-to-slot index would make `contains`
//! and `update_priority` logarithmic without changing this interface.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct Entry<T> {
    element: T,
    priority: f64,
    sequence: u64,
}

impl<T> Entry<T> {
    fn key_cmp(&self, priority: f64, sequence: u64) -> Ordering {
        self.priority
            .total_cmp(&priority)
            .then_with(|| self.sequence.cmp(&sequence))
    }
}

/// Min-first priority queue; lower priority values are dequeued first.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: VecDeque<Entry<T>>,
    next_sequence: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            next_sequence: 0,
        }
    }
}

impl<T: PartialEq> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `element` with `priority`. Duplicates are stored as separate entries.
    pub fn enqueue(&mut self, element: T, priority: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.insert_sorted(Entry {
            element,
            priority,
            sequence,
        });
    }

    /// Remove and return the lowest-priority element, or `None` when empty.
    pub fn pop_min(&mut self) -> Option<T> {
        self.entries.pop_front().map(|entry| entry.element)
    }

    /// Remove and return the lowest-priority element.
    ///
    /// Fails with [`Error::EmptyQueue`] when the queue is empty.
    pub fn dequeue_min(&mut self) -> Result<T> {
        self.pop_min().ok_or(Error::EmptyQueue)
    }

    /// Peek at the lowest-priority element and its priority.
    pub fn peek_min(&self) -> Option<(&T, f64)> {
        self.entries
            .front()
            .map(|entry| (&entry.element, entry.priority))
    }

    pub fn contains(&self, element: &T) -> bool {
        self.entries.iter().any(|entry| entry.element == *element)
    }

    /// Current priority of the first entry equal to `element`.
    pub fn priority_of(&self, element: &T) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.element == *element)
            .map(|entry| entry.priority)
    }

    /// Replace the priority of every entry equal to `element`.
    ///
    /// Updated entries keep their original insertion sequence for tie-breaks.
    /// Returns `false` (and changes nothing) when the element is absent.
    pub fn update_priority(&mut self, element: &T, priority: f64) -> bool {
        let mut matched = Vec::new();
        let mut idx = 0;
        while idx < self.entries.len() {
            if self.entries[idx].element == *element {
                if let Some(entry) = self.entries.remove(idx) {
                    matched.push(entry);
                }
            } else {
                idx += 1;
            }
        }

        let updated = !matched.is_empty();
        for mut entry in matched {
            entry.priority = priority;
            self.insert_sorted(entry);
        }
        updated
    }

    /// Elements in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|entry| &entry.element)
    }

    fn insert_sorted(&mut self, entry: Entry<T>) {
        let idx = self
            .entries
            .partition_point(|existing| existing.key_cmp(entry.priority, entry.sequence).is_lt());
        self.entries.insert(idx, entry);
    }
}
