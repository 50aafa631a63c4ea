//! Bounded window of recent sentence vectors.
//!
//! The break decision for sentence `i` averages its similarity against the
//! most recent `window_size` vectors *before* it. A naive implementation
//! keeps a growing list and truncates it after every push; this module makes
//! the O(window_size) bound explicit with a capacity-bounded deque that
//! evicts oldest-first, so neither memory nor comparison cost can creep past
//! the configured size.

use std::collections::VecDeque;

use crate::similarity::cosine_from_norms;

/// A fixed-capacity window of recent vectors and their precomputed norms.
#[derive(Debug)]
pub(crate) struct Window {
    entries: VecDeque<(Vec<f32>, f32)>,
    capacity: usize,
}

impl Window {
    /// Create an empty window holding at most `capacity` vectors.
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a vector, evicting the oldest entry if the window is full.
    pub(crate) fn push(&mut self, vector: Vec<f32>, norm: f32) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((vector, norm));
    }

    /// Drop all entries and seed the window with a single vector.
    pub(crate) fn reset(&mut self, vector: Vec<f32>, norm: f32) {
        self.entries.clear();
        self.entries.push_back((vector, norm));
    }

    /// Average cosine similarity of `vector` against every held entry.
    ///
    /// Returns 0.0 for an empty window.
    pub(crate) fn mean_similarity(&self, vector: &[f32], norm: f32) -> f32 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .entries
            .iter()
            .map(|(v, n)| cosine_from_norms(v, *n, vector, norm))
            .sum();
        sum / self.entries.len() as f32
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
