//! Majority-vote smoothing over recent raw predictions.
//!
//! A single misclassified frame must not flip the displayed action: a
//! label is confirmed only once it dominates a trailing window of raw
//! argmax predictions.

use std::collections::VecDeque;

/// Majority-vote filter over the last `window` predicted label indices.
pub struct SmoothingFilter {
    recent: VecDeque<usize>,
    window: usize,
    min_consistent: usize,
}

impl SmoothingFilter {
    /// Creates an empty filter.
    ///
    /// `min_consistent <= window` is enforced by the session
    /// configuration before a filter is built.
    pub fn new(window: usize, min_consistent: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(window),
            window,
            min_consistent,
        }
    }

    /// Records a raw prediction and reports whether it is confirmed.
    ///
    /// The observed index is appended (evicting the oldest beyond the
    /// window), then counted within the current window contents.
    pub fn observe(&mut self, label_index: usize) -> bool {
        self.recent.push_back(label_index);
        if self.recent.len() > self.window {
            self.recent.pop_front();
        }

        let count = self.recent.iter().filter(|&&i| i == label_index).count();
        count >= self.min_consistent
    }

    /// Number of predictions currently held.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// True when no predictions have been observed.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Forgets all observed predictions.
    pub fn clear(&mut self) {
        self.recent.clear();
    }
}
