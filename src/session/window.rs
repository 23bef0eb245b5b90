//! Sliding window of recent landmark vectors.
//!
//! Fixed-capacity FIFO: once full, each push evicts exactly the single
//! oldest vector. The window is ready for classification only when it
//! holds `capacity` frames, and stays ready for the rest of the session.

use crate::error::{Result, SignstreamError};
use crate::session::types::LandmarkVector;

/// View of the window contents immediately after a push.
#[derive(Debug)]
pub struct WindowSnapshot<'a> {
    /// Window contents, oldest first.
    pub frames: &'a [LandmarkVector],
    /// True when the window holds exactly `capacity` frames.
    pub ready: bool,
}

/// Fixed-capacity FIFO buffer of landmark vectors.
pub struct WindowBuffer {
    frames: Vec<LandmarkVector>,
    capacity: usize,
    feature_width: usize,
    // Vector displaced by the most recent push, kept for rollback.
    last_evicted: Option<LandmarkVector>,
}

impl WindowBuffer {
    /// Creates an empty window.
    ///
    /// `capacity` and `feature_width` are validated by the session
    /// configuration before a buffer is built.
    pub fn new(capacity: usize, feature_width: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
            feature_width,
            last_evicted: None,
        }
    }

    /// Appends a vector, evicting the oldest frame once at capacity.
    ///
    /// Rejects vectors whose width disagrees with the configured feature
    /// width — that is a session-fatal extractor misconfiguration.
    pub fn push(&mut self, vector: LandmarkVector) -> Result<WindowSnapshot<'_>> {
        if vector.len() != self.feature_width {
            return Err(SignstreamError::DimensionMismatch {
                expected: self.feature_width,
                actual: vector.len(),
            });
        }

        self.last_evicted = if self.frames.len() == self.capacity {
            Some(self.frames.remove(0))
        } else {
            None
        };
        self.frames.push(vector);

        Ok(WindowSnapshot {
            frames: &self.frames,
            ready: self.frames.len() == self.capacity,
        })
    }

    /// Undoes the most recent push, restoring the evicted frame if one
    /// was displaced.
    ///
    /// Used when classification of the freshly pushed window fails, so a
    /// failed frame leaves the buffer exactly as it was.
    pub fn rollback(&mut self) {
        if self.frames.pop().is_some()
            && let Some(evicted) = self.last_evicted.take()
        {
            self.frames.insert(0, evicted);
        }
    }

    /// Window contents, oldest first.
    pub fn frames(&self) -> &[LandmarkVector] {
        &self.frames
    }

    /// Number of frames currently held.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no frames are held.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// True when the window holds `capacity` frames.
    pub fn is_ready(&self) -> bool {
        self.frames.len() == self.capacity
    }

    /// Removes all frames.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.last_evicted = None;
    }
}
