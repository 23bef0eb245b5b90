//! Keypoint extraction boundary.
//!
//! Landmark detection is external to the decision core: the session only
//! requires something that turns raw frame bytes into a landmark vector.
//! The trait allows swapping implementations (real pose detector vs mock
//! vs recorded replay).

pub mod json_lines;

pub use json_lines::JsonLinesExtractor;

use crate::error::{Result, SignstreamError};
use crate::session::types::LandmarkVector;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for per-frame landmark extraction.
pub trait KeypointExtractor: Send + Sync {
    /// Extracts the landmark vector for one frame.
    ///
    /// # Arguments
    /// * `frame` - Raw frame bytes in whatever encoding the extractor expects
    ///
    /// # Returns
    /// The frame's feature vector, or an error for undecodable input
    fn extract(&self, frame: &[u8]) -> Result<LandmarkVector>;

    /// Name for logging/debugging.
    fn name(&self) -> &'static str {
        "extractor"
    }
}

/// Mock extractor for testing
pub struct MockExtractor {
    vector: Vec<f32>,
    always_fail: bool,
    fail_on: Option<usize>,
    calls: AtomicUsize,
}

impl MockExtractor {
    /// Create a mock producing a zero vector of the given width
    pub fn new(width: usize) -> Self {
        Self {
            vector: vec![0.0; width],
            always_fail: false,
            fail_on: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Configure the mock to return a specific vector
    pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
        self.vector = vector;
        self
    }

    /// Configure the mock to fail on every extraction
    pub fn with_failure(mut self) -> Self {
        self.always_fail = true;
        self
    }

    /// Configure the mock to fail only on the nth call (0-based)
    pub fn fail_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }
}

impl KeypointExtractor for MockExtractor {
    fn extract(&self, _frame: &[u8]) -> Result<LandmarkVector> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if self.always_fail || self.fail_on == Some(call) {
            return Err(SignstreamError::InvalidFrame {
                message: "mock extraction failure".to_string(),
            });
        }
        Ok(LandmarkVector::new(self.vector.clone()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
