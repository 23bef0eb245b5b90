//! Action classification boundary.
//!
//! The trained model is external to the decision core: the session only
//! requires something that scores a full window of landmark vectors
//! against the configured label set. This trait allows swapping
//! implementations (real model vs mock vs recorded replay).

pub mod scripted;

pub use scripted::ScriptedClassifier;

use crate::error::{Result, SignstreamError};
use crate::session::types::LandmarkVector;
use std::sync::Arc;

/// Trait for window classification.
pub trait ActionClassifier: Send + Sync {
    /// Scores a ready window of landmark vectors, oldest first.
    ///
    /// # Returns
    /// One probability per configured label, in label-set order. The
    /// values are expected to sum to roughly 1, but this is not enforced.
    fn classify(&self, window: &[LandmarkVector]) -> Result<Vec<f32>>;

    /// Name of the loaded model for logging/debugging.
    fn model_name(&self) -> &str {
        "classifier"
    }
}

/// Implement ActionClassifier for Arc<T> to allow sharing across sessions.
impl<T: ActionClassifier> ActionClassifier for Arc<T> {
    fn classify(&self, window: &[LandmarkVector]) -> Result<Vec<f32>> {
        (**self).classify(window)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Index and value of the highest score; ties resolve to the lowest index.
///
/// Returns `None` for an empty score vector.
pub fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, value)) if score <= value => {}
            _ => best = Some((index, score)),
        }
    }
    best
}

/// Mock classifier for testing
pub struct MockClassifier {
    scores: Vec<f32>,
    should_fail: bool,
}

impl MockClassifier {
    /// Create a mock that always returns the given scores
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            scores,
            should_fail: false,
        }
    }

    /// Configure the mock to fail on classify
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl ActionClassifier for MockClassifier {
    fn classify(&self, _window: &[LandmarkVector]) -> Result<Vec<f32>> {
        if self.should_fail {
            Err(SignstreamError::Classification {
                message: "mock classification failure".to_string(),
            })
        } else {
            Ok(self.scores.clone())
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
