//! Data types for the recognition session.

use serde::{Deserialize, Serialize};

/// A single frame's landmark feature vector.
///
/// Produced by a [`KeypointExtractor`](crate::extract::KeypointExtractor)
/// and owned by the window buffer for as long as the frame stays resident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkVector(Vec<f32>);

impl LandmarkVector {
    /// Creates a landmark vector from raw feature values.
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Number of features in this vector.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the vector carries no features.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Feature values in extractor order.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for LandmarkVector {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

/// Per-frame output of the decision core.
///
/// `prediction` is the live value: the label that passed confirmation and
/// the confidence gate on this frame, even when the sentence suppressed an
/// immediate repeat. `sentence` is the committed, de-duplicated transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDecision {
    /// Label accepted on this frame, if any.
    pub prediction: Option<String>,
    /// Confidence of the top class on this frame (0.0 while the window
    /// is still filling).
    pub confidence: f32,
    /// Running transcript after this frame.
    pub sentence: Vec<String>,
}

impl FrameDecision {
    /// Creates a decision record.
    pub fn new(prediction: Option<String>, confidence: f32, sentence: Vec<String>) -> Self {
        Self {
            prediction,
            confidence,
            sentence,
        }
    }

    /// Decision for a frame that only filled the window.
    pub fn filling(sentence: Vec<String>) -> Self {
        Self::new(None, 0.0, sentence)
    }
}
