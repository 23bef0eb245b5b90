//! Extractor for pre-recorded landmark streams.
//!
//! Treats each frame as a JSON array of feature values, the interchange
//! format produced by landmark-capture tooling. Lets the decision core be
//! replayed offline without a camera or pose model.

use crate::error::{Result, SignstreamError};
use crate::extract::KeypointExtractor;
use crate::session::types::LandmarkVector;

/// Parses frames that are JSON arrays of f32 features.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesExtractor;

impl JsonLinesExtractor {
    /// Creates a new JSON-lines extractor.
    pub fn new() -> Self {
        Self
    }
}

impl KeypointExtractor for JsonLinesExtractor {
    fn extract(&self, frame: &[u8]) -> Result<LandmarkVector> {
        let values: Vec<f32> =
            serde_json::from_slice(frame).map_err(|e| SignstreamError::InvalidFrame {
                message: format!("frame is not a JSON landmark array: {e}"),
            })?;
        Ok(LandmarkVector::new(values))
    }

    fn name(&self) -> &'static str {
        "json-lines"
    }
}
