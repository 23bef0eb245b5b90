//! Classifier that replays pre-recorded probability rows.
//!
//! Each call to `classify` consumes the next row. Pairs with
//! [`JsonLinesExtractor`](crate::extract::JsonLinesExtractor) to replay a
//! captured session through the decision core without a model.

use crate::classify::ActionClassifier;
use crate::error::{Result, SignstreamError};
use crate::session::types::LandmarkVector;
use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Mutex;

/// Replays a fixed sequence of probability rows, one per ready frame.
pub struct ScriptedClassifier {
    rows: Mutex<VecDeque<Vec<f32>>>,
}

impl ScriptedClassifier {
    /// Creates a classifier that will return the given rows in order.
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self {
            rows: Mutex::new(rows.into()),
        }
    }

    /// Reads rows from JSON lines, one probability array per line.
    ///
    /// Blank lines are skipped; anything else that fails to parse is a
    /// `Classification` error.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let row: Vec<f32> =
                serde_json::from_str(trimmed).map_err(|e| SignstreamError::Classification {
                    message: format!("score row is not a JSON array: {e}"),
                })?;
            rows.push(row);
        }
        Ok(Self::new(rows))
    }

    /// Number of rows not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }
}

impl ActionClassifier for ScriptedClassifier {
    fn classify(&self, _window: &[LandmarkVector]) -> Result<Vec<f32>> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| SignstreamError::Classification {
                message: "score script poisoned by a panicked caller".to_string(),
            })?;
        rows.pop_front().ok_or_else(|| SignstreamError::Classification {
            message: "score script exhausted".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
