//! Configuration loading and validation.

use crate::defaults;
use crate::error::{Result, SignstreamError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub recognition: RecognitionConfig,
}

/// Decision-core configuration, fixed for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Classification window length in frames.
    pub sequence_length: usize,
    /// Smoothing window size in predictions.
    pub smoothing_window: usize,
    /// Minimum occurrences within the smoothing window to confirm a label.
    pub min_consistent: usize,
    /// Exclusive confidence threshold for accepting a confirmed label.
    pub confidence_threshold: f32,
    /// Maximum sentence length in labels.
    pub sentence_cap: usize,
    /// Landmark vector width in features.
    pub feature_width: usize,
    /// Ordered action label set; classifier scores index into this list.
    pub actions: Vec<String>,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            sequence_length: defaults::SEQUENCE_LENGTH,
            smoothing_window: defaults::SMOOTHING_WINDOW,
            min_consistent: defaults::MIN_CONSISTENT,
            confidence_threshold: defaults::CONFIDENCE_THRESHOLD,
            sentence_cap: defaults::SENTENCE_CAP,
            feature_width: defaults::FEATURE_WIDTH,
            actions: defaults::ACTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RecognitionConfig {
    /// Checks the configuration invariants a session relies on.
    ///
    /// Called at session construction; a session is never built from a
    /// configuration that fails here.
    pub fn validate(&self) -> Result<()> {
        if self.sequence_length < 1 {
            return Err(invalid("sequence_length", "must be at least 1"));
        }
        if self.smoothing_window < 1 {
            return Err(invalid("smoothing_window", "must be at least 1"));
        }
        if self.min_consistent < 1 {
            return Err(invalid("min_consistent", "must be at least 1"));
        }
        if self.min_consistent > self.smoothing_window {
            return Err(invalid(
                "min_consistent",
                "must not exceed smoothing_window",
            ));
        }
        if self.sentence_cap < 1 {
            return Err(invalid("sentence_cap", "must be at least 1"));
        }
        if self.feature_width < 1 {
            return Err(invalid("feature_width", "must be at least 1"));
        }
        if self.actions.is_empty() {
            return Err(invalid("actions", "label set must not be empty"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> SignstreamError {
    SignstreamError::InvalidConfig {
        key: key.to_string(),
        message: message.to_string(),
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file, or return defaults if the file
    /// doesn't exist. Invalid TOML is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(SignstreamError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SIGNSTREAM_ACTIONS → recognition.actions (comma-separated)
    /// - SIGNSTREAM_THRESHOLD → recognition.confidence_threshold
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(actions) = std::env::var("SIGNSTREAM_ACTIONS")
            && !actions.is_empty()
        {
            self.recognition.actions = actions
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(threshold) = std::env::var("SIGNSTREAM_THRESHOLD")
            && let Ok(value) = threshold.parse::<f32>()
        {
            self.recognition.confidence_threshold = value;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/signstream/config.toml on Linux
    #[cfg(feature = "cli")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("signstream").join("config.toml"))
    }
}
