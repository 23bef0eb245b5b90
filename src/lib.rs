//! signstream - Streaming sign-language action recognition
//!
//! Turns a noisy stream of per-frame classifier outputs into a stable,
//! de-duplicated transcript of recognized signs.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod classify;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod session;

// Core traits (frame → landmarks → scores)
pub use classify::{ActionClassifier, argmax};
pub use extract::KeypointExtractor;

// Decision core
pub use session::{FrameDecision, LandmarkVector, StreamSession};

// Off-thread processing
pub use pipeline::{SessionEvent, SessionHandle, SessionPipeline, SessionPipelineConfig};

// Error handling
pub use error::{Result, SignstreamError};

// Config
pub use config::{Config, RecognitionConfig};

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }
}
