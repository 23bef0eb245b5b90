//! Temporal decision core for streaming sign recognition.
//!
//! Per-frame data flow through a session:
//! ```text
//! ┌─────────┐    ┌──────────┐    ┌────────────┐    ┌───────────┐    ┌──────────┐
//! │ Frame   │───▶│ Keypoint │───▶│  Window    │───▶│ Classifier│───▶│ Smoothing│
//! │ bytes   │    │ Extractor│    │  Buffer    │    │ (if ready)│    │  Filter  │
//! └─────────┘    └──────────┘    └────────────┘    └───────────┘    └──────────┘
//!                                                                        │
//!                                                  ┌────────────┐        ▼
//!                                 FrameDecision ◀──│  Sentence  │◀── confirmed?
//!                                                  │ Accumulator│
//!                                                  └────────────┘
//! ```
//!
//! The window fills for the first N frames, then stays full for the rest
//! of the session; every frame from then on triggers one inference.

pub mod controller;
pub mod sentence;
pub mod smoothing;
pub mod types;
pub mod window;

pub use controller::StreamSession;
pub use sentence::SentenceAccumulator;
pub use smoothing::SmoothingFilter;
pub use types::{FrameDecision, LandmarkVector};
pub use window::{WindowBuffer, WindowSnapshot};
