//! Off-thread frame processing for a recognition session.
//!
//! The session itself is single-threaded by design; this module provides
//! the supported way to run one off the intake path. One worker thread
//! owns the session, frames arrive on a bounded channel and decisions
//! leave on a bounded channel, so frame arrival order is preserved by
//! construction. Out-of-order confirmation would corrupt the
//! majority-vote semantics.

pub mod runner;

pub use runner::{SessionEvent, SessionHandle, SessionPipeline, SessionPipelineConfig};
