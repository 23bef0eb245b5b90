//! Worker thread that owns a session and processes frames in order.

use crate::session::StreamSession;
use crate::session::types::FrameDecision;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Configuration for the session pipeline.
#[derive(Debug, Clone)]
pub struct SessionPipelineConfig {
    /// Frame channel capacity (frames waiting for the worker).
    pub frame_buffer: usize,
    /// Event channel capacity (decisions waiting for the consumer).
    pub event_buffer: usize,
}

impl Default for SessionPipelineConfig {
    fn default() -> Self {
        Self {
            frame_buffer: 64,
            event_buffer: 64,
        }
    }
}

/// Per-frame output of the worker, emitted in frame arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The frame was processed; here is its decision record.
    Decision(FrameDecision),
    /// The frame was dropped (recoverable error); the session continues.
    FrameDropped { message: String },
    /// The session hit a fatal error and has stopped.
    Fatal { message: String },
}

/// Runs a [`StreamSession`] on its own thread behind bounded channels.
pub struct SessionPipeline {
    config: SessionPipelineConfig,
}

impl SessionPipeline {
    /// Creates a pipeline with default channel sizes.
    pub fn new() -> Self {
        Self::with_config(SessionPipelineConfig::default())
    }

    /// Creates a pipeline with custom channel sizes.
    pub fn with_config(config: SessionPipelineConfig) -> Self {
        Self { config }
    }

    /// Starts the worker thread.
    ///
    /// Returns the frame sender, the event receiver, and a handle for
    /// shutdown. The worker exits when the handle is stopped, when every
    /// frame sender is dropped, or on a fatal session error.
    pub fn start(
        self,
        mut session: StreamSession,
    ) -> (Sender<Vec<u8>>, Receiver<SessionEvent>, SessionHandle) {
        let (frame_tx, frame_rx) = bounded::<Vec<u8>>(self.config.frame_buffer);
        let (event_tx, event_rx) = bounded::<SessionEvent>(self.config.event_buffer);

        let running = Arc::new(AtomicBool::new(true));
        let worker_running = running.clone();

        let thread = thread::spawn(move || {
            let poll_interval = Duration::from_millis(100);

            while worker_running.load(Ordering::SeqCst) {
                let frame = match frame_rx.recv_timeout(poll_interval) {
                    Ok(frame) => frame,
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                };

                let event = match session.process_frame(&frame) {
                    Ok(decision) => SessionEvent::Decision(decision),
                    Err(e) if e.is_recoverable() => SessionEvent::FrameDropped {
                        message: e.to_string(),
                    },
                    Err(e) => {
                        // Fatal: report and stop consuming frames.
                        let _ = event_tx.send(SessionEvent::Fatal {
                            message: e.to_string(),
                        });
                        break;
                    }
                };

                // Stop if the consumer is gone.
                if event_tx.send(event).is_err() {
                    break;
                }
            }

            worker_running.store(false, Ordering::SeqCst);
        });

        let handle = SessionHandle {
            running,
            thread: Some(thread),
        };

        (frame_tx, event_rx, handle)
    }
}

impl Default for SessionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a running session worker.
pub struct SessionHandle {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SessionHandle {
    /// Stops the worker and waits for it to finish.
    ///
    /// Waits up to 1s for the thread; after the deadline it is detached
    /// and dies with the process. Panics in the worker are reported to
    /// stderr rather than propagated.
    pub fn stop(mut self) {
        self.running.store(false, Ordering::SeqCst);

        let Some(thread) = self.thread.take() else {
            return;
        };

        let deadline = Instant::now() + Duration::from_secs(1);
        while !thread.is_finished() {
            if Instant::now() >= deadline {
                eprintln!("signstream: shutdown timeout, detaching session worker");
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }

        if let Err(panic_info) = thread.join() {
            let msg = panic_info
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic");
            eprintln!("signstream: session worker panicked: {msg}");
        }
    }

    /// Returns true while the worker is processing frames.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
