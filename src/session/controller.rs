//! Per-session stream controller.
//!
//! Orchestrates the per-frame path: extract landmarks, slide the window,
//! classify once the window is full, smooth the raw prediction, and gate
//! it into the sentence. Each session owns an isolated copy of all three
//! buffers; nothing is shared between concurrent streams.

use crate::classify::{ActionClassifier, argmax};
use crate::config::RecognitionConfig;
use crate::error::{Result, SignstreamError};
use crate::extract::KeypointExtractor;
use crate::session::sentence::SentenceAccumulator;
use crate::session::smoothing::SmoothingFilter;
use crate::session::types::FrameDecision;
use crate::session::window::WindowBuffer;
use std::sync::Arc;

/// A single recognition stream: window, smoothing filter, and sentence,
/// plus the injected extractor and classifier boundaries.
///
/// Frames must be processed strictly in arrival order, one at a time.
pub struct StreamSession {
    extractor: Box<dyn KeypointExtractor>,
    classifier: Arc<dyn ActionClassifier>,
    window: WindowBuffer,
    smoothing: SmoothingFilter,
    sentence: SentenceAccumulator,
}

impl StreamSession {
    /// Builds a session from a validated configuration.
    ///
    /// Fails with `InvalidConfig` when any configuration invariant is
    /// violated; a session never starts in an inconsistent state.
    pub fn new(
        config: RecognitionConfig,
        extractor: Box<dyn KeypointExtractor>,
        classifier: Arc<dyn ActionClassifier>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            extractor,
            classifier,
            window: WindowBuffer::new(config.sequence_length, config.feature_width),
            smoothing: SmoothingFilter::new(config.smoothing_window, config.min_consistent),
            sentence: SentenceAccumulator::new(
                config.actions,
                config.sentence_cap,
                config.confidence_threshold,
            ),
        })
    }

    /// Processes one frame and returns the per-frame decision record.
    ///
    /// Recoverable failures drop the frame without touching any buffer:
    /// extractor errors surface as `InvalidFrame`, classifier errors as
    /// `Classification` (the window push is rolled back). A wrong-width
    /// landmark vector is a fatal `DimensionMismatch`.
    pub fn process_frame(&mut self, frame: &[u8]) -> Result<FrameDecision> {
        let vector = self.extractor.extract(frame).map_err(|e| match e {
            e @ SignstreamError::InvalidFrame { .. } => e,
            other => SignstreamError::InvalidFrame {
                message: other.to_string(),
            },
        })?;

        let ready = self.window.push(vector)?.ready;
        if !ready {
            return Ok(FrameDecision::filling(self.sentence.words().to_vec()));
        }

        let scores = match self.classifier.classify(self.window.frames()) {
            Ok(scores) => scores,
            Err(e) => {
                self.window.rollback();
                return Err(classification_error(e));
            }
        };

        if scores.len() != self.sentence.actions().len() {
            self.window.rollback();
            return Err(SignstreamError::Classification {
                message: format!(
                    "model returned {} scores for {} actions",
                    scores.len(),
                    self.sentence.actions().len()
                ),
            });
        }

        let Some((label_index, confidence)) = argmax(&scores) else {
            self.window.rollback();
            return Err(SignstreamError::Classification {
                message: "empty probability vector".to_string(),
            });
        };

        let confirmed = self.smoothing.observe(label_index);
        let prediction = self
            .sentence
            .maybe_accept(label_index, confidence, confirmed)
            .map(str::to_string);

        Ok(FrameDecision::new(
            prediction,
            confidence,
            self.sentence.words().to_vec(),
        ))
    }

    /// Clears window, smoothing history, and sentence together.
    ///
    /// The only supported abort operation; a partially cleared session
    /// would corrupt the majority-vote semantics.
    pub fn reset(&mut self) {
        self.window.clear();
        self.smoothing.clear();
        self.sentence.clear();
    }

    /// True once the window has reached capacity for this session.
    pub fn is_ready(&self) -> bool {
        self.window.is_ready()
    }

    /// Current transcript, oldest first.
    pub fn sentence(&self) -> &[String] {
        self.sentence.words()
    }
}

fn classification_error(e: SignstreamError) -> SignstreamError {
    match e {
        e @ SignstreamError::Classification { .. } => e,
        other => SignstreamError::Classification {
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{MockClassifier, ScriptedClassifier};
    use crate::extract::MockExtractor;

    fn config() -> RecognitionConfig {
        RecognitionConfig {
            sequence_length: 20,
            smoothing_window: 6,
            min_consistent: 4,
            confidence_threshold: 0.4,
            sentence_cap: 5,
            feature_width: 4,
            actions: vec![
                "hello".to_string(),
                "thanks".to_string(),
                "iloveyou".to_string(),
            ],
        }
    }

    fn session_with(classifier: Arc<dyn ActionClassifier>) -> StreamSession {
        StreamSession::new(config(), Box::new(MockExtractor::new(4)), classifier).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let bad = RecognitionConfig {
            min_consistent: 7,
            ..config()
        };
        let result = StreamSession::new(
            bad,
            Box::new(MockExtractor::new(4)),
            Arc::new(MockClassifier::new(vec![1.0, 0.0, 0.0])),
        );
        assert!(matches!(
            result.map(|_| ()),
            Err(SignstreamError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_filling_frames_produce_no_prediction() {
        let mut session = session_with(Arc::new(MockClassifier::new(vec![0.9, 0.05, 0.05])));

        for _ in 0..19 {
            let decision = session.process_frame(b"frame").unwrap();
            assert_eq!(decision.prediction, None);
            assert_eq!(decision.confidence, 0.0);
            assert!(decision.sentence.is_empty());
        }
        assert!(!session.is_ready());
    }

    #[test]
    fn test_reference_scenario_two_actions() {
        // 20 frames of "hello" at 0.9, then 6 frames of "thanks" at 0.9.
        let mut rows = vec![vec![0.9, 0.05, 0.05]];
        rows.extend(std::iter::repeat_n(vec![0.05, 0.9, 0.05], 6));
        let mut session = session_with(Arc::new(ScriptedClassifier::new(rows)));

        let mut last = FrameDecision::filling(vec![]);
        for _ in 0..20 {
            last = session.process_frame(b"frame").unwrap();
        }
        // Frame 20 is the first inference: one observation cannot meet
        // min_consistent=4, so nothing is emitted yet.
        assert_eq!(last.prediction, None);
        assert_eq!(last.sentence, Vec::<String>::new());

        // Frames at index 1: confirmation triggers on the 4th occurrence.
        for i in 0..6 {
            let decision = session.process_frame(b"frame").unwrap();
            if i < 3 {
                assert_eq!(decision.prediction, None, "frame {i} confirmed too early");
            } else {
                assert_eq!(decision.prediction, Some("thanks".to_string()));
                assert_eq!(decision.sentence, vec!["thanks".to_string()]);
            }
        }
    }

    #[test]
    fn test_sustained_action_confirms_and_deduplicates() {
        let mut session = session_with(Arc::new(MockClassifier::new(vec![0.9, 0.05, 0.05])));

        // Fill the window, then keep classifying the same action.
        let mut decisions = Vec::new();
        for _ in 0..30 {
            decisions.push(session.process_frame(b"frame").unwrap());
        }

        // Frames 20..22 observe "hello" 1-3 times: unconfirmed.
        assert_eq!(decisions[19].prediction, None);
        assert_eq!(decisions[21].prediction, None);
        // Frame 23 is the 4th observation: confirmed and appended.
        assert_eq!(decisions[22].prediction, Some("hello".to_string()));
        assert_eq!(decisions[22].sentence, vec!["hello".to_string()]);
        // Held pose: still predicted, never appended twice.
        assert_eq!(decisions[29].prediction, Some("hello".to_string()));
        assert_eq!(decisions[29].sentence, vec!["hello".to_string()]);
    }

    #[test]
    fn test_invalid_frame_leaves_buffers_intact() {
        let extractor = MockExtractor::new(4).fail_on(5);
        let mut session = StreamSession::new(
            RecognitionConfig {
                sequence_length: 3,
                smoothing_window: 3,
                min_consistent: 2,
                ..config()
            },
            Box::new(extractor),
            Arc::new(MockClassifier::new(vec![0.9, 0.05, 0.05])),
        )
        .unwrap();

        for _ in 0..5 {
            session.process_frame(b"frame").unwrap();
        }
        let before = session.sentence().to_vec();

        // Frame 6 fails extraction: recoverable, everything untouched.
        let err = session.process_frame(b"frame").unwrap_err();
        assert!(matches!(err, SignstreamError::InvalidFrame { .. }));
        assert_eq!(session.sentence(), before.as_slice());
        assert!(session.is_ready());

        // The streak continues as if the bad frame never arrived.
        let decision = session.process_frame(b"frame").unwrap();
        assert_eq!(decision.prediction, Some("hello".to_string()));
    }

    #[test]
    fn test_classifier_failure_rolls_back_window() {
        let rows = vec![vec![0.9, 0.05, 0.05]];
        let mut session = StreamSession::new(
            RecognitionConfig {
                sequence_length: 3,
                smoothing_window: 3,
                min_consistent: 1,
                ..config()
            },
            Box::new(MockExtractor::new(4)),
            Arc::new(ScriptedClassifier::new(rows)),
        )
        .unwrap();

        for _ in 0..3 {
            session.process_frame(b"frame").unwrap();
        }
        assert!(session.is_ready());

        // Script exhausted: classification fails, the pushed frame is
        // rolled back and the window stays full with its prior contents.
        let err = session.process_frame(b"frame").unwrap_err();
        assert!(matches!(err, SignstreamError::Classification { .. }));
        assert!(session.is_ready());
    }

    #[test]
    fn test_score_count_mismatch_is_classification_error() {
        let mut session = StreamSession::new(
            RecognitionConfig {
                sequence_length: 2,
                smoothing_window: 2,
                min_consistent: 1,
                ..config()
            },
            Box::new(MockExtractor::new(4)),
            Arc::new(MockClassifier::new(vec![0.5, 0.5])),
        )
        .unwrap();

        session.process_frame(b"frame").unwrap();
        let err = session.process_frame(b"frame").unwrap_err();
        match err {
            SignstreamError::Classification { message } => {
                assert!(message.contains("2 scores for 3 actions"), "{message}");
            }
            other => panic!("Expected Classification error, got {other:?}"),
        }
    }

    #[test]
    fn test_dimension_mismatch_is_fatal() {
        let mut session = StreamSession::new(
            config(),
            Box::new(MockExtractor::new(4).with_vector(vec![1.0, 2.0])),
            Arc::new(MockClassifier::new(vec![0.9, 0.05, 0.05])),
        )
        .unwrap();

        let err = session.process_frame(b"frame").unwrap_err();
        assert!(matches!(
            err,
            SignstreamError::DimensionMismatch {
                expected: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_low_confidence_confirmed_label_not_accepted() {
        let mut session = StreamSession::new(
            RecognitionConfig {
                sequence_length: 2,
                smoothing_window: 2,
                min_consistent: 1,
                ..config()
            },
            Box::new(MockExtractor::new(4)),
            Arc::new(MockClassifier::new(vec![0.4, 0.3, 0.3])),
        )
        .unwrap();

        session.process_frame(b"frame").unwrap();
        let decision = session.process_frame(b"frame").unwrap();
        // Confirmed, but confidence equals the threshold: rejected.
        assert_eq!(decision.prediction, None);
        assert_eq!(decision.confidence, 0.4);
        assert!(decision.sentence.is_empty());
    }

    #[test]
    fn test_reset_clears_all_buffers() {
        let mut session = StreamSession::new(
            RecognitionConfig {
                sequence_length: 2,
                smoothing_window: 2,
                min_consistent: 1,
                ..config()
            },
            Box::new(MockExtractor::new(4)),
            Arc::new(MockClassifier::new(vec![0.9, 0.05, 0.05])),
        )
        .unwrap();

        session.process_frame(b"frame").unwrap();
        let decision = session.process_frame(b"frame").unwrap();
        assert_eq!(decision.sentence, vec!["hello".to_string()]);

        session.reset();
        assert!(!session.is_ready());
        assert!(session.sentence().is_empty());

        // The session refills from scratch.
        let decision = session.process_frame(b"frame").unwrap();
        assert_eq!(decision.prediction, None);
        assert_eq!(decision.confidence, 0.0);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        let mut session = StreamSession::new(
            RecognitionConfig {
                sequence_length: 2,
                smoothing_window: 2,
                min_consistent: 1,
                ..config()
            },
            Box::new(MockExtractor::new(4)),
            Arc::new(MockClassifier::new(vec![0.45, 0.45, 0.1])),
        )
        .unwrap();

        session.process_frame(b"frame").unwrap();
        let decision = session.process_frame(b"frame").unwrap();
        assert_eq!(decision.prediction, Some("hello".to_string()));
    }
}
