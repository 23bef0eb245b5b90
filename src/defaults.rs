//! Default configuration constants for signstream.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Default classification window length in frames.
///
/// The classifier sees the most recent 20 landmark vectors. Shorter windows
/// react faster but lose temporal context for multi-frame signs.
pub const SEQUENCE_LENGTH: usize = 20;

/// Default smoothing window size in predictions.
///
/// Raw per-frame predictions are majority-voted over this many trailing
/// frames before a label is trusted.
pub const SMOOTHING_WINDOW: usize = 6;

/// Default minimum consistency count for confirmation.
///
/// A label must appear at least this many times within the smoothing window
/// to be confirmed. Must not exceed [`SMOOTHING_WINDOW`].
pub const MIN_CONSISTENT: usize = 4;

/// Default confidence threshold for accepting a confirmed label.
///
/// The gate is exclusive: a prediction is accepted only when its confidence
/// is strictly greater than this value.
pub const CONFIDENCE_THRESHOLD: f32 = 0.4;

/// Default maximum sentence length in labels.
///
/// The running transcript keeps only the most recent labels; older entries
/// are truncated from the front.
pub const SENTENCE_CAP: usize = 5;

/// Default landmark vector width in features.
///
/// Matches a holistic pose/face/hand extractor: 33 pose landmarks × 4
/// values, 468 face landmarks × 3, and 21 landmarks × 3 per hand.
pub const FEATURE_WIDTH: usize = 33 * 4 + 468 * 3 + 21 * 3 + 21 * 3;

/// Default ordered action label set.
///
/// Label indices produced by the classifier are positions in this list.
pub const ACTIONS: &[&str] = &["hello", "thanks", "iloveyou"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_width_matches_holistic_layout() {
        assert_eq!(FEATURE_WIDTH, 1662);
    }

    #[test]
    fn min_consistent_fits_smoothing_window() {
        assert!(MIN_CONSISTENT <= SMOOTHING_WINDOW);
    }

    #[test]
    fn actions_are_non_empty() {
        assert!(!ACTIONS.is_empty());
    }
}
