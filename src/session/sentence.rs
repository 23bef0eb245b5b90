//! Confidence gate and de-duplicating sentence accumulator.
//!
//! Confirmed predictions pass a confidence gate before being committed to
//! the running transcript. The transcript never repeats its last entry
//! (holding a pose for many frames appends the sign once) and keeps only
//! the most recent `cap` labels.

/// Capped, de-duplicated transcript of accepted action labels.
pub struct SentenceAccumulator {
    actions: Vec<String>,
    sentence: Vec<String>,
    cap: usize,
    threshold: f32,
}

impl SentenceAccumulator {
    /// Creates an empty accumulator over the given ordered label set.
    ///
    /// `cap >= 1` and a non-empty label set are enforced by the session
    /// configuration before an accumulator is built.
    pub fn new(actions: Vec<String>, cap: usize, threshold: f32) -> Self {
        Self {
            actions,
            sentence: Vec::new(),
            cap,
            threshold,
        }
    }

    /// Applies the confidence gate and commits the label to the sentence.
    ///
    /// Returns the accepted label whenever the prediction is confirmed and
    /// its confidence strictly exceeds the threshold — even when the
    /// sentence append was suppressed as an immediate repeat. The return
    /// value is the live per-frame prediction; the sentence is the
    /// de-duplicated history, and the two deliberately diverge on repeats.
    pub fn maybe_accept(
        &mut self,
        label_index: usize,
        confidence: f32,
        confirmed: bool,
    ) -> Option<&str> {
        if !confirmed {
            return None;
        }
        if confidence <= self.threshold {
            return None;
        }

        let label = self.actions.get(label_index)?;

        if self.sentence.last() != Some(label) {
            self.sentence.push(label.clone());
            if self.sentence.len() > self.cap {
                let excess = self.sentence.len() - self.cap;
                self.sentence.drain(..excess);
            }
        }

        Some(label)
    }

    /// Transcript contents, oldest first.
    pub fn words(&self) -> &[String] {
        &self.sentence
    }

    /// Ordered label set this accumulator resolves indices against.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Empties the transcript.
    pub fn clear(&mut self) {
        self.sentence.clear();
    }
}
