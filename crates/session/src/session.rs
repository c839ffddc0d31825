use std::time::Instant;

use sign_gesture::SignClassifier;
use sign_hand_interface::HandPose;
use sign_speech::SpeechDispatcher;

use crate::commit::SignCommitMachine;
use crate::config::SessionConfig;
use crate::sentence::SentenceBuffer;

/// Everything a display layer needs after one frame: the live candidate for
/// the overlay, what (if anything) just committed, and the sentence so far.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct FrameUpdate {
    pub sign: Option<String>,
    pub confidence: f64,
    pub committed: Option<String>,
    pub sentence: String,
}

/// Detection state for one session.
///
/// Owns the classifier, commit machine, sentence buffer and config; hosts
/// create one per session/connection so concurrent sessions never share
/// state. `process_frame` is synchronous and never blocks; speech dispatch
/// is queued, not awaited.
pub struct DetectionSession {
    config: SessionConfig,
    classifier: SignClassifier,
    machine: SignCommitMachine,
    sentence: SentenceBuffer,
    speech: Option<SpeechDispatcher>,
}

impl DetectionSession {
    pub fn new(classifier: SignClassifier, config: SessionConfig) -> Self {
        Self {
            config,
            classifier,
            machine: SignCommitMachine::new(),
            sentence: SentenceBuffer::new(),
            speech: None,
        }
    }

    pub fn with_speech(mut self, speech: SpeechDispatcher) -> Self {
        self.speech = Some(speech);
        self
    }

    /// Classifies one frame's pose (or absence of one) and advances the
    /// commit machine. `None` and incomplete poses are "no hand present".
    pub fn process_frame(&mut self, pose: Option<&HandPose>, now: Instant) -> FrameUpdate {
        let classification = pose
            .map(|pose| self.classifier.classify(pose))
            .unwrap_or_default();

        let outcome = self
            .machine
            .observe(&classification, now, &self.config, &mut self.sentence);

        if let Some(text) = &outcome.committed {
            tracing::debug!(%text, "sign committed");
        }
        if let (Some(text), Some(speech)) = (&outcome.speak, &self.speech) {
            speech.enqueue(text.clone());
        }

        FrameUpdate {
            sign: classification.text,
            confidence: classification.confidence,
            committed: outcome.committed,
            sentence: self.sentence.as_text(),
        }
    }

    pub fn sentence(&self) -> &SentenceBuffer {
        &self.sentence
    }

    pub fn history(&self) -> &[String] {
        self.sentence.history()
    }

    /// Archives and empties the sentence; the next commit speaks again even
    /// if it repeats the last spoken sign.
    pub fn clear_sentence(&mut self) {
        self.sentence.clear();
        self.machine.clear_last_spoken();
    }

    /// Removes the last committed token.
    pub fn backspace(&mut self) {
        self.sentence.remove_last();
        self.machine.clear_last_spoken();
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
    }

    pub fn speech(&self) -> Option<&SpeechDispatcher> {
        self.speech.as_ref()
    }
}
