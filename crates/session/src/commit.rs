//! Hold-to-commit debouncing over the classification stream.
//!
//! A sign that is merely being shown is not yet committed: it only becomes a
//! sentence token after the same candidate has been observed continuously for
//! the full hold duration, which suppresses single-frame misclassifications
//! and occlusion flicker.

use std::time::Instant;

use sign_hand_interface::{Classification, Sign};

use crate::config::{GAP_TIMEOUT, SessionConfig};
use crate::sentence::SentenceBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitState {
    Idle,
    Holding { sign: Sign, since: Instant },
}

/// What one frame observation produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitOutcome {
    /// Token appended to the sentence on this frame.
    pub committed: Option<String>,
    /// Text to hand to the speech dispatcher (deduplicated against the last
    /// spoken sign).
    pub speak: Option<String>,
}

/// Per-session commit state machine. One `observe` call per frame.
#[derive(Debug, Clone)]
pub struct SignCommitMachine {
    state: CommitState,
    last_observation: Option<Instant>,
    last_spoken: Option<String>,
}

impl SignCommitMachine {
    pub fn new() -> Self {
        Self {
            state: CommitState::Idle,
            last_observation: None,
            last_spoken: None,
        }
    }

    pub fn state(&self) -> CommitState {
        self.state
    }

    pub fn is_holding(&self) -> bool {
        matches!(self.state, CommitState::Holding { .. })
    }

    /// Forget the last spoken sign, so the next commit speaks even if it
    /// repeats it. Called when the host edits the sentence out from under
    /// the machine (clear, backspace).
    pub fn clear_last_spoken(&mut self) {
        self.last_spoken = None;
    }

    /// Advances the machine by one frame.
    ///
    /// A qualifying observation (sign present, display text resolved,
    /// confidence at or above the threshold) starts or continues a hold;
    /// once the hold reaches `hold_duration` the sign is appended to
    /// `sentence` and the machine returns to idle either way, so a pose held
    /// past the duration commits once rather than every frame. Anything
    /// non-qualifying leaves the hold alone until the gap timeout passes,
    /// then abandons it without committing.
    pub fn observe(
        &mut self,
        classification: &Classification,
        now: Instant,
        config: &SessionConfig,
        sentence: &mut SentenceBuffer,
    ) -> CommitOutcome {
        let qualifying = match (classification.sign, classification.text.as_deref()) {
            (Some(sign), Some(text)) if classification.confidence >= config.confidence_threshold => {
                Some((sign, text))
            }
            _ => None,
        };

        let Some((sign, text)) = qualifying else {
            if let Some(last) = self.last_observation
                && now.duration_since(last) > GAP_TIMEOUT
            {
                self.state = CommitState::Idle;
            }
            return CommitOutcome::default();
        };

        self.last_observation = Some(now);

        match self.state {
            CommitState::Holding { sign: held, since } if held == sign => {
                if now.duration_since(since) < config.hold_duration {
                    return CommitOutcome::default();
                }

                let mut outcome = CommitOutcome::default();
                if sentence.append(text) {
                    outcome.committed = Some(text.to_string());
                    if self.last_spoken.as_deref() != Some(text) {
                        outcome.speak = Some(text.to_string());
                    }
                    self.last_spoken = Some(text.to_string());
                }
                self.state = CommitState::Idle;
                outcome
            }
            _ => {
                self.state = CommitState::Holding { sign, since: now };
                CommitOutcome::default()
            }
        }
    }
}

impl Default for SignCommitMachine {
    fn default() -> Self {
        Self::new()
    }
}
