use std::time::Duration;

/// An in-progress hold is abandoned after this much time without a
/// qualifying observation. Not runtime-adjustable.
pub const GAP_TIMEOUT: Duration = Duration::from_millis(500);

fn default_confidence_threshold() -> f64 {
    0.4
}

fn default_hold_duration() -> Duration {
    Duration::from_secs(1)
}

/// Runtime-adjustable detection settings; changes take effect on the next
/// frame evaluation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionConfig {
    /// Classifications below this confidence are treated as "no sign".
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// How long the same candidate must be observed continuously before it
    /// commits to the sentence.
    #[serde(default = "default_hold_duration")]
    pub hold_duration: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            hold_duration: default_hold_duration(),
        }
    }
}
