use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use sign_hand_interface::HandPose;

use crate::session::{DetectionSession, FrameUpdate};

/// Cloneable handle serializing access to one [`DetectionSession`].
///
/// For hosts that drive the same session from more than one entry point
/// (a continuous capture loop plus an on-demand single-image endpoint). At
/// the frame rates involved one coarse lock around the whole per-frame
/// update is sufficient.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<DetectionSession>>,
}

impl SharedSession {
    pub fn new(session: DetectionSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn process_frame(&self, pose: Option<&HandPose>, now: Instant) -> FrameUpdate {
        self.lock().process_frame(pose, now)
    }

    /// Runs `f` under the session lock.
    pub fn with<T>(&self, f: impl FnOnce(&mut DetectionSession) -> T) -> T {
        f(&mut self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DetectionSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
