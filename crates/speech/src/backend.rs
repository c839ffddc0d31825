use tokio_util::sync::CancellationToken;

use crate::dispatcher::SpeechConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("speech backend unavailable: {0}")]
    Unavailable(String),
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
}

/// A synthesis engine that renders one utterance to completion.
///
/// Implementations run on the dispatcher's dedicated worker thread and may
/// block. `interrupt` is cancelled when the host asks for all speech to stop;
/// backends that can cut an utterance short should poll it, backends that
/// cannot may ignore it.
pub trait SpeechBackend: Send + 'static {
    /// Applies rate/volume settings before the first utterance. An error
    /// here mutes the dispatcher for its lifetime.
    fn configure(&mut self, _config: &SpeechConfig) -> Result<(), Error> {
        Ok(())
    }

    fn speak(&mut self, text: &str, interrupt: &CancellationToken) -> Result<(), Error>;
}

/// Silent stand-in for hosts without an audio device.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl SpeechBackend for NullBackend {
    fn speak(&mut self, _text: &str, _interrupt: &CancellationToken) -> Result<(), Error> {
        Ok(())
    }
}
