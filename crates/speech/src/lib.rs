pub mod backend;
pub mod dispatcher;

pub use backend::{Error, NullBackend, SpeechBackend};
pub use dispatcher::{SpeechConfig, SpeechDispatcher};

pub use tokio_util::sync::CancellationToken;
