pub mod commit;
pub mod config;
pub mod sentence;
pub mod session;
pub mod shared;
pub mod view;

pub use commit::{CommitOutcome, CommitState, SignCommitMachine};
pub use config::{GAP_TIMEOUT, SessionConfig};
pub use sentence::SentenceBuffer;
pub use session::{DetectionSession, FrameUpdate};
pub use shared::SharedSession;
