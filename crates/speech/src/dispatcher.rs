use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio_util::sync::CancellationToken;

use crate::backend::SpeechBackend;

const QUEUE_CAPACITY: usize = 32;

fn default_enabled() -> bool {
    true
}

fn default_rate() -> u32 {
    150
}

fn default_volume() -> f32 {
    0.8
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Speech rate in words per minute.
    #[serde(default = "default_rate")]
    pub rate: u32,
    /// Volume in `0.0..=1.0`.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            rate: default_rate(),
            volume: default_volume(),
        }
    }
}

struct Utterance {
    epoch: u64,
    text: String,
}

struct Shared {
    /// Bumped by `stop()`; queued utterances from an older epoch are skipped
    /// by the worker without being spoken.
    epoch: AtomicU64,
    /// Interrupt token for the utterance currently being rendered; replaced
    /// with a fresh token after each `stop()`.
    interrupt: Mutex<CancellationToken>,
}

/// FIFO queue of pending utterances consumed by one dedicated worker.
///
/// `enqueue` never blocks frame processing: a full queue drops the utterance
/// with a warning, a missing or failed backend degrades to a silent no-op.
pub struct SpeechDispatcher {
    tx: Option<mpsc::Sender<Utterance>>,
    shared: Arc<Shared>,
    shutdown: CancellationToken,
    done_rx: Option<std::sync::mpsc::Receiver<()>>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl SpeechDispatcher {
    pub fn spawn<B: SpeechBackend>(backend: B, config: &SpeechConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        let (done_tx, done_rx) = std::sync::mpsc::channel();
        let shared = Arc::new(Shared {
            epoch: AtomicU64::new(0),
            interrupt: Mutex::new(CancellationToken::new()),
        });
        let shutdown = CancellationToken::new();

        let handle = std::thread::spawn({
            let shared = shared.clone();
            let shutdown = shutdown.clone();
            let config = config.clone();
            move || run_worker(backend, config, rx, shared, shutdown, done_tx)
        });

        Self {
            tx: Some(tx),
            shared,
            shutdown,
            done_rx: Some(done_rx),
            handle: Some(handle),
        }
    }

    /// A dispatcher with no worker; every operation is a no-op.
    pub fn disabled() -> Self {
        Self {
            tx: None,
            shared: Arc::new(Shared {
                epoch: AtomicU64::new(0),
                interrupt: Mutex::new(CancellationToken::new()),
            }),
            shutdown: CancellationToken::new(),
            done_rx: None,
            handle: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    /// Queues an utterance without blocking.
    pub fn enqueue(&self, text: impl Into<String>) {
        let Some(tx) = &self.tx else {
            return;
        };

        let utterance = Utterance {
            epoch: self.shared.epoch.load(Ordering::Acquire),
            text: text.into(),
        };

        match tx.try_send(utterance) {
            Ok(()) => {}
            Err(TrySendError::Full(utterance)) => {
                tracing::warn!(text = %utterance.text, "speech queue full, dropping utterance");
            }
            Err(TrySendError::Closed(_)) => {}
        }
    }

    /// Drains all pending utterances and interrupts the one in flight.
    pub fn stop(&self) {
        self.shared.epoch.fetch_add(1, Ordering::Release);
        if let Ok(mut interrupt) = self.shared.interrupt.lock() {
            interrupt.cancel();
            *interrupt = CancellationToken::new();
        }
    }

    /// Signals the worker to terminate and waits for it up to `timeout`.
    /// Returns whether the worker exited in time.
    pub fn shutdown(mut self, timeout: Duration) -> bool {
        self.shutdown.cancel();
        self.stop();
        self.tx = None;

        let exited = match self.done_rx.take() {
            Some(done_rx) => done_rx.recv_timeout(timeout).is_ok(),
            None => true,
        };

        if exited
            && let Some(handle) = self.handle.take()
        {
            let _ = handle.join();
        }

        exited
    }
}

impl Drop for SpeechDispatcher {
    fn drop(&mut self) {
        self.shutdown.cancel();
        self.stop();
        if let Some(handle) = self.handle.take() {
            std::thread::spawn(move || {
                if let Err(panic) = handle.join() {
                    tracing::error!(?panic, "speech_worker_panicked");
                }
            });
        }
    }
}

fn run_worker<B: SpeechBackend>(
    mut backend: B,
    config: SpeechConfig,
    mut rx: mpsc::Receiver<Utterance>,
    shared: Arc<Shared>,
    shutdown: CancellationToken,
    done_tx: std::sync::mpsc::Sender<()>,
) {
    let mut muted = false;

    if let Err(err) = backend.configure(&config) {
        tracing::warn!(%err, "speech backend unavailable, muting");
        muted = true;
    }

    while let Some(utterance) = rx.blocking_recv() {
        if shutdown.is_cancelled() {
            break;
        }
        if muted {
            continue;
        }
        if utterance.epoch < shared.epoch.load(Ordering::Acquire) {
            continue;
        }

        let interrupt = match shared.interrupt.lock() {
            Ok(interrupt) => interrupt.clone(),
            Err(_) => break,
        };

        if let Err(err) = backend.speak(&utterance.text, &interrupt) {
            tracing::warn!(%err, "speech backend failed, muting");
            muted = true;
        }
    }

    let _ = done_tx.send(());
    tracing::debug!("speech worker exited");
}
