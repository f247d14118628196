//! One scanner screen: photo in, analysis out, stale results dropped.
//!
//! Every scan takes a generation token when it starts. A result is applied
//! only if its token is still the newest one, so a slow analysis that
//! finishes after a newer photo (or a reset) cannot overwrite it.

use agrolens_core::{
    analysis::ScanKind,
    devices::Capture,
    error::AgroError,
    traits::{Analyzer, Camera},
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// What the screen currently shows.
#[derive(Debug, Clone)]
pub struct ScanState<T> {
    /// Photo being (or last) analyzed.
    pub image: Option<Vec<u8>>,
    pub scanning: bool,
    pub result: Option<T>,
}

impl<T> Default for ScanState<T> {
    fn default() -> Self {
        Self {
            image: None,
            scanning: false,
            result: None,
        }
    }
}

pub struct Scanner<T> {
    kind: ScanKind,
    analyzer: Arc<dyn Analyzer<Output = T>>,
    generation: AtomicU64,
    state: Mutex<ScanState<T>>,
}

impl<T: Clone + Send> Scanner<T> {
    pub fn new(kind: ScanKind, analyzer: Arc<dyn Analyzer<Output = T>>) -> Self {
        Self {
            kind,
            analyzer,
            generation: AtomicU64::new(0),
            state: Mutex::new(ScanState::default()),
        }
    }

    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    /// Snapshot of the screen state.
    pub fn state(&self) -> ScanState<T> {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Analyze `image`. Returns `Ok(None)` if a newer scan or a reset
    /// superseded this one before it finished.
    pub async fn scan(&self, image: Vec<u8>) -> Result<Option<T>, AgroError> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut s) = self.state.lock() {
            s.image = Some(image.clone());
            s.scanning = true;
            s.result = None;
        }
        info!(
            "{:?} scan #{token} started with {}",
            self.kind,
            self.analyzer.name()
        );

        let outcome = self.analyzer.analyze(&image).await;

        let mut state = self
            .state
            .lock()
            .map_err(|_| AgroError::Analysis("scanner state poisoned".into()))?;
        if self.generation.load(Ordering::SeqCst) != token {
            warn!("{:?} scan #{token} superseded, result dropped", self.kind);
            return Ok(None);
        }
        state.scanning = false;
        let result = outcome?;
        state.result = Some(result.clone());
        Ok(Some(result))
    }

    /// Take a photo with `camera` and analyze it. The camera is released
    /// before analysis starts.
    pub async fn capture_and_scan(&self, camera: Arc<dyn Camera>) -> Result<Option<T>, AgroError> {
        let capture = Capture::start(camera).await?;
        let image = capture.capture().await?;
        self.scan(image).await
    }

    /// Put `result` on screen directly and orphan any scan still in flight.
    pub fn show(&self, result: T) {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut s) = self.state.lock() {
            *s = ScanState {
                image: None,
                scanning: false,
                result: Some(result),
            };
        }
        info!("{:?} sample shown as #{token}", self.kind);
    }

    /// Clear the screen and orphan any scan still in flight.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut s) = self.state.lock() {
            *s = ScanState::default();
        }
    }
}
