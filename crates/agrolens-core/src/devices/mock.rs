//! In-memory devices with observable state, for tests and demos.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::error::AgroError;
use crate::traits::{Camera, SpeechInput, SpeechOutput};

/// Camera that returns a fixed frame, or refuses access.
pub struct MockCamera {
    frame: Vec<u8>,
    denied: bool,
    active: AtomicBool,
    opens: AtomicUsize,
}

impl MockCamera {
    pub fn new(frame: Vec<u8>) -> Self {
        Self {
            frame,
            denied: false,
            active: AtomicBool::new(false),
            opens: AtomicUsize::new(0),
        }
    }

    /// A camera whose permission prompt was declined.
    pub fn denied() -> Self {
        Self {
            denied: true,
            ..Self::new(Vec::new())
        }
    }

    /// Number of successful `open` calls.
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Camera for MockCamera {
    fn name(&self) -> &str {
        "mock-camera"
    }

    async fn open(&self) -> Result<(), AgroError> {
        if self.denied {
            return Err(AgroError::Device("camera access denied".into()));
        }
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(AgroError::Device("camera already in use".into()));
        }
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn grab_frame(&self) -> Result<Vec<u8>, AgroError> {
        if !self.active.load(Ordering::SeqCst) {
            return Err(AgroError::Device("camera is not open".into()));
        }
        Ok(self.frame.clone())
    }

    fn close(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Microphone that "hears" a scripted list of transcripts in order.
pub struct MockMicrophone {
    transcripts: Mutex<VecDeque<String>>,
    locales: Mutex<Vec<String>>,
    latency: Duration,
    denied: bool,
    active: AtomicBool,
}

impl MockMicrophone {
    pub fn new<S: Into<String>>(transcripts: impl IntoIterator<Item = S>) -> Self {
        Self {
            transcripts: Mutex::new(transcripts.into_iter().map(Into::into).collect()),
            locales: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
            denied: false,
            active: AtomicBool::new(false),
        }
    }

    /// A microphone whose permission prompt was declined.
    pub fn denied() -> Self {
        Self {
            denied: true,
            ..Self::new(Vec::<String>::new())
        }
    }

    /// Simulated time to hear one utterance.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Locales passed to each `listen` call.
    pub fn locales(&self) -> Vec<String> {
        self.locales.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SpeechInput for MockMicrophone {
    async fn listen(&self, locale: &str) -> Result<String, AgroError> {
        if self.denied {
            return Err(AgroError::Device("microphone access denied".into()));
        }
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(AgroError::Device("microphone already in use".into()));
        }
        let _release = Release(&self.active);
        if let Ok(mut l) = self.locales.lock() {
            l.push(locale.to_string());
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let heard = self
            .transcripts
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or_default();
        Ok(heard)
    }
}

/// Clears an active flag when dropped, including when a listen is cancelled.
struct Release<'a>(&'a AtomicBool);

impl Drop for Release<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Speaker that records what it was asked to say.
#[derive(Default)]
pub struct MockSpeaker {
    current: Mutex<Option<String>>,
    spoken: Mutex<Vec<(String, String)>>,
    cancels: AtomicUsize,
    overlaps: AtomicUsize,
}

impl MockSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(text, locale)` passed to `speak`, oldest first.
    pub fn spoken(&self) -> Vec<(String, String)> {
        self.spoken.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// The utterance currently playing.
    pub fn current(&self) -> Option<String> {
        self.current.lock().ok().and_then(|c| c.clone())
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }

    /// Times `speak` started while another utterance was still playing.
    pub fn overlap_count(&self) -> usize {
        self.overlaps.load(Ordering::SeqCst)
    }
}

impl SpeechOutput for MockSpeaker {
    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut c) = self.current.lock() {
            *c = None;
        }
    }

    fn speak(&self, text: &str, locale: &str) {
        if let Ok(mut c) = self.current.lock() {
            if c.is_some() {
                self.overlaps.fetch_add(1, Ordering::SeqCst);
            }
            *c = Some(text.to_string());
        }
        if let Ok(mut s) = self.spoken.lock() {
            s.push((text.to_string(), locale.to_string()));
        }
    }
}
