use crate::error::AgroError;
use async_trait::async_trait;

/// Image analyzer: turns a photo into a result record.
///
/// The canned analyzers shipped today ignore the image; a real inference
/// backend implements the same trait so callers do not change.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Result record produced by this analyzer.
    type Output: Send;

    /// Human-readable analyzer name.
    fn name(&self) -> &str;

    /// Analyze one encoded image.
    async fn analyze(&self, image: &[u8]) -> Result<Self::Output, AgroError>;
}

/// Conversational assistant: free text in, localized reply out.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Human-readable assistant name.
    fn name(&self) -> &str;

    /// Reply to `input` in the language with short code `lang`.
    async fn reply(&self, input: &str, lang: &str) -> Result<String, AgroError>;
}

/// Still-image camera.
#[async_trait]
pub trait Camera: Send + Sync {
    fn name(&self) -> &str;

    /// Acquire the device. Fails when access is denied, the device is
    /// missing, or it is already open.
    async fn open(&self) -> Result<(), AgroError>;

    /// Grab one encoded frame from an open device.
    async fn grab_frame(&self) -> Result<Vec<u8>, AgroError>;

    /// Stop all tracks. Safe to call on a closed device.
    fn close(&self);

    /// Whether the device currently holds an open stream.
    fn is_active(&self) -> bool;
}

/// Speech-to-text input.
#[async_trait]
pub trait SpeechInput: Send + Sync {
    /// Listen for one utterance in `locale` (BCP-47) and return its transcript.
    /// The device is released when the call returns.
    async fn listen(&self, locale: &str) -> Result<String, AgroError>;
}

/// Text-to-speech output. At most one utterance is active at a time.
pub trait SpeechOutput: Send + Sync {
    /// Drop any pending or playing utterance.
    fn cancel(&self);

    /// Start speaking `text` with a voice for `locale`.
    fn speak(&self, text: &str, locale: &str);
}
