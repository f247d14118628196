//! Session: everything one user interacts with between resets.
//!
//! Owns the language selection, both scanner screens, and the chat panel.
//! Static tables live elsewhere; only this state changes at runtime.

mod scanner;

#[cfg(test)]
mod tests;

pub use scanner::Scanner;

use agrolens_analysis::CannedPicker;
use agrolens_assistant::{KeywordResponder, VoiceChat};
use agrolens_core::{
    analysis::{CropScanResult, Report, ScanKind, SoilResult},
    config::Config,
    error::AgroError,
    language::{Language, LanguageContext},
    traits::{Analyzer, Assistant, Camera, SpeechInput, SpeechOutput},
};
use std::sync::Arc;

use crate::nav::{self, NavItem};

/// Hardware the session talks to.
pub struct Devices {
    pub camera: Arc<dyn Camera>,
    pub microphone: Arc<dyn SpeechInput>,
    pub speaker: Arc<dyn SpeechOutput>,
}

/// Analysis and chat backends.
pub struct Backends {
    pub crop: Arc<dyn Analyzer<Output = CropScanResult>>,
    pub soil: Arc<dyn Analyzer<Output = SoilResult>>,
    pub assistant: Arc<dyn Assistant>,
}

impl Backends {
    /// Canned analyzers and the keyword responder, tuned by `cfg`.
    pub fn canned(cfg: &Config) -> Self {
        let picker = CannedPicker::from_config(&cfg.analysis);
        Self {
            crop: picker.crop(),
            soil: picker.soil(),
            assistant: Arc::new(KeywordResponder::builtin(cfg.assistant.match_policy)),
        }
    }
}

pub struct Session {
    language: LanguageContext,
    camera: Arc<dyn Camera>,
    pub crop: Scanner<CropScanResult>,
    pub soil: Scanner<SoilResult>,
    pub chat: VoiceChat,
}

impl Session {
    pub fn new(language: LanguageContext, backends: Backends, devices: Devices) -> Self {
        Self {
            language,
            camera: devices.camera,
            crop: Scanner::new(ScanKind::Crop, backends.crop),
            soil: Scanner::new(ScanKind::Soil, backends.soil),
            chat: VoiceChat::new(backends.assistant, devices.microphone, devices.speaker),
        }
    }

    /// Session with canned backends, starting in the configured language.
    pub fn from_config(cfg: &Config, devices: Devices) -> Result<Self, AgroError> {
        let language = LanguageContext::starting_with(&cfg.agrolens.default_language)?;
        Ok(Self::new(language, Backends::canned(cfg), devices))
    }

    pub fn language(&self) -> &'static Language {
        self.language.current()
    }

    pub fn context(&self) -> &LanguageContext {
        &self.language
    }

    pub fn set_language(&mut self, code: &str) -> Result<&'static Language, AgroError> {
        self.language.set_current(code)
    }

    /// Localized UI text for the active language.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.language.translate(key)
    }

    /// Menu entries labelled in the active language.
    pub fn nav(&self) -> Vec<NavItem> {
        nav::items(&self.language)
    }

    /// Analyze an uploaded photo. `Ok(None)` means a newer scan replaced it.
    pub async fn analyze(&self, kind: ScanKind, image: Vec<u8>) -> Result<Option<Report>, AgroError> {
        Ok(match kind {
            ScanKind::Crop => self.crop.scan(image).await?.map(Report::Crop),
            ScanKind::Soil => self.soil.scan(image).await?.map(Report::Soil),
        })
    }

    /// Take a photo with the session camera and analyze it.
    pub async fn capture(&self, kind: ScanKind) -> Result<Option<Report>, AgroError> {
        let camera = self.camera.clone();
        Ok(match kind {
            ScanKind::Crop => self.crop.capture_and_scan(camera).await?.map(Report::Crop),
            ScanKind::Soil => self.soil.capture_and_scan(camera).await?.map(Report::Soil),
        })
    }

    /// Show the named canned sample on `kind`'s screen, replacing any scan
    /// still in flight.
    pub fn show_sample(&self, kind: ScanKind, name: &str) -> Result<Report, AgroError> {
        let report = agrolens_analysis::sample(kind, name)?;
        match &report {
            Report::Crop(r) => self.crop.show(r.clone()),
            Report::Soil(r) => self.soil.show(r.clone()),
        }
        Ok(report)
    }

    /// Open the chat panel in the active language.
    pub fn greet(&self) -> &'static str {
        self.chat.greet(self.language.current())
    }

    /// One voice round in the active language.
    pub async fn listen(&self) -> Result<Option<String>, AgroError> {
        self.chat.listen_once(self.language.current()).await
    }

    /// Typed question in the active language.
    pub async fn ask(&self, text: &str) -> Result<String, AgroError> {
        self.chat.ask(text, self.language.current()).await
    }

    /// Back to a fresh session: first language, empty screens, empty chat.
    pub fn reset(&mut self) {
        self.language.reset();
        self.crop.reset();
        self.soil.reset();
        self.chat.reset();
    }
}
