//! Supported languages and the session-scoped language selector.
//!
//! The language set is fixed at startup. [`LanguageContext`] is the single
//! source of truth for the active language; it is owned by the session and
//! passed to whatever renders text instead of living in global state.

use serde::Serialize;
use tracing::info;

use crate::error::AgroError;
use crate::i18n::TextResolver;

/// A language the app can display and speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Short code used as the table key (e.g. "en", "te").
    pub code: &'static str,
    /// Native display name.
    pub name: &'static str,
    pub flag: &'static str,
    /// BCP-47 tag handed to speech devices (e.g. "te-IN").
    pub speech_locale: &'static str,
}

/// Code of the fallback language every table must cover.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configured languages, in menu order. The first entry is the reset target.
pub const LANGUAGES: &[Language] = &[
    Language {
        code: "en",
        name: "English",
        flag: "\u{1f1fa}\u{1f1f8}",
        speech_locale: "en-IN",
    },
    Language {
        code: "te",
        name: "\u{c24}\u{c46}\u{c32}\u{c41}\u{c17}\u{c41}",
        flag: "\u{1f1ee}\u{1f1f3}",
        speech_locale: "te-IN",
    },
    Language {
        code: "hi",
        name: "\u{939}\u{93f}\u{902}\u{926}\u{940}",
        flag: "\u{1f1ee}\u{1f1f3}",
        speech_locale: "hi-IN",
    },
    Language {
        code: "ur",
        name: "\u{627}\u{631}\u{62f}\u{648}",
        flag: "\u{1f1f5}\u{1f1f0}",
        speech_locale: "ur-IN",
    },
    Language {
        code: "kn",
        name: "\u{c95}\u{ca8}\u{ccd}\u{ca8}\u{ca1}",
        flag: "\u{1f1ee}\u{1f1f3}",
        speech_locale: "kn-IN",
    },
    Language {
        code: "ta",
        name: "\u{ba4}\u{bae}\u{bbf}\u{bb4}\u{bcd}",
        flag: "\u{1f1ee}\u{1f1f3}",
        speech_locale: "ta-IN",
    },
    Language {
        code: "mr",
        name: "\u{92e}\u{930}\u{93e}\u{920}\u{940}",
        flag: "\u{1f1ee}\u{1f1f3}",
        speech_locale: "mr-IN",
    },
];

/// Find a configured language by its short code.
pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

/// The active language for one session.
#[derive(Debug, Clone)]
pub struct LanguageContext {
    current: &'static Language,
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self {
            current: &LANGUAGES[0],
        }
    }
}

impl LanguageContext {
    /// Start a session in `code` instead of the first configured language.
    pub fn starting_with(code: &str) -> Result<Self, AgroError> {
        let lang = find(code).ok_or_else(|| AgroError::UnknownLanguage(code.to_string()))?;
        Ok(Self { current: lang })
    }

    pub fn current(&self) -> &'static Language {
        self.current
    }

    /// Switch the active language. Codes outside the configured set are
    /// rejected and leave the selection unchanged.
    pub fn set_current(&mut self, code: &str) -> Result<&'static Language, AgroError> {
        let lang = find(code).ok_or_else(|| AgroError::UnknownLanguage(code.to_string()))?;
        if lang.code != self.current.code {
            info!("language: {} -> {}", self.current.code, lang.code);
        }
        self.current = lang;
        Ok(lang)
    }

    /// Revert to the first configured language.
    pub fn reset(&mut self) {
        self.current = &LANGUAGES[0];
    }

    /// Resolve `key` for the active language through the built-in tables.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.translate_with(TextResolver::builtin(), key)
    }

    /// Resolve `key` for the active language through `resolver`.
    pub fn translate_with<'a>(&self, resolver: &'a TextResolver, key: &'a str) -> &'a str {
        resolver.resolve(self.current.code, key)
    }
}
