//! Internationalization: localized UI strings with a total lookup.
//!
//! A key resolves in the requested language's table, then in the default
//! language's table, then falls back to the key itself. Lookups never fail.
//! Shipped tables: English (complete), Telugu, Hindi. Other configured
//! languages resolve entirely through the English fallback.

mod labels;


use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::AgroError;
use crate::language::DEFAULT_LANGUAGE;

/// Language code -> translation key -> localized string.
#[derive(Debug, Clone)]
pub struct TextResolver {
    default_lang: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl TextResolver {
    /// Build a resolver from per-language tables.
    ///
    /// `tables` must contain `default_lang`, which is the fallback target.
    pub fn from_tables<L, K, V>(
        default_lang: &str,
        tables: impl IntoIterator<Item = (L, Vec<(K, V)>)>,
    ) -> Result<Self, AgroError>
    where
        L: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let tables: HashMap<String, HashMap<String, String>> = tables
            .into_iter()
            .map(|(lang, entries)| {
                let map = entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect();
                (lang.into(), map)
            })
            .collect();
        if !tables.contains_key(default_lang) {
            return Err(AgroError::Config(format!(
                "translation tables have no entry for default language '{default_lang}'"
            )));
        }
        Ok(Self {
            default_lang: default_lang.to_string(),
            tables,
        })
    }

    /// The shared resolver over the compiled-in tables.
    pub fn builtin() -> &'static TextResolver {
        static BUILTIN: OnceLock<TextResolver> = OnceLock::new();
        BUILTIN.get_or_init(|| Self {
            default_lang: DEFAULT_LANGUAGE.to_string(),
            tables: labels::TABLES
                .iter()
                .map(|(lang, entries)| {
                    let map = entries
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect();
                    (lang.to_string(), map)
                })
                .collect(),
        })
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// Resolve `key` for `lang`: own table, then default table, then `key`.
    pub fn resolve<'a>(&'a self, lang: &str, key: &'a str) -> &'a str {
        if let Some(v) = self.tables.get(lang).and_then(|t| t.get(key)) {
            return v.as_str();
        }
        if let Some(v) = self.tables.get(&self.default_lang).and_then(|t| t.get(key)) {
            debug!("i18n: '{key}' missing for '{lang}', using {}", self.default_lang);
            return v.as_str();
        }
        debug!("i18n: '{key}' missing from every table");
        key
    }

    /// Whether `lang`'s own table has `key` (no fallback).
    pub fn has_key(&self, lang: &str, key: &str) -> bool {
        self.tables.get(lang).is_some_and(|t| t.contains_key(key))
    }

    /// Keys defined by the default language, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&self.default_lang)
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Default-language keys that `lang` resolves only through fallback.
    pub fn missing_keys(&self, lang: &str) -> Vec<&str> {
        self.keys()
            .into_iter()
            .filter(|k| !self.has_key(lang, k))
            .collect()
    }
}

/// Return a localized string for `key` in `lang` from the built-in tables.
/// Falls back to English, then to the key itself.
pub fn t<'a>(key: &'a str, lang: &str) -> &'a str {
    TextResolver::builtin().resolve(lang, key)
}
