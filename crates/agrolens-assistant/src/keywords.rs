//! Keyword responder: substring trigger matching with localized replies.
//!
//! Input is lower-cased and scanned for trigger phrases by plain substring
//! containment (no word boundaries), so "summer crops" also matches inside
//! "midsummer cropshare". Which trigger wins when several are contained is
//! set by [`MatchPolicy`].

use agrolens_core::{
    config::MatchPolicy, error::AgroError, language::DEFAULT_LANGUAGE, traits::Assistant,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

use crate::keywords_data::{
    GREETINGS, GREETING_FALLBACK, TRIGGERS, UNRECOGNIZED, UNRECOGNIZED_FALLBACK,
};

struct Trigger {
    /// Lower-cased phrase.
    phrase: String,
    /// Length in chars, for longest-match.
    len: usize,
    replies: HashMap<String, String>,
}

/// Canned-reply assistant over a fixed trigger table.
pub struct KeywordResponder {
    default_lang: String,
    policy: MatchPolicy,
    triggers: Vec<Trigger>,
    unrecognized: HashMap<String, String>,
}

impl KeywordResponder {
    /// Responder over the compiled-in farming topics.
    pub fn builtin(policy: MatchPolicy) -> Self {
        let triggers = TRIGGERS
            .iter()
            .map(|(phrase, replies)| (*phrase, replies.to_vec()))
            .collect();
        Self::build(DEFAULT_LANGUAGE, policy, triggers, UNRECOGNIZED.to_vec())
    }

    /// Build a responder from a custom trigger table.
    ///
    /// Every trigger must have a reply in `default_lang`.
    pub fn from_tables(
        default_lang: &str,
        policy: MatchPolicy,
        triggers: Vec<(&str, Vec<(&str, &str)>)>,
        unrecognized: Vec<(&str, &str)>,
    ) -> Result<Self, AgroError> {
        for (phrase, replies) in &triggers {
            if !replies.iter().any(|(lang, _)| *lang == default_lang) {
                return Err(AgroError::Config(format!(
                    "trigger '{phrase}' has no '{default_lang}' reply"
                )));
            }
        }
        Ok(Self::build(default_lang, policy, triggers, unrecognized))
    }

    fn build(
        default_lang: &str,
        policy: MatchPolicy,
        triggers: Vec<(&str, Vec<(&str, &str)>)>,
        unrecognized: Vec<(&str, &str)>,
    ) -> Self {
        let triggers = triggers
            .into_iter()
            .map(|(phrase, replies)| {
                let phrase = phrase.to_lowercase();
                Trigger {
                    len: phrase.chars().count(),
                    phrase,
                    replies: replies
                        .into_iter()
                        .map(|(l, r)| (l.to_string(), r.to_string()))
                        .collect(),
                }
            })
            .collect();
        Self {
            default_lang: default_lang.to_string(),
            policy,
            triggers,
            unrecognized: unrecognized
                .into_iter()
                .map(|(l, m)| (l.to_string(), m.to_string()))
                .collect(),
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Trigger phrases in table order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.triggers.iter().map(|t| t.phrase.as_str())
    }

    fn find(&self, input: &str) -> Option<&Trigger> {
        let question = input.to_lowercase();
        let mut hits = self
            .triggers
            .iter()
            .filter(|t| question.contains(t.phrase.as_str()));
        match self.policy {
            MatchPolicy::First => hits.next(),
            MatchPolicy::Longest => hits.fold(None, |best: Option<&Trigger>, t| match best {
                Some(b) if b.len >= t.len => Some(b),
                _ => Some(t),
            }),
        }
    }

    /// The trigger phrase `input` matched, if any.
    pub fn matched_trigger(&self, input: &str) -> Option<&str> {
        self.find(input).map(|t| t.phrase.as_str())
    }

    /// Reply to `input` in `lang`. Total: unmatched input gets the localized
    /// "still learning" message.
    pub fn respond(&self, input: &str, lang: &str) -> &str {
        let Some(trigger) = self.find(input) else {
            debug!("keywords: no trigger in {input:?}");
            return self.unrecognized(lang);
        };
        debug!("keywords: matched '{}'", trigger.phrase);
        trigger
            .replies
            .get(lang)
            .or_else(|| trigger.replies.get(&self.default_lang))
            .map(String::as_str)
            .unwrap_or_else(|| self.unrecognized(lang))
    }

    /// Localized "I don't understand" reply.
    pub fn unrecognized(&self, lang: &str) -> &str {
        self.unrecognized
            .get(lang)
            .map(String::as_str)
            .unwrap_or(UNRECOGNIZED_FALLBACK)
    }
}

/// Opening line of the chat panel in `lang`. English when `lang` has none.
pub fn greeting(lang: &str) -> &'static str {
    GREETINGS
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, text)| *text)
        .unwrap_or(GREETING_FALLBACK)
}

#[async_trait]
impl Assistant for KeywordResponder {
    fn name(&self) -> &str {
        "keywords"
    }

    async fn reply(&self, input: &str, lang: &str) -> Result<String, AgroError> {
        Ok(self.respond(input, lang).to_string())
    }
}
