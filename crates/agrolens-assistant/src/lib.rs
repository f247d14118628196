//! # agrolens-assistant
//!
//! Farming chat assistant: a keyword responder over a fixed topic table,
//! and the voice loop that feeds it from speech input.

pub mod keywords;
mod keywords_data;
pub mod voice;

#[cfg(test)]
mod tests;

pub use keywords::KeywordResponder;
pub use voice::VoiceChat;
