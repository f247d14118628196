//! Voice chat loop: listen, reply, speak, and keep the message log.

use agrolens_core::{
    error::AgroError,
    language::Language,
    message::ChatMessage,
    traits::{Assistant, SpeechInput, SpeechOutput},
};
use std::sync::{Arc, Mutex};

use crate::keywords::greeting;
use tracing::{debug, info, warn};

/// One chat panel: an assistant wired to a microphone and a speaker.
pub struct VoiceChat {
    assistant: Arc<dyn Assistant>,
    input: Arc<dyn SpeechInput>,
    output: Arc<dyn SpeechOutput>,
    /// Held while the microphone is acquired.
    listening: tokio::sync::Mutex<()>,
    log: Mutex<Vec<ChatMessage>>,
}

impl VoiceChat {
    pub fn new(
        assistant: Arc<dyn Assistant>,
        input: Arc<dyn SpeechInput>,
        output: Arc<dyn SpeechOutput>,
    ) -> Self {
        Self {
            assistant,
            input,
            output,
            listening: tokio::sync::Mutex::new(()),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Open the panel in `lang`: the log restarts with a spoken greeting.
    pub fn greet(&self, lang: &Language) -> &'static str {
        let text = greeting(lang.code);
        if let Ok(mut log) = self.log.lock() {
            log.clear();
            log.push(ChatMessage::bot(text));
        }
        self.speak(text, lang.speech_locale);
        text
    }

    /// Whether the microphone is currently acquired.
    pub fn is_listening(&self) -> bool {
        self.listening.try_lock().is_err()
    }

    /// Hear one utterance in `lang`, answer it, and speak the answer.
    ///
    /// Returns `Ok(None)` when nothing intelligible was heard. Fails without
    /// touching the microphone if another listen is still in progress.
    pub async fn listen_once(&self, lang: &Language) -> Result<Option<String>, AgroError> {
        let transcript = {
            let _mic = self
                .listening
                .try_lock()
                .map_err(|_| AgroError::Device("microphone already in use".into()))?;
            match self.input.listen(lang.speech_locale).await {
                Ok(t) => t,
                Err(e) => {
                    warn!("speech input failed: {e}");
                    return Err(e);
                }
            }
        };

        let transcript = transcript.trim();
        if transcript.is_empty() {
            debug!("voice: empty transcript ignored");
            return Ok(None);
        }
        self.ask(transcript, lang).await.map(Some)
    }

    /// Answer typed or transcribed `text` in `lang` and speak the answer.
    pub async fn ask(&self, text: &str, lang: &Language) -> Result<String, AgroError> {
        self.push(ChatMessage::user(text));
        let reply = self.assistant.reply(text, lang.code).await?;
        info!("{} replied in {}", self.assistant.name(), lang.code);
        self.push(ChatMessage::bot(reply.clone()));
        self.speak(&reply, lang.speech_locale);
        Ok(reply)
    }

    /// Speak `text`, cutting off whatever is still playing.
    pub fn speak(&self, text: &str, locale: &str) {
        self.output.cancel();
        self.output.speak(text, locale);
    }

    /// Chat log, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Drop the chat log and silence the speaker.
    pub fn reset(&self) {
        self.output.cancel();
        if let Ok(mut log) = self.log.lock() {
            log.clear();
        }
    }

    fn push(&self, msg: ChatMessage) {
        if let Ok(mut log) = self.log.lock() {
            log.push(msg);
        }
    }
}
