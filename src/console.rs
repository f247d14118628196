//! Terminal stand-ins for the browser's devices.
//!
//! The "camera" reads a photo from disk, the "microphone" reads one line
//! from stdin per utterance, and the "speaker" prints.

use agrolens_core::{
    error::AgroError,
    traits::{Camera, SpeechInput, SpeechOutput},
};
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};

/// Camera backed by an image file.
pub struct FileCamera {
    path: PathBuf,
    active: AtomicBool,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            active: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl Camera for FileCamera {
    fn name(&self) -> &str {
        "file"
    }

    async fn open(&self) -> Result<(), AgroError> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Err(AgroError::Device(format!(
                "camera not available: {} not found",
                self.path.display()
            )));
        }
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(AgroError::Device("camera already in use".into()));
        }
        Ok(())
    }

    async fn grab_frame(&self) -> Result<Vec<u8>, AgroError> {
        if !self.active.load(Ordering::SeqCst) {
            return Err(AgroError::Device("camera is not open".into()));
        }
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn close(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Microphone that treats each stdin line as one recognized utterance.
pub struct StdinMicrophone {
    reader: tokio::sync::Mutex<BufReader<Stdin>>,
}

impl Default for StdinMicrophone {
    fn default() -> Self {
        Self {
            reader: tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

#[async_trait]
impl SpeechInput for StdinMicrophone {
    async fn listen(&self, locale: &str) -> Result<String, AgroError> {
        print!("[{locale}] > ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        let n = self.reader.lock().await.read_line(&mut line).await?;
        if n == 0 {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }
        Ok(line.trim_end().to_string())
    }
}

/// Speaker that prints each utterance.
#[derive(Default)]
pub struct ConsoleSpeaker {
    current: Mutex<Option<String>>,
}

impl SpeechOutput for ConsoleSpeaker {
    fn cancel(&self) {
        if let Ok(mut c) = self.current.lock() {
            *c = None;
        }
    }

    fn speak(&self, text: &str, locale: &str) {
        println!("({locale}) {text}");
        if let Ok(mut c) = self.current.lock() {
            *c = Some(text.to_string());
        }
    }
}
