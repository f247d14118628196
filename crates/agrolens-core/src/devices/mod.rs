//! Device session helpers shared by every front-end.

pub mod mock;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::AgroError;
use crate::traits::Camera;

/// An open camera waiting for a capture or a cancel.
///
/// The camera is released on `capture`, on `cancel`, and on drop,
/// whichever comes first.
pub struct Capture {
    camera: Arc<dyn Camera>,
    open: bool,
}

impl Capture {
    /// Acquire `camera` for one capture.
    pub async fn start(camera: Arc<dyn Camera>) -> Result<Self, AgroError> {
        if let Err(e) = camera.open().await {
            warn!("camera '{}' unavailable: {e}", camera.name());
            return Err(e);
        }
        debug!("camera '{}' opened", camera.name());
        Ok(Self { camera, open: true })
    }

    /// Take one frame and release the camera.
    pub async fn capture(mut self) -> Result<Vec<u8>, AgroError> {
        let frame = self.camera.grab_frame().await;
        self.release();
        frame
    }

    /// Release the camera without taking a frame.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.open {
            self.camera.close();
            self.open = false;
            debug!("camera '{}' released", self.camera.name());
        }
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        self.release();
    }
}
