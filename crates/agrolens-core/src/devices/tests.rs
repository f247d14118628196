use super::*;
use super::mock::{MockCamera, MockMicrophone};
use crate::traits::SpeechInput;
use std::time::Duration;

#[tokio::test]
async fn test_capture_releases_camera() {
    let cam = Arc::new(MockCamera::new(vec![1, 2, 3]));
    let capture = Capture::start(cam.clone()).await.unwrap();
    assert!(cam.is_active());

    let frame = capture.capture().await.unwrap();
    assert_eq!(frame, vec![1, 2, 3]);
    assert!(!cam.is_active());
}

#[tokio::test]
async fn test_cancel_releases_camera() {
    let cam = Arc::new(MockCamera::new(vec![7]));
    let capture = Capture::start(cam.clone()).await.unwrap();
    assert!(cam.is_active());

    capture.cancel();
    assert!(!cam.is_active());

    // Released device can be acquired again.
    let again = Capture::start(cam.clone()).await.unwrap();
    drop(again);
    assert!(!cam.is_active());
    assert_eq!(cam.open_count(), 2);
}

#[tokio::test]
async fn test_second_capture_while_open_is_refused() {
    let cam = Arc::new(MockCamera::new(vec![7]));
    let _first = Capture::start(cam.clone()).await.unwrap();
    let err = Capture::start(cam.clone()).await.err().unwrap();
    assert!(matches!(err, AgroError::Device(_)));
    assert!(cam.is_active());
}

#[tokio::test]
async fn test_denied_camera_never_activates() {
    let cam = Arc::new(MockCamera::denied());
    let err = Capture::start(cam.clone()).await.err().unwrap();
    assert!(err.to_string().contains("denied"));
    assert!(!cam.is_active());
    assert_eq!(cam.open_count(), 0);
}

#[tokio::test]
async fn test_cancelled_listen_releases_microphone() {
    let mic = MockMicrophone::new(["hello"]).with_latency(Duration::from_millis(200));
    let cancelled = tokio::time::timeout(Duration::from_millis(20), mic.listen("en-IN")).await;
    assert!(cancelled.is_err());
    assert!(!mic.is_active());

    let mic = mic.with_latency(Duration::ZERO);
    assert_eq!(mic.listen("en-IN").await.unwrap(), "hello");
    assert!(!mic.is_active());
}
