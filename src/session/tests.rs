use super::*;
use agrolens_analysis::{crop, soil};
use agrolens_core::{
    config::AnalysisConfig,
    devices::mock::{MockCamera, MockMicrophone, MockSpeaker},
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Analyzer that numbers its calls and waits a scripted time for each.
struct SlowAnalyzer {
    delays: Mutex<VecDeque<Duration>>,
    calls: AtomicU32,
}

impl SlowAnalyzer {
    fn new(delays: &[u64]) -> Self {
        Self {
            delays: Mutex::new(delays.iter().map(|ms| Duration::from_millis(*ms)).collect()),
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl Analyzer for SlowAnalyzer {
    type Output = u32;

    fn name(&self) -> &str {
        "slow"
    }

    async fn analyze(&self, _image: &[u8]) -> Result<u32, AgroError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let delay = self
            .delays
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Duration::ZERO);
        tokio::time::sleep(delay).await;
        Ok(n)
    }
}

fn test_config() -> Config {
    Config {
        analysis: AnalysisConfig {
            crop_delay_ms: 0,
            soil_delay_ms: 0,
        },
        ..Config::default()
    }
}

fn test_session(camera: Arc<MockCamera>, mic: Arc<MockMicrophone>) -> Session {
    Session::from_config(
        &test_config(),
        Devices {
            camera,
            microphone: mic,
            speaker: Arc::new(MockSpeaker::new()),
        },
    )
    .unwrap()
}

// --- Scanner ---

#[tokio::test]
async fn test_stale_scan_does_not_overwrite_newer() {
    let analyzer: Arc<dyn Analyzer<Output = u32>> = Arc::new(SlowAnalyzer::new(&[150, 10]));
    let scanner = Arc::new(Scanner::new(ScanKind::Crop, analyzer));

    let slow = {
        let scanner = scanner.clone();
        tokio::spawn(async move { scanner.scan(vec![1]).await })
    };
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(scanner.state().scanning);

    let fast = scanner.scan(vec![2]).await.unwrap();
    assert_eq!(fast, Some(2));

    let stale = slow.await.unwrap().unwrap();
    assert_eq!(stale, None);

    let state = scanner.state();
    assert_eq!(state.result, Some(2));
    assert_eq!(state.image, Some(vec![2]));
    assert!(!state.scanning);
}

#[tokio::test]
async fn test_reset_orphans_inflight_scan() {
    let analyzer: Arc<dyn Analyzer<Output = u32>> = Arc::new(SlowAnalyzer::new(&[80]));
    let scanner = Arc::new(Scanner::new(ScanKind::Soil, analyzer));
    let pending = {
        let scanner = scanner.clone();
        tokio::spawn(async move { scanner.scan(vec![9]).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    scanner.reset();

    assert_eq!(pending.await.unwrap().unwrap(), None);
    let state = scanner.state();
    assert!(state.result.is_none());
    assert!(state.image.is_none());
    assert!(!state.scanning);
    assert_eq!(scanner.kind(), ScanKind::Soil);
}

#[tokio::test]
async fn test_denied_camera_aborts_scan() {
    let camera = Arc::new(MockCamera::denied());
    let session = test_session(camera.clone(), Arc::new(MockMicrophone::new(["x"])));

    let err = session.capture(ScanKind::Crop).await.unwrap_err();
    assert!(matches!(err, AgroError::Device(_)));
    assert!(!camera.is_active());
    assert!(session.crop.state().image.is_none());
    assert!(!session.crop.state().scanning);
}

// --- Session ---

#[tokio::test]
async fn test_capture_scans_and_releases_camera() {
    let camera = Arc::new(MockCamera::new(b"jpeg-bytes".to_vec()));
    let session = test_session(camera.clone(), Arc::new(MockMicrophone::new(["x"])));

    let report = session.capture(ScanKind::Crop).await.unwrap().unwrap();
    assert!(!camera.is_active());
    assert_eq!(camera.open_count(), 1);

    let Report::Crop(result) = report else {
        panic!("expected crop report");
    };
    assert!(crop::samples().contains(&result));
    assert_eq!(session.crop.state().result, Some(result));
    assert_eq!(session.crop.state().image.as_deref(), Some(&b"jpeg-bytes"[..]));
}

#[tokio::test]
async fn test_soil_upload_returns_canned_record() {
    let session = test_session(
        Arc::new(MockCamera::new(vec![])),
        Arc::new(MockMicrophone::new(["x"])),
    );
    for _ in 0..100 {
        let report = session
            .analyze(ScanKind::Soil, vec![0xff, 0xd8])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(report.kind(), ScanKind::Soil);
        let Report::Soil(r) = report else { unreachable!() };
        assert!(soil::samples().contains(&r));
    }
    assert!(session.crop.state().result.is_none());
}

#[tokio::test]
async fn test_language_switch_flows_everywhere() {
    let mic = Arc::new(MockMicrophone::new(["xyz nonsense"]));
    let mut session = test_session(Arc::new(MockCamera::new(vec![])), mic.clone());

    assert_eq!(session.translate("home"), "Home");
    session.set_language("hi").unwrap();
    assert_eq!(session.translate("home"), "होम");
    assert_eq!(session.nav()[0].label, "होम");

    let reply = session.listen().await.unwrap().unwrap();
    assert_eq!(
        reply,
        "माफ़ कीजिए, मैं अभी सीख रहा हूँ। कृपया खेती या फसल से जुड़ा प्रश्न पूछें!"
    );
    assert_eq!(mic.locales(), vec!["hi-IN".to_string()]);
}

#[tokio::test]
async fn test_unknown_language_keeps_current() {
    let mut session = test_session(
        Arc::new(MockCamera::new(vec![])),
        Arc::new(MockMicrophone::new(["x"])),
    );
    session.set_language("ta").unwrap();
    assert!(session.set_language("de").is_err());
    assert_eq!(session.language().code, "ta");
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let mut session = test_session(
        Arc::new(MockCamera::new(vec![1])),
        Arc::new(MockMicrophone::new(["x"])),
    );
    session.set_language("te").unwrap();
    session.ask("crop rotation").await.unwrap();
    session.capture(ScanKind::Soil).await.unwrap();
    assert!(session.soil.state().result.is_some());

    session.reset();
    assert_eq!(session.language().code, "en");
    assert!(session.soil.state().result.is_none());
    assert!(session.chat.messages().is_empty());
}

#[test]
fn test_from_config_rejects_unknown_default_language() {
    let mut cfg = test_config();
    cfg.agrolens.default_language = "xx".into();
    let devices = Devices {
        camera: Arc::new(MockCamera::new(vec![])),
        microphone: Arc::new(MockMicrophone::new(Vec::<String>::new())),
        speaker: Arc::new(MockSpeaker::new()),
    };
    assert!(matches!(
        Session::from_config(&cfg, devices),
        Err(AgroError::UnknownLanguage(_))
    ));
}

#[test]
fn test_reset_goes_to_first_language_not_configured_one() {
    let mut cfg = test_config();
    cfg.agrolens.default_language = "te".into();
    let mut session = Session::from_config(
        &cfg,
        Devices {
            camera: Arc::new(MockCamera::new(vec![])),
            microphone: Arc::new(MockMicrophone::new(["x"])),
            speaker: Arc::new(MockSpeaker::new()),
        },
    )
    .unwrap();
    assert_eq!(session.language().code, "te");
    session.reset();
    assert_eq!(session.language().code, "en");
}

#[tokio::test]
async fn test_sample_replaces_inflight_scan() {
    let analyzer: Arc<dyn Analyzer<Output = CropScanResult>> =
        Arc::new(crop::canned_scanner(Duration::from_millis(80)));
    let scanner = Arc::new(Scanner::new(ScanKind::Crop, analyzer));
    let pending = {
        let scanner = scanner.clone();
        tokio::spawn(async move { scanner.scan(vec![1]).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;

    let healthy = crop::sample("healthy").unwrap();
    scanner.show(healthy.clone());
    assert_eq!(pending.await.unwrap().unwrap(), None);

    let state = scanner.state();
    assert_eq!(state.result, Some(healthy));
    assert!(state.image.is_none());
    assert!(!state.scanning);
}

#[test]
fn test_show_sample_by_name() {
    let session = test_session(
        Arc::new(MockCamera::new(vec![])),
        Arc::new(MockMicrophone::new(["x"])),
    );
    let report = session.show_sample(ScanKind::Soil, "deficient").unwrap();
    let Report::Soil(r) = report else {
        panic!("expected soil report");
    };
    assert_eq!(r.ph, 5.2);
    assert_eq!(session.soil.state().result, Some(r));
    assert!(session.crop.state().result.is_none());

    assert!(matches!(
        session.show_sample(ScanKind::Soil, "healthy"),
        Err(AgroError::Analysis(_))
    ));
}

#[test]
fn test_greet_uses_active_language() {
    let mut session = test_session(
        Arc::new(MockCamera::new(vec![])),
        Arc::new(MockMicrophone::new(["x"])),
    );
    assert_eq!(session.greet(), "Hello! How can I help you?");
    session.set_language("ta").unwrap();
    assert_eq!(session.greet(), "வணக்கம்! நான் உங்களுக்கு எப்படி உதவலாம்?");
    assert_eq!(session.chat.messages().len(), 1);
}
