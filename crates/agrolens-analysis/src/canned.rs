//! Mock analyzer: fixed delay, uniform random pick from a canned set.

use agrolens_core::{
    analysis::{CropScanResult, Report, ScanKind, SoilResult},
    config::AnalysisConfig,
    error::AgroError,
    traits::Analyzer,
};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::{crop, soil};

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Stand-in analyzer that ignores its input and returns a canned record.
pub struct CannedAnalyzer<T> {
    name: &'static str,
    delay: Duration,
    samples: Vec<T>,
}

impl<T: Clone + Send + Sync> CannedAnalyzer<T> {
    pub fn new(name: &'static str, delay: Duration, samples: Vec<T>) -> Self {
        Self {
            name,
            delay,
            samples,
        }
    }

    /// The records this analyzer can return.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the simulated latency, then pick one record uniformly.
    pub async fn pick(&self) -> Result<T, AgroError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let choice = self.samples.choose(&mut rand::thread_rng()).cloned();
        choice.ok_or_else(|| AgroError::Analysis(format!("{}: no canned results", self.name)))
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> Analyzer for CannedAnalyzer<T> {
    type Output = T;

    fn name(&self) -> &str {
        self.name
    }

    async fn analyze(&self, image: &[u8]) -> Result<T, AgroError> {
        debug!("{}: ignoring {} image bytes", self.name, image.len());
        self.pick().await
    }
}

/// Both canned analyzers behind one `pick_result(kind)` entry point.
///
/// The session takes its default analyzers from here; the same instances
/// serve `pick_result` callers that have no scanner state of their own.
pub struct CannedPicker {
    crop: Arc<CannedAnalyzer<CropScanResult>>,
    soil: Arc<CannedAnalyzer<SoilResult>>,
}

impl CannedPicker {
    pub fn from_config(cfg: &AnalysisConfig) -> Self {
        Self {
            crop: Arc::new(crop::canned_scanner(cfg.crop_delay())),
            soil: Arc::new(soil::canned_analyzer(cfg.soil_delay())),
        }
    }

    pub fn crop(&self) -> Arc<CannedAnalyzer<CropScanResult>> {
        self.crop.clone()
    }

    pub fn soil(&self) -> Arc<CannedAnalyzer<SoilResult>> {
        self.soil.clone()
    }

    /// Pick a canned report for `kind` after that kind's delay.
    pub async fn pick_result(&self, kind: ScanKind) -> Result<Report, AgroError> {
        let report = match kind {
            ScanKind::Crop => Report::Crop(self.crop.pick().await?),
            ScanKind::Soil => Report::Soil(self.soil.pick().await?),
        };
        info!("canned {kind:?} result picked");
        Ok(report)
    }
}

/// The named sample report for `kind`, returned at once without a delay.
pub fn sample(kind: ScanKind, name: &str) -> Result<Report, AgroError> {
    let (report, names) = match kind {
        ScanKind::Crop => (crop::sample(name).map(Report::Crop), crop::NAMES),
        ScanKind::Soil => (soil::sample(name).map(Report::Soil), soil::NAMES),
    };
    report.ok_or_else(|| {
        AgroError::Analysis(format!(
            "no {kind:?} sample '{name}' (expected one of: {})",
            names.join(", ")
        ))
    })
}
