//! Canned crop-health records.

use agrolens_core::analysis::{CropHealth, CropScanResult, Level};
use std::time::Duration;

use crate::canned::{strings, CannedAnalyzer};

/// Sample names, in the order of [`samples`].
pub const NAMES: [&str; 3] = ["healthy", "diseased", "pest_damage"];

/// The three crop scan outcomes the mock scanner can report.
pub fn samples() -> Vec<CropScanResult> {
    vec![
        CropScanResult {
            crop_health: CropHealth::Healthy,
            confidence: 95,
            diagnosis: "Crop appears healthy with good growth patterns".into(),
            recommendations: strings(&[
                "Continue current care routine",
                "Monitor for early signs of stress",
                "Maintain adequate water supply",
                "Consider nutrient supplementation during flowering stage",
            ]),
            severity: Level::Low,
        },
        CropScanResult {
            crop_health: CropHealth::Diseased,
            confidence: 88,
            diagnosis: "Early signs of fungal infection detected on leaves".into(),
            recommendations: strings(&[
                "Apply fungicide spray immediately",
                "Improve field drainage to reduce moisture",
                "Remove affected plant parts",
                "Monitor neighboring plants for spread",
                "Consider copper-based treatments",
            ]),
            severity: Level::Medium,
        },
        CropScanResult {
            crop_health: CropHealth::PestDamage,
            confidence: 92,
            diagnosis: "Pest damage visible - likely bollworm infestation".into(),
            recommendations: strings(&[
                "Apply targeted pesticide treatment",
                "Use pheromone traps for monitoring",
                "Inspect plants daily for larvae",
                "Consider biological pest control methods",
                "Harvest early if damage is severe",
            ]),
            severity: Level::High,
        },
    ]
}

/// The sample called `name`, if there is one.
pub fn sample(name: &str) -> Option<CropScanResult> {
    NAMES
        .iter()
        .zip(samples())
        .find(|(n, _)| **n == name)
        .map(|(_, r)| r)
}

/// Mock crop scanner over [`samples`].
pub fn canned_scanner(delay: Duration) -> CannedAnalyzer<CropScanResult> {
    CannedAnalyzer::new("canned-crop-scanner", delay, samples())
}
