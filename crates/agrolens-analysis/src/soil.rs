//! Canned soil-condition records.

use agrolens_core::analysis::{Fertilizer, Level, SoilResult};
use std::time::Duration;

use crate::canned::{strings, CannedAnalyzer};

fn doses(items: &[(&str, &str)]) -> Vec<Fertilizer> {
    items
        .iter()
        .map(|(name, quantity)| Fertilizer {
            name: name.to_string(),
            quantity: quantity.to_string(),
        })
        .collect()
}

/// Sample names, in the order of [`samples`].
pub const NAMES: [&str; 3] = ["fertile", "deficient", "alkaline"];

/// Fertile, deficient, and alkaline soil reports.
pub fn samples() -> Vec<SoilResult> {
    vec![
        SoilResult {
            ph: 6.8,
            nitrogen: Level::High,
            phosphorus: Level::Medium,
            potassium: Level::High,
            organic_matter: 3.2,
            soil_type: "Loamy".into(),
            recommendations: strings(&[
                "Soil is in excellent condition for most crops",
                "Maintain organic matter through compost",
                "Continue current fertilization practices",
                "Monitor pH levels regularly",
            ]),
            suitable_crops: strings(&["Rice", "Cotton", "Maize", "Vegetables", "Pulses"]),
            fertilizers: doses(&[
                ("Urea", "50 kg/acre"),
                ("DAP", "25 kg/acre"),
                ("Potash", "15 kg/acre"),
            ]),
        },
        SoilResult {
            ph: 5.2,
            nitrogen: Level::Low,
            phosphorus: Level::Low,
            potassium: Level::Medium,
            organic_matter: 1.8,
            soil_type: "Sandy".into(),
            recommendations: strings(&[
                "Soil is acidic - apply lime to increase pH",
                "Add organic matter through compost or FYM",
                "Increase nitrogen and phosphorus fertilizers",
                "Consider green manuring",
            ]),
            suitable_crops: strings(&["Groundnut", "Millets", "Pulses"]),
            fertilizers: doses(&[
                ("Lime", "200 kg/acre"),
                ("Urea", "80 kg/acre"),
                ("DAP", "50 kg/acre"),
                ("Compost", "2 tons/acre"),
            ]),
        },
        SoilResult {
            ph: 8.5,
            nitrogen: Level::Medium,
            phosphorus: Level::High,
            potassium: Level::Low,
            organic_matter: 2.1,
            soil_type: "Clay".into(),
            recommendations: strings(&[
                "Soil is alkaline - add organic matter to reduce pH",
                "Apply gypsum to improve soil structure",
                "Increase potassium fertilizers",
                "Improve drainage to prevent waterlogging",
            ]),
            suitable_crops: strings(&["Cotton", "Sugarcane", "Wheat", "Barley"]),
            fertilizers: doses(&[
                ("Gypsum", "250 kg/acre"),
                ("Potash", "40 kg/acre"),
                ("Organic Compost", "3 tons/acre"),
                ("Sulfur", "20 kg/acre"),
            ]),
        },
    ]
}

/// The sample called `name`, if there is one.
pub fn sample(name: &str) -> Option<SoilResult> {
    NAMES
        .iter()
        .zip(samples())
        .find(|(n, _)| **n == name)
        .map(|(_, r)| r)
}

/// Mock soil analyzer over [`samples`].
pub fn canned_analyzer(delay: Duration) -> CannedAnalyzer<SoilResult> {
    CannedAnalyzer::new("canned-soil-analyzer", delay, samples())
}
