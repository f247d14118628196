//! Result records produced by crop and soil analyzers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall condition of a scanned crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropHealth {
    Healthy,
    Diseased,
    PestDamage,
    NutrientDeficiency,
}

impl fmt::Display for CropHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Diseased => write!(f, "diseased"),
            Self::PestDamage => write!(f, "pest damage"),
            Self::NutrientDeficiency => write!(f, "nutrient deficiency"),
        }
    }
}

/// Low / medium / high, used for severity and nutrient levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Outcome of a crop scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropScanResult {
    pub crop_health: CropHealth,
    /// Percent, 0-100.
    pub confidence: u8,
    pub diagnosis: String,
    pub recommendations: Vec<String>,
    pub severity: Level,
}

/// A fertilizer and its recommended dose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fertilizer {
    pub name: String,
    /// Dose with unit, e.g. "50 kg/acre".
    pub quantity: String,
}

/// Outcome of a soil analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilResult {
    pub ph: f32,
    pub nitrogen: Level,
    pub phosphorus: Level,
    pub potassium: Level,
    /// Percent by weight.
    pub organic_matter: f32,
    pub soil_type: String,
    pub recommendations: Vec<String>,
    pub suitable_crops: Vec<String>,
    pub fertilizers: Vec<Fertilizer>,
}

impl SoilResult {
    pub fn ph_status(&self) -> PhStatus {
        PhStatus::from_ph(self.ph)
    }
}

/// Soil reaction class of a pH reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhStatus {
    Acidic,
    Neutral,
    Alkaline,
}

impl PhStatus {
    /// Below 6.0 is acidic, above 8.0 is alkaline. 6.0 and 8.0 are neutral.
    pub fn from_ph(ph: f32) -> Self {
        if ph < 6.0 {
            Self::Acidic
        } else if ph > 8.0 {
            Self::Alkaline
        } else {
            Self::Neutral
        }
    }

    /// Translation key of the status label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Acidic => "ph_acidic",
            Self::Neutral => "ph_neutral",
            Self::Alkaline => "ph_alkaline",
        }
    }
}

/// Which analysis a photo is taken for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    Crop,
    Soil,
}

impl ScanKind {
    /// Translation key of the progress label shown while analyzing.
    pub fn progress_key(&self) -> &'static str {
        match self {
            Self::Crop => "scanning",
            Self::Soil => "analyzing_soil",
        }
    }
}

/// A finished analysis of either kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Crop(CropScanResult),
    Soil(SoilResult),
}

impl Report {
    pub fn kind(&self) -> ScanKind {
        match self {
            Self::Crop(_) => ScanKind::Crop,
            Self::Soil(_) => ScanKind::Soil,
        }
    }
}
