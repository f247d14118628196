//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "AgroLens".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_language() -> String {
    "en".to_string()
}

pub fn default_crop_delay_ms() -> u64 {
    3000
}

pub fn default_soil_delay_ms() -> u64 {
    4000
}
