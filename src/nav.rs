//! Navigation menu: route paths and their label keys.

use agrolens_core::language::LanguageContext;
use serde::Serialize;

/// A menu entry resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

/// Route path and translation key of its label, in menu order.
pub const ROUTES: &[(&str, &str)] = &[
    ("/", "home"),
    ("/mandi-prices", "mandi_prices"),
    ("/weather", "weather"),
    ("/tips", "tips"),
    ("/schemes", "schemes"),
    ("/crop-scanner", "crop_scanner"),
    ("/marketplace", "marketplace"),
    ("/seasonal-crops", "seasonal_crops"),
    ("/soil-analysis", "soil_analysis"),
];

/// Menu entries labelled in `ctx`'s current language.
pub fn items(ctx: &LanguageContext) -> Vec<NavItem> {
    ROUTES
        .iter()
        .map(|&(path, key)| NavItem {
            path,
            label: ctx.translate(key),
        })
        .collect()
}
