//! Plain-text rendering of analysis reports for the terminal.

use agrolens_core::analysis::{CropScanResult, Report, SoilResult};
use agrolens_core::language::LanguageContext;
use std::fmt::Write;

/// Format `report` with labels in `ctx`'s language.
pub fn report(ctx: &LanguageContext, report: &Report) -> String {
    match report {
        Report::Crop(r) => crop(ctx, r),
        Report::Soil(r) => soil(ctx, r),
    }
}

fn crop(ctx: &LanguageContext, r: &CropScanResult) -> String {
    let mut out = format!("{}\n", ctx.translate("crop_scanner"));
    let _ = writeln!(out, "{}: {}", ctx.translate("crop_health"), r.crop_health);
    let _ = writeln!(out, "{}: {}%", ctx.translate("confidence"), r.confidence);
    let _ = writeln!(out, "{}: {}", ctx.translate("severity"), r.severity);
    let _ = writeln!(out, "{}: {}", ctx.translate("diagnosis"), r.diagnosis);
    bullets(&mut out, ctx.translate("recommendations"), &r.recommendations);
    out
}

fn soil(ctx: &LanguageContext, r: &SoilResult) -> String {
    let mut out = format!("{}\n", ctx.translate("soil_analysis"));
    let _ = writeln!(out, "{}: {}", ctx.translate("soil_type"), r.soil_type);
    let _ = writeln!(
        out,
        "{}: {:.1} ({})",
        ctx.translate("ph_level"),
        r.ph,
        ctx.translate(r.ph_status().label_key())
    );
    let _ = writeln!(
        out,
        "{}: {:.1}%",
        ctx.translate("organic_matter"),
        r.organic_matter
    );
    let _ = writeln!(out, "{}: {}", ctx.translate("nitrogen"), r.nitrogen);
    let _ = writeln!(out, "{}: {}", ctx.translate("phosphorus"), r.phosphorus);
    let _ = writeln!(out, "{}: {}", ctx.translate("potassium"), r.potassium);
    bullets(&mut out, ctx.translate("recommendations"), &r.recommendations);
    bullets(&mut out, ctx.translate("suitable_crops"), &r.suitable_crops);
    let doses: Vec<String> = r
        .fertilizers
        .iter()
        .map(|f| format!("{} ({})", f.name, f.quantity))
        .collect();
    bullets(&mut out, ctx.translate("fertilizers"), &doses);
    out
}

fn bullets(out: &mut String, header: &str, items: &[String]) {
    let _ = writeln!(out, "\n{header}:");
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}
