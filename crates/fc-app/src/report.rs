//! Plain-text field card report.

use fc_project::{FieldCard, MeasurementInput};
use fc_sizing::{
    CulvertSizingEngine, MethodDetails, calculate_cross_sectional_area,
    get_culvert_size_description,
};
use fc_store::compute_fingerprint;
use std::path::Path;

use crate::error::AppResult;

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Channel slope (m/m) for the flow capacity line; omitted when absent
    pub slope: Option<f64>,
}

fn join(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("  {:<24}{}\n", label, value));
}

pub fn render_text_report(
    card: &FieldCard,
    engine: &CulvertSizingEngine,
    options: &ReportOptions,
) -> AppResult<String> {
    let result = &card.result;
    let mut out = String::new();

    out.push_str("CULVERT SIZING FIELD CARD\n");
    out.push_str("=========================\n");
    line(&mut out, "Title:", &card.title);
    line(&mut out, "Card ID:", &card.id);
    line(&mut out, "Created:", &card.created_at);
    line(&mut out, "Updated:", &card.updated_at);
    if !card.site.stream_name.is_empty() {
        line(&mut out, "Stream:", &card.site.stream_name);
    }
    if let Some(road) = &card.site.road_name {
        line(&mut out, "Road:", road);
    }
    if !card.site.description.is_empty() {
        line(&mut out, "Site notes:", &card.site.description);
    }
    if let Some(fix) = &card.location {
        let accuracy = fix
            .accuracy_m
            .map(|a| format!(" (±{:.0} m)", a))
            .unwrap_or_default();
        line(
            &mut out,
            "Location:",
            format!("{:.5}, {:.5}{}", fix.latitude, fix.longitude, accuracy),
        );
    }

    section(
        &mut out,
        &format!("MEASUREMENTS ({})", card.measurements.method().label()),
    );
    match &card.measurements.input {
        MeasurementInput::California(input) => {
            line(&mut out, "Top widths (m):", join(&input.top_widths_m, 2));
            line(&mut out, "Bottom width (m):", format!("{:.2}", input.bottom_width_m));
            line(&mut out, "Depths (m):", join(&input.depths_m, 2));
        }
        MeasurementInput::AreaBased(input) => {
            line(
                &mut out,
                "Watershed area (km²):",
                format!("{:.3}", input.watershed_area_km2),
            );
            line(
                &mut out,
                "Precipitation (mm/hr):",
                format!("{:.1}", input.precipitation_mm_hr),
            );
        }
    }
    let climate = if result.climate_adjusted() {
        format!("{:.2}", result.climate_projection_factor)
    } else {
        "not applied".to_string()
    };
    line(&mut out, "Climate factor:", climate);

    section(&mut out, "CALCULATION");
    match &result.details {
        MethodDetails::California {
            average_top_width_m,
            average_depth_m,
            cross_sectional_area_m2,
            end_opening_area_m2,
            required_area_m2,
            ..
        } => {
            line(&mut out, "Average top width:", format!("{:.3} m", average_top_width_m));
            line(&mut out, "Average depth:", format!("{:.3} m", average_depth_m));
            line(
                &mut out,
                "Cross-sectional area:",
                format!("{:.3} m²", cross_sectional_area_m2),
            );
            line(
                &mut out,
                "End opening area:",
                format!("{:.3} m²", end_opening_area_m2),
            );
            line(&mut out, "Required area:", format!("{:.3} m²", required_area_m2));
            line(&mut out, "Area-based size:", format!("{} mm", result.area_based_size_mm));
            line(&mut out, "Table-based size:", format!("{} mm", result.table_based_size_mm));
        }
        MethodDetails::AreaBased {
            runoff_coefficient,
            base_flow_m3s,
            flow_capacity_m3s,
            design_velocity_ms,
            culvert_area_m2,
        } => {
            line(&mut out, "Runoff coefficient:", format!("{:.2}", runoff_coefficient));
            line(&mut out, "Base flow:", format!("{:.4} m³/s", base_flow_m3s));
            line(&mut out, "Design flow:", format!("{:.4} m³/s", flow_capacity_m3s));
            line(&mut out, "Design velocity:", format!("{:.2} m/s", design_velocity_ms));
            line(&mut out, "Culvert area:", format!("{:.4} m²", culvert_area_m2));
        }
    }
    line(
        &mut out,
        "Computed diameter:",
        format!("{:.0} mm", result.computed_diameter_mm),
    );

    section(&mut out, "RECOMMENDATION");
    let size = f64::from(result.final_size_mm);
    line(&mut out, "Recommended size:", format!("{} mm", result.final_size_mm));
    line(&mut out, "Category:", get_culvert_size_description(size));
    line(
        &mut out,
        "Culvert opening:",
        format!("{:.3} m²", calculate_cross_sectional_area(size)?),
    );
    if let Some(slope) = options.slope {
        let q = engine.flow_capacity(size, slope)?;
        line(
            &mut out,
            "Flow capacity:",
            format!("{:.3} m³/s at {:.1}% slope", q, slope * 100.0),
        );
    }
    if result.requires_professional_design {
        out.push_str("  ** Professional engineering design required **\n");
    }

    if let Some(wtp) = &card.wtp {
        section(&mut out, "WATER TRANSPORT POTENTIAL");
        line(&mut out, "Score:", format!("{} / 9", wtp.score));
        line(&mut out, "Risk category:", wtp.risk_category);
        line(
            &mut out,
            "Additional sizing:",
            format!("{:.0}%", wtp.additional_sizing * 100.0),
        );
        for rec in &wtp.recommendations {
            out.push_str(&format!("  - {}\n", rec));
        }
    }

    if !card.notes.is_empty() {
        section(&mut out, "NOTES");
        for note in &card.notes {
            out.push_str(&format!("  [{}] {}\n", note.created_at, note.text));
        }
    }

    if !card.photos.is_empty() {
        section(&mut out, "PHOTOS");
        for photo in &card.photos {
            if photo.caption.is_empty() {
                out.push_str(&format!("  {}\n", photo.path));
            } else {
                out.push_str(&format!("  {} - {}\n", photo.path, photo.caption));
            }
            for annotation in &photo.annotations {
                out.push_str(&format!("      * {}\n", annotation.text));
            }
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "Fingerprint: {}\n",
        compute_fingerprint(&card.measurements, &card.result)
    ));

    Ok(out)
}

pub fn write_text_report(
    path: &Path,
    card: &FieldCard,
    engine: &CulvertSizingEngine,
    options: &ReportOptions,
) -> AppResult<()> {
    let report = render_text_report(card, engine, options)?;
    std::fs::write(path, report)?;
    tracing::info!(card_id = %card.id, path = %path.display(), "wrote report");
    Ok(())
}
