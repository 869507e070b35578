use fc_app::*;
use fc_project::{FieldCard, PhotoAnnotation, PhotoRef, SiteInfo};
use fc_sizing::{CulvertSizingEngine, assess_water_transport_potential};
use fc_store::MemoryCardStore;

fn wide_stream_card(repo: &MemoryCardStore, engine: &CulvertSizingEngine) -> FieldCard {
    let form = CaliforniaForm {
        top_widths: "3.0,3.2,2.8".to_string(),
        bottom_width: "1.0".to_string(),
        depths: "0.8,0.9,0.85".to_string(),
        climate: ClimateForm::default(),
    };
    let card = create_card(
        repo,
        engine,
        NewCard {
            title: "Big Creek crossing".to_string(),
            site: SiteInfo {
                stream_name: "Big Creek".to_string(),
                road_name: Some("Mainline 12".to_string()),
                description: String::new(),
            },
            location: None,
            measurements: form.to_measurements(engine.config()).unwrap(),
            wtp: Some(assess_water_transport_potential("high", "medium", "small").unwrap()),
        },
    )
    .unwrap();
    add_note(repo, &card.id, "Bankfull indicators clear on both banks").unwrap();
    attach_photo(
        repo,
        &card.id,
        PhotoRef {
            path: "photos/upstream.jpg".to_string(),
            caption: "Upstream reach".to_string(),
            taken_at: None,
            annotations: vec![PhotoAnnotation {
                text: "gravel bar".to_string(),
                marker: None,
            }],
        },
    )
    .unwrap()
}

#[test]
fn report_contains_recommendation_and_warning() {
    let repo = MemoryCardStore::new();
    let engine = CulvertSizingEngine::default();
    let card = wide_stream_card(&repo, &engine);

    let report = render_text_report(&card, &engine, &ReportOptions { slope: Some(0.02) }).unwrap();

    assert!(report.contains("Big Creek crossing"));
    assert!(report.contains("California Method"));
    assert!(report.contains("2000 mm"));
    assert!(report.contains("Professional engineering design required"));
    assert!(report.contains("Flow capacity:"));
    assert!(report.contains("Score:"));
    assert!(report.contains("6 / 9"));
    assert!(report.contains("Bankfull indicators clear"));
    assert!(report.contains("photos/upstream.jpg - Upstream reach"));
    assert!(report.contains("gravel bar"));
    assert!(report.contains("Fingerprint: "));
}

#[test]
fn report_without_slope_omits_flow_line() {
    let repo = MemoryCardStore::new();
    let engine = CulvertSizingEngine::default();
    let card = wide_stream_card(&repo, &engine);

    let report = render_text_report(&card, &engine, &ReportOptions::default()).unwrap();
    assert!(!report.contains("Flow capacity:"));
    assert!(report.contains("not applied"));
}

#[test]
fn report_is_written_to_disk() {
    let repo = MemoryCardStore::new();
    let engine = CulvertSizingEngine::default();
    let card = wide_stream_card(&repo, &engine);

    let path = std::env::temp_dir().join("fc_app_report_output.txt");
    write_text_report(&path, &card, &engine, &ReportOptions::default()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("CULVERT SIZING FIELD CARD"));
}
