use clap::{Args, Parser, Subcommand};
use fc_app::{
    AppResult, AreaBasedForm, CaliforniaForm, ClimateForm, NewCard, ReportOptions, card_service,
    config_service, report,
};
use fc_project::{GpsFix, MeasurementSet, PhotoRef, SiteInfo};
use fc_sizing::{
    CulvertSizingEngine, MethodDetails, STANDARD_SIZES_MM, SizingResult,
    assess_water_transport_potential, calculate_cross_sectional_area,
    get_culvert_size_description,
};
use fc_store::FileCardStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fc-cli")]
#[command(about = "FieldCard CLI - culvert sizing for forestry field crews", long_about = None)]
struct Cli {
    /// Card store directory (defaults to ./.fieldcards/cards)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Sizing config YAML (design velocity, thresholds, defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a culvert from stream cross-section measurements
    California {
        /// Top widths in metres, e.g. "3.0,3.2,2.8"
        #[arg(long)]
        top_widths: String,
        /// Bottom width in metres
        #[arg(long)]
        bottom_width: String,
        /// Depths in metres, paired with the top widths
        #[arg(long)]
        depths: String,
        #[command(flatten)]
        climate: ClimateArgs,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Size a culvert from watershed runoff (Rational Method)
    AreaBased {
        /// Watershed area in km²
        #[arg(long)]
        watershed_area: String,
        /// Rainfall intensity in mm/hr
        #[arg(long)]
        precipitation: String,
        /// Runoff coefficient in (0, 1]; defaults from config
        #[arg(long, default_value = "")]
        runoff: String,
        #[command(flatten)]
        climate: ClimateArgs,
        #[command(flatten)]
        save: SaveArgs,
    },
    /// Score Water Transport Potential
    Wtp {
        /// low | medium | high
        #[arg(long)]
        bankfull_width: String,
        /// low | medium | high
        #[arg(long)]
        sediment_storage: String,
        /// none | small | large | logs
        #[arg(long)]
        woody_debris: String,
        /// Attach the assessment to a saved card
        #[arg(long)]
        card: Option<String>,
    },
    /// Full-pipe flow capacity of a culvert
    Flow {
        /// Diameter in millimetres
        #[arg(long)]
        diameter: f64,
        /// Channel slope as a fraction (0.02 = 2%)
        #[arg(long)]
        slope: f64,
    },
    /// List the standard culvert sizes
    Sizes,
    /// Manage saved field cards
    #[command(subcommand)]
    Cards(CardCommands),
    /// Write a text report for a saved card
    Report {
        card_id: String,
        /// Channel slope for the flow capacity line
        #[arg(long)]
        slope: Option<f64>,
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct ClimateArgs {
    /// Apply the climate projection factor
    #[arg(long)]
    climate: bool,
    /// Climate projection factor (implies --climate)
    #[arg(long)]
    climate_factor: Option<String>,
}

impl ClimateArgs {
    fn to_form(&self) -> ClimateForm {
        ClimateForm {
            enabled: self.climate || self.climate_factor.is_some(),
            factor: self.climate_factor.clone().unwrap_or_default(),
        }
    }
}

#[derive(Args)]
struct SaveArgs {
    /// Save the result as a field card with this title
    #[arg(long)]
    save: Option<String>,
    /// Stream name for the saved card
    #[arg(long)]
    stream: Option<String>,
    /// Latitude of the crossing
    #[arg(long, requires = "lon")]
    lat: Option<f64>,
    /// Longitude of the crossing
    #[arg(long, requires = "lat")]
    lon: Option<f64>,
}

#[derive(Subcommand)]
enum CardCommands {
    /// List saved cards
    List,
    /// Show a saved card
    Show { card_id: String },
    /// Add a field note
    Note { card_id: String, text: String },
    /// Attach a photo reference
    Photo {
        card_id: String,
        path: String,
        #[arg(long, default_value = "")]
        caption: String,
    },
    /// Delete a saved card
    Delete { card_id: String },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = config_service::load_engine(cli.config.as_deref())?;
    tracing::debug!(config = ?cli.config, store = ?cli.store, "engine ready");

    match cli.command {
        Commands::California {
            top_widths,
            bottom_width,
            depths,
            climate,
            save,
        } => {
            let form = CaliforniaForm {
                top_widths,
                bottom_width,
                depths,
                climate: climate.to_form(),
            };
            let measurements = form.to_measurements(engine.config())?;
            cmd_calculate(cli.store.as_deref(), &engine, measurements, &save)
        }
        Commands::AreaBased {
            watershed_area,
            precipitation,
            runoff,
            climate,
            save,
        } => {
            let form = AreaBasedForm {
                watershed_area,
                precipitation,
                runoff_coefficient: runoff,
                climate: climate.to_form(),
            };
            let measurements = form.to_measurements(engine.config())?;
            cmd_calculate(cli.store.as_deref(), &engine, measurements, &save)
        }
        Commands::Wtp {
            bankfull_width,
            sediment_storage,
            woody_debris,
            card,
        } => cmd_wtp(
            cli.store.as_deref(),
            &bankfull_width,
            &sediment_storage,
            &woody_debris,
            card.as_deref(),
        ),
        Commands::Flow { diameter, slope } => cmd_flow(&engine, diameter, slope),
        Commands::Sizes => {
            cmd_sizes();
            Ok(())
        }
        Commands::Cards(card_cmd) => cmd_cards(cli.store.as_deref(), &engine, card_cmd),
        Commands::Report {
            card_id,
            slope,
            output,
        } => cmd_report(
            cli.store.as_deref(),
            &engine,
            &card_id,
            slope,
            output.as_deref(),
        ),
    }
}

fn open_store(store_dir: Option<&Path>) -> AppResult<FileCardStore> {
    let store = match store_dir {
        Some(dir) => FileCardStore::new(dir.to_path_buf())?,
        None => FileCardStore::for_workspace(Path::new("."))?,
    };
    Ok(store)
}

fn cmd_calculate(
    store_dir: Option<&Path>,
    engine: &CulvertSizingEngine,
    measurements: MeasurementSet,
    save: &SaveArgs,
) -> AppResult<()> {
    let result = card_service::calculate(engine, &measurements)?;
    print_result(&result)?;

    if let Some(title) = &save.save {
        let store = open_store(store_dir)?;
        let location = match (save.lat, save.lon) {
            (Some(latitude), Some(longitude)) => Some(GpsFix {
                latitude,
                longitude,
                accuracy_m: None,
            }),
            _ => None,
        };
        let card = card_service::create_card(
            &store,
            engine,
            NewCard {
                title: title.clone(),
                site: SiteInfo {
                    stream_name: save.stream.clone().unwrap_or_default(),
                    ..SiteInfo::default()
                },
                location,
                measurements,
                wtp: None,
            },
        )?;
        println!("\n✓ Saved field card: {}", card.id);
    }
    Ok(())
}

fn print_result(result: &SizingResult) -> AppResult<()> {
    println!("{}", result.method().label());
    match &result.details {
        MethodDetails::California {
            average_top_width_m,
            average_depth_m,
            cross_sectional_area_m2,
            end_opening_area_m2,
            ..
        } => {
            println!("  Average top width:    {:.3} m", average_top_width_m);
            println!("  Average depth:        {:.3} m", average_depth_m);
            println!("  Cross-sectional area: {:.3} m²", cross_sectional_area_m2);
            println!("  End opening area:     {:.3} m²", end_opening_area_m2);
        }
        MethodDetails::AreaBased {
            base_flow_m3s,
            flow_capacity_m3s,
            culvert_area_m2,
            ..
        } => {
            println!("  Base flow:            {:.4} m³/s", base_flow_m3s);
            println!("  Design flow:          {:.4} m³/s", flow_capacity_m3s);
            println!("  Culvert area:         {:.4} m²", culvert_area_m2);
        }
    }
    if result.climate_adjusted() {
        println!(
            "  Climate factor:       {:.2}",
            result.climate_projection_factor
        );
    }
    println!(
        "  Computed diameter:    {:.0} mm",
        result.computed_diameter_mm
    );

    let size = f64::from(result.final_size_mm);
    println!(
        "\nRecommended size: {} mm ({})",
        result.final_size_mm,
        get_culvert_size_description(size)
    );
    println!(
        "Culvert opening:  {:.3} m²",
        calculate_cross_sectional_area(size)?
    );
    if result.requires_professional_design {
        println!("⚠ Professional engineering design required");
    }
    Ok(())
}

fn cmd_wtp(
    store_dir: Option<&Path>,
    bankfull_width: &str,
    sediment_storage: &str,
    woody_debris: &str,
    card_id: Option<&str>,
) -> AppResult<()> {
    let assessment =
        assess_water_transport_potential(bankfull_width, sediment_storage, woody_debris)?;

    println!("Water Transport Potential");
    println!("  Score:             {} / 9", assessment.score);
    println!("  Risk category:     {}", assessment.risk_category);
    println!(
        "  Additional sizing: {:.0}%",
        assessment.additional_sizing * 100.0
    );
    println!("\nRecommendations:");
    for rec in &assessment.recommendations {
        println!("  - {}", rec);
    }

    if let Some(id) = card_id {
        let store = open_store(store_dir)?;
        card_service::attach_wtp(&store, id, assessment)?;
        println!("\n✓ Attached to card {}", id);
    }
    Ok(())
}

fn cmd_flow(engine: &CulvertSizingEngine, diameter: f64, slope: f64) -> AppResult<()> {
    let q = engine.flow_capacity(diameter, slope)?;
    let area = calculate_cross_sectional_area(diameter)?;
    println!(
        "Diameter:      {:.0} mm ({})",
        diameter,
        get_culvert_size_description(diameter)
    );
    println!("Opening area:  {:.3} m²", area);
    println!("Flow capacity: {:.3} m³/s at {:.1}% slope", q, slope * 100.0);
    Ok(())
}

fn cmd_sizes() {
    println!("Standard culvert sizes (mm):");
    for size in STANDARD_SIZES_MM {
        println!(
            "  {:>5}  {}",
            size,
            get_culvert_size_description(f64::from(size))
        );
    }
}

fn cmd_cards(
    store_dir: Option<&Path>,
    engine: &CulvertSizingEngine,
    cmd: CardCommands,
) -> AppResult<()> {
    let store = open_store(store_dir)?;

    match cmd {
        CardCommands::List => {
            let cards = card_service::list_cards(&store)?;
            if cards.is_empty() {
                println!("No field cards saved");
            } else {
                println!("Field cards:");
                for c in cards {
                    let flag = if c.requires_professional_design {
                        "  [professional design]"
                    } else {
                        ""
                    };
                    println!(
                        "  {}  {}  {} mm ({}){}",
                        c.id, c.title, c.final_size_mm, c.method, flag
                    );
                }
            }
        }
        CardCommands::Show { card_id } => {
            let card = card_service::get_card(&store, &card_id)?;
            print!(
                "{}",
                report::render_text_report(&card, engine, &ReportOptions::default())?
            );
        }
        CardCommands::Note { card_id, text } => {
            card_service::add_note(&store, &card_id, &text)?;
            println!("✓ Note added to {}", card_id);
        }
        CardCommands::Photo {
            card_id,
            path,
            caption,
        } => {
            card_service::attach_photo(
                &store,
                &card_id,
                PhotoRef {
                    path,
                    caption,
                    taken_at: None,
                    annotations: Vec::new(),
                },
            )?;
            println!("✓ Photo attached to {}", card_id);
        }
        CardCommands::Delete { card_id } => {
            card_service::delete_card(&store, &card_id)?;
            println!("✓ Deleted {}", card_id);
        }
    }
    Ok(())
}

fn cmd_report(
    store_dir: Option<&Path>,
    engine: &CulvertSizingEngine,
    card_id: &str,
    slope: Option<f64>,
    output: Option<&Path>,
) -> AppResult<()> {
    let store = open_store(store_dir)?;
    let card = card_service::get_card(&store, card_id)?;
    let options = ReportOptions { slope };

    if let Some(path) = output {
        report::write_text_report(path, &card, engine, &options)?;
        println!("✓ Report written to {}", path.display());
    } else {
        print!("{}", report::render_text_report(&card, engine, &options)?);
    }
    Ok(())
}
