//! School impact-zone analysis CLI.
//!
//! Classifies a school roster against a disaster-impact zone assembled from
//! GeoJSON files, shapefiles, and inline WKT polygons, then writes CSV,
//! GeoJSON, and JSON reports. A second subcommand fetches school locations
//! from the OSM Overpass API into a roster CSV.

mod config;
mod overpass;
mod pipeline;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use impact_common::{BoundingBox, Gender, GradeBand};

use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "impact-cli")]
#[command(about = "School impact-zone analysis")]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "IMPACT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a roster against an impact zone and write reports
    Analyze(AnalyzeArgs),

    /// Fetch school locations from the Overpass API into a roster CSV
    FetchSchools(FetchSchoolsArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Roster CSV of schools
    #[arg(short, long)]
    pub schools: PathBuf,

    /// Boundary file (GeoJSON or .shp); repeatable
    #[arg(short, long)]
    pub boundary: Vec<PathBuf>,

    /// Directory scanned recursively for boundary files
    #[arg(long)]
    pub boundary_dir: Option<PathBuf>,

    /// Inline WKT POLYGON/MULTIPOLYGON zone (the "drawn" region); repeatable
    #[arg(short, long)]
    pub zone: Vec<String>,

    /// Restrict to grade bands (primary, secondary, vocational, other)
    #[arg(long, value_delimiter = ',')]
    pub grades: Vec<GradeBand>,

    /// Restrict to genders (girls, boys, mixed, unknown)
    #[arg(long, value_delimiter = ',')]
    pub genders: Vec<Gender>,

    /// Directory for report files
    #[arg(short, long, default_value = "impact-report")]
    pub out_dir: PathBuf,

    /// Output formats to write
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub format: Vec<OutputFormat>,
}

#[derive(clap::Args, Debug)]
pub struct FetchSchoolsArgs {
    /// Bounding box to query: "west,south,east,north"
    #[arg(long)]
    pub bbox: String,

    /// Overpass API endpoint
    #[arg(long, default_value = "https://overpass-api.de/api/interpreter")]
    pub endpoint: String,

    /// Output roster CSV path
    #[arg(short, long, default_value = "osm-schools.csv")]
    pub out: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "60")]
    pub timeout: u64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Geojson,
    Json,
    All,
}

impl OutputFormat {
    pub fn selected(formats: &[OutputFormat], format: OutputFormat) -> bool {
        formats.contains(&OutputFormat::All) || formats.contains(&format)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr; stdout carries the report text.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = CliConfig::load_optional(args.config.as_deref())?;

    match &args.command {
        Command::Analyze(analyze_args) => {
            let outcome = pipeline::run_analysis(analyze_args, &config)?;

            println!("{}", report::render_summary(&outcome.summary));
            if !outcome.impacted.is_empty() {
                println!(
                    "{}",
                    report::render_school_list(&outcome.impacted, &config.rules())
                );
            }
            for file in &outcome.files {
                info!(file = %file.display(), "Wrote report file");
            }
        }
        Command::FetchSchools(fetch_args) => {
            let bbox = BoundingBox::from_param(&fetch_args.bbox)
                .with_context(|| format!("invalid --bbox '{}'", fetch_args.bbox))?;

            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(fetch_args.timeout))
                .user_agent("school-impact/0.1")
                .build()?;

            let schools = overpass::fetch_schools(&client, &fetch_args.endpoint, &bbox).await?;
            info!(count = schools.len(), "Fetched schools from Overpass");

            report::save_schools_csv(&fetch_args.out, &schools, &config.rules())
                .with_context(|| format!("writing roster to {}", fetch_args.out.display()))?;
            println!(
                "Wrote {} schools to {}",
                schools.len(),
                fetch_args.out.display()
            );
        }
    }

    Ok(())
}
