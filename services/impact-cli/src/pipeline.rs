//! Analysis orchestration: roster in, reports out.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use boundary::ZoneBuilder;
use impact_common::{RosterFilter, School};
use impact_processor::{classify, summarize, ImpactSummary};
use roster_parser::read_roster;

use crate::config::CliConfig;
use crate::{AnalyzeArgs, OutputFormat};

/// What an analysis run produced.
pub struct AnalyzeOutcome {
    pub summary: ImpactSummary,
    pub impacted: Vec<School>,
    pub files: Vec<PathBuf>,
}

/// Run the full analysis: load roster and boundaries, classify, write reports.
pub fn run_analysis(args: &AnalyzeArgs, config: &CliConfig) -> Result<AnalyzeOutcome> {
    let rules = config.rules();

    // 1. Roster
    let roster = read_roster(&args.schools)
        .with_context(|| format!("loading roster {}", args.schools.display()))?;
    if roster.schools.is_empty() {
        bail!(
            "no valid school records in {} ({} rows dropped)",
            args.schools.display(),
            roster.stats.rows_read
        );
    }
    info!(
        schools = roster.schools.len(),
        dropped = roster.stats.rows_read - roster.stats.rows_kept,
        "Loaded roster"
    );

    // 2. Impact zone
    let mut builder = ZoneBuilder::new();
    for path in &args.boundary {
        builder
            .add_file(path)
            .with_context(|| format!("loading boundary {}", path.display()))?;
    }
    if let Some(dir) = &args.boundary_dir {
        builder
            .add_dir(dir)
            .with_context(|| format!("scanning boundary directory {}", dir.display()))?;
    }
    for wkt in &args.zone {
        builder.add_wkt(wkt).context("parsing --zone WKT")?;
    }
    let zone = builder.build()?;

    // 3. Classification + aggregation
    let filter = effective_filter(args, config);
    let classification = classify(&roster.schools, &zone, &filter, &rules);
    let summary = summarize(&classification, &zone, &rules);

    // 4. Report files
    let mut files = Vec::new();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    if OutputFormat::selected(&args.format, OutputFormat::Csv) {
        let path = args.out_dir.join("impacted.csv");
        report::save_schools_csv(&path, &classification.inside, &rules)?;
        files.push(path);
    }
    if OutputFormat::selected(&args.format, OutputFormat::Geojson) {
        let path = args.out_dir.join("impacted.geojson");
        let writer = BufWriter::new(File::create(&path)?);
        report::write_schools_geojson(writer, &classification.inside, &rules)?;
        files.push(path);
    }
    if OutputFormat::selected(&args.format, OutputFormat::Json) {
        let path = args.out_dir.join("summary.json");
        let writer = BufWriter::new(File::create(&path)?);
        report::write_summary_json(writer, &summary)?;
        files.push(path);
    }

    Ok(AnalyzeOutcome {
        summary,
        impacted: classification.inside,
        files,
    })
}

/// Filter flags on the command line override the config default wholesale.
fn effective_filter(args: &AnalyzeArgs, config: &CliConfig) -> RosterFilter {
    if args.grades.is_empty() && args.genders.is_empty() {
        return config.default_filter();
    }
    RosterFilter::unrestricted()
        .with_grade_bands(args.grades.iter().copied())
        .with_genders(args.genders.iter().copied())
}
