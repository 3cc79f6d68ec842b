use crate::infra::{build_service, resolve_input};
use crate::render::{emit, ReportScope};
use admissions::admissions::{AdmissionReport, CandidateLoader};
use admissions::config::{AppConfig, RankingConfig};
use admissions::error::AppError;
use clap::{Args, ValueEnum};
use std::io::{self, Cursor, Write};
use std::path::PathBuf;
use tracing::info;

const SAMPLE_CANDIDATES: &str = include_str!("../data/sample_candidates.json");

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Console table and statistics block
    #[default]
    Table,
    /// Pretty-printed JSON summary
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Candidate file (.json or .csv). Defaults to APP_CANDIDATES_PATH.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Number of leading candidates listed in the statistics (defaults to APP_TOP_CANDIDATES)
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of leading candidates listed in the statistics
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_report(
    config: &AppConfig,
    args: ReportArgs,
    scope: ReportScope,
) -> Result<(), AppError> {
    let ReportArgs { input, top, format } = args;

    let path = resolve_input(input, config.candidates_path.as_deref())?;
    let service = build_service(&config.ranking, top);
    let loaded = service.initialize_from_path(&path)?;
    info!(path = %path.display(), loaded, "candidate file processed");

    let report = service.run()?;
    let mut stdout = io::stdout().lock();
    emit(&mut stdout, &report.summary(), scope, format)?;
    stdout.flush()?;
    Ok(())
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { top, format } = args;
    let announce = format == OutputFormat::Table;

    if announce {
        println!("Starting admitted candidates system...");
        println!("Loading bundled sample candidates...");
    }

    let report = sample_report(&config.ranking, top)?;

    if announce {
        println!("Loaded {} candidates successfully.", report.statistics.total);
    }

    let mut stdout = io::stdout().lock();
    emit(&mut stdout, &report.summary(), ReportScope::Full, format)?;
    stdout.flush()?;

    if announce {
        println!("Admission process completed successfully.");
    }
    Ok(())
}

fn sample_report(
    ranking: &RankingConfig,
    top: Option<usize>,
) -> Result<AdmissionReport, AppError> {
    let candidates = CandidateLoader::from_json_reader(Cursor::new(SAMPLE_CANDIDATES))?;
    let service = build_service(ranking, top);
    service.initialize(candidates)?;
    Ok(service.run()?)
}
