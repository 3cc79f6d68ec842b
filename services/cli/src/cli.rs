use crate::demo::{run_demo, run_report, DemoArgs, ReportArgs};
use crate::render::ReportScope;
use admissions::config::AppConfig;
use admissions::error::AppError;
use admissions::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Admissions Ranking",
    about = "Rank admission candidates and summarize the admitted population",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank candidates and print the admission table with statistics (default command)
    Rank(ReportArgs),
    /// Print only the admission statistics
    Stats(ReportArgs),
    /// Run the ranking pipeline over the bundled sample candidates
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Rank(ReportArgs::default()));

    match command {
        Command::Rank(args) => run_report(&config, args, ReportScope::Full),
        Command::Stats(args) => run_report(&config, args, ReportScope::StatisticsOnly),
        Command::Demo(args) => run_demo(&config, args),
    }
}
