use crate::demo::{
    run_classify, run_demo, run_schedule, run_score, ClassifyArgs, DemoArgs, ScheduleArgs,
    ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vendor_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Vendor Risk Engine",
    about = "Classify, score, and schedule LGPD supplier assessments from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assign the A-D supplier type for a volume/sensitivity pair
    Classify(ClassifyArgs),
    /// Score a questionnaire JSON file under the legacy or GRC table
    Score(ScoreArgs),
    /// Compute the next reassessment date for a supplier type
    Schedule(ScheduleArgs),
    /// Run a sample supplier through submission and review
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured default scoring strategy
    #[arg(long)]
    pub(crate) strategy: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
        Command::Score(args) => run_score(args),
        Command::Schedule(args) => run_schedule(args),
        Command::Demo(args) => run_demo(args),
    }
}
