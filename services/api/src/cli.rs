use crate::report::{
    run_batch, run_evaluate, run_requirements, BatchArgs, EvaluateArgs, RequirementsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use placement_copilot::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Placement Copilot",
    about = "Evaluate candidate placement readiness over HTTP or from the command line",
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
    /// Evaluate a single candidate and print the readiness report
    Evaluate(EvaluateArgs),
    /// List the minimum skill scores for every role
    Requirements(RequirementsArgs),
    /// Evaluate every candidate in a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Directory holding the built web UI bundle
    #[arg(long)]
    pub(crate) ui_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Requirements(args) => run_requirements(args),
        Command::Batch(args) => run_batch(args),
    }
}
