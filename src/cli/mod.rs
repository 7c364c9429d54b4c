use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Logic Capture Timing Analyser
#[derive(Parser)]
#[command(name = "logic-capture-analyser")]
#[command(about = "Analyse digital signal captures to identify timing patterns and likely protocols")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyse pulse timing and guess the protocol of a transition capture
    Analyse(commands::analyse::AnalyseCommand),
    /// Export a capture as an index,time_s,state,duration_us table
    Export(commands::export::ExportCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyse(command) => command.run(),
        Commands::Export(command) => command.run(),
    }
}
