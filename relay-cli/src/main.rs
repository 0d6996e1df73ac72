mod check;
mod frames;
mod replay;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use relay_ui::DuplicatePolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relay")]
#[command(version, about = "Replay and check webview command frames", long_about = None)]
struct Cli {
    /// Log every batch and command at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply frames to an in-memory surface and print the resulting tree
    Replay {
        /// Frame files: one JSON array, or one frame per line
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = replay::OutputFormat::Pretty)]
        format: replay::OutputFormat,
        /// Applier config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Overrides the config's duplicate policy
        #[arg(long, value_enum)]
        on_duplicate: Option<Duplicate>,
        /// Keep applying after a failed command
        #[arg(short, long)]
        keep_going: bool,
    },
    /// Decode frames without applying them
    Check {
        /// Frame files: one JSON array, or one frame per line
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Duplicate {
    Reject,
    Replace,
}

impl From<Duplicate> for DuplicatePolicy {
    fn from(value: Duplicate) -> Self {
        match value {
            Duplicate::Reject => DuplicatePolicy::Reject,
            Duplicate::Replace => DuplicatePolicy::Replace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Replay {
            files,
            format,
            config,
            on_duplicate,
            keep_going,
        } => replay::run_replay(replay::ReplayOptions {
            files,
            format,
            config,
            on_duplicate: on_duplicate.map(DuplicatePolicy::from),
            keep_going,
        }),
        Commands::Check { files } => {
            let clean = check::run_check(&files)?;
            if !clean {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
