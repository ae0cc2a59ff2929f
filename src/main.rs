use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "focusquest")]
#[command(about = "Gamified progress tracking for focus sessions")]
#[command(version)]
struct Cli {
    /// Directory holding per-user progress records (defaults to ~/.focusquest/progress)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a completed focus session
    Complete {
        /// User to credit
        #[arg(long)]
        user: String,

        /// Focus duration of the session in seconds
        #[arg(long, default_value_t = 1500)]
        duration: u32,
    },

    /// Show the progress dashboard for a user
    Stats {
        #[arg(long)]
        user: String,
    },

    /// Show weekly and monthly session histograms
    Charts {
        #[arg(long)]
        user: String,

        /// Days in the weekly histogram
        #[arg(long, default_value_t = 7)]
        days: usize,

        /// Months in the monthly histogram
        #[arg(long, default_value_t = 12)]
        months: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Complete { user, duration } => {
            cli::complete::complete_command(cli.data_dir.as_deref(), &user, duration)?;
        }
        Commands::Stats { user } => {
            cli::stats::stats_command(cli.data_dir.as_deref(), &user)?;
        }
        Commands::Charts {
            user,
            days,
            months,
        } => {
            cli::charts::charts_command(cli.data_dir.as_deref(), &user, days, months)?;
        }
    }

    Ok(())
}
