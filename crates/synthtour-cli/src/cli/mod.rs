//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use synthtour_core::config::{self, Config};

mod commands;

#[derive(Parser)]
#[command(name = "synthtour")]
#[command(version = "0.1")]
#[command(about = "Terminal tour of the SynthLabs synthetic data platform")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the screenshot art directory
    #[arg(long, value_name = "DIR")]
    art_dir: Option<std::path::PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print a SYNTH sample record as JSON
    Sample {
        /// Print the medical sample instead of the math one
        #[arg(long)]
        medical: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage the stored privacy choice
    Consent {
        #[command(subcommand)]
        command: ConsentCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

#[derive(clap::Subcommand)]
enum ConsentCommands {
    /// Show the stored privacy choice
    Show,
    /// Clear the stored privacy choice so the banner shows again
    Reset,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so tracing goes to a log file.
    let _log_guard = init_tracing();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;
    if let Some(dir) = cli.art_dir {
        config.art_dir = Some(dir);
    }

    // default to the interactive tour
    let Some(command) = cli.command else {
        return commands::tour::run(config).await;
    };

    match command {
        Commands::Sample { medical } => commands::sample::run(medical),

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },

        Commands::Consent { command } => match command {
            ConsentCommands::Show => commands::consent::show(),
            ConsentCommands::Reset => commands::consent::reset(),
        },
    }
}

/// File logging under the SynthTour home. Returns the guard keeping the
/// non-blocking writer alive for the process lifetime.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = config::paths::log_dir();
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(dir, "synthtour.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_env("SYNTHTOUR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
