use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use jetlag_core::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod chart;
mod commands;

#[derive(Parser)]
#[command(name = "jetlag-cli", version, about = "Social jetlag calculator")]
struct Cli {
    /// Config file (defaults to $JETLAG_CONFIG or ~/.config/jetlag/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Social jetlag between weekday and weekend sleep
    Sleep(commands::sleep::SleepArgs),
    /// Compare the current schedule with a proposed one
    Compare(commands::compare::CompareArgs),
    /// Alertness curve from light, consistency and caffeine habits
    Alertness(commands::alertness::AlertnessArgs),
    /// Weekly sleep debt
    Debt(commands::debt::DebtArgs),
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "jetlag-cli", &mut std::io::stdout());
        return Ok(());
    }

    let config_path = cli.config.unwrap_or_else(Config::path);
    let config = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), "configuration ready");

    match cli.command {
        Commands::Sleep(args) => commands::sleep::run(args, &config),
        Commands::Compare(args) => commands::compare::run(args, &config),
        Commands::Alertness(args) => commands::alertness::run(args, &config),
        Commands::Debt(args) => commands::debt::run(args, &config),
        Commands::Config { action } => commands::config::run(action, &config, &config_path),
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
