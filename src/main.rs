mod cli;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli::load_settings(cli.config.as_deref())?;

    // Initialize logging; LOG_LEVEL / LOG_FORMAT override the settings file
    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone())
    };
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("tablemate_algo={},warn", log_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Scoring weights: {:?}", settings.scoring.weights);

    match &cli.command {
        Commands::Score(args) => cli::run_score(args, &settings, cli.pretty)?,
        Commands::Rank(args) => cli::run_rank(args, &settings, cli.pretty)?,
        Commands::Weights => cli::run_weights(&settings, cli.pretty)?,
    }

    Ok(())
}
