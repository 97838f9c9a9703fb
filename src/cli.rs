//! Command-line interface definitions and command runners.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use validator::Validate;

use tablemate_algo::config::Settings;
use tablemate_algo::core::Scorer;
use tablemate_algo::models::{
    FindMatchesRequest, FindMatchesResponse, PreferenceProfile, ScoreResponse,
};

#[derive(Parser)]
#[command(name = "tablemate-algo", version, about = "Score dining companion compatibility")]
pub struct Cli {
    /// Settings file (defaults to config/default.toml and config/local.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score two preference profiles against each other
    Score(ScoreArgs),
    /// Rank candidate companions for one user
    Rank(RankArgs),
    /// Print the effective scoring weights
    Weights,
}

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// First preference profile (JSON)
    #[arg(required = true)]
    pub profile_a: PathBuf,

    /// Second preference profile (JSON)
    #[arg(required = true)]
    pub profile_b: PathBuf,

    /// Include per-category overlaps and shared labels
    #[arg(long)]
    pub breakdown: bool,
}

/// Arguments for the rank command
#[derive(Args)]
pub struct RankArgs {
    /// Find-matches request document (JSON)
    #[arg(required = true)]
    pub request: PathBuf,

    /// Override the request limit (1-100)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=100))]
    pub limit: Option<u16>,
}

pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Settings::load().context("Failed to load settings"),
    }
}

pub fn run_score(args: &ScoreArgs, settings: &Settings, pretty: bool) -> Result<()> {
    let scorer = Scorer::try_new(settings.weights()?)?;
    let profile_a: PreferenceProfile = read_document(&args.profile_a)?;
    let profile_b: PreferenceProfile = read_document(&args.profile_b)?;

    profile_a
        .validate()
        .with_context(|| format!("Invalid profile in {}", args.profile_a.display()))?;
    profile_b
        .validate()
        .with_context(|| format!("Invalid profile in {}", args.profile_b.display()))?;

    for (path, profile) in [(&args.profile_a, &profile_a), (&args.profile_b, &profile_b)] {
        if profile.is_empty() {
            info!("Profile {} states no preferences", path.display());
        }
    }

    let breakdown = scorer.breakdown(&profile_a, &profile_b);
    debug!("Category overlaps: {:?}", breakdown.categories);

    let response = ScoreResponse {
        score: breakdown.score,
        breakdown: args.breakdown.then_some(breakdown),
    };

    write_json(&response, pretty)
}

pub fn run_rank(args: &RankArgs, settings: &Settings, pretty: bool) -> Result<()> {
    let matcher = settings.matcher()?;
    let request: FindMatchesRequest = read_document(&args.request)?;

    request
        .validate()
        .with_context(|| format!("Invalid request in {}", args.request.display()))?;

    let limit = settings.effective_limit(args.limit.or(request.limit));

    info!(
        "Ranking {} candidates for user: {}, limit: {}",
        request.candidates.len(),
        request.user_id,
        limit
    );

    let result = matcher.find_matches(
        &request.user_id,
        &request.preferences,
        request.candidates,
        &request.exclude_user_ids,
        limit,
    );

    let response = FindMatchesResponse {
        total_results: result.matches.len(),
        total_candidates: result.total_candidates,
        matches: result.matches,
    };

    write_json(&response, pretty)
}

pub fn run_weights(settings: &Settings, pretty: bool) -> Result<()> {
    let weights = settings.weights()?;
    write_json(&weights, pretty)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
