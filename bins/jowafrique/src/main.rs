//! jowafrique - weekly dinner planner CLI
//!
//! Drives the planning backend through the stores: plans, meals, favorites,
//! statistics, shopping lists, AI helpers and local fuzzy search.

use clap::{Parser, Subcommand};
use jowafrique_cli::output::{print_json, OutputFormat, Status};
use jowafrique_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{ai, favorites, health, meals, plans, shopping, stats};
use context::{Context, Overrides};

/// Weekly dinner planner
#[derive(Parser)]
#[command(name = "jowafrique")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "JOWAFRIQUE_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "JOWAFRIQUE_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Configuration file (defaults to ./jowafrique.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is up
    Health,

    /// Weekly plans
    Plans {
        #[command(subcommand)]
        action: plans::PlansCommand,
    },

    /// Meals of a plan
    Meals {
        #[command(subcommand)]
        action: meals::MealsCommand,
    },

    /// Favorite meals
    Favorites {
        #[command(subcommand)]
        action: favorites::FavoritesCommand,
    },

    /// Planning statistics
    Stats,

    /// Shopping list of a plan
    Shopping {
        /// Plan id
        plan_id: i64,

        /// Ask the AI for a cheaper list
        #[arg(long)]
        optimize: bool,

        /// Budget for the optimized list
        #[arg(long, requires = "optimize")]
        budget: Option<f64>,
    },

    /// AI helpers
    Ai {
        #[command(subcommand)]
        action: ai::AiCommand,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if format.is_json() {
                let body = serde_json::json!({ "success": false, "error": e.to_string() });
                if let Err(json_err) = print_json(&body) {
                    Status::error(&json_err.to_string());
                }
            } else {
                Status::error(&format!("{e:#}"));
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = context::load_config(cli.config.as_deref())?;

    let telemetry = TelemetryConfig::from(&config.schema.logging).with_verbosity(cli.verbose);
    if let Err(e) = jowafrique_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    let overrides = Overrides {
        api_url: cli.api_url,
        timeout_secs: cli.timeout,
    };
    let ctx = Context::new(&config, overrides, cli.format)?;

    match cli.command {
        Commands::Health => health::run(&ctx).await,
        Commands::Plans { action } => plans::run(&ctx, action).await,
        Commands::Meals { action } => meals::run(&ctx, action).await,
        Commands::Favorites { action } => favorites::run(&ctx, action).await,
        Commands::Stats => stats::run(&ctx).await,
        Commands::Shopping {
            plan_id,
            optimize,
            budget,
        } => shopping::run(&ctx, plan_id, optimize, budget).await,
        Commands::Ai { action } => ai::run(&ctx, action).await,
    }
}
