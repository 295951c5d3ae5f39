//! take-order - plain-English food ordering against a menu
//!
//! Parses text like "two crunchy tacos and a burrito" into priced line items.

use clap::{Parser, Subcommand};
use ordertaker_core::config::{Config, OutputFormat};
use ordertaker_core::error::exit_codes;
use ordertaker_menu::DEFAULT_STORE_LIMIT;
use ordertaker_telemetry::TelemetryConfig;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{menu, parse, stores, Context};

/// Take a food order in plain English
#[derive(Parser)]
#[command(name = "take-order")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to .order-taker.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an order against a menu
    Parse {
        /// Menu JSON file (item list or catalog payload)
        #[arg(short, long)]
        menu: PathBuf,

        /// Order text; prompts interactively when omitted
        text: Vec<String>,
    },

    /// List menu items or look up the best match for a phrase
    Menu {
        /// Menu JSON file (item list or catalog payload)
        #[arg(short, long)]
        menu: PathBuf,

        /// Show the item that best matches this phrase
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List stores from a store locator payload
    Stores {
        /// Store locator JSON file
        #[arg(long)]
        file: PathBuf,

        /// Maximum number of stores to show
        #[arg(short, long, default_value_t = DEFAULT_STORE_LIMIT)]
        limit: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&anyhow::Error::new(e), cli.format),
    };

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.schema.logging.level.clone()
    };
    if let Err(e) = ordertaker_telemetry::init_with_config(TelemetryConfig::with_level(level)) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    if let Some(path) = &config.path {
        tracing::debug!(path = %path, "Loaded configuration");
    }

    let ctx = Context {
        format: cli.format.unwrap_or(config.schema.output.format),
        config,
    };

    let result = match cli.command {
        Commands::Parse { menu: menu_path, text } => parse::run(&ctx, &menu_path, &text),
        Commands::Menu { menu: menu_path, search } => {
            menu::run(&ctx, &menu_path, search.as_deref())
        }
        Commands::Stores { file, limit } => stores::run(&ctx, &file, limit),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, Some(ctx.format)),
    }
}

/// Print a failure and pick the exit code for it.
fn report(err: &anyhow::Error, format: Option<OutputFormat>) -> ExitCode {
    let structured = err.downcast_ref::<ordertaker_core::Error>();

    match (structured, format) {
        (Some(e), Some(OutputFormat::Json)) => {
            let report = e.to_report();
            match serde_json::to_string_pretty(&report) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{} {}", "Error:".red().bold(), e),
            }
        }
        _ => eprintln!("{} {:#}", "Error:".red().bold(), err),
    }

    let code = structured
        .map(|e| e.code.exit_code())
        .unwrap_or(exit_codes::FAILURE);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
