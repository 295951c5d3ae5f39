//! Store list command

use super::{read_file, Context};
use anyhow::Result;
use ordertaker_cli::output::{format_count, Status};
use ordertaker_core::config::OutputFormat;
use ordertaker_core::ResultExt;
use ordertaker_menu::parse_stores;
use owo_colors::OwoColorize;
use std::path::Path;

/// Print the first `limit` stores of a store locator payload
pub fn run(ctx: &Context, path: &Path, limit: usize) -> Result<()> {
    let json = read_file(path)?;
    let stores = parse_stores(&json, limit).context(format!("Decoding {}", path.display()))?;

    tracing::debug!(count = stores.len(), limit, "Stores decoded");

    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stores)?);
        return Ok(());
    }

    if stores.is_empty() {
        println!("No stores found.");
        return Ok(());
    }

    Status::header(&format!("Nearby {}", format_count(stores.len(), "store", "stores")));
    for (i, store) in stores.iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            store.name,
            format!("#{}", store.store_number).dimmed()
        );
    }

    Ok(())
}
