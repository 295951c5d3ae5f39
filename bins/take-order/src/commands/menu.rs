//! Menu listing and lookup command

use super::{load_menu, Context};
use anyhow::Result;
use ordertaker_cli::output::{format_confidence, format_count, Status};
use ordertaker_core::config::OutputFormat;
use ordertaker_menu::MenuItem;
use ordertaker_order::format_money;
use ordertaker_search::{find_best_match_with, MatchRule};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct SearchOutput<'a> {
    phrase: &'a str,
    #[serde(rename = "match")]
    found: Option<SearchHit<'a>>,
}

#[derive(Serialize)]
struct SearchHit<'a> {
    #[serde(flatten)]
    item: &'a MenuItem,
    confidence: f64,
    rule: MatchRule,
}

/// List the menu, or show the best match for `search`
pub fn run(ctx: &Context, menu_path: &Path, search: Option<&str>) -> Result<()> {
    let menu = load_menu(menu_path)?;

    match search {
        Some(phrase) => lookup(ctx, &menu, phrase),
        None => list(ctx, &menu),
    }
}

fn list(ctx: &Context, menu: &[MenuItem]) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(menu)?);
        return Ok(());
    }

    Status::header(&format!("Menu ({})", format_count(menu.len(), "item", "items")));
    let width = menu.iter().map(|item| item.name.chars().count()).max().unwrap_or(0);
    for item in menu {
        println!("  {:<width$}  ${}", item.name, format_money(item.price), width = width);
    }

    Ok(())
}

fn lookup(ctx: &Context, menu: &[MenuItem], phrase: &str) -> Result<()> {
    let outcome = find_best_match_with(phrase, menu, &ctx.config.schema.matching);

    if ctx.format == OutputFormat::Json {
        let output = SearchOutput {
            phrase,
            found: outcome.map(|o| SearchHit {
                item: o.item,
                confidence: o.confidence,
                rule: o.rule,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match outcome {
        Some(o) => {
            println!("{} - ${}", o.item.name.bold(), format_money(o.item.price));
            println!(
                "  {} {} via {}",
                "confidence".dimmed(),
                format_confidence(o.confidence),
                rule_label(o.rule)
            );
            if o.confidence < ctx.config.schema.output.low_confidence {
                Status::warning("Low confidence match");
            }
        }
        None => Status::warning(&format!("No menu item matches {:?}", phrase)),
    }

    Ok(())
}

fn rule_label(rule: MatchRule) -> &'static str {
    match rule {
        MatchRule::Exact => "exact name",
        MatchRule::WordSubset => "word match",
        MatchRule::Similarity => "spelling similarity",
    }
}
