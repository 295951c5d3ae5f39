//! Parse command

use super::{load_menu, Context};
use anyhow::Result;
use ordertaker_cli::output::Status;
use ordertaker_cli::prompt::Prompter;
use ordertaker_core::config::OutputFormat;
use ordertaker_menu::MenuItem;
use ordertaker_order::{parse_order_with, OrderFormatter};
use ordertaker_telemetry::timed_span;
use std::path::Path;

const GREETING: &str = "Welcome, can I take your order?";

/// Parse `text` against the menu, or take orders interactively when empty
pub fn run(ctx: &Context, menu_path: &Path, text: &[String]) -> Result<()> {
    let menu = load_menu(menu_path)?;

    if text.is_empty() {
        return interactive(ctx, &menu);
    }

    print_order(ctx, &menu, &text.join(" "))
}

fn interactive(ctx: &Context, menu: &[MenuItem]) -> Result<()> {
    let mut prompter = Prompter::stdio();

    loop {
        let Some(order) = prompter.ask(GREETING)? else {
            Status::info("No order entered");
            break;
        };

        print_order(ctx, menu, &order)?;

        if !prompter.confirm("Again?")? {
            break;
        }
    }

    Ok(())
}

fn print_order(ctx: &Context, menu: &[MenuItem], order: &str) -> Result<()> {
    let result = {
        timed_span!("parse_order", chars = order.len());
        parse_order_with(order, menu, &ctx.config.schema.matching)
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            let formatter = OrderFormatter::new(ctx.config.schema.output.low_confidence);
            print!("{}", formatter.format(&result));
        }
    }

    Ok(())
}
