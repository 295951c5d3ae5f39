//! CLI command implementations

pub mod menu;
pub mod parse;
pub mod stores;

use ordertaker_cli::output::{format_count, format_duration};
use ordertaker_cli::progress;
use ordertaker_core::config::{Config, OutputFormat};
use ordertaker_core::{Error, Result, ResultExt};
use ordertaker_menu::Menu;
use ordertaker_telemetry::Timer;
use std::path::Path;

/// Settings shared by every command
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
}

/// Read and decode a menu file behind a spinner.
///
/// A file that decodes to no orderable items is an error.
pub fn load_menu(path: &Path) -> Result<Menu> {
    let pb = progress::spinner("Loading menu...");
    let timer = Timer::start("load_menu");

    let loaded = read_file(path).and_then(|json| {
        Menu::from_json(&json).context(format!("Decoding {}", path.display()))
    });

    let menu = match loaded {
        Ok(menu) if menu.is_empty() => {
            progress::finish_error(&pb, &path.display().to_string());
            return Err(Error::empty_menu(path));
        }
        Ok(menu) => menu,
        Err(e) => {
            progress::finish_error(&pb, &path.display().to_string());
            return Err(e);
        }
    };

    let elapsed = timer.stop();
    progress::finish_success(
        &pb,
        &format!(
            "Loaded {} in {}",
            format_count(menu.len(), "item", "items"),
            format_duration(elapsed)
        ),
    );

    Ok(menu)
}

/// Read a UTF-8 file, mapping a missing file to a helpful error.
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }
    std::fs::read_to_string(path).context(format!("Reading {}", path.display()))
}
