//! CLI utilities for order-taker
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Progress indicators
//! - Line prompts for the interactive order loop

#![warn(missing_docs)]

pub mod output;
pub mod progress;
pub mod prompt;
