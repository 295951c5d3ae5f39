//! Core utilities for order-taker
//!
//! This crate provides functionality shared by the order-taker binaries:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use ordertaker_core::config::Config;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! println!("similarity threshold: {}", config.schema.matching.similarity_threshold);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

