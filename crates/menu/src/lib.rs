//! Menu catalog for order-taker.
//!
//! This crate provides:
//! - The `MenuItem` / `Menu` types consumed by the matcher
//! - Decoding of plain menu lists and restaurant catalog payloads
//! - Product name canonicalization (trademark symbols, case)
//! - Store locator payload decoding
//!
//! # Example
//!
//! ```
//! use ordertaker_menu::{Menu, MenuItem};
//! use rust_decimal::Decimal;
//!
//! let menu = Menu::new(vec![
//!     MenuItem::new("crunchy taco", Decimal::new(149, 2)),
//!     MenuItem::new("burrito", Decimal::new(229, 2)),
//! ]);
//! assert_eq!(menu.len(), 2);
//! ```

mod catalog;
mod error;
mod store;

pub use catalog::{normalize_product_name, Menu, MenuItem};
pub use error::{MenuError, MenuErrorCode, Result};
pub use store::{parse_stores, Store, DEFAULT_STORE_LIMIT};
