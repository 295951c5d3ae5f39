//! Menu items and menu document decoding.
//!
//! Two document shapes are accepted:
//! - a plain list: `[{"name": "Crunchy Taco", "price": 1.49}, ...]`
//! - the restaurant catalog payload:
//!   `{"menuProductCategories": [{"products": [{"name": ..., "price": {"value": ...}}]}]}`
//!
//! Both are normalized the same way: trademark symbols stripped, names
//! trimmed and lowercased.

use crate::error::{MenuError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

static TRADEMARK_SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new("[®™©℠]").unwrap());

/// A single orderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Lowercase display name with trademark symbols removed
    pub name: String,
    /// Unit price
    pub price: Decimal,
}

impl MenuItem {
    /// Creates a menu item from an already-normalized name.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Ordered, immutable list of menu items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Wraps items that are already normalized.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Decodes a menu document (plain list or catalog payload).
    ///
    /// # Errors
    /// Returns [`MenuError::InvalidDocument`] when the JSON matches neither
    /// shape and [`MenuError::InvalidPrice`] when a plain-list item has a
    /// negative price.
    ///
    /// # Example
    /// ```
    /// use ordertaker_menu::Menu;
    ///
    /// let menu = Menu::from_json(r#"[{"name": "Crunchy Taco®", "price": 1.49}]"#).unwrap();
    /// assert_eq!(menu[0].name, "crunchy taco");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let document: MenuDocument = serde_json::from_str(json)?;
        let menu = match document {
            MenuDocument::Items(items) => Self::from_plain(items)?,
            MenuDocument::Catalog(payload) => Self::from_catalog(payload),
        };
        tracing::debug!(items = menu.len(), "Menu decoded");
        Ok(menu)
    }

    fn from_plain(items: Vec<RawItem>) -> Result<Self> {
        items
            .into_iter()
            .map(|raw| {
                if raw.price < Decimal::ZERO {
                    return Err(MenuError::InvalidPrice {
                        name: raw.name,
                        price: raw.price,
                    });
                }
                Ok(MenuItem::new(normalize_product_name(&raw.name), raw.price))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    // Catalog products priced at zero or below are skipped.
    fn from_catalog(payload: CatalogPayload) -> Self {
        let items = payload
            .menu_product_categories
            .into_iter()
            .flat_map(|category| category.products)
            .filter(|product| product.price.value > Decimal::ZERO)
            .map(|product| {
                MenuItem::new(normalize_product_name(&product.name), product.price.value)
            })
            .collect();
        Self::new(items)
    }
}

impl Deref for Menu {
    type Target = [MenuItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Canonicalizes a product name as published by the restaurant.
///
/// Removes `®`, `™`, `©` and `℠`, trims surrounding whitespace and lowercases.
pub fn normalize_product_name(name: &str) -> String {
    TRADEMARK_SYMBOLS.replace_all(name, "").trim().to_lowercase()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MenuDocument {
    Items(Vec<RawItem>),
    Catalog(CatalogPayload),
}

#[derive(Deserialize)]
struct RawItem {
    name: String,
    price: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogPayload {
    menu_product_categories: Vec<CatalogCategory>,
}

#[derive(Deserialize)]
struct CatalogCategory {
    #[serde(default)]
    products: Vec<CatalogProduct>,
}

#[derive(Deserialize)]
struct CatalogProduct {
    name: String,
    price: CatalogPrice,
}

#[derive(Deserialize)]
struct CatalogPrice {
    value: Decimal,
}
