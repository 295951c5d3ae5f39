//! Store list decoding.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Number of nearby stores offered to the customer by default.
pub const DEFAULT_STORE_LIMIT: usize = 7;

/// A store location the customer can order from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Store {
    /// Display name, `"<street> <town>, <state>"`
    pub name: String,
    /// Identifier used to request the store's menu
    pub store_number: String,
}

/// Decode a nearby-stores payload into at most `limit` display rows.
///
/// The payload is the store locator response
/// (`{"nearByStores": [{"storeNumber", "address": {"line1", "town", "region": {"isocode"}}}]}`).
/// A `US-` prefix on the region ISO code is dropped so `US-CA` renders as `CA`.
///
/// # Example
/// ```
/// use ordertaker_menu::parse_stores;
///
/// let json = r#"{"nearByStores": [{"storeNumber": "031240",
///     "address": {"line1": "1 Main St", "town": "Irvine", "region": {"isocode": "US-CA"}}}]}"#;
/// let stores = parse_stores(json, 5).unwrap();
/// assert_eq!(stores[0].name, "1 Main St Irvine, CA");
/// ```
pub fn parse_stores(json: &str, limit: usize) -> Result<Vec<Store>> {
    let payload: StoresPayload = serde_json::from_str(json)?;
    let stores: Vec<Store> = payload
        .near_by_stores
        .into_iter()
        .take(limit)
        .map(|store| {
            let isocode = store.address.region.isocode;
            let state = isocode.strip_prefix("US-").unwrap_or(&isocode);
            Store {
                name: format!("{} {}, {}", store.address.line1, store.address.town, state),
                store_number: store.store_number,
            }
        })
        .collect();

    tracing::debug!(stores = stores.len(), limit, "Store list decoded");
    Ok(stores)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoresPayload {
    #[serde(default)]
    near_by_stores: Vec<StoreEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreEntry {
    store_number: String,
    address: StoreAddress,
}

#[derive(Deserialize)]
struct StoreAddress {
    line1: String,
    town: String,
    region: StoreRegion,
}

#[derive(Deserialize)]
struct StoreRegion {
    isocode: String,
}
