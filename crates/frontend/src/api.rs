//! Fetch layer. Every failure mode (network, non-2xx, malformed JSON) is
//! collapsed into a single user-facing message string at this boundary.

use contracts::inventory::{FetchResult, InventoryResponse};
use contracts::pipeline;
use contracts::vendor::{ProductMasterResponse, StockBalanceResponse};
use gloo_net::http::Request;

use crate::config;

/// Fetches the single inventory endpoint and returns the normalized,
/// locale-sorted result for the card view.
pub async fn fetch_inventory() -> Result<FetchResult, String> {
    let url = config::inventory_url();

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let raw: InventoryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    let mut result = raw.normalize();
    pipeline::sort_by_name(&mut result.items);
    Ok(result)
}

/// Fetches stock balances and the product master, then runs the full
/// join/filter/sort pipeline. The stock base date is the change-detection
/// token for this variant. Both requests belong to the same poll cycle,
/// so a failure of either fails the whole cycle.
pub async fn fetch_merged_inventory() -> Result<FetchResult, String> {
    let stock: StockBalanceResponse = get_json(&config::stock_balance_url()).await?;
    let master: ProductMasterResponse = get_json(&config::product_master_url()).await?;

    let items = pipeline::run(&stock.rows, &master.rows);
    Ok(FetchResult {
        items,
        updated_at: stock.base_date,
    })
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
