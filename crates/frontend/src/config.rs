//! Endpoint configuration, fixed at build time and read once at startup.
//!
//! Each URL can be supplied through a compile-time environment variable
//! (the same way the endpoint used to come from the build environment);
//! when unset, the app falls back to same-origin `/api` paths derived
//! from the window location.

const INVENTORY_URL: Option<&str> = option_env!("INVENTORY_API_URL");
const STOCK_BALANCE_URL: Option<&str> = option_env!("STOCK_BALANCE_API_URL");
const PRODUCT_MASTER_URL: Option<&str> = option_env!("PRODUCT_MASTER_API_URL");

/// Base URL derived from the current window location, empty outside a
/// browser so fallback paths stay relative.
fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

fn resolve(configured: Option<&str>, fallback_path: &str) -> String {
    match configured {
        Some(url) => url.to_string(),
        None => format!("{}{}", api_base(), fallback_path),
    }
}

/// Single-endpoint inventory document for the card view.
pub fn inventory_url() -> String {
    resolve(INVENTORY_URL, "/api/inventory")
}

/// Stock-balance rows for the two-source table view.
pub fn stock_balance_url() -> String {
    resolve(STOCK_BALANCE_URL, "/api/stock/balances")
}

/// Product-master reference data for the two-source table view.
pub fn product_master_url() -> String {
    resolve(PRODUCT_MASTER_URL, "/api/products/master")
}
