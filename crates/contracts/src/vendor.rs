//! Wire shapes of the two vendor endpoints used by the table view:
//! stock balances per warehouse and the product master reference data,
//! joined by product code.

use serde::Deserialize;

/// Stock-balance rows as of `base_date`. The base date doubles as the
/// change-detection token for the two-source pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct StockBalanceResponse {
    #[serde(rename = "baseDate")]
    pub base_date: String,
    pub rows: Vec<StockBalanceRecord>,
}

/// On-hand quantity of one product at one location.
#[derive(Debug, Clone, Deserialize)]
pub struct StockBalanceRecord {
    #[serde(rename = "itemCd")]
    pub product_code: String,
    #[serde(rename = "itemNm")]
    pub name: String,
    #[serde(rename = "brandNm", default)]
    pub brand: String,
    #[serde(rename = "originNm", default)]
    pub origin: String,
    #[serde(rename = "whCd", default)]
    pub location_code: String,
    pub qty: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductMasterResponse {
    pub rows: Vec<ProductMasterRecord>,
}

/// Price and classification reference data for one product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductMasterRecord {
    #[serde(rename = "itemCd")]
    pub product_code: String,
    pub price: f64,
    #[serde(rename = "categoryCd")]
    pub category_code: String,
    #[serde(rename = "traceNo", default)]
    pub trace_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_balance_wire_shape() {
        let resp: StockBalanceResponse = serde_json::from_str(
            r#"{
                "baseDate": "2024-06-01",
                "rows": [
                    { "itemCd": "P001", "itemNm": "사과", "brandNm": "엔비", "originNm": "뉴질랜드", "whCd": "W01", "qty": "120.5" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(resp.base_date, "2024-06-01");
        assert_eq!(resp.rows[0].product_code, "P001");
        assert_eq!(resp.rows[0].qty, "120.5");
    }

    #[test]
    fn test_product_master_wire_shape() {
        let resp: ProductMasterResponse = serde_json::from_str(
            r#"{ "rows": [ { "itemCd": "P001", "price": 4500, "categoryCd": "FRT", "traceNo": "T-0001" } ] }"#,
        )
        .unwrap();
        assert_eq!(resp.rows[0].category_code, "FRT");
        assert_eq!(resp.rows[0].price, 4500.0);
    }
}
