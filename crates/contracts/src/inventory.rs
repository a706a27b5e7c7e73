//! Display model and the single-endpoint wire shape.

use serde::{Deserialize, Serialize};

use crate::format::parse_decimal;

/// One row of the board, normalized for display. Produced fresh on every
/// successful fetch cycle and replaced wholesale — never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub brand: String,
    pub origin: String,
    #[serde(rename = "quantityKg")]
    pub quantity_kg: f64,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: Option<f64>,
    #[serde(rename = "traceCode", default)]
    pub trace_code: Option<String>,
}

/// Result of one fetch cycle. `updated_at` is an opaque server token used
/// only for change detection; it is never parsed as a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    pub items: Vec<InventoryItem>,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Wire shape of the single inventory endpoint:
/// `{ "items": [...], "updatedAt": "..." }` with quantities transported
/// as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryResponse {
    pub items: Vec<InventoryResponseItem>,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryResponseItem {
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub origin: String,
    pub qty: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub trace: Option<String>,
}

impl InventoryResponse {
    /// Parses transport quantities into numbers and maps wire fields onto
    /// the display model. Ordering is left to the caller.
    pub fn normalize(self) -> FetchResult {
        let items = self
            .items
            .into_iter()
            .map(|row| InventoryItem {
                name: row.name,
                brand: row.brand,
                origin: row.origin,
                quantity_kg: parse_decimal(&row.qty),
                unit_price: row.price,
                trace_code: row.trace,
            })
            .collect();
        FetchResult {
            items,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_parses_quantities() {
        let raw: InventoryResponse = serde_json::from_str(
            r#"{
                "items": [
                    { "name": "바나나", "brand": "돌", "origin": "필리핀", "qty": "10.5" },
                    { "name": "사과", "brand": "엔비", "origin": "뉴질랜드", "qty": "3", "price": 4200.0, "trace": "T-0003" }
                ],
                "updatedAt": "2024-01-01"
            }"#,
        )
        .unwrap();

        let result = raw.normalize();
        assert_eq!(result.updated_at, "2024-01-01");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].quantity_kg, 10.5);
        assert_eq!(result.items[0].unit_price, None);
        assert_eq!(result.items[0].trace_code, None);
        assert_eq!(result.items[1].quantity_kg, 3.0);
        assert_eq!(result.items[1].unit_price, Some(4200.0));
        assert_eq!(result.items[1].trace_code.as_deref(), Some("T-0003"));
    }

    #[test]
    fn test_normalize_keeps_item_count() {
        let raw: InventoryResponse = serde_json::from_str(
            r#"{ "items": [ { "name": "a", "qty": "1" }, { "name": "b", "qty": "2" }, { "name": "c", "qty": "bad" } ], "updatedAt": "t1" }"#,
        )
        .unwrap();
        let result = raw.normalize();
        assert_eq!(result.items.len(), 3);
        // unparseable transport quantity degrades to zero instead of dropping the row
        assert_eq!(result.items[2].quantity_kg, 0.0);
    }
}
