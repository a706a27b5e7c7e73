//! The fetch-and-merge pipeline: left outer join against the product
//! master, display filter, locale ordering.

use std::collections::HashMap;

use crate::collation;
use crate::format::parse_decimal;
use crate::inventory::InventoryItem;
use crate::vendor::{ProductMasterRecord, StockBalanceRecord};

/// Category codes shown on the board (fruit and vegetable).
pub const ALLOWED_CATEGORY_CODES: &[&str] = &["FRT", "VEG"];

/// Origin marker excluded from the imported-goods board.
pub const DOMESTIC_ORIGIN: &str = "국내산";

/// One stock row after the master join. `category_code` is `None` when no
/// master record matched; the price and trace placeholders live on the
/// item itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub category_code: Option<String>,
    pub item: InventoryItem,
}

/// Left outer join of stock balances against the product master, keyed by
/// product code. Every stock row yields exactly one merged record whether
/// or not a master record exists. Duplicate product codes in the master
/// data resolve last-write-wins.
pub fn merge_stock_with_master(
    stock: &[StockBalanceRecord],
    master: &[ProductMasterRecord],
) -> Vec<MergedRecord> {
    let mut by_code: HashMap<&str, &ProductMasterRecord> = HashMap::new();
    for record in master {
        by_code.insert(record.product_code.as_str(), record);
    }

    stock
        .iter()
        .map(|row| {
            let matched = by_code.get(row.product_code.as_str()).copied();
            MergedRecord {
                category_code: matched.map(|m| m.category_code.clone()),
                item: InventoryItem {
                    name: row.name.clone(),
                    brand: row.brand.clone(),
                    origin: row.origin.clone(),
                    quantity_kg: parse_decimal(&row.qty),
                    unit_price: matched.map(|m| m.price),
                    trace_code: matched.and_then(|m| m.trace_code.clone()),
                },
            }
        })
        .collect()
}

/// Display filter: category code in the allow-set AND origin is not the
/// domestic marker. A pure conjunction, so predicate order is irrelevant.
/// Rows without a master match carry no category and are filtered out.
pub fn filter_sellable(records: Vec<MergedRecord>) -> Vec<MergedRecord> {
    records
        .into_iter()
        .filter(|record| {
            let category_ok = record
                .category_code
                .as_deref()
                .is_some_and(|code| ALLOWED_CATEGORY_CODES.contains(&code));
            category_ok && record.item.origin != DOMESTIC_ORIGIN
        })
        .collect()
}

/// Orders items in place by display name using Korean collation.
pub fn sort_by_name(items: &mut [InventoryItem]) {
    items.sort_by(|a, b| collation::compare(&a.name, &b.name));
}

/// Full two-source pipeline: join, filter, strip join metadata, sort.
pub fn run(stock: &[StockBalanceRecord], master: &[ProductMasterRecord]) -> Vec<InventoryItem> {
    let merged = filter_sellable(merge_stock_with_master(stock, master));
    let mut items: Vec<InventoryItem> = merged.into_iter().map(|record| record.item).collect();
    sort_by_name(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(code: &str, name: &str, origin: &str, qty: &str) -> StockBalanceRecord {
        StockBalanceRecord {
            product_code: code.to_string(),
            name: name.to_string(),
            brand: "브랜드".to_string(),
            origin: origin.to_string(),
            location_code: "W01".to_string(),
            qty: qty.to_string(),
        }
    }

    fn master(code: &str, price: f64, category: &str) -> ProductMasterRecord {
        ProductMasterRecord {
            product_code: code.to_string(),
            price,
            category_code: category.to_string(),
            trace_code: Some(format!("T-{}", code)),
        }
    }

    #[test]
    fn test_merge_is_left_outer_join() {
        let stock_rows = vec![
            stock("P001", "사과", "뉴질랜드", "120.5"),
            stock("P002", "바나나", "필리핀", "80"),
        ];
        let master_rows = vec![master("P001", 4500.0, "FRT")];

        let merged = merge_stock_with_master(&stock_rows, &master_rows);
        assert_eq!(merged.len(), 2);

        // matched row is enriched
        assert_eq!(merged[0].category_code.as_deref(), Some("FRT"));
        assert_eq!(merged[0].item.unit_price, Some(4500.0));
        assert_eq!(merged[0].item.trace_code.as_deref(), Some("T-P001"));
        assert_eq!(merged[0].item.quantity_kg, 120.5);

        // unmatched row keeps placeholders
        assert_eq!(merged[1].category_code, None);
        assert_eq!(merged[1].item.unit_price, None);
        assert_eq!(merged[1].item.trace_code, None);
    }

    #[test]
    fn test_duplicate_master_codes_last_write_wins() {
        let stock_rows = vec![stock("P001", "사과", "뉴질랜드", "1")];
        let master_rows = vec![master("P001", 4500.0, "FRT"), master("P001", 4800.0, "FRT")];

        let merged = merge_stock_with_master(&stock_rows, &master_rows);
        assert_eq!(merged[0].item.unit_price, Some(4800.0));
    }

    #[test]
    fn test_filter_is_pure_conjunction() {
        let stock_rows = vec![
            stock("P001", "사과", "뉴질랜드", "1"),
            stock("P002", "감자", DOMESTIC_ORIGIN, "1"),
            stock("P003", "연어", "노르웨이", "1"),
            stock("P004", "무명", "페루", "1"),
        ];
        let master_rows = vec![
            master("P001", 1.0, "FRT"),
            // allowed category but domestic origin: excluded
            master("P002", 1.0, "VEG"),
            // disallowed category, import origin: excluded regardless
            master("P003", 1.0, "FSH"),
            // P004 has no master record: excluded (no category)
        ];

        let kept = filter_sellable(merge_stock_with_master(&stock_rows, &master_rows));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].item.name, "사과");
    }

    #[test]
    fn test_run_sorts_by_locale_name() {
        let stock_rows = vec![
            stock("P002", "바나나", "필리핀", "10.5"),
            stock("P001", "사과", "뉴질랜드", "3"),
        ];
        let master_rows = vec![master("P001", 4500.0, "FRT"), master("P002", 3200.0, "FRT")];

        let items = run(&stock_rows, &master_rows);
        assert_eq!(items.len(), 2);
        // ㅂ initial before ㅅ initial in Korean collation
        assert_eq!(items[0].name, "바나나");
        assert_eq!(items[1].name, "사과");
    }
}
