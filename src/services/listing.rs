use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::inventory_item::{InventoryItem, WeightUnit};
use crate::services::conversion::convert;

/// Items whose product name, category or lot number contains `query`,
/// ignoring case. A blank query matches everything.
pub fn search<'a>(items: &'a [InventoryItem], query: &str) -> Vec<&'a InventoryItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            [&item.product_name, &item.category, &item.lot_number]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    #[serde(flatten)]
    pub item: InventoryItem,
    /// Weight in the other unit, rounded to two decimals.
    pub alternate_weight: Decimal,
    pub alternate_unit: WeightUnit,
    pub status_label: &'static str,
}

impl InventoryRow {
    pub fn from_item(item: &InventoryItem) -> Self {
        let alternate_unit = item.unit.alternate();
        Self {
            item: item.clone(),
            alternate_weight: convert(item.weight, item.unit, alternate_unit).round_dp(2),
            alternate_unit,
            status_label: item.status.listing_label(),
        }
    }
}
