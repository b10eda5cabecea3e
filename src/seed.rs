//! Sample inventory every session starts from.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::models::inventory_item::{InventoryItem, ItemId, ItemStatus, WeightUnit};

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn sample_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: ItemId::from("1"),
            product_name: "Carne de Res Premium".to_string(),
            weight: dec!(150.5),
            unit: WeightUnit::Kilogram,
            category: "Res".to_string(),
            date_added: midnight(2025, 1, 10),
            expiry_date: midnight(2025, 3, 15),
            lot_number: "LOT-001".to_string(),
            status: ItemStatus::Fresh,
        },
        InventoryItem {
            id: ItemId::from("2"),
            product_name: "Carne de Cerdo".to_string(),
            weight: dec!(45.0),
            unit: WeightUnit::Kilogram,
            category: "Cerdo".to_string(),
            date_added: midnight(2025, 1, 8),
            expiry_date: midnight(2025, 2, 20),
            lot_number: "LOT-002".to_string(),
            status: ItemStatus::Warning,
        },
        InventoryItem {
            id: ItemId::from("3"),
            product_name: "Pechuga de Pollo".to_string(),
            weight: dec!(200.0),
            unit: WeightUnit::Kilogram,
            category: "Pollo".to_string(),
            date_added: midnight(2025, 1, 12),
            expiry_date: midnight(2025, 2, 25),
            lot_number: "LOT-003".to_string(),
            status: ItemStatus::Fresh,
        },
    ]
}
