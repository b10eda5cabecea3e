use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::inventory_item::{InventoryItem, ItemStatus};
use crate::services::conversion::to_kilograms;

/// Number of items shown in the recent activity feed unless configured otherwise.
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 5;

/// Summary cards shown on the dashboard.
///
/// Derived from the item collection on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_weight_kg: Decimal,
    pub warning_count: usize,
    /// Leading items of the collection, in insertion order.
    pub recent_activity: Vec<InventoryItem>,
}

impl DashboardSummary {
    pub fn from_items(items: &[InventoryItem], recent_limit: usize) -> Self {
        Self {
            total_products: items.len(),
            total_weight_kg: total_weight_kg(items),
            warning_count: warning_count(items),
            recent_activity: items.iter().take(recent_limit).cloned().collect(),
        }
    }

    /// Total weight as displayed on the dashboard card.
    pub fn display_total_kg(&self) -> Decimal {
        self.total_weight_kg.round_dp(1)
    }
}

pub fn total_weight_kg(items: &[InventoryItem]) -> Decimal {
    items
        .iter()
        .map(|item| to_kilograms(item.weight, item.unit))
        .sum()
}

/// Items flagged as warning when they were recorded.
pub fn warning_count(items: &[InventoryItem]) -> usize {
    items
        .iter()
        .filter(|item| item.status == ItemStatus::Warning)
        .count()
}
