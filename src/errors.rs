use serde::Serialize;

use crate::models::inventory_item::ItemId;

/// Draft fields that must be filled before an item can be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RequiredField {
    ProductName,
    Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum InventoryError {
    #[error("Incomplete draft: {missing} is empty")]
    IncompleteDraft { missing: RequiredField },

    #[error("Invalid weight: {input:?} is not a decimal number between 0 and 1000000000000")]
    InvalidWeight { input: String },

    #[error("Invalid expiry date: {input:?} (expected YYYY-MM-DD or RFC 3339)")]
    InvalidExpiryDate { input: String },

    #[error("Duplicate item id: {id}")]
    DuplicateId { id: ItemId },
}

impl InventoryError {
    /// Machine-readable code, stable across message wording changes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::IncompleteDraft { .. } => "incomplete_draft",
            Self::InvalidWeight { .. } => "invalid_weight",
            Self::InvalidExpiryDate { .. } => "invalid_expiry_date",
            Self::DuplicateId { .. } => "duplicate_id",
        }
    }

    /// Errors the store drops without surfacing them to the caller.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::IncompleteDraft { .. })
    }
}
