use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{InventoryError, RequiredField};
use crate::models::inventory_item::{InventoryItem, ItemId, ItemStatus, WeightUnit};

/// Uncommitted form state for a new inventory item.
///
/// Fields hold raw user input; nothing is parsed until the draft is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub product_name: String,
    pub weight: String,
    pub unit: WeightUnit,
    pub category: String,
    pub expiry_date: String,
    pub lot_number: String,
}

/// A single form input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    ProductName(String),
    Weight(String),
    Unit(WeightUnit),
    Category(String),
    ExpiryDate(String),
    LotNumber(String),
}

/// Draft whose inputs have all been parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub product_name: String,
    pub weight: Decimal,
    pub unit: WeightUnit,
    pub category: String,
    pub expiry_date: DateTime<Utc>,
    pub lot_number: String,
}

impl ItemDraft {
    pub fn with_field(mut self, field: DraftField) -> Self {
        match field {
            DraftField::ProductName(value) => self.product_name = value,
            DraftField::Weight(value) => self.weight = value,
            DraftField::Unit(unit) => self.unit = unit,
            DraftField::Category(value) => self.category = value,
            DraftField::ExpiryDate(value) => self.expiry_date = value,
            DraftField::LotNumber(value) => self.lot_number = value,
        }
        self
    }

    /// First required field left blank, if any.
    pub fn missing_field(&self) -> Option<RequiredField> {
        if self.product_name.trim().is_empty() {
            Some(RequiredField::ProductName)
        } else if self.weight.trim().is_empty() {
            Some(RequiredField::Weight)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<ValidatedDraft, InventoryError> {
        if let Some(missing) = self.missing_field() {
            return Err(InventoryError::IncompleteDraft { missing });
        }

        Ok(ValidatedDraft {
            product_name: self.product_name.trim().to_string(),
            weight: parse_weight(&self.weight)?,
            unit: self.unit,
            category: self.category.trim().to_string(),
            expiry_date: parse_expiry_date(&self.expiry_date)?,
            lot_number: self.lot_number.trim().to_string(),
        })
    }
}

impl ValidatedDraft {
    /// Builds the item; new items always start out fresh.
    pub fn into_item(self, id: ItemId, date_added: DateTime<Utc>) -> InventoryItem {
        InventoryItem {
            id,
            product_name: self.product_name,
            weight: self.weight,
            unit: self.unit,
            category: self.category,
            date_added,
            expiry_date: self.expiry_date,
            lot_number: self.lot_number,
            status: ItemStatus::Fresh,
        }
    }
}

/// Largest weight a draft may carry. Keeps unit conversion and dashboard
/// totals well inside `Decimal` range.
pub const MAX_WEIGHT: Decimal = dec!(1000000000000);

/// Parses a decimal weight such as `150.5`, between zero and [`MAX_WEIGHT`].
pub fn parse_weight(input: &str) -> Result<Decimal, InventoryError> {
    let invalid = || InventoryError::InvalidWeight {
        input: input.to_string(),
    };
    let trimmed = input.trim();
    let weight = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| invalid())?;
    if (weight.is_sign_negative() && !weight.is_zero()) || weight > MAX_WEIGHT {
        return Err(invalid());
    }
    Ok(weight.normalize())
}

/// Parses a calendar date (`2025-06-01`, read as midnight UTC) or an RFC 3339 timestamp.
pub fn parse_expiry_date(input: &str) -> Result<DateTime<Utc>, InventoryError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| InventoryError::InvalidExpiryDate {
            input: input.to_string(),
        })
}
