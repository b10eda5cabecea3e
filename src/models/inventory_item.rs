use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};
use uuid::Uuid;

/// Opaque item identifier, kept in string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Random v4 UUID, so two items created within the same clock tick never collide.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Unit a weight was recorded in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg", alias = "kilogram")]
    #[strum(to_string = "kg", serialize = "kilogram", serialize = "kilograms")]
    Kilogram,

    #[serde(rename = "lbs", alias = "lb", alias = "pound")]
    #[strum(to_string = "lbs", serialize = "lb", serialize = "pound", serialize = "pounds")]
    Pound,
}

impl WeightUnit {
    /// The unit shown alongside this one in the inventory listing.
    pub fn alternate(self) -> Self {
        match self {
            WeightUnit::Kilogram => WeightUnit::Pound,
            WeightUnit::Pound => WeightUnit::Kilogram,
        }
    }
}

/// Coarse freshness classification.
///
/// Assigned once when an item is created and never recomputed from the
/// expiry date.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ItemStatus {
    #[default]
    Fresh,
    Warning,
    Expired,
}

impl ItemStatus {
    /// Label used on the dashboard's recent activity feed.
    pub fn dashboard_label(self) -> &'static str {
        match self {
            ItemStatus::Fresh => "Fresco",
            ItemStatus::Warning => "Por vencer",
            ItemStatus::Expired => "Vencido",
        }
    }

    /// Label used in the inventory listing.
    pub fn listing_label(self) -> &'static str {
        match self {
            ItemStatus::Fresh => "Fresco",
            ItemStatus::Warning => "Alerta",
            ItemStatus::Expired => "Vencido",
        }
    }
}

/// A weighed product held in inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub product_name: String,
    pub weight: Decimal,
    pub unit: WeightUnit,
    /// Empty when no category was chosen.
    pub category: String,
    pub date_added: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    /// Empty when no lot number was given.
    pub lot_number: String,
    pub status: ItemStatus,
}

/// Categories offered by the registration form. Category remains free text.
pub const SUGGESTED_CATEGORIES: [&str; 5] = ["Res", "Cerdo", "Pollo", "Cordero", "Embutidos"];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("kg", WeightUnit::Kilogram)]
    #[case("KG", WeightUnit::Kilogram)]
    #[case("kilograms", WeightUnit::Kilogram)]
    #[case("lbs", WeightUnit::Pound)]
    #[case("lb", WeightUnit::Pound)]
    #[case("Pounds", WeightUnit::Pound)]
    fn parses_unit_spellings(#[case] input: &str, #[case] expected: WeightUnit) {
        assert_eq!(WeightUnit::from_str(input).unwrap(), expected);
    }

    #[test]
    fn unit_displays_short_form() {
        assert_eq!(WeightUnit::Kilogram.to_string(), "kg");
        assert_eq!(WeightUnit::Pound.to_string(), "lbs");
        assert_eq!(
            serde_json::to_string(&WeightUnit::Pound).unwrap(),
            "\"lbs\""
        );
        assert!(WeightUnit::from_str("stone").is_err());
    }

    #[test]
    fn alternate_unit_flips() {
        assert_eq!(WeightUnit::Kilogram.alternate(), WeightUnit::Pound);
        assert_eq!(WeightUnit::Pound.alternate(), WeightUnit::Kilogram);
    }

    #[test]
    fn status_labels_differ_per_view() {
        assert_eq!(ItemStatus::Warning.dashboard_label(), "Por vencer");
        assert_eq!(ItemStatus::Warning.listing_label(), "Alerta");
        assert_eq!(ItemStatus::Expired.listing_label(), "Vencido");
        assert_eq!(ItemStatus::default(), ItemStatus::Fresh);
        assert_eq!(ItemStatus::Fresh.to_string(), "fresh");
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert_ne!(a, b);
        assert_eq!(serde_json::to_string(&ItemId::from("7")).unwrap(), "\"7\"");
    }
}
