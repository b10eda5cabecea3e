use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::inventory_item::WeightUnit;

/// Pounds in one kilogram.
pub const LBS_PER_KG: Decimal = dec!(2.20462);

/// Converts a weight between units. No rounding is applied.
pub fn convert(weight: Decimal, from: WeightUnit, to: WeightUnit) -> Decimal {
    match (from, to) {
        (WeightUnit::Kilogram, WeightUnit::Pound) => weight * LBS_PER_KG,
        (WeightUnit::Pound, WeightUnit::Kilogram) => weight / LBS_PER_KG,
        _ => weight,
    }
}

pub fn to_kilograms(weight: Decimal, unit: WeightUnit) -> Decimal {
    convert(weight, unit, WeightUnit::Kilogram)
}
