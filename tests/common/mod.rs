use meat_tracker::{Action, DraftField, InventoryStore, WeightUnit};

/// Draft inputs as a user would type them into the registration form.
pub struct DraftInput<'a> {
    pub product_name: &'a str,
    pub weight: &'a str,
    pub unit: WeightUnit,
    pub category: &'a str,
    pub expiry_date: &'a str,
    pub lot_number: &'a str,
}

impl Default for DraftInput<'_> {
    fn default() -> Self {
        Self {
            product_name: "Test",
            weight: "50",
            unit: WeightUnit::Pound,
            category: "Res",
            expiry_date: "2025-06-01",
            lot_number: "LOT-X",
        }
    }
}

/// Types every field of `input` into the store's draft.
pub fn fill_draft(store: &mut InventoryStore, input: &DraftInput<'_>) {
    let fields = [
        DraftField::ProductName(input.product_name.to_string()),
        DraftField::Weight(input.weight.to_string()),
        DraftField::Unit(input.unit),
        DraftField::Category(input.category.to_string()),
        DraftField::ExpiryDate(input.expiry_date.to_string()),
        DraftField::LotNumber(input.lot_number.to_string()),
    ];
    for field in fields {
        store
            .dispatch(Action::EditDraft(field))
            .expect("editing a draft field never fails");
    }
}
