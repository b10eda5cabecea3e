use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::errors::InventoryError;
use crate::models::draft::{DraftField, ItemDraft};
use crate::models::inventory_item::{InventoryItem, ItemId, WeightUnit};
use crate::seed::sample_items;
use crate::services::dashboard::DashboardSummary;
use crate::services::listing;

/// Which of the three sub-views is showing.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ActiveView {
    #[default]
    Dashboard,
    Inventory,
    AddWeight,
}

/// Snapshot of everything the inventory screen holds.
///
/// Every operation leaves `self` untouched and returns the next snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryState {
    items: Vec<InventoryItem>,
    draft: ItemDraft,
    active_view: ActiveView,
    add_modal_open: bool,
    #[serde(skip)]
    default_unit: WeightUnit,
}

impl InventoryState {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Initial state of a session: the sample inventory on the dashboard.
    pub fn seeded() -> Self {
        Self::new(sample_items())
    }

    /// Sets the unit a cleared draft starts with, and applies it to the current draft.
    pub fn with_default_unit(&self, unit: WeightUnit) -> Self {
        Self {
            default_unit: unit,
            draft: ItemDraft {
                unit,
                ..self.draft.clone()
            },
            ..self.clone()
        }
    }

    fn blank_draft(&self) -> ItemDraft {
        ItemDraft {
            unit: self.default_unit,
            ..ItemDraft::default()
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn with_view(&self, view: ActiveView) -> Self {
        Self {
            active_view: view,
            ..self.clone()
        }
    }

    pub fn with_add_modal(&self, open: bool) -> Self {
        Self {
            add_modal_open: open,
            ..self.clone()
        }
    }

    pub fn with_draft_field(&self, field: DraftField) -> Self {
        Self {
            draft: self.draft.clone().with_field(field),
            ..self.clone()
        }
    }

    pub fn with_draft(&self, draft: ItemDraft) -> Self {
        Self {
            draft,
            ..self.clone()
        }
    }

    pub fn with_cleared_draft(&self) -> Self {
        self.with_draft(self.blank_draft())
    }

    /// Commits the draft as a new item at the end of the collection.
    ///
    /// On success the draft is cleared and the add-product modal closed. On
    /// error nothing changes; the caller keeps the current snapshot.
    pub fn add_item(&self, id: ItemId, date_added: DateTime<Utc>) -> Result<Self, InventoryError> {
        let validated = self.draft.validate()?;
        if self.contains(&id) {
            return Err(InventoryError::DuplicateId { id });
        }

        let mut items = self.items.clone();
        items.push(validated.into_item(id, date_added));

        Ok(Self {
            items,
            draft: self.blank_draft(),
            add_modal_open: false,
            ..self.clone()
        })
    }

    pub fn summary(&self, recent_limit: usize) -> DashboardSummary {
        DashboardSummary::from_items(&self.items, recent_limit)
    }

    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        listing::search(&self.items, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RequiredField;
    use crate::models::inventory_item::ItemStatus;
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    fn with_draft(state: &InventoryState, name: &str, weight: &str) -> InventoryState {
        state
            .with_draft_field(DraftField::ProductName(name.into()))
            .with_draft_field(DraftField::Weight(weight.into()))
            .with_draft_field(DraftField::ExpiryDate("2025-06-01".into()))
    }

    #[test]
    fn seeded_state_starts_on_dashboard() {
        let state = InventoryState::seeded();
        assert_eq!(state.items().len(), 3);
        assert_eq!(state.active_view(), ActiveView::Dashboard);
        assert!(!state.is_add_modal_open());
        assert_eq!(state.draft(), &ItemDraft::default());
    }

    #[test]
    fn add_item_appends_and_resets() {
        let state = with_draft(&InventoryState::seeded(), "Chorizo", "8.25")
            .with_add_modal(true)
            .with_view(ActiveView::AddWeight);
        let next = state.add_item(ItemId::from("x-1"), Utc::now()).unwrap();

        assert_eq!(state.items().len(), 3, "previous snapshot is untouched");
        assert_eq!(next.items().len(), 4);
        let added = next.items().last().unwrap();
        assert_eq!(added.id, ItemId::from("x-1"));
        assert_eq!(added.weight, dec!(8.25));
        assert_eq!(added.unit, WeightUnit::Kilogram);
        assert_eq!(added.status, ItemStatus::Fresh);
        assert_eq!(next.draft(), &ItemDraft::default());
        assert!(!next.is_add_modal_open());
        assert_eq!(next.active_view(), ActiveView::AddWeight);
    }

    #[test]
    fn incomplete_draft_is_reported() {
        let state = with_draft(&InventoryState::seeded(), "", "10");
        assert_matches!(
            state.add_item(ItemId::generate(), Utc::now()),
            Err(InventoryError::IncompleteDraft {
                missing: RequiredField::ProductName
            })
        );
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let state = with_draft(&InventoryState::seeded(), "Chorizo", "1");
        assert_matches!(
            state.add_item(ItemId::from("2"), Utc::now()),
            Err(InventoryError::DuplicateId { id }) if id.as_str() == "2"
        );
    }

    #[test]
    fn view_and_modal_leave_items_alone() {
        let state = InventoryState::seeded();
        let next = state
            .with_view(ActiveView::Inventory)
            .with_add_modal(true)
            .with_add_modal(false);
        assert_eq!(next.items(), state.items());
        assert_eq!(next.active_view(), ActiveView::Inventory);
    }

    #[test]
    fn cleared_draft_keeps_default_unit() {
        let state = with_draft(&InventoryState::seeded(), "Tocino", "4")
            .with_default_unit(WeightUnit::Pound);
        assert_eq!(state.draft().unit, WeightUnit::Pound);

        let next = state.add_item(ItemId::generate(), Utc::now()).unwrap();
        assert_eq!(next.items().last().unwrap().unit, WeightUnit::Pound);
        assert_eq!(next.draft().unit, WeightUnit::Pound);
        assert!(next.draft().product_name.is_empty());
        assert_eq!(state.with_cleared_draft().draft().weight, "");
    }

    #[test]
    fn view_names_are_kebab_case() {
        assert_eq!(ActiveView::AddWeight.to_string(), "add-weight");
        assert_eq!("inventory".parse::<ActiveView>().unwrap(), ActiveView::Inventory);
    }
}
