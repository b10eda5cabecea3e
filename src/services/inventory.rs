use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::{
    commands::Action,
    config::AppConfig,
    errors::InventoryError,
    models::{
        inventory_item::{InventoryItem, ItemId},
        inventory_state::InventoryState,
    },
    services::dashboard::{DashboardSummary, DEFAULT_RECENT_ACTIVITY_LIMIT},
};

/// Owns the current inventory snapshot for one session and applies user
/// actions to it.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    state: InventoryState,
    recent_activity_limit: usize,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new(InventoryState::seeded())
    }
}

impl InventoryStore {
    pub fn new(state: InventoryState) -> Self {
        Self {
            state,
            recent_activity_limit: DEFAULT_RECENT_ACTIVITY_LIMIT,
        }
    }

    /// Creates a store seeded (or not) and sized according to configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let state = if config.seed_sample_data {
            InventoryState::seeded()
        } else {
            InventoryState::default()
        };
        Self::new(state.with_default_unit(config.default_unit))
            .with_recent_activity_limit(config.recent_activity_limit as usize)
    }

    pub fn with_recent_activity_limit(mut self, limit: usize) -> Self {
        self.recent_activity_limit = limit;
        self
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.state.items()
    }

    pub fn summary(&self) -> DashboardSummary {
        self.state.summary(self.recent_activity_limit)
    }

    /// Applies an action and swaps in the resulting snapshot.
    ///
    /// Submitting an incomplete draft is silently ignored. Any other error
    /// leaves the current snapshot in place and is returned.
    #[instrument(skip(self), fields(items = self.state.items().len()))]
    pub fn dispatch(&mut self, action: Action) -> Result<(), InventoryError> {
        let mutates = action.mutates_items();
        let next = match action {
            Action::SelectView(view) => self.state.with_view(view),
            Action::OpenAddModal => self.state.with_add_modal(true),
            Action::CloseAddModal => self.state.with_add_modal(false),
            Action::EditDraft(field) => self.state.with_draft_field(field),
            Action::ResetDraft => self.state.with_cleared_draft(),
            Action::SubmitDraft => match self.submit_draft() {
                Ok(next) => next,
                Err(err) if err.is_silent() => {
                    debug!(error = %err, "Ignoring incomplete draft");
                    return Ok(());
                }
                Err(err) => {
                    warn!(error = %err, code = err.code(), "Draft rejected");
                    return Err(err);
                }
            },
        };

        self.state = next;
        if mutates {
            debug!(items = self.state.items().len(), "Inventory updated");
        }
        Ok(())
    }

    fn submit_draft(&self) -> Result<InventoryState, InventoryError> {
        let id = ItemId::generate();
        let next = self.state.add_item(id.clone(), Utc::now())?;
        info!(
            item_id = %id,
            product = %self.state.draft().product_name.trim(),
            weight = %self.state.draft().weight.trim(),
            unit = %self.state.draft().unit,
            "Inventory item added"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draft::DraftField;
    use crate::models::inventory_item::WeightUnit;
    use crate::models::inventory_state::ActiveView;
    use assert_matches::assert_matches;

    fn fill(store: &mut InventoryStore, name: &str, weight: &str, expiry: &str) {
        for field in [
            DraftField::ProductName(name.into()),
            DraftField::Weight(weight.into()),
            DraftField::Unit(WeightUnit::Pound),
            DraftField::ExpiryDate(expiry.into()),
        ] {
            store.dispatch(Action::EditDraft(field)).unwrap();
        }
    }

    #[test]
    fn submit_from_modal_closes_it() {
        let mut store = InventoryStore::default();
        store.dispatch(Action::OpenAddModal).unwrap();
        fill(&mut store, "Lomo", "3", "2025-04-01");
        store.dispatch(Action::SubmitDraft).unwrap();

        assert_eq!(store.items().len(), 4);
        assert!(!store.state().is_add_modal_open());
    }

    #[test]
    fn incomplete_submit_is_silent_noop() {
        let mut store = InventoryStore::default();
        store.dispatch(Action::OpenAddModal).unwrap();
        fill(&mut store, "Lomo", "", "2025-04-01");
        let before = store.state().clone();

        assert!(store.dispatch(Action::SubmitDraft).is_ok());
        assert_eq!(store.state(), &before);
        assert!(store.state().is_add_modal_open());
    }

    #[test]
    fn invalid_date_is_returned_and_state_kept() {
        let mut store = InventoryStore::default();
        fill(&mut store, "Lomo", "3", "mañana");
        let before = store.state().clone();

        assert_matches!(
            store.dispatch(Action::SubmitDraft),
            Err(InventoryError::InvalidExpiryDate { .. })
        );
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn reset_clears_draft_only() {
        let mut store = InventoryStore::default();
        store.dispatch(Action::SelectView(ActiveView::AddWeight)).unwrap();
        fill(&mut store, "Lomo", "3", "2025-04-01");
        store.dispatch(Action::ResetDraft).unwrap();

        assert_eq!(store.state().draft(), &Default::default());
        assert_eq!(store.state().active_view(), ActiveView::AddWeight);
        assert_eq!(store.items().len(), 3);
    }

    #[test]
    fn from_config_applies_settings() {
        let config = AppConfig {
            seed_sample_data: false,
            default_unit: WeightUnit::Pound,
            ..AppConfig::default()
        };
        let store = InventoryStore::from_config(&config);
        assert!(store.items().is_empty());
        assert_eq!(store.state().draft().unit, WeightUnit::Pound);
    }

    #[test]
    fn recent_activity_limit_is_applied() {
        let store = InventoryStore::default().with_recent_activity_limit(1);
        assert_eq!(store.summary().recent_activity.len(), 1);
    }
}
