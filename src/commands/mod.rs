use crate::models::draft::DraftField;
use crate::models::inventory_state::ActiveView;

/// A user interaction the store applies to the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectView(ActiveView),
    OpenAddModal,
    CloseAddModal,
    EditDraft(DraftField),
    ResetDraft,
    /// Submit the draft from either the add-weight form or the modal.
    SubmitDraft,
}

impl Action {
    /// Whether the action can change the item collection.
    pub fn mutates_items(&self) -> bool {
        matches!(self, Action::SubmitDraft)
    }
}
