//! Panel actions collected while rendering a frame and applied afterwards.

use admin_core::{AdminPanel, DraftField, PageNav};
use shared::domain::MemberId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    Search(String),
    /// Row click or row checkbox.
    ToggleRow(MemberId),
    ToggleAll,
    DeleteSelected,
    DeleteRow(MemberId),
    BeginEdit(MemberId),
    UpdateDraft(DraftField, String),
    SaveEdit,
    CancelEdit,
    GoToPage(usize),
    Navigate(PageNav),
}

pub fn apply(panel: &mut AdminPanel, action: PanelAction) {
    tracing::debug!(?action, "applying panel action");
    match action {
        PanelAction::Search(term) => panel.set_search_term(term),
        PanelAction::ToggleRow(id) => panel.toggle_one(&id),
        PanelAction::ToggleAll => panel.toggle_all(),
        PanelAction::DeleteSelected => panel.delete_selected(),
        PanelAction::DeleteRow(id) => panel.delete_row(&id),
        PanelAction::BeginEdit(id) => {
            panel.begin_edit(&id);
        }
        PanelAction::UpdateDraft(field, value) => panel.update_draft(field, value),
        PanelAction::SaveEdit => panel.save_edit(),
        PanelAction::CancelEdit => panel.cancel_edit(),
        PanelAction::GoToPage(page) => panel.go_to_page(page),
        PanelAction::Navigate(nav) => panel.navigate(nav),
    }
}

pub fn apply_all(panel: &mut AdminPanel, actions: impl IntoIterator<Item = PanelAction>) {
    for action in actions {
        apply(panel, action);
    }
}
