//! Session state for the member admin panel.
//!
//! [`AdminPanel`] owns the working set and everything derived from it. The
//! filtered view is a list of positions into the working set and is rebuilt
//! wholesale whenever the working set or the search term changes.

use std::collections::{BTreeSet, HashSet};

use shared::domain::{Member, MemberId};
use tracing::{debug, info};

use crate::{
    error::LoadError,
    filter::filter_indices,
    pager::{page_range, total_pages, PageControls, PageNav},
    source::MemberSource,
};

pub const ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Role,
}

/// The single inline edit in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub draft: Member,
}

#[derive(Debug)]
pub struct AdminPanel {
    members: Vec<Member>,
    search_term: String,
    view: Vec<usize>,
    current_page: usize,
    selected: BTreeSet<MemberId>,
    select_all: bool,
    edit: Option<EditSession>,
    load_state: LoadState,
}

impl Default for AdminPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminPanel {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            search_term: String::new(),
            view: Vec::new(),
            current_page: 1,
            selected: BTreeSet::new(),
            select_all: false,
            edit: None,
            load_state: LoadState::Loading,
        }
    }

    /// Panel already populated, as if the startup load succeeded.
    pub fn with_members(members: Vec<Member>) -> Self {
        let mut panel = Self::new();
        panel.apply_loaded(members);
        panel
    }

    // ---------- loading ----------

    /// Runs the startup fetch against `source` and seeds the panel.
    ///
    /// On failure the working set stays as it was and the error is recorded
    /// in [`LoadState::Failed`] before being returned.
    pub async fn load(&mut self, source: &dyn MemberSource) -> Result<(), LoadError> {
        match source.fetch_members().await {
            Ok(parsed) => {
                self.apply_loaded(parsed.members);
                Ok(())
            }
            Err(err) => {
                self.fail_load(err.to_string());
                Err(err)
            }
        }
    }

    /// Replaces the working set with a freshly loaded member list.
    ///
    /// Later entries repeating an earlier id are dropped.
    pub fn apply_loaded(&mut self, members: Vec<Member>) {
        let mut seen = HashSet::with_capacity(members.len());
        self.members = members
            .into_iter()
            .filter(|member| seen.insert(member.id.clone()))
            .collect();
        self.load_state = LoadState::Ready;
        self.prune_stale_ids();
        self.refresh_view();
        info!(members = self.members.len(), "working set loaded");
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "member load failed");
        self.load_state = LoadState::Failed(message);
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }

    // ---------- search ----------

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Updates the search term. The current page is left alone, so a
    /// narrower search can leave it past the last page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.refresh_view();
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Member> + '_ {
        self.view.iter().map(|&index| &self.members[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    // ---------- paging ----------

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.view.len(), ROWS_PER_PAGE)
    }

    pub fn current_rows(&self) -> Vec<&Member> {
        self.view[page_range(self.view.len(), self.current_page, ROWS_PER_PAGE)]
            .iter()
            .map(|&index| &self.members[index])
            .collect()
    }

    pub fn page_controls(&self) -> PageControls {
        PageControls::new(self.current_page, self.total_pages())
    }

    /// Jumps straight to `page` without clamping.
    pub fn go_to_page(&mut self, page: usize) {
        debug!(from = self.current_page, to = page, "page change");
        self.current_page = page;
    }

    /// Applies a navigation button; does nothing while that button is disabled.
    pub fn navigate(&mut self, nav: PageNav) {
        if let Some(page) = self.page_controls().target(nav) {
            self.go_to_page(page);
        }
    }

    // ---------- selection ----------

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected.contains(id)
    }

    pub fn selection(&self) -> &BTreeSet<MemberId> {
        &self.selected
    }

    pub fn select_all_checked(&self) -> bool {
        self.select_all
    }

    /// Adds `id` to the selection or removes it if already there.
    pub fn toggle_one(&mut self, id: &MemberId) {
        if !self.selected.remove(id) && self.member(id).is_some() {
            self.selected.insert(id.clone());
        }
    }

    /// Header checkbox.
    ///
    /// The flag is global rather than per page: when it is set and the whole
    /// current page is selected, the selection is cleared; otherwise the
    /// selection is replaced by the current page's ids. Selections made on
    /// other pages are dropped either way.
    pub fn toggle_all(&mut self) {
        let page_ids: Vec<MemberId> = self
            .current_rows()
            .into_iter()
            .map(|member| member.id.clone())
            .collect();
        let page_fully_selected = page_ids.iter().all(|id| self.selected.contains(id));

        if self.select_all && page_fully_selected {
            self.select_all = false;
            self.selected.clear();
        } else {
            self.select_all = true;
            self.selected = page_ids.into_iter().collect();
        }
        debug!(
            select_all = self.select_all,
            selected = self.selected.len(),
            "toggled select-all"
        );
    }

    /// Removes every selected member and empties the selection.
    pub fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let selected = std::mem::take(&mut self.selected);
        let before = self.members.len();
        self.members.retain(|member| !selected.contains(&member.id));
        debug!(removed = before - self.members.len(), "deleted selected members");
        self.prune_stale_ids();
        self.refresh_view();
    }

    // ---------- inline edit ----------

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn draft(&self) -> Option<&Member> {
        self.edit.as_ref().map(|session| &session.draft)
    }

    pub fn is_editing(&self, id: &MemberId) -> bool {
        self.draft().is_some_and(|draft| &draft.id == id)
    }

    /// Starts editing `id`, silently replacing any edit already in progress.
    ///
    /// Returns `false` when no member has that id.
    pub fn begin_edit(&mut self, id: &MemberId) -> bool {
        let Some(member) = self.member(id) else {
            return false;
        };
        self.edit = Some(EditSession {
            draft: member.clone(),
        });
        true
    }

    /// Writes `value` into the draft as-is; no-op when nothing is being edited.
    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        let Some(session) = self.edit.as_mut() else {
            return;
        };
        let value = value.into();
        match field {
            DraftField::Name => session.draft.name = value,
            DraftField::Email => session.draft.email = value,
            DraftField::Role => session.draft.role = value,
        }
    }

    /// Overwrites the working-set entry with the draft and ends the edit.
    pub fn save_edit(&mut self) {
        let Some(EditSession { draft }) = self.edit.take() else {
            return;
        };
        if let Some(slot) = self.members.iter_mut().find(|member| member.id == draft.id) {
            debug!(id = %draft.id, "saved member edit");
            *slot = draft;
            self.refresh_view();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    // ---------- single-row delete ----------

    pub fn delete_row(&mut self, id: &MemberId) {
        let before = self.members.len();
        self.members.retain(|member| &member.id != id);
        if self.members.len() == before {
            return;
        }
        debug!(%id, "deleted member");
        self.prune_stale_ids();
        self.refresh_view();
    }

    fn prune_stale_ids(&mut self) {
        let live: HashSet<&MemberId> = self.members.iter().map(|member| &member.id).collect();
        self.selected.retain(|id| live.contains(id));
        if self
            .edit
            .as_ref()
            .is_some_and(|session| !live.contains(&session.draft.id))
        {
            self.edit = None;
        }
    }

    fn refresh_view(&mut self) {
        self.view = filter_indices(&self.members, &self.search_term);
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
