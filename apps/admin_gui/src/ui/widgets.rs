//! Stateless widgets rendered from the panel; interactions come back as actions.

use admin_core::{AdminPanel, DraftField, PageNav};
use shared::domain::{format_role, Member, MemberId};

use crate::controller::reducer::PanelAction;

const SELECTED_ROW_BG: egui::Color32 = egui::Color32::from_rgb(255, 17, 255);

pub fn search_bar(ui: &mut egui::Ui, search_input: &mut String, actions: &mut Vec<PanelAction>) {
    let response = ui.add(
        egui::TextEdit::singleline(search_input)
            .hint_text("search by name, email or role")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(PanelAction::Search(search_input.clone()));
    }
}

pub fn member_table(ui: &mut egui::Ui, panel: &AdminPanel, actions: &mut Vec<PanelAction>) {
    egui::Grid::new("member_table")
        .num_columns(5)
        .striped(true)
        .min_col_width(24.0)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            let mut all = panel.select_all_checked();
            if ui.checkbox(&mut all, "").changed() {
                actions.push(PanelAction::ToggleAll);
            }
            ui.label(egui::RichText::new("Name").strong());
            ui.label(egui::RichText::new("Email").strong());
            ui.label(egui::RichText::new("Role").strong());
            ui.label(egui::RichText::new("Action").strong());
            ui.end_row();

            for member in panel.current_rows() {
                member_row(ui, panel, member, actions);
                ui.end_row();
            }
        });
}

fn member_row(
    ui: &mut egui::Ui,
    panel: &AdminPanel,
    member: &Member,
    actions: &mut Vec<PanelAction>,
) {
    let selected = panel.is_selected(&member.id);
    let draft = panel.draft().filter(|draft| draft.id == member.id);

    // The checkbox consumes its own click, so it toggles exactly once.
    let mut checked = selected;
    if ui.checkbox(&mut checked, "").changed() {
        actions.push(PanelAction::ToggleRow(member.id.clone()));
    }

    match draft {
        Some(draft) => {
            draft_field(ui, &member.id, DraftField::Name, &draft.name, actions);
            draft_field(ui, &member.id, DraftField::Email, &draft.email, actions);
        }
        None => {
            row_cell(ui, &member.name, selected, &member.id, actions);
            row_cell(ui, &member.email, selected, &member.id, actions);
        }
    }
    row_cell(ui, &format_role(&member.role), selected, &member.id, actions);

    ui.horizontal(|ui| {
        if draft.is_some() {
            if ui.button("Save").clicked() {
                actions.push(PanelAction::SaveEdit);
            }
            if ui.button("Cancel").clicked() {
                actions.push(PanelAction::CancelEdit);
            }
        } else if ui.button("✏").on_hover_text("Edit").clicked() {
            actions.push(PanelAction::BeginEdit(member.id.clone()));
        }
        if ui.button("🗑").on_hover_text("Delete").clicked() {
            actions.push(PanelAction::DeleteRow(member.id.clone()));
        }
    });
}

fn row_cell(
    ui: &mut egui::Ui,
    text: &str,
    selected: bool,
    id: &MemberId,
    actions: &mut Vec<PanelAction>,
) {
    let mut rich = egui::RichText::new(text);
    if selected {
        rich = rich.background_color(SELECTED_ROW_BG);
    }
    if ui
        .add(egui::Label::new(rich).sense(egui::Sense::click()))
        .clicked()
    {
        actions.push(PanelAction::ToggleRow(id.clone()));
    }
}

fn draft_field(
    ui: &mut egui::Ui,
    id: &MemberId,
    field: DraftField,
    value: &str,
    actions: &mut Vec<PanelAction>,
) {
    let mut buffer = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .id_salt(("draft", id.as_str(), field_key(field)))
            .desired_width(180.0),
    );
    if response.changed() {
        actions.push(PanelAction::UpdateDraft(field, buffer));
    }
}

fn field_key(field: DraftField) -> &'static str {
    match field {
        DraftField::Name => "name",
        DraftField::Email => "email",
        DraftField::Role => "role",
    }
}

pub fn pagination_bar(ui: &mut egui::Ui, panel: &AdminPanel, actions: &mut Vec<PanelAction>) {
    let controls = panel.page_controls();
    ui.horizontal(|ui| {
        nav_button(ui, "⏮", PageNav::First, controls.is_enabled(PageNav::First), actions);
        nav_button(ui, "◀", PageNav::Previous, controls.is_enabled(PageNav::Previous), actions);
        for page in controls.page_numbers() {
            let current = controls.is_current(page);
            let button = egui::Button::new(page.to_string()).selected(current);
            if ui.add_enabled(!current, button).clicked() {
                actions.push(PanelAction::GoToPage(page));
            }
        }
        nav_button(ui, "▶", PageNav::Next, controls.is_enabled(PageNav::Next), actions);
        nav_button(ui, "⏭", PageNav::Last, controls.is_enabled(PageNav::Last), actions);
    });
}

fn nav_button(
    ui: &mut egui::Ui,
    label: &str,
    nav: PageNav,
    enabled: bool,
    actions: &mut Vec<PanelAction>,
) {
    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
        actions.push(PanelAction::Navigate(nav));
    }
}
