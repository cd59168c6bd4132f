//! Row rendering for the members table.

use egui::Ui;
use members_business::{Member, MemberAction, RowActions, RowKey};

use super::cells::{
    render_actions_trigger, render_member_cell, render_roles_cell, render_row_marker,
    render_status_cell,
};
use super::data_cell;
use crate::widgets::members::menu::show_actions_menu;

/// Data needed to render a member row.
pub struct MemberRowData<'a> {
    /// Position in the parent's list.
    pub index: usize,
    pub member: &'a Member,
    pub key: RowKey,
    pub actions: RowActions,
    pub menu_open: bool,
}

/// Result of rendering a member row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemberRowResult {
    /// The actions trigger was clicked.
    pub toggle_menu: bool,
    /// A menu entry was selected.
    pub action: Option<MemberAction>,
    /// The open menu saw a click outside of it.
    pub dismiss_menu: bool,
}

/// Renders a single member row:
/// - Row marker keyed by the membership id
/// - Name and email
/// - Roles
/// - Invite status
/// - Actions trigger, only for rows the policy allows, plus its menu when open
#[inline]
pub fn render_member_row(ui: &mut Ui, data: &MemberRowData<'_>) -> MemberRowResult {
    let mut result = MemberRowResult::default();

    render_row_marker(ui, data.key);

    data_cell(ui, |ui| render_member_cell(ui, data.member));
    data_cell(ui, |ui| render_roles_cell(ui, &data.member.roles));
    data_cell(ui, |ui| render_status_cell(ui, data.member.member_status));

    data_cell(ui, |ui| {
        if !data.actions.show_menu {
            return;
        }

        let trigger = render_actions_trigger(ui, data.key, data.menu_open);
        result.toggle_menu = trigger.clicked();

        if data.menu_open {
            let outcome = show_actions_menu(ui, data.index, &trigger, &data.actions);
            result.action = outcome.selected;
            // A click on the trigger itself is a toggle, not a dismissal.
            result.dismiss_menu = outcome.clicked_elsewhere && !trigger.clicked();
        }
    });

    ui.end_row();
    result
}

/// Prepares row data from the parent's member record.
#[inline]
pub fn prepare_member_row_data<'a>(
    index: usize,
    member: &'a Member,
    actions: RowActions,
    menu_open: bool,
) -> MemberRowData<'a> {
    MemberRowData {
        index,
        member,
        key: member.row_key(),
        actions,
        menu_open,
    }
}
