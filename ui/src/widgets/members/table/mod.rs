//! The members table widget.
//!
//! Split into smaller components:
//! - `columns`: Size constants
//! - `header`: Header row
//! - `row`: One member row and its actions menu
//! - `cells`: Cell rendering functions

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Color32, Frame, Grid, InnerResponse, Margin, Response, ScrollArea, Stroke, Ui};
use log::info;
use members_business::{CurrentUser, Member, MemberAction, RowActions, RowKey};

use self::cells::render_empty_row;
use self::columns::{COLUMN_COUNT, MIN_COL_WIDTH};
use self::header::render_table_header;
use self::row::{prepare_member_row_data, render_member_row};
use super::overlay::show_loading_overlay;
use super::state::MembersTableState;

/// Border color for the table frame (subtle gray).
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// A view over the organization's members.
///
/// The table owns no membership data: the parent passes the ordered member
/// list, the viewer and two callbacks every frame. Selecting a menu entry calls
/// the matching callback once, with a reference to the very element of
/// `members` the row was rendered from.
///
/// ```no_run
/// # use members_business::{CurrentUser, Member};
/// # use members_ui::widgets::{MembersTable, MembersTableState};
/// # fn page(ui: &mut egui::Ui, members: &[Member], me: &CurrentUser, state: &mut MembersTableState) {
/// MembersTable::new(
///     members,
///     me,
///     |member| log::info!("remove {}", member.email()),
///     |member| log::info!("resend to {}", member.email()),
/// )
/// .loading(false)
/// .show(ui, state);
/// # }
/// ```
#[must_use = "You should call .show()"]
pub struct MembersTable<'a, R, S>
where
    R: FnMut(&Member),
    S: FnMut(&Member),
{
    members: &'a [Member],
    current_user: &'a CurrentUser,
    on_remove_member: R,
    on_resend_invite_member: S,
    loading: bool,
}

impl<'a, R, S> MembersTable<'a, R, S>
where
    R: FnMut(&Member),
    S: FnMut(&Member),
{
    pub fn new(
        members: &'a [Member],
        current_user: &'a CurrentUser,
        on_remove_member: R,
        on_resend_invite_member: S,
    ) -> Self {
        Self {
            members,
            current_user,
            on_remove_member,
            on_resend_invite_member,
            loading: false,
        }
    }

    /// Covers the table with a loading overlay. Default: `false`.
    #[inline]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn show(mut self, ui: &mut Ui, state: &mut MembersTableState) -> Response {
        let members = self.members;
        let current_user = self.current_user;

        // The overlay does not cover foreground areas, so no menu may stay open under it.
        if self.loading {
            state.close_menu();
        }

        let mut menu_shown = false;
        let mut toggled: Option<RowKey> = None;
        let mut dismissed = false;
        let mut selected: Option<(usize, MemberAction)> = None;

        let frame = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("members_table_scroll")
                    .show(ui, |ui| {
                        Grid::new("members_table")
                            .num_columns(COLUMN_COUNT)
                            .striped(true)
                            .spacing([16.0, 0.0])
                            .min_col_width(MIN_COL_WIDTH)
                            .show(ui, |ui| {
                                render_table_header(ui);

                                if members.is_empty() {
                                    render_empty_row(ui);
                                }

                                for (index, member) in members.iter().enumerate() {
                                    let actions = RowActions::evaluate(member, current_user);
                                    let key = member.row_key();
                                    // Duplicate keys share the open state; only the first row shows the menu.
                                    let menu_open =
                                        actions.show_menu && !menu_shown && state.is_menu_open(key);
                                    menu_shown |= menu_open;
                                    let data = prepare_member_row_data(
                                        index, member, actions, menu_open,
                                    );

                                    let result = render_member_row(ui, &data);
                                    if result.toggle_menu {
                                        toggled = Some(key);
                                    }
                                    dismissed |= result.dismiss_menu;
                                    if let Some(action) = result.action {
                                        selected = Some((index, action));
                                    }
                                }
                            });
                    });
            });

        if self.loading {
            toggled = None;
            selected = None;
        }

        // Apply menu changes after iteration.
        if dismissed || selected.is_some() {
            state.close_menu();
        }
        if let Some(key) = toggled {
            state.toggle_menu(key);
        }

        if let Some((index, action)) = selected {
            let member = &members[index];
            info!("Dispatching {action:?} for {}", member.row_key());
            match action {
                MemberAction::Remove => (self.on_remove_member)(member),
                MemberAction::ResendInvite => (self.on_resend_invite_member)(member),
            }
        }

        if self.loading {
            show_loading_overlay(ui, frame.response.rect);
        }

        frame.response
    }
}
