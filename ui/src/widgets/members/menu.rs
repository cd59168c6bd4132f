//! Per-row actions popup.

use egui::{Area, Button, Frame, Id, Order, Response, RichText, Ui};
use members_business::{MemberAction, RowActions};

use crate::utils::colors::COLOR_RED;

const MENU_MIN_WIDTH: f32 = 140.0;

/// What happened to an open menu during this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuOutcome {
    pub selected: Option<MemberAction>,
    /// The pointer was clicked somewhere outside the menu.
    pub clicked_elsewhere: bool,
}

/// Shows the actions menu of the row at `index` below its trigger.
///
/// Only the entries allowed by `actions` are added; hidden entries are never
/// registered, so they cannot be found by label.
pub(crate) fn show_actions_menu(
    ui: &Ui,
    index: usize,
    trigger: &Response,
    actions: &RowActions,
) -> MenuOutcome {
    let area = Area::new(Id::new("members_table_actions_menu").with(index))
        .order(Order::Foreground)
        .fixed_pos(trigger.rect.left_bottom())
        .show(ui.ctx(), |ui| {
            Frame::menu(ui.style())
                .show(ui, |ui| {
                    ui.set_min_width(MENU_MIN_WIDTH);
                    let mut selected = None;
                    for action in actions.entries() {
                        if render_entry(ui, action).clicked() {
                            selected = Some(action);
                        }
                    }
                    selected
                })
                .inner
        });

    MenuOutcome {
        selected: area.inner,
        clicked_elsewhere: area.response.clicked_elsewhere(),
    }
}

#[inline]
fn render_entry(ui: &mut Ui, action: MemberAction) -> Response {
    let text = match action {
        MemberAction::Remove => RichText::new(action.label()).color(COLOR_RED),
        MemberAction::ResendInvite => RichText::new(action.label()),
    };
    ui.add(Button::new(text).frame(false))
}
