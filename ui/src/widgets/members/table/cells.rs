//! Cell rendering functions for the members table.

use egui::{
    Align2, FontId, Response, RichText, Sense, Stroke, Ui, Vec2, WidgetInfo, WidgetType, vec2,
};
use members_business::{Member, MemberRole, MemberStatus, RowKey};

use super::columns::{MARKER_WIDTH, ROW_HEIGHT, TRIGGER_SIZE};
use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN};
use crate::widgets::members::labels;

/// Renders the row marker: a left border that also carries the row key as
/// its accessible label.
#[inline]
pub fn render_row_marker(ui: &mut Ui, key: RowKey) {
    let (rect, response) = ui.allocate_exact_size(vec2(MARKER_WIDTH, ROW_HEIGHT), Sense::hover());
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, labels::member_row(key)));

    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().vline(
        rect.left(),
        rect.top()..=rect.bottom(),
        Stroke::new(2.0, border_color),
    );
}

/// Renders the display name (when known) above the email.
///
/// A member without an email gets an empty label rather than a placeholder.
#[inline]
pub fn render_member_cell(ui: &mut Ui, member: &Member) {
    ui.vertical(|ui| {
        if let Some(name) = member.display_name() {
            ui.label(RichText::new(name).strong());
        }
        ui.label(member.email());
    });
}

#[inline]
pub fn render_roles_cell(ui: &mut Ui, roles: &[MemberRole]) {
    let text = roles
        .iter()
        .map(|role| role.label())
        .collect::<Vec<_>>()
        .join(", ");
    ui.label(text);
}

/// Renders the invite status badge.
///
/// Colors:
/// - Amber: invitation pending
/// - Green: active member
#[inline]
pub fn render_status_cell(ui: &mut Ui, status: Option<MemberStatus>) {
    match status {
        Some(MemberStatus::Invited) => {
            ui.label(RichText::new("Invite pending").color(COLOR_AMBER));
        }
        Some(MemberStatus::Active) => {
            ui.label(RichText::new("Active").color(COLOR_GREEN));
        }
        Some(MemberStatus::New) => {
            ui.label(RichText::new("New").weak());
        }
        None => {
            ui.label("");
        }
    }
}

/// Renders the actions trigger of a row.
///
/// Painted by hand so its accessible label can carry the row key while the
/// visible glyph stays short.
#[inline]
pub fn render_actions_trigger(ui: &mut Ui, key: RowKey, is_open: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(TRIGGER_SIZE), Sense::click());
    response.widget_info(|| {
        WidgetInfo::labeled(
            WidgetType::Button,
            ui.is_enabled(),
            labels::actions_trigger(key),
        )
    });

    if ui.is_rect_visible(rect) {
        let visuals = if is_open {
            &ui.visuals().widgets.open
        } else {
            ui.style().interact(&response)
        };
        ui.painter()
            .rect_filled(rect, visuals.corner_radius, visuals.bg_fill);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "…",
            FontId::proportional(16.0),
            visuals.text_color(),
        );
    }

    response
}

/// Renders the placeholder row of an empty table.
#[inline]
pub fn render_empty_row(ui: &mut Ui) {
    ui.label("");
    ui.label(RichText::new("No members yet").weak());
    ui.end_row();
}
