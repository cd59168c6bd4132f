//! Loading overlay for the members table.

use egui::{Rect, Sense, Spinner, Ui, Vec2, WidgetInfo, WidgetType};

use super::labels::LOADING_OVERLAY;

const SPINNER_SIZE: f32 = 24.0;

/// Opacity of the veil painted over the rows.
const VEIL_OPACITY: f32 = 0.7;

/// Covers `rect` with a veil and a spinner.
///
/// The overlay is registered after the rows, so it is the topmost widget over
/// the table and swallows clicks meant for the rows beneath it.
pub(crate) fn show_loading_overlay(ui: &mut Ui, rect: Rect) {
    let response = ui.interact(
        rect,
        ui.id().with("members_loading_overlay"),
        Sense::click_and_drag(),
    );
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, LOADING_OVERLAY));

    let veil = ui.visuals().extreme_bg_color.gamma_multiply(VEIL_OPACITY);
    ui.painter().rect_filled(rect, 0.0, veil);

    ui.put(
        Rect::from_center_size(rect.center(), Vec2::splat(SPINNER_SIZE)),
        Spinner::new().size(SPINNER_SIZE),
    );
}
