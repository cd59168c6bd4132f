//! Table header rendering for the members table.

use egui::Ui;

use super::header_cell;

/// Header column labels. The first column holds the row marker, the last one
/// the actions trigger.
pub const HEADERS: [&str; 5] = ["", "Member", "Roles", "Status", ""];

/// Renders the header row with bold labels.
#[inline]
pub fn render_table_header(ui: &mut Ui) {
    for label in HEADERS {
        header_cell(ui, |ui| {
            ui.strong(label);
        });
    }
    ui.end_row();
}
