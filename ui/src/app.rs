use egui::{RichText, Ui};
use log::info;
use members_business::{Member, MembersConfig, Roster};

use crate::widgets::{MembersTable, MembersTableState};

/// Host page for the members table.
///
/// Plays the parent role: it owns the roster, reacts to the table's callbacks
/// and hands the (possibly changed) list back on the next frame. Network calls
/// a real page would make are out of scope, so callbacks update local state
/// and leave a notice.
#[derive(bon::Builder)]
pub struct MembersApp {
    roster: Roster,
    #[builder(default)]
    loading: bool,
    #[builder(default)]
    table_state: MembersTableState,
    notice: Option<String>,
}

impl MembersApp {
    /// Called once before the first frame.
    pub fn new(config: &MembersConfig, roster: Roster) -> Self {
        Self::builder()
            .roster(roster)
            .loading(config.initial_loading())
            .build()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Renders the page into `ui`.
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.heading("Members");

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.loading, "Simulate loading");
            ui.label(RichText::new(format!("{} members", self.roster.members.len())).weak());
        });

        if let Some(notice) = &self.notice {
            ui.label(notice);
        }

        ui.add_space(8.0);

        // Collect callbacks (avoiding borrow issues)
        let mut removed: Option<Member> = None;
        let mut resent: Option<Member> = None;

        MembersTable::new(
            &self.roster.members,
            &self.roster.current_user,
            |member| removed = Some(member.clone()),
            |member| resent = Some(member.clone()),
        )
        .loading(self.loading)
        .show(ui, &mut self.table_state);

        if let Some(member) = removed {
            self.remove_member(&member);
        }
        if let Some(member) = resent {
            self.resend_invite(&member);
        }
    }

    fn remove_member(&mut self, member: &Member) {
        if self.roster.remove_member(member.row_key()).is_some() {
            info!("Removed {} from the organization", member.row_key());
            self.notice = Some(format!("Removed {}", member.email()));
        }
    }

    fn resend_invite(&mut self, member: &Member) {
        info!("Re-sending invitation for {}", member.row_key());
        self.notice = Some(format!("Invitation re-sent to {}", member.email()));
    }
}

impl eframe::App for MembersApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
