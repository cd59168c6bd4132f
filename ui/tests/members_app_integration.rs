//! Integration tests for the members demo page.
//!
//! The page plays the parent role: these tests verify that callbacks coming out
//! of the table change the roster the page hands back on the next frame.

use egui_kittest::Harness;
use kittest::Queryable;
use members_business::{MembersConfig, RawConfig, Roster};
use members_ui::MembersApp;
use members_ui::widgets::labels::{
    LOADING_OVERLAY, REMOVE_MEMBER, RESEND_INVITE, actions_trigger,
};

const SETTLE_FRAMES: usize = 4;

fn mount_app(app: MembersApp) -> Harness<'static, MembersApp> {
    let _ = env_logger::builder().is_test(true).try_init();
    Harness::new_ui_state(|ui, app: &mut MembersApp| app.ui(ui), app)
}

fn settle(harness: &mut Harness<'_, MembersApp>) {
    for _ in 0..SETTLE_FRAMES {
        harness.step();
    }
}

#[test]
fn test_remove_drops_member_from_roster() {
    let roster = Roster::sample();
    let target = roster.members[1].clone();
    let mut harness = mount_app(MembersApp::builder().roster(roster).build());

    harness.get_by_label(&actions_trigger(target.row_key())).click();
    settle(&mut harness);
    harness.get_by_label(REMOVE_MEMBER).click();
    settle(&mut harness);

    let app = harness.state();
    assert!(app.roster().find(target.row_key()).is_none());
    assert_eq!(app.roster().members.len(), 3);
    assert_eq!(app.notice(), Some("Removed admin@example.com"));
    assert!(harness.query_by_label("admin@example.com").is_none());
}

#[test]
fn test_resend_invite_keeps_member() {
    let roster = Roster::sample();
    let invited = roster
        .members
        .iter()
        .find(|m| m.is_invited())
        .cloned()
        .expect("sample roster has a pending invite");
    let mut harness = mount_app(MembersApp::builder().roster(roster).build());

    harness.get_by_label(&actions_trigger(invited.row_key())).click();
    settle(&mut harness);
    harness.get_by_label(RESEND_INVITE).click();
    settle(&mut harness);

    let app = harness.state();
    assert_eq!(app.roster().members.len(), 4);
    assert_eq!(
        app.notice(),
        Some("Invitation re-sent to pending@example.com")
    );
}

#[test]
fn test_sample_roster_hides_own_and_member_rows() {
    let roster = Roster::sample();
    let keys: Vec<_> = roster.members.iter().map(|m| m.row_key()).collect();
    let harness = mount_app(MembersApp::builder().roster(roster).build());

    // Viewer's own row and the plain member row are not actionable
    assert!(harness.query_by_label(&actions_trigger(keys[0])).is_none());
    assert!(harness.query_by_label(&actions_trigger(keys[1])).is_some());
    assert!(harness.query_by_label(&actions_trigger(keys[2])).is_some());
    assert!(harness.query_by_label(&actions_trigger(keys[3])).is_none());
}

#[test]
fn test_loading_checkbox_toggles_overlay() {
    let mut harness = mount_app(MembersApp::builder().roster(Roster::sample()).build());
    assert!(harness.query_by_label(LOADING_OVERLAY).is_none());

    harness.get_by_label("Simulate loading").click();
    harness.step();
    harness.step();

    assert!(harness.state().is_loading());
    assert!(harness.query_by_label(LOADING_OVERLAY).is_some());
}

#[test]
fn test_app_from_config_starts_loading() {
    let config = MembersConfig::from_raw(RawConfig {
        members_file: None,
        members_loading: Some(true),
    })
    .expect("config should build");
    let roster = config.roster().expect("sample roster");

    let app = MembersApp::new(&config, roster);
    assert!(app.is_loading());
    assert!(app.notice().is_none());
}
