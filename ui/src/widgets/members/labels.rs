//! Accessible labels exposed by the members table.
//!
//! These are the stable identifiers parent code and `egui_kittest` harnesses
//! look up. Each is registered only while its element is rendered.

use members_business::{MemberAction, RowKey};

/// Prefix of every row's actions trigger label.
pub const ACTIONS_TRIGGER: &str = "Member actions";

pub const REMOVE_MEMBER: &str = MemberAction::Remove.label();

pub const RESEND_INVITE: &str = MemberAction::ResendInvite.label();

pub const LOADING_OVERLAY: &str = "Loading members";

/// Label of the actions trigger of the row keyed by `key`.
#[inline]
pub fn actions_trigger(key: RowKey) -> String {
    format!("{ACTIONS_TRIGGER}: {key}")
}

/// Label of the row container itself, e.g. `member-row-2`.
#[inline]
pub fn member_row(key: RowKey) -> String {
    key.to_string()
}
