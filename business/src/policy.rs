//! Row action policy for the members table.
//!
//! Decides, for a `(member, current_user)` pair, which actions a row exposes.
//! The decision is made over a closed set of row standings instead of ad hoc
//! checks in the renderer, so the view only asks [`RowActions`] and draws.
//!
//! Authorization of the *acting* user is enforced upstream; this policy only
//! protects against acting on one's own row and on rows with no elevated role.

use crate::member::{CurrentUser, Member};

/// Actions a row's menu can dispatch to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberAction {
    Remove,
    ResendInvite,
}

impl MemberAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remove => "Remove member",
            Self::ResendInvite => "Resend invite",
        }
    }
}

/// How a row relates to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStanding {
    /// The viewer's own membership.
    OwnRow,
    /// No roles at all.
    Roleless,
    /// Roles present, none of them elevated.
    Unprivileged,
    /// Someone else holding an elevated role.
    Manageable,
}

impl RowStanding {
    pub fn of(member: &Member, current_user: &CurrentUser) -> Self {
        if is_own_row(member, current_user) {
            Self::OwnRow
        } else if member.roles.is_empty() {
            Self::Roleless
        } else if !member.has_elevated_role() {
            Self::Unprivileged
        } else {
            Self::Manageable
        }
    }

    #[inline]
    pub const fn is_manageable(self) -> bool {
        matches!(self, Self::Manageable)
    }
}

/// Compares the membership id with the viewer id. When a record carries no
/// membership id the user id is compared instead, which keeps an id-less
/// record of the viewer from becoming actionable.
#[inline]
fn is_own_row(member: &Member, current_user: &CurrentUser) -> bool {
    match member.id {
        Some(id) => id == current_user.id,
        None => member.user_id == current_user.id,
    }
}

/// Whether the row renders an actions trigger at all.
#[inline]
pub fn can_show_actions_menu(member: &Member, current_user: &CurrentUser) -> bool {
    RowStanding::of(member, current_user).is_manageable()
}

/// Only pending invitations can be resent. A missing status is not resendable.
#[inline]
pub fn can_resend_invite(member: &Member) -> bool {
    member.is_invited()
}

/// Removal mirrors menu visibility: never one's own row, never a row without
/// an elevated role.
#[inline]
pub fn can_remove(member: &Member, current_user: &CurrentUser) -> bool {
    can_show_actions_menu(member, current_user)
}

/// Per-row visibility flags, re-derived every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub standing: RowStanding,
    pub show_menu: bool,
    pub remove: bool,
    pub resend_invite: bool,
}

impl RowActions {
    pub fn evaluate(member: &Member, current_user: &CurrentUser) -> Self {
        let standing = RowStanding::of(member, current_user);
        let show_menu = standing.is_manageable();

        Self {
            standing,
            show_menu,
            remove: show_menu && can_remove(member, current_user),
            resend_invite: show_menu && can_resend_invite(member),
        }
    }

    /// Menu entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = MemberAction> {
        let remove = self.remove.then_some(MemberAction::Remove);
        let resend = self.resend_invite.then_some(MemberAction::ResendInvite);
        remove.into_iter().chain(resend)
    }
}
