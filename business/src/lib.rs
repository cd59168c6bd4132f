//! Business layer for the organization members view.
//!
//! UI code stays "dumb": it reads the types in this crate, asks
//! [`RowActions`] what a row may do, and renders. Everything here is pure and
//! independent of egui so it can be unit tested on its own.

mod config;
mod error;
mod member;
mod policy;
mod roster;

pub use config::{MembersConfig, RawConfig};
pub use error::{MembersError, Result};
pub use member::{CurrentUser, EntityId, Member, MemberRole, MemberStatus, MemberUser, RowKey};
pub use policy::{
    MemberAction, RowActions, RowStanding, can_remove, can_resend_invite, can_show_actions_menu,
};
pub use roster::Roster;
