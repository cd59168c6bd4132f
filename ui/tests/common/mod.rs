use egui_kittest::Harness;
use members_business::{CurrentUser, EntityId, Member, MemberRole, MemberStatus, MemberUser};
use members_ui::widgets::{MembersTable, MembersTableState};

/// Frames to run after an interaction so popups finish their sizing pass.
pub const SETTLE_FRAMES: usize = 4;

/// Parent-side state for a mounted members table.
///
/// Plays the role of the spies: every callback invocation is recorded with
/// the member it was called with.
pub struct TableFixture {
    pub members: Vec<Member>,
    pub current_user: CurrentUser,
    pub loading: bool,
    pub table_state: MembersTableState,
    pub removed: Vec<Member>,
    pub resent: Vec<Member>,
}

impl TableFixture {
    pub fn new(members: Vec<Member>, current_user: CurrentUser) -> Self {
        Self {
            members,
            current_user,
            loading: false,
            table_state: MembersTableState::new(),
            removed: Vec::new(),
            resent: Vec::new(),
        }
    }

    #[allow(unused)]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Mounts the members table over `fixture`.
pub fn mount(fixture: TableFixture) -> Harness<'static, TableFixture> {
    let _ = env_logger::builder().is_test(true).try_init();

    Harness::new_ui_state(
        |ui, fixture: &mut TableFixture| {
            MembersTable::new(
                &fixture.members,
                &fixture.current_user,
                |member| fixture.removed.push(member.clone()),
                |member| fixture.resent.push(member.clone()),
            )
            .loading(fixture.loading)
            .show(ui, &mut fixture.table_state);
        },
        fixture,
    )
}

/// Runs a fixed number of frames. Spinners request repaints forever, so
/// `Harness::run` is not usable while the overlay is shown.
pub fn settle(harness: &mut Harness<'_, TableFixture>) {
    for _ in 0..SETTLE_FRAMES {
        harness.step();
    }
}

/// Builds a member the way the parent page's payloads look.
pub fn member(id: Option<u64>, user_id: u64, email: &str, roles: Vec<MemberRole>) -> Member {
    Member {
        id: id.map(EntityId::from),
        user_id: EntityId::from(user_id),
        user: Some(MemberUser {
            email: Some(email.to_owned()),
            ..MemberUser::default()
        }),
        roles,
        member_status: None,
    }
}

#[allow(unused)]
pub fn with_status(mut member: Member, status: MemberStatus) -> Member {
    member.member_status = Some(status);
    member
}

pub fn viewer(id: u64) -> CurrentUser {
    CurrentUser::new(id)
}
