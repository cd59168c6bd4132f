//! Transient UI state of the members table.

use log::debug;
use members_business::RowKey;

/// Which row, if any, has its actions menu open.
///
/// This is the only state the table owns. Membership data always comes from
/// the parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembersTableState {
    open_menu: Option<RowKey>,
}

impl MembersTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_menu(&self) -> Option<RowKey> {
        self.open_menu
    }

    pub fn is_menu_open(&self, key: RowKey) -> bool {
        self.open_menu == Some(key)
    }

    /// Opens the menu of `key`, or closes it when it is already open.
    /// Opening a row's menu replaces any other open menu.
    pub fn toggle_menu(&mut self, key: RowKey) {
        if self.is_menu_open(key) {
            debug!("Closing actions menu of {key}");
            self.open_menu = None;
        } else {
            debug!("Opening actions menu of {key}");
            self.open_menu = Some(key);
        }
    }

    pub fn close_menu(&mut self) {
        if let Some(key) = self.open_menu.take() {
            debug!("Closing actions menu of {key}");
        }
    }
}
