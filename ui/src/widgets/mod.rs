pub mod members;

pub use members::labels;
pub use members::{MembersTable, MembersTableState};
