//! Organization members table.
//!
//! - `labels`: Accessible labels that automation harnesses query
//! - `state`: Open/closed state of the per-row actions menu
//! - `table`: The table widget and its header, rows and cells
//! - `menu`: Per-row actions popup
//! - `overlay`: Loading overlay drawn over the table

pub mod labels;
mod menu;
mod overlay;
mod state;
pub mod table;

pub use state::MembersTableState;
pub use table::MembersTable;
