//! Size constants for the members table.

/// Number of grid columns: marker, member, roles, status, actions.
pub const COLUMN_COUNT: usize = 5;
pub const MIN_COL_WIDTH: f32 = 60.0;
pub const MARKER_WIDTH: f32 = 4.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const TRIGGER_SIZE: f32 = 24.0;
