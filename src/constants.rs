// Round structure constants
pub const RESTRICTED_CORRIDORS_PER_ROUND: usize = 2;

// Announcement spacing constants
pub const MAX_USES_PER_CORRIDOR: usize = 2;
pub const MIN_DISTINCT_BEFORE_REPEAT: usize = 4;
pub const RECENT_CORRIDOR_WINDOW: usize = 4;
