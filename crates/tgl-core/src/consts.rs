//! Core map constants
//!
//! These mirror the layout of the room table in the game ROM.

/// Map dimensions
pub const MAP_ROWS: usize = 24;
pub const MAP_COLS: usize = 24;

/// Area numbering
pub const HUB_AREA: i8 = 0;
pub const WALL_AREA: i8 = -1;
pub const AREA_COUNT: usize = 11;
pub const PERIPHERAL_AREAS: usize = 10;

/// Room table budget in ROM, excluding the terminator
pub const MAX_ROOM_BYTES: usize = 1916;

/// Room table byte values
pub const INACCESSIBLE_ROOM_BYTE: u8 = 0x80;
pub const TABLE_TERMINATOR: u8 = 0x00;

/// Highest enemy group id (groups are 1..=MAX_ENEMY_GROUP, 0 means none)
pub const MAX_ENEMY_GROUP: u8 = 47;

/// Fixed hub room holding text page 0, the player's first intersection
pub const STARTING_TEXT_ROOM: (usize, usize) = (12, 11);

/// Corridor ids with special handling
pub const FIRST_CORRIDOR: u8 = 1;
pub const AREA_ONE_CORRIDOR: u8 = 11;
pub const FINAL_CORRIDOR: u8 = 21;
