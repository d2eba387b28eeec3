//! Room cell types
//!
//! One `Room` per grid cell, holding everything the room table encodes.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{HUB_AREA, WALL_AREA};

/// Room type, numbered as the ROM distinguishes them
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum RoomType {
    #[default]
    Normal = 0,
    Save = 1,
    Corridor = 2,
    Text = 3,
    MultiShop = 4,
    SingleShop = 5,
    Miniboss = 6,
    Item = 7,
}

impl RoomType {
    /// Special non-combat rooms that may anchor portal-only connections
    pub const fn is_portal_eligible(&self) -> bool {
        matches!(
            self,
            RoomType::Save
                | RoomType::Corridor
                | RoomType::Text
                | RoomType::MultiShop
                | RoomType::SingleShop
        )
    }

    /// Rooms that can hold an enemy group
    pub const fn can_have_enemies(&self) -> bool {
        matches!(self, RoomType::Normal | RoomType::Item)
    }
}

bitflags! {
    /// Room exit flags, in the ROM's nibble order (Down Right Left Up)
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Exits: u8 {
        const DOWN = 0b0001;
        const RIGHT = 0b0010;
        const LEFT = 0b0100;
        const UP = 0b1000;
    }
}

// Manual serde impl for Exits
impl Serialize for Exits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Exits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Exits::from_bits_truncate(bits))
    }
}

/// Cardinal direction on the grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in exit-bit order (DOWN, RIGHT, LEFT, UP)
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Left,
        Direction::Up,
    ];

    /// Inspection order for neighbour scans
    pub const SCAN: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The exit bit for leaving a room in this direction
    pub const fn exit(&self) -> Exits {
        match self {
            Direction::Up => Exits::UP,
            Direction::Down => Exits::DOWN,
            Direction::Left => Exits::LEFT,
            Direction::Right => Exits::RIGHT,
        }
    }

    /// Row and column offsets
    pub const fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Area 0..=10, or negative for wall/void
    pub area: i8,
    pub accessible: bool,
    /// One of the two tiles of an area-to-hub seam
    pub is_entrance: bool,
    pub exits: Exits,
    /// Hub ring room kept free of ordinary content
    pub avoid_special: bool,
    pub room_type: RoomType,
    /// Decorative block layout, `None` when undecorated
    pub block_set: Option<u16>,
    /// Block layout carries chip boxes
    pub has_chip_tile: bool,
    /// Corridor / shop / text / miniboss / item id depending on `room_type`
    pub content_id: u8,
    /// 0 for no enemies, otherwise 1..=47
    pub enemy_group: u8,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            area: WALL_AREA,
            accessible: false,
            is_entrance: false,
            exits: Exits::empty(),
            avoid_special: false,
            room_type: RoomType::Normal,
            block_set: None,
            has_chip_tile: false,
            content_id: 0,
            enemy_group: 0,
        }
    }
}

impl Room {
    /// Create an untouched room belonging to `area`
    pub fn in_area(area: i8) -> Self {
        Self {
            area,
            ..Self::default()
        }
    }

    pub const fn is_wall(&self) -> bool {
        self.area < 0
    }

    pub const fn is_hub(&self) -> bool {
        self.area == HUB_AREA
    }

    pub fn has_exit(&self, dir: Direction) -> bool {
        self.exits.contains(dir.exit())
    }

    /// Accessible, still Normal and undecorated
    pub fn is_plain(&self) -> bool {
        self.accessible && self.room_type == RoomType::Normal && self.block_set.is_none()
    }

    /// Number of bytes this room occupies in the room table
    pub fn byte_len(&self) -> usize {
        if !self.accessible {
            return 1;
        }
        match self.room_type {
            RoomType::Save | RoomType::Corridor => 3,
            RoomType::Text | RoomType::MultiShop | RoomType::SingleShop | RoomType::Miniboss => 4,
            RoomType::Normal | RoomType::Item => {
                let mut len = 3;
                if self.room_type == RoomType::Item {
                    len += 1;
                }
                if self.block_set.is_some() || self.room_type == RoomType::Item {
                    len += 2;
                }
                if self.enemy_group != 0 {
                    len += 1;
                }
                len
            }
        }
    }

    /// Multi-line description for diagnostics
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str(if self.accessible {
            "Accessible\n"
        } else {
            "Inaccessible\n"
        });
        out.push_str(&format!("Area: {}\n", self.area));
        out.push_str(&format!("Room Type: {}\n", self.room_type));
        if self.is_entrance {
            out.push_str("Area starting point\n");
        }
        if self.avoid_special {
            out.push_str("Avoid Special\n");
        }
        if self.has_chip_tile {
            out.push_str("Has chips\n");
        }
        out.push_str(&format!("Content ID: {}\n", self.content_id));
        match self.block_set {
            Some(set) => out.push_str(&format!("Block set: {:#06X}\n", set)),
            None => out.push_str("Block set: none\n"),
        }
        out.push_str(&format!("Enemy type: {}\n", self.enemy_group));
        let letters: String = [
            (Direction::Up, 'U'),
            (Direction::Down, 'D'),
            (Direction::Left, 'L'),
            (Direction::Right, 'R'),
        ]
        .iter()
        .filter(|(dir, _)| self.has_exit(*dir))
        .map(|(_, c)| *c)
        .collect();
        out.push_str(&format!("Room exits: {} {:#06b}\n", letters, self.exits.bits()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_portal_eligible_types() {
        let eligible: Vec<RoomType> = RoomType::iter().filter(|t| t.is_portal_eligible()).collect();
        assert_eq!(eligible.len(), 5);
        assert!(eligible.iter().all(|t| (1..=5).contains(&(*t as u8))));
    }

    #[test]
    fn test_direction_opposites() {
        for dir in Direction::iter() {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.exit(), dir.opposite().exit());
        }
    }

    #[test]
    fn test_exit_nibble_order() {
        let bits: Vec<u8> = Direction::ALL.iter().map(|d| d.exit().bits()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8]);
    }

    #[test]
    fn test_byte_len() {
        let mut room = Room::in_area(3);
        assert_eq!(room.byte_len(), 1);

        room.accessible = true;
        assert_eq!(room.byte_len(), 3);
        room.enemy_group = 5;
        assert_eq!(room.byte_len(), 4);
        room.block_set = Some(0x6894);
        assert_eq!(room.byte_len(), 6);

        room.room_type = RoomType::Save;
        assert_eq!(room.byte_len(), 3);
        room.room_type = RoomType::Miniboss;
        assert_eq!(room.byte_len(), 4);

        room.room_type = RoomType::Item;
        room.enemy_group = 0;
        assert_eq!(room.byte_len(), 6);
        room.enemy_group = 1;
        assert_eq!(room.byte_len(), 7);
    }

    #[test]
    fn test_exits_serde_roundtrip_bits() {
        let exits = Exits::UP | Exits::LEFT;
        let json = serde_json::to_string(&exits).unwrap();
        assert_eq!(json, "12");
    }

    #[test]
    fn test_describe_mentions_exits() {
        let mut room = Room::in_area(0);
        room.accessible = true;
        room.exits = Exits::UP | Exits::RIGHT;
        let text = room.describe();
        assert!(text.contains("Room exits: UR"));
        assert!(text.contains("Block set: none"));
    }
}
