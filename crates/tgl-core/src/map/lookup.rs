//! Generic room names to randomized positions
//!
//! Logic and hint layers refer to rooms by stable generic names such as
//! "A4 Ground Item B". After generation every such name resolves to a grid
//! position and the vanilla location name of the content placed there.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::FIRST_CORRIDOR;

use super::grid::Grid;
use super::room::RoomType;
use super::tables::ContentKind::{Corridor, GroundItem, Miniboss, MultiShop, SingleShop};
use super::tables::{ContentKind, ContentTables};

/// Stable name of a content slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenericRoom {
    pub area: u8,
    pub kind: ContentKind,
    /// 'A' for the first entry of the area's manifest, 'B' for the second...
    pub slot: char,
}

impl GenericRoom {
    pub fn new(area: u8, kind: ContentKind, index: usize) -> Self {
        let slot = u8::try_from(index)
            .ok()
            .and_then(|i| b'A'.checked_add(i))
            .map_or('?', char::from);
        Self { area, kind, slot }
    }
}

fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::GroundItem => "Ground Item",
        ContentKind::Miniboss => "Miniboss",
        ContentKind::Corridor => "Corridor",
        ContentKind::SingleShop => "Single Shop",
        ContentKind::MultiShop => "Multi Shop",
        ContentKind::SaveRoom => "Save Room",
        ContentKind::TextRoom => "Text Room",
        ContentKind::ChipRefill => "Chip Refill",
    }
}

impl fmt::Display for GenericRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{} {} {}", self.area, kind_label(self.kind), self.slot)
    }
}

/// Where a generic room ended up
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoomPlacement {
    pub location: String,
    pub row: usize,
    pub col: usize,
    pub content_id: u8,
}

/// Location names of the unrandomized game, by content
const VANILLA_LOCATIONS: &[(ContentKind, u8, &str)] = &[
    (GroundItem, 0x35, "A0 (X12 Y12)"),
    (GroundItem, 0x39, "A0 (X9 Y14)"),
    (GroundItem, 0x05, "A0 (X8 Y11)"),
    (GroundItem, 0x21, "A0 (X8 Y9)"),
    (GroundItem, 0x24, "A1 (X3 Y10)"),
    (GroundItem, 0x23, "A1 (X4 Y12)"),
    (GroundItem, 0x26, "A1 (X0 Y9)"),
    (GroundItem, 0x36, "A2 (X2 Y17)"),
    (GroundItem, 0x25, "A2 (X3 Y14)"),
    (GroundItem, 0x27, "A3 (X0 Y22)"),
    (GroundItem, 0x28, "A3 (X6 Y22)"),
    (GroundItem, 0x29, "A4 (X19 Y6)"),
    (GroundItem, 0x2A, "A4 (X17 Y2)"),
    (GroundItem, 0x37, "A4 (X16 Y0)"),
    (GroundItem, 0x01, "A5 (X23 Y8)"),
    (GroundItem, 0x2B, "A5 (X23 Y6)"),
    (GroundItem, 0x2C, "A5 (X23 Y3)"),
    (GroundItem, 0x2D, "A6 (X18 Y12)"),
    (GroundItem, 0x2E, "A6 (X20 Y10)"),
    (GroundItem, 0x02, "A6 (X21 Y13)"),
    (GroundItem, 0x0A, "A6 (X16 Y12)"),
    (GroundItem, 0x03, "A7 (X17 Y23)"),
    (GroundItem, 0x30, "A7 (X22 Y23)"),
    (GroundItem, 0x2F, "A7 (X19 Y19)"),
    (GroundItem, 0x31, "A8 (X10 Y18)"),
    (GroundItem, 0x32, "A8 (X14 Y20)"),
    (GroundItem, 0x04, "A8 (X12 Y23)"),
    (GroundItem, 0x38, "A8 (X9 Y19)"),
    (GroundItem, 0x33, "A9 (X3 Y6)"),
    (GroundItem, 0x34, "A9 (X3 Y3)"),
    (GroundItem, 0x06, "A9 (X6 Y3)"),
    (GroundItem, 0x07, "A9 (X0 Y3)"),
    (GroundItem, 0x08, "A9 (X1 Y0)"),
    (GroundItem, 0x09, "A10 (X12 Y4)"),
    (Miniboss, 0x0B, "A0 Crab Walker (X8 Y13)"),
    (Miniboss, 0x0C, "A0 Headcrawler (X14 Y9)"),
    (Miniboss, 0x0D, "A1 Claw Launcher (X4 Y11)"),
    (Miniboss, 0x0E, "A1 Crab Walker (X0 Y6)"),
    (Miniboss, 0x0F, "A2 Claw Launcher (X5 Y17)"),
    (Miniboss, 0x10, "A2 Crab Walker (X1 Y14)"),
    (Miniboss, 0x11, "A3 HeadCrawler (X1 Y20)"),
    (Miniboss, 0x12, "A3 Leech Flower (X6 Y23)"),
    (Miniboss, 0x13, "A4 Crab Walker (X16 Y3)"),
    (Miniboss, 0x14, "A4 Leech Flower (X18 Y1)"),
    (Miniboss, 0x15, "A5 Crab Walker (X19 Y8)"),
    (Miniboss, 0x16, "A5 Crystal Chaser (X21 Y4)"),
    (Miniboss, 0x17, "A6 Headcrawler (X18 Y10)"),
    (Miniboss, 0x18, "A6 Claw Launcher (X17 Y16)"),
    (Miniboss, 0x19, "A7 Headcrawler (X16 Y18)"),
    (Miniboss, 0x1A, "A7 Claw Launcher (X22 Y20)"),
    (Miniboss, 0x1B, "A8 Leech Flower (X12 Y18)"),
    (Miniboss, 0x1C, "A8 Crab Walker (X12 Y22)"),
    (Miniboss, 0x1D, "A9 Crab Walker (X5 Y3)"),
    (Miniboss, 0x1E, "A9 Headcrawler (X2 Y0)"),
    (Miniboss, 0x1F, "A10 Dino Skull (X11 Y3)"),
    (Miniboss, 0x20, "A10 Glider (X12 Y0)"),
    (Corridor, 1, "A0 Corridor 1 (X6 Y10)"),
    (Corridor, 2, "A2 Corridor 2 (X2 Y16)"),
    (Corridor, 3, "A3 Corridor 3 (X4 Y20)"),
    (Corridor, 4, "A4 Corridor 4 (X20 Y0)"),
    (Corridor, 5, "A5 Corridor 5 (X23 Y4)"),
    (Corridor, 6, "A6 Corridor 6 (X16 Y11)"),
    (Corridor, 7, "A7 Corridor 7 (X19 Y23)"),
    (Corridor, 8, "A8 Corridor 8 (X10 Y16)"),
    (Corridor, 9, "A9 Corridor 9 (X2 Y2)"),
    (Corridor, 10, "A10 Corridor 10 (X11 Y0)"),
    (Corridor, 11, "A1 Corridor 11 (X1 Y8)"),
    (Corridor, 12, "A2 Corridor 12 (X4 Y15)"),
    (Corridor, 13, "A3 Corridor 13 (X5 Y20)"),
    (Corridor, 14, "A4 Corridor 14 (X17 Y4)"),
    (Corridor, 15, "A5 Corridor 15 (X21 Y8)"),
    (Corridor, 16, "A6 Corridor 16 (X18 Y13)"),
    (Corridor, 17, "A7 Corridor 17 (X18 Y19)"),
    (Corridor, 18, "A8 Corridor 18 (X11 Y19)"),
    (Corridor, 19, "A9 Corridor 19 (X4 Y4)"),
    (Corridor, 20, "A10 Corridor 20 (X11 Y5)"),
    (SingleShop, 0x3A, "A0 50 Chip Shop (X13 Y11)"),
    (SingleShop, 0x3B, "A0 100 Chip Shop (X13 Y10)"),
    (SingleShop, 0x3C, "A0 150 Chip Shop (X12 Y10)"),
    (SingleShop, 0x3D, "A0 500 Chip Shop (X10 Y10)"),
    (SingleShop, 0x3E, "A0 300 Chip Shop (X10 Y11)"),
    (MultiShop, 0x3F, "A2 150 Chip Shop A (X1 Y18)"),
    (MultiShop, 0x40, "A7 1000 Chip Shop A (X23 Y21)"),
    (MultiShop, 0x41, "A4 400 Chip Shop A (X18 Y0)"),
    (MultiShop, 0x42, "A7 600 Chip Shop A (X15 Y12)"),
    (MultiShop, 0x43, "A10 2000 Chip Shop A (X12 Y5)"),
];

/// Vanilla location name of a piece of content, if it has one
pub fn vanilla_location(kind: ContentKind, content_id: u8) -> Option<&'static str> {
    VANILLA_LOCATIONS
        .iter()
        .find(|&&(k, id, _)| k == kind && id == content_id)
        .map(|&(_, _, name)| name)
}

impl RoomPlacement {
    /// Content without a vanilla location (the final corridor, custom tables)
    /// is named after its new area and coordinates
    fn new(area: u8, kind: ContentKind, row: usize, col: usize, content_id: u8) -> Self {
        let location = vanilla_location(kind, content_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("A{} (X{} Y{})", area, col, row));
        Self {
            location,
            row,
            col,
            content_id,
        }
    }
}

/// Lookup table from generic names to placements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomLookup {
    rooms: BTreeMap<GenericRoom, RoomPlacement>,
}

// Serialize with display names as keys, so JSON consumers get plain strings
impl Serialize for RoomLookup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.rooms.len()))?;
        for (room, placement) in &self.rooms {
            map.serialize_entry(&room.to_string(), placement)?;
        }
        map.end()
    }
}

/// Manifest order of content ids of one kind in one area
fn manifest(tables: &ContentTables, area: u8, kind: ContentKind) -> Vec<u8> {
    match kind {
        ContentKind::GroundItem => tables.items_for(area).to_vec(),
        ContentKind::Miniboss => ContentTables::minibosses_for(area).to_vec(),
        ContentKind::Corridor if area == 1 => {
            let mut ids = vec![FIRST_CORRIDOR];
            ids.extend(ContentTables::corridors_for(area));
            ids
        }
        ContentKind::Corridor => ContentTables::corridors_for(area),
        ContentKind::SingleShop if area == 0 => tables.single_shops.clone(),
        ContentKind::MultiShop => tables.multi_shops_for(area),
        _ => Vec::new(),
    }
}

fn kind_of(room_type: RoomType) -> Option<ContentKind> {
    match room_type {
        RoomType::Item => Some(ContentKind::GroundItem),
        RoomType::Miniboss => Some(ContentKind::Miniboss),
        RoomType::Corridor => Some(ContentKind::Corridor),
        RoomType::SingleShop => Some(ContentKind::SingleShop),
        RoomType::MultiShop => Some(ContentKind::MultiShop),
        _ => None,
    }
}

impl RoomLookup {
    /// Collect every manifest-tracked room of a finished grid
    pub fn from_grid(grid: &Grid, tables: &ContentTables) -> Self {
        let mut rooms = BTreeMap::new();
        for (pos, room) in grid.iter() {
            if !room.accessible {
                continue;
            }
            let (Ok(area), Some(kind)) = (u8::try_from(room.area), kind_of(room.room_type)) else {
                continue;
            };
            let ids = manifest(tables, area, kind);
            if let Some(index) = ids.iter().position(|&id| id == room.content_id) {
                rooms.insert(
                    GenericRoom::new(area, kind, index),
                    RoomPlacement::new(area, kind, pos.row, pos.col, room.content_id),
                );
            }
        }
        Self { rooms }
    }

    pub fn get(&self, room: &GenericRoom) -> Option<&RoomPlacement> {
        self.rooms.get(room)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GenericRoom, &RoomPlacement)> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::grid::Pos;
    use crate::{MAP_COLS, MAP_ROWS};

    #[test]
    fn test_generic_room_display() {
        let room = GenericRoom::new(4, ContentKind::GroundItem, 1);
        assert_eq!(room.to_string(), "A4 Ground Item B");
        assert_eq!(
            GenericRoom::new(0, ContentKind::SingleShop, 0).to_string(),
            "A0 Single Shop A"
        );
    }

    #[test]
    fn test_from_grid_slots_follow_manifest() {
        let mut grid = Grid::from_areas(&[[4; MAP_COLS]; MAP_ROWS]);
        let tables = ContentTables::default();
        // Area 4 items are 0x29, 0x2A, 0x37
        for (pos, id) in [(Pos::new(2, 3), 0x37u8), (Pos::new(5, 1), 0x29)] {
            let room = grid.room_mut(pos);
            room.accessible = true;
            room.room_type = RoomType::Item;
            room.content_id = id;
        }
        {
            let shop = grid.room_mut(Pos::new(7, 7));
            shop.accessible = true;
            shop.room_type = RoomType::MultiShop;
            shop.content_id = 0x41;
        }

        let lookup = RoomLookup::from_grid(&grid, &tables);
        assert_eq!(lookup.len(), 3);

        let third = lookup
            .get(&GenericRoom::new(4, ContentKind::GroundItem, 2))
            .unwrap();
        assert_eq!((third.row, third.col), (2, 3));
        assert_eq!(third.location, "A4 (X16 Y0)");

        let first = lookup
            .get(&GenericRoom::new(4, ContentKind::GroundItem, 0))
            .unwrap();
        assert_eq!(first.content_id, 0x29);
        assert!(
            lookup
                .get(&GenericRoom::new(4, ContentKind::MultiShop, 0))
                .is_some()
        );
    }

    #[test]
    fn test_first_corridor_is_slot_a() {
        let mut grid = Grid::from_areas(&[[1; MAP_COLS]; MAP_ROWS]);
        let room = grid.room_mut(Pos::new(0, 0));
        room.accessible = true;
        room.room_type = RoomType::Corridor;
        room.content_id = 1;
        let lookup = RoomLookup::from_grid(&grid, &ContentTables::default());
        assert!(
            lookup
                .get(&GenericRoom::new(1, ContentKind::Corridor, 0))
                .is_some()
        );
    }

    #[test]
    fn test_every_default_content_has_a_vanilla_name() {
        let tables = ContentTables::default();
        for area in 0..crate::AREA_COUNT as u8 {
            for kind in [GroundItem, Miniboss, Corridor, SingleShop, MultiShop] {
                for id in manifest(&tables, area, kind) {
                    if kind == Corridor && id == crate::FINAL_CORRIDOR {
                        continue;
                    }
                    assert!(vanilla_location(kind, id).is_some(), "{} {:#04X}", kind, id);
                }
            }
        }
        assert_eq!(vanilla_location(Corridor, 1), Some("A0 Corridor 1 (X6 Y10)"));
    }

    #[test]
    fn test_unnamed_content_falls_back_to_coordinates() {
        let mut grid = Grid::from_areas(&[[0; MAP_COLS]; MAP_ROWS]);
        let room = grid.room_mut(Pos::new(4, 9));
        room.accessible = true;
        room.room_type = RoomType::Corridor;
        room.content_id = crate::FINAL_CORRIDOR;
        let lookup = RoomLookup::from_grid(&grid, &ContentTables::default());
        let placement = lookup
            .get(&GenericRoom::new(0, Corridor, 0))
            .unwrap();
        assert_eq!(placement.location, "A0 (X9 Y4)");
    }

    #[test]
    fn test_serializes_with_display_keys() {
        let mut grid = Grid::from_areas(&[[2; MAP_COLS]; MAP_ROWS]);
        let room = grid.room_mut(Pos::new(1, 1));
        room.accessible = true;
        room.room_type = RoomType::Miniboss;
        room.content_id = 0x10;
        let lookup = RoomLookup::from_grid(&grid, &ContentTables::default());
        let json = serde_json::to_value(&lookup).unwrap();
        assert_eq!(json["A2 Miniboss B"]["location"], "A2 Crab Walker (X1 Y14)");
    }
}
