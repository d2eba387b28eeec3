//! Content manifests and block-set palettes
//!
//! Immutable data handed to the generator at construction. The defaults are
//! the game's own tables.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::AREA_COUNT;

use super::room::Direction;

/// Kind of content a placement pass puts into a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
pub enum ContentKind {
    #[strum(to_string = "ground item")]
    GroundItem,
    #[strum(to_string = "miniboss")]
    Miniboss,
    #[strum(to_string = "corridor")]
    Corridor,
    #[strum(to_string = "single shop")]
    SingleShop,
    #[strum(to_string = "multi shop")]
    MultiShop,
    #[strum(to_string = "save room")]
    SaveRoom,
    #[strum(to_string = "text room")]
    TextRoom,
    #[strum(to_string = "chip refill")]
    ChipRefill,
}

/// Decorative block layouts, grouped by where they may appear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSets {
    pub no_chips: Vec<u16>,
    pub with_chips: Vec<u16>,
    /// Area transitions, indexed by the side of the room the seam is on
    pub area_transition_no_chips: DirectionalSets,
    pub area_transition_with_chips: DirectionalSets,
    pub corridor_transition: DirectionalSets,
    /// Item room layouts
    pub item: Vec<u16>,
    /// Hub ring landmarks, one per cardinal point
    pub cardinal: CardinalSets,
    /// Power chip refill room in the hub
    pub chip_refill: u16,
}

/// One palette per direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalSets {
    pub up: Vec<u16>,
    pub down: Vec<u16>,
    pub left: Vec<u16>,
    pub right: Vec<u16>,
}

impl DirectionalSets {
    pub fn get(&self, dir: Direction) -> &[u16] {
        match dir {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardinalSets {
    pub north: u16,
    pub south: u16,
    pub west: u16,
    pub east: u16,
}

impl Default for BlockSets {
    fn default() -> Self {
        Self {
            no_chips: vec![
                0x6894, 0x3D94, 0x4694, 0x5094, 0x8794, 0x3F94, 0x8C94, 0x5D94, 0x5294, 0xE394,
                0xDD94, 0xDF94, 0xD994, 0xD194, 0xD794, 0xD594,
            ],
            with_chips: vec![0x6F94, 0x4194, 0x9D94],
            area_transition_no_chips: DirectionalSets {
                up: vec![0x1C95],
                down: vec![0x3C95, 0x4995],
                left: vec![0xE994, 0xF394, 0xEB94],
                right: vec![0x0895],
            },
            area_transition_with_chips: DirectionalSets {
                up: vec![0x1795, 0x2995, 0x2495],
                down: vec![0x4495, 0x3795],
                left: vec![0xFB94],
                right: vec![0x0395, 0x0D95],
            },
            corridor_transition: DirectionalSets {
                up: vec![0x7A95, 0x8595],
                down: vec![0x9095, 0x9B95],
                left: vec![0x4E95, 0x5995],
                right: vec![0x6495, 0x6F95],
            },
            item: vec![0xAE94, 0xC994, 0xBE94, 0xB394],
            cardinal: CardinalSets {
                north: 0xA695,
                south: 0xB495,
                west: 0xD995,
                east: 0xC895,
            },
            chip_refill: 0xEA95,
        }
    }
}

/// A multi-item shop pinned to an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEntry {
    pub area: u8,
    pub shop_id: u8,
}

/// Everything the content passes place, per area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTables {
    /// Ground item ids, indexed by area
    pub items: Vec<Vec<u8>>,
    /// Multi-item shops
    pub multi_shops: Vec<ShopEntry>,
    /// Single-item shops, all in the hub
    pub single_shops: Vec<u8>,
    pub block_sets: BlockSets,
}

impl Default for ContentTables {
    fn default() -> Self {
        Self {
            items: vec![
                vec![0x21, 0x05, 0x39, 0x35],
                vec![0x24, 0x23, 0x26],
                vec![0x36, 0x25],
                vec![0x28, 0x27],
                vec![0x29, 0x2A, 0x37],
                vec![0x01, 0x2B, 0x2C],
                vec![0x0A, 0x2D, 0x2E, 0x02],
                vec![0x03, 0x2F, 0x30],
                vec![0x31, 0x38, 0x04, 0x32],
                vec![0x06, 0x33, 0x34, 0x08, 0x07],
                vec![0x09],
            ],
            multi_shops: vec![
                ShopEntry { area: 2, shop_id: 0x3F },
                ShopEntry { area: 4, shop_id: 0x41 },
                ShopEntry { area: 7, shop_id: 0x40 },
                ShopEntry { area: 7, shop_id: 0x42 },
                ShopEntry { area: 10, shop_id: 0x43 },
            ],
            single_shops: (0x3A..=0x3E).collect(),
            block_sets: BlockSets::default(),
        }
    }
}

impl ContentTables {
    /// Ground item ids for an area (empty for unknown areas)
    pub fn items_for(&self, area: u8) -> &[u8] {
        self.items.get(area as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The two miniboss ids guarding an area
    pub fn minibosses_for(area: u8) -> [u8; 2] {
        [0x0B + area * 2, 0x0C + area * 2]
    }

    /// Corridor ids placed by the important-rooms pass
    pub fn corridors_for(area: u8) -> Vec<u8> {
        match area {
            0 => vec![crate::FINAL_CORRIDOR],
            1 => vec![crate::AREA_ONE_CORRIDOR],
            _ => vec![area, area + 10],
        }
    }

    /// Multi-item shops in an area, in manifest order
    pub fn multi_shops_for(&self, area: u8) -> Vec<u8> {
        self.multi_shops
            .iter()
            .filter(|s| s.area == area)
            .map(|s| s.shop_id)
            .collect()
    }

    /// Check the manifests cover every area
    pub fn is_complete(&self) -> bool {
        self.items.len() == AREA_COUNT
            && !self.block_sets.item.is_empty()
            && self.multi_shops.iter().all(|s| (s.area as usize) < AREA_COUNT)
    }
}
