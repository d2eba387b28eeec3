//! Content placement passes
//!
//! Each pass draws rooms from a pool of suitable rooms of one area. Drawn
//! rooms leave the pool, so no room receives two pieces of content. Running
//! out of rooms is a [`MapError::Capacity`].

use log::debug;

use crate::error::{MapError, Result};
use crate::rng::GameRng;

use super::grid::{Grid, Pos, SuitableFilter};
use super::room::RoomType;
use super::tables::{ContentKind, ContentTables};

/// Hub hint pages; page 0 belongs to the starting room
const HUB_TEXT_PAGES: std::ops::RangeInclusive<u8> = 1..=3;

/// Suitable rooms of one area, drawn without replacement
struct RoomPool {
    area: u8,
    rooms: Vec<Pos>,
}

impl RoomPool {
    fn new(grid: &Grid, area: u8, filter: SuitableFilter) -> Self {
        Self {
            area,
            rooms: grid.suitable_rooms(area, filter),
        }
    }

    fn take(&mut self, rng: &mut GameRng, content: ContentKind) -> Result<Pos> {
        let idx = rng.choose_index(self.rooms.len()).ok_or(MapError::Capacity {
            area: self.area,
            content,
        })?;
        Ok(self.rooms.remove(idx))
    }

    /// Draw a room and give it a type and content id
    fn assign(
        &mut self,
        grid: &mut Grid,
        rng: &mut GameRng,
        content: ContentKind,
        room_type: RoomType,
        content_id: u8,
    ) -> Result<Pos> {
        let pos = self.take(rng, content)?;
        let room = grid.room_mut(pos);
        room.room_type = room_type;
        room.content_id = content_id;
        debug!("area {} {} {:#04X} at {:?}", self.area, content, content_id, pos);
        Ok(pos)
    }
}

/// Ground items with their block layouts, then the area's two minibosses
pub fn place_items(
    grid: &mut Grid,
    rng: &mut GameRng,
    tables: &ContentTables,
    area: u8,
) -> Result<()> {
    let filter = SuitableFilter {
        discard_special: true,
        allow_overwrite: false,
    };
    let mut pool = RoomPool::new(grid, area, filter);

    for &item in tables.items_for(area) {
        let pos = pool.assign(grid, rng, ContentKind::GroundItem, RoomType::Item, item)?;
        grid.room_mut(pos).block_set = rng.choose(&tables.block_sets.item).copied();
    }
    for boss in ContentTables::minibosses_for(area) {
        pool.assign(grid, rng, ContentKind::Miniboss, RoomType::Miniboss, boss)?;
    }
    Ok(())
}

/// Corridors, then single shops (hub only), then multi shops
pub fn place_important_rooms(
    grid: &mut Grid,
    rng: &mut GameRng,
    tables: &ContentTables,
    area: u8,
) -> Result<()> {
    let filter = SuitableFilter {
        discard_special: true,
        allow_overwrite: true,
    };
    let mut pool = RoomPool::new(grid, area, filter);

    for corridor in ContentTables::corridors_for(area) {
        pool.assign(grid, rng, ContentKind::Corridor, RoomType::Corridor, corridor)?;
    }
    if area == 0 {
        for &shop in &tables.single_shops {
            pool.assign(grid, rng, ContentKind::SingleShop, RoomType::SingleShop, shop)?;
        }
    }
    for shop in tables.multi_shops_for(area) {
        pool.assign(grid, rng, ContentKind::MultiShop, RoomType::MultiShop, shop)?;
    }
    Ok(())
}

/// Chip refill and hint pages in the hub, one save room everywhere, and the
/// area's own hint page outside the hub and area 1
pub fn place_safe_rooms(
    grid: &mut Grid,
    rng: &mut GameRng,
    tables: &ContentTables,
    area: u8,
) -> Result<()> {
    let filter = SuitableFilter {
        discard_special: true,
        allow_overwrite: true,
    };
    let mut pool = RoomPool::new(grid, area, filter);

    if area == 0 {
        let pos = pool.take(rng, ContentKind::ChipRefill)?;
        let room = grid.room_mut(pos);
        room.block_set = Some(tables.block_sets.chip_refill);
        room.has_chip_tile = true;
        for page in HUB_TEXT_PAGES {
            pool.assign(grid, rng, ContentKind::TextRoom, RoomType::Text, page)?;
        }
    }
    pool.assign(grid, rng, ContentKind::SaveRoom, RoomType::Save, 0)?;
    if area > 1 {
        pool.assign(grid, rng, ContentKind::TextRoom, RoomType::Text, area + 10)?;
    }
    Ok(())
}

/// Retype every peripheral starting point: corridor 1 in area 1, a save room elsewhere
pub fn place_starting_points(grid: &mut Grid) {
    for pos in grid.positions_where(|r| r.is_entrance && r.area > 0) {
        let room = grid.room_mut(pos);
        if room.area == 1 {
            room.room_type = RoomType::Corridor;
            room.content_id = crate::FIRST_CORRIDOR;
        } else {
            room.room_type = RoomType::Save;
        }
    }
}
