//! Room table encoding
//!
//! The ROM stores the map as one record per grid cell in row-major order,
//! followed by a single terminator byte. Inaccessible cells are the single
//! byte `0x80`. Every other record starts with a header byte and an
//! exits/key byte whose high nibble is the exit mask.
//!
//! The key nibble selects which panel locks exist in the room. Rooms that can
//! hold enemies use the "most rooms" key when they actually do.

use log::{error, info};

use crate::error::{MapError, Result};
use crate::{INACCESSIBLE_ROOM_BYTE, TABLE_TERMINATOR};

use super::grid::{Grid, Pos};
use super::room::{Room, RoomType};

const AREA_KEYS_OTHER: [u8; 11] = [0, 1, 1, 2, 3, 4, 4, 5, 5, 6, 7];
const AREA_KEYS_MOST: [u8; 11] = [8, 9, 9, 10, 11, 12, 12, 13, 13, 14, 15];

/// Normal room header kinds (high nibble)
const KIND_PLAIN: u8 = 0x00;
const KIND_BLOCKS: u8 = 0x10;
const KIND_CHIP_BLOCKS: u8 = 0x70;

/// Encoded bytes of one room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord(Vec<u8>);

impl RoomRecord {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Encode a single room
pub fn encode_room(pos: Pos, room: &Room) -> Result<RoomRecord> {
    if !room.accessible {
        return Ok(RoomRecord(vec![INACCESSIBLE_ROOM_BYTE]));
    }
    let fail = |reason: &'static str| MapError::Encoding {
        row: pos.row,
        col: pos.col,
        reason,
    };
    let area = u8::try_from(room.area).map_err(|_| fail("accessible room outside any area"))?;
    let idx = usize::from(area);
    let (Some(&other), Some(&most)) = (AREA_KEYS_OTHER.get(idx), AREA_KEYS_MOST.get(idx)) else {
        return Err(fail("area number out of range"));
    };
    let exits = room.exits.bits() << 4;
    let enemies = room.enemy_group != 0;

    let bytes = match room.room_type {
        RoomType::Normal => {
            let mut len = 2;
            let mut key = other;
            if enemies {
                key = most;
                len += 1;
            }
            let kind = match room.block_set {
                None => KIND_PLAIN,
                Some(_) if room.has_chip_tile => KIND_CHIP_BLOCKS,
                Some(_) => KIND_BLOCKS,
            };
            if room.block_set.is_some() {
                len += 2;
            }
            let mut out = vec![kind + len, exits + key, area];
            if enemies {
                out.push(room.enemy_group);
            }
            if let Some(set) = room.block_set {
                out.extend_from_slice(&set.to_be_bytes());
            }
            out
        }
        RoomType::Save => vec![0x82, exits + most, 0x01],
        RoomType::Corridor => {
            let key = if room.content_id == crate::FIRST_CORRIDOR {
                0
            } else {
                most
            };
            vec![0x82, exits + key, 0x80 + room.content_id]
        }
        RoomType::Text => vec![0xA3, exits + other, 0x03, room.content_id],
        RoomType::MultiShop => vec![0xA3, exits + other, 0x02, room.content_id],
        RoomType::SingleShop => vec![0xA3, exits + other, 0x06, room.content_id],
        RoomType::Miniboss => vec![0x43, exits + most, 0x10 + area, room.content_id],
        RoomType::Item => {
            let set = room.block_set.ok_or_else(|| fail("item room has no block set"))?;
            let mut len = 5;
            let mut key = other;
            if enemies {
                key = most;
                len += 1;
            }
            let mut out = vec![0x30 + len, exits + key, area, room.content_id];
            if enemies {
                out.push(room.enemy_group);
            }
            out.extend_from_slice(&set.to_be_bytes());
            out
        }
    };
    Ok(RoomRecord(bytes))
}

/// Pack the whole grid into the room table
///
/// The room data before the terminator must fit in `limit` bytes.
pub fn pack_rooms(grid: &Grid, limit: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(limit + 1);
    for (pos, room) in grid.iter() {
        match encode_room(pos, room) {
            Ok(record) => out.extend_from_slice(record.as_bytes()),
            Err(err) => {
                error!("{} ({:?})\n{}", err, pos, room.describe());
                return Err(err);
            }
        }
    }

    let size = out.len();
    if size > limit {
        return Err(MapError::SizeBudget { size, limit });
    }
    info!("map size: {} of {} bytes", size, limit);
    out.push(TABLE_TERMINATOR);
    Ok(out)
}

/// Predicted room data size, without encoding
pub fn predicted_size(grid: &Grid) -> usize {
    grid.iter().map(|(_, r)| r.byte_len()).sum()
}
