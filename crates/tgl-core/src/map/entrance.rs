//! Entrance seams between the hub and each peripheral area

use log::debug;

use crate::PERIPHERAL_AREAS;
use crate::error::{MapError, Result};
use crate::rng::GameRng;

use super::grid::{Grid, Pos};
use super::room::Direction;

/// A wall tile that separates the hub from a peripheral area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeamCandidate {
    pub wall: Pos,
    /// Direction from the wall tile to the hub tile
    pub toward_hub: Direction,
}

/// Candidates per peripheral area, index `a - 1` for area `a`
pub fn entrance_candidates(grid: &Grid) -> Vec<Vec<SeamCandidate>> {
    let mut candidates = vec![Vec::new(); PERIPHERAL_AREAS];

    for (pos, room) in grid.iter() {
        if !room.is_wall() {
            continue;
        }
        for toward_hub in Direction::SCAN {
            let hub_side = grid.neighbor(pos, toward_hub).map(|(_, r)| r.area);
            let area_side = grid.neighbor(pos, toward_hub.opposite()).map(|(_, r)| r.area);
            if let (Some(0), Some(area)) = (hub_side, area_side)
                && area > 0
                && let Some(list) = candidates.get_mut(area as usize - 1)
            {
                list.push(SeamCandidate {
                    wall: pos,
                    toward_hub,
                });
            }
        }
    }
    candidates
}

/// Open one seam per peripheral area and mark the area's starting point
pub fn open_entrances(grid: &mut Grid, rng: &mut GameRng) -> Result<Vec<SeamCandidate>> {
    let candidates = entrance_candidates(grid);
    let mut opened = Vec::with_capacity(PERIPHERAL_AREAS);

    for (idx, list) in candidates.iter().enumerate() {
        let area = idx as u8 + 1;
        let Some(&seam) = rng.choose(list) else {
            return Err(MapError::NoEntrance { area });
        };
        debug!(
            "area {} entrance at {:?} ({} candidates)",
            area,
            seam.wall,
            list.len()
        );
        carve_seam(grid, seam);
        opened.push(seam);
    }
    Ok(opened)
}

fn carve_seam(grid: &mut Grid, seam: SeamCandidate) {
    let SeamCandidate { wall, toward_hub } = seam;
    let toward_area = toward_hub.opposite();
    {
        let room = grid.room_mut(wall);
        room.area = 0;
        room.accessible = true;
        room.is_entrance = true;
        room.exits |= toward_hub.exit() | toward_area.exit();
    }
    if let Some(hub) = wall.step(toward_hub) {
        let room = grid.room_mut(hub);
        room.accessible = true;
        room.exits |= toward_area.exit();
    }
    if let Some(start) = wall.step(toward_area) {
        let room = grid.room_mut(start);
        room.accessible = true;
        room.is_entrance = true;
        room.exits |= toward_hub.exit();
    }
}
