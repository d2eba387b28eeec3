//! The 24x24 room grid
//!
//! Rooms live in a dense `[row][col]` array. Adjacency is always computed
//! from coordinates, never stored.

use serde::{Deserialize, Serialize};

use crate::{MAP_COLS, MAP_ROWS};

use super::room::{Direction, Room, RoomType};
use super::skeleton::AreaSkeleton;

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbouring position, `None` when it falls off the grid
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < MAP_ROWS && col < MAP_COLS).then_some(Pos { row, col })
    }
}

/// Filter for [`Grid::suitable_rooms`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitableFilter {
    /// Skip hub ring rooms reserved by `avoid_special`
    pub discard_special: bool,
    /// A peripheral area's starting Save room may be replaced
    pub allow_overwrite: bool,
}

/// The whole map, exclusively owned by one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cells: [[Room; MAP_COLS]; MAP_ROWS],
    /// Exits added by one-way augmentation, the only asymmetric ones
    pub one_way_exits: Vec<(Pos, Direction)>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: [[Room::default(); MAP_COLS]; MAP_ROWS],
            one_way_exits: Vec::new(),
        }
    }
}

impl Grid {
    /// Build a grid of untouched rooms from an area layout
    pub fn from_areas(areas: &[[i8; MAP_COLS]; MAP_ROWS]) -> Self {
        let mut grid = Self::default();
        for (row, line) in areas.iter().enumerate() {
            for (col, &area) in line.iter().enumerate() {
                grid.cells[row][col] = Room::in_area(area);
            }
        }
        grid
    }

    pub fn from_skeleton(skeleton: &AreaSkeleton) -> Self {
        Self::from_areas(skeleton.areas())
    }

    pub fn room(&self, pos: Pos) -> &Room {
        &self.cells[pos.row][pos.col]
    }

    pub fn room_mut(&mut self, pos: Pos) -> &mut Room {
        &mut self.cells[pos.row][pos.col]
    }

    /// Neighbour of `pos` in `dir`, if on the grid
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<(Pos, &Room)> {
        pos.step(dir).map(|p| (p, self.room(p)))
    }

    /// All positions in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..MAP_ROWS).flat_map(|row| (0..MAP_COLS).map(move |col| Pos::new(row, col)))
    }

    /// Row-major iterator over positions and rooms
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Room)> + '_ {
        Self::positions().map(move |p| (p, self.room(p)))
    }

    /// Positions matching a predicate, in row-major order
    pub fn positions_where<F>(&self, mut pred: F) -> Vec<Pos>
    where
        F: FnMut(&Room) -> bool,
    {
        self.iter().filter(|(_, r)| pred(r)).map(|(p, _)| p).collect()
    }

    /// Accessible rooms of an area, in row-major order
    pub fn accessible_in(&self, area: i8) -> Vec<Pos> {
        self.positions_where(|r| r.area == area && r.accessible)
    }

    /// Link two adjacent rooms in both directions
    pub fn link(&mut self, pos: Pos, dir: Direction) -> Option<Pos> {
        let next = pos.step(dir)?;
        self.room_mut(pos).exits |= dir.exit();
        self.room_mut(next).exits |= dir.opposite().exit();
        Some(next)
    }

    /// Rooms of `area` eligible for content placement
    pub fn suitable_rooms(&self, area: u8, filter: SuitableFilter) -> Vec<Pos> {
        let area = area as i8;
        self.positions_where(|r| {
            if r.area != area || !r.accessible || r.block_set.is_some() {
                return false;
            }
            let type_ok = r.room_type == RoomType::Normal
                || (area != 0
                    && filter.allow_overwrite
                    && r.room_type == RoomType::Save
                    && r.is_entrance);
            if !type_ok {
                return false;
            }
            if filter.discard_special && r.avoid_special {
                return false;
            }
            area != 0 || !r.is_entrance
        })
    }

    /// Positions reachable from `start` by following exit bits
    pub fn reachable_from(&self, start: Pos) -> Vec<Pos> {
        let mut visited = [[false; MAP_COLS]; MAP_ROWS];
        let mut queue = std::collections::VecDeque::from([start]);
        let mut reached = Vec::new();
        visited[start.row][start.col] = true;

        while let Some(pos) = queue.pop_front() {
            reached.push(pos);
            let room = self.room(pos);
            for dir in Direction::ALL {
                if !room.has_exit(dir) {
                    continue;
                }
                if let Some(next) = pos.step(dir)
                    && !visited[next.row][next.col]
                    && self.room(next).accessible
                {
                    visited[next.row][next.col] = true;
                    queue.push_back(next);
                }
            }
        }
        reached
    }

    /// Number of accessible rooms
    pub fn accessible_count(&self) -> usize {
        self.iter().filter(|(_, r)| r.accessible).count()
    }
}
