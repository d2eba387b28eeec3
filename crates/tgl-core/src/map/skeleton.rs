//! Area skeleton: the fixed area partition of the map
//!
//! The vanilla partition can be mirrored, rotated in quarter turns, and have
//! its peripheral area numbers shuffled. Area 0 and walls never move labels.

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::rng::GameRng;
use crate::{MAP_COLS, MAP_ROWS, PERIPHERAL_AREAS};

type AreaLayout = [[i8; MAP_COLS]; MAP_ROWS];

/// Vanilla area partition; -1 marks walls between areas
#[rustfmt::skip]
const AREA_TEMPLATE: AreaLayout = [
    [ 1, 1, 1, 1,-1, 2, 2, 2, 2, 2, 2, 2,-1, 3, 3, 3, 3, 3, 3,-1, 4, 4, 4, 4],
    [ 1, 1, 1, 1,-1, 2, 2, 2, 2, 2, 2, 2,-1, 3, 3, 3, 3, 3, 3,-1, 4, 4, 4, 4],
    [ 1, 1, 1, 1,-1, 2, 2, 2, 2, 2, 2, 2,-1, 3, 3, 3, 3, 3, 3,-1, 4, 4, 4, 4],
    [ 1, 1, 1, 1,-1,-1,-1, 2, 2, 2, 2, 2,-1, 3, 3, 3, 3,-1,-1,-1, 4, 4, 4, 4],
    [ 1, 1, 1, 1, 1, 1,-1, 2, 2, 2, 2,-1,-1, 3, 3, 3, 3,-1, 4, 4, 4, 4, 4, 4],
    [ 1, 1, 1, 1, 1, 1,-1, 2, 2, 2, 2,-1, 3, 3, 3, 3, 3,-1, 4, 4, 4, 4, 4, 4],
    [ 1, 1, 1, 1, 1, 1,-1,-1,-1,-1, 2,-1, 3, 3,-1,-1,-1,-1, 4, 4, 4, 4, 4, 4],
    [-1,-1,-1,-1, 1, 1, 1, 1, 1,-1, 2,-1, 3, 3,-1, 4, 4, 4, 4, 4,-1,-1,-1,-1],
    [ 5, 5, 5,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1, 6, 6, 6],
    [ 5, 5, 5, 5, 5, 5, 5,-1, 0, 0, 0, 0, 0, 0, 0, 0,-1, 6, 6, 6, 6, 6, 6, 6],
    [ 5, 5, 5, 5, 5, 5, 5,-1, 0, 0, 0, 0, 0, 0, 0, 0,-1, 6, 6, 6, 6, 6, 6, 6],
    [ 5, 5, 5, 5, 5, 5, 5,-1, 0, 0, 0, 0, 0, 0, 0, 0,-1, 6, 6, 6, 6, 6, 6, 6],
    [ 5, 5, 5, 5, 5, 5, 5,-1, 0, 0, 0, 0, 0, 0, 0, 0,-1, 6, 6, 6, 6, 6, 6, 6],
    [ 5, 5, 5, 5, 5, 5, 5,-1, 0, 0, 0, 0, 0, 0, 0, 0,-1, 6, 6, 6, 6, 6, 6, 6],
    [ 5, 5, 5, 5, 5, 5, 5,-1, 0, 0, 0, 0, 0, 0, 0, 0,-1, 6, 6, 6, 6, 6, 6, 6],
    [ 5, 5, 5,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1, 6, 6, 6],
    [-1,-1,-1,-1, 7, 7, 7, 7, 7,-1, 8,-1, 9, 9,-1,10,10,10,10,10,-1,-1,-1,-1],
    [ 7, 7, 7, 7, 7, 7,-1,-1,-1,-1, 8,-1, 9, 9,-1,-1,-1,-1,10,10,10,10,10,10],
    [ 7, 7, 7, 7, 7, 7,-1, 8, 8, 8, 8,-1, 9, 9, 9, 9, 9,-1,10,10,10,10,10,10],
    [ 7, 7, 7, 7, 7, 7,-1, 8, 8, 8, 8,-1, 9, 9, 9, 9, 9,-1,10,10,10,10,10,10],
    [ 7, 7, 7, 7,-1,-1,-1, 8, 8, 8, 8,-1,-1, 9, 9, 9, 9,-1,-1,-1,10,10,10,10],
    [ 7, 7, 7, 7,-1, 8, 8, 8, 8, 8, 8, 8,-1, 9, 9, 9, 9, 9, 9,-1,10,10,10,10],
    [ 7, 7, 7, 7,-1, 8, 8, 8, 8, 8, 8, 8,-1, 9, 9, 9, 9, 9, 9,-1,10,10,10,10],
    [ 7, 7, 7, 7,-1, 8, 8, 8, 8, 8, 8, 8,-1, 9, 9, 9, 9, 9, 9,-1,10,10,10,10],
];

/// How the vanilla partition is transformed for one map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Mirror every row before rotating
    pub flip: bool,
    /// Quarter turns counter-clockwise, 0..=3
    pub rotation: u8,
    /// `permutation[a - 1]` is the new label of vanilla area `a`
    pub permutation: [u8; PERIPHERAL_AREAS],
}

impl Layout {
    /// The vanilla layout
    pub fn identity() -> Self {
        Self {
            flip: false,
            rotation: 0,
            permutation: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        }
    }

    /// Draw flip, rotation and permutation, in that order
    pub fn random(rng: &mut GameRng) -> Self {
        let flip = rng.choose(&[true, false]).copied().unwrap_or(false);
        let rotation = rng.rn_range(0, 3) as u8;
        let mut permutation = Self::identity().permutation;
        rng.shuffle(&mut permutation);
        Self {
            flip,
            rotation,
            permutation,
        }
    }

    /// Reject rotations above three quarter turns and non-bijective permutations
    pub fn validate(&self) -> Result<()> {
        if self.rotation > 3 {
            return Err(MapError::InvalidLayout(format!(
                "rotation {} is not in 0..=3",
                self.rotation
            )));
        }
        let mut seen = [false; PERIPHERAL_AREAS];
        for &area in &self.permutation {
            let idx = usize::from(area).wrapping_sub(1);
            if idx >= PERIPHERAL_AREAS || seen[idx] {
                return Err(MapError::InvalidLayout(format!(
                    "permutation {:?} is not a bijection of 1..=10",
                    self.permutation
                )));
            }
            seen[idx] = true;
        }
        Ok(())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::identity()
    }
}

/// A 24x24 area partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSkeleton {
    areas: AreaLayout,
}

impl AreaSkeleton {
    /// The vanilla partition
    pub fn standard() -> Self {
        Self {
            areas: AREA_TEMPLATE,
        }
    }

    pub fn areas(&self) -> &AreaLayout {
        &self.areas
    }

    /// Number of cells belonging to `area`
    pub fn cell_count(&self, area: i8) -> usize {
        self.areas.iter().flatten().filter(|&&a| a == area).count()
    }

    /// Apply flip, rotation and relabelling
    pub fn transformed(&self, layout: &Layout) -> Result<Self> {
        layout.validate()?;
        let mut areas = self.areas;

        if layout.flip {
            for row in areas.iter_mut() {
                row.reverse();
            }
        }
        for _ in 0..layout.rotation {
            areas = rotate_ccw(&areas);
        }
        for row in areas.iter_mut() {
            for area in row.iter_mut() {
                if *area > 0 {
                    *area = layout.permutation[(*area - 1) as usize] as i8;
                }
            }
        }
        Ok(Self { areas })
    }
}

/// One counter-clockwise quarter turn: transpose, then reverse row order
fn rotate_ccw(areas: &AreaLayout) -> AreaLayout {
    let mut out = [[0i8; MAP_COLS]; MAP_ROWS];
    for (row, line) in out.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            *cell = areas[col][MAP_COLS - 1 - row];
        }
    }
    out
}
