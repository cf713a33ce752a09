use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, HALF_CELL};

/// Integer cell coordinate. Grid `y` maps to world `z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Adjacent cell on `side`. Wraps at the `i32` limits, far outside any grid.
    pub fn neighbor(self, side: Side) -> Self {
        let (dx, dy) = side.offset();
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// World-space centre of the cell on the ground plane.
    pub fn to_world(self) -> Vec3 {
        Vec3::new(
            self.x as f32 * CELL_SIZE + HALF_CELL,
            0.0,
            self.y as f32 * CELL_SIZE + HALF_CELL,
        )
    }

    /// Snap a world position to the cell containing it.
    pub fn from_world(world: Vec3) -> Self {
        Self::new(
            (world.x / CELL_SIZE).floor() as i32,
            (world.z / CELL_SIZE).floor() as i32,
        )
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < GRID_WIDTH && (self.y as usize) < GRID_HEIGHT
    }
}

/// One of the four cardinal sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Front, // +y
    Right, // +x
    Back,  // -y
    Left,  // -x
}

impl Side {
    /// Clockwise order, starting at Front. Index in this array is the side's bit.
    pub const ALL: [Side; 4] = [Side::Front, Side::Right, Side::Back, Side::Left];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Front => 0,
            Side::Right => 1,
            Side::Back => 2,
            Side::Left => 3,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    pub fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// Rotate clockwise (seen from above) by the given number of quarter turns.
    pub fn rotated(self, quarter_turns: u8) -> Self {
        Self::from_index(self.index() + quarter_turns as usize)
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::Front => (0, 1),
            Side::Right => (1, 0),
            Side::Back => (0, -1),
            Side::Left => (-1, 0),
        }
    }

    /// Unit vector pointing out of the cell through this side.
    pub fn direction(self) -> Vec3 {
        let (dx, dy) = self.offset();
        Vec3::new(dx as f32, 0.0, dy as f32)
    }
}

/// Bit set over the four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SideSet(u8);

impl SideSet {
    pub const EMPTY: SideSet = SideSet(0);
    pub const ALL: SideSet = SideSet(0b1111);

    pub fn from_sides(sides: &[Side]) -> Self {
        let mut set = Self::EMPTY;
        for &side in sides {
            set.insert(side);
        }
        set
    }

    #[inline]
    pub fn insert(&mut self, side: Side) {
        self.0 |= 1 << side.index();
    }

    #[inline]
    pub fn contains(self, side: Side) -> bool {
        self.0 & (1 << side.index()) != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn iter(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |&side| self.contains(side))
    }

    /// Rotate every member clockwise by `quarter_turns`.
    pub fn rotated(self, quarter_turns: u8) -> Self {
        let mut out = Self::EMPTY;
        for side in self.iter() {
            out.insert(side.rotated(quarter_turns));
        }
        out
    }
}

/// Discrete tile orientation: which side the tile's local Front ends up facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    Forward,
    Right,
    Back,
    Left,
}

impl Heading {
    pub fn quarter_turns(self) -> u8 {
        match self {
            Heading::Forward => 0,
            Heading::Right => 1,
            Heading::Back => 2,
            Heading::Left => 3,
        }
    }

    pub fn from_side(side: Side) -> Self {
        match side {
            Side::Front => Heading::Forward,
            Side::Right => Heading::Right,
            Side::Back => Heading::Back,
            Side::Left => Heading::Left,
        }
    }

    /// Rotation about +Y taking local +Z onto the heading's side direction.
    pub fn rotation(self) -> Quat {
        Quat::from_rotation_y(self.quarter_turns() as f32 * FRAC_PI_2)
    }
}
