use crate::hex::HexDirection;
use std::{fmt, ops::Add};

//
//  Doubled-width layout, every other row is shifted by half a cell:
//
//          (-1, 1)   (1, 1)
//     (-2, 0)    (0, 0)    (2, 0)
//          (-1,-1)   (1,-1)
//
//  Neighbours differ by (±1, ±1) or (±2, 0), so x and y always share parity.

/// Doubled-width coordinate of a hexagonal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

impl From<(i32, i32)> for HexCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<HexCoord> for (i32, i32) {
    fn from(coord: HexCoord) -> Self {
        (coord.x, coord.y)
    }
}

impl HexCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Sum of the absolute components. Widened to keep `i32::MIN` from overflowing.
    const fn abs_sum(&self) -> u64 {
        self.x.unsigned_abs() as u64 + self.y.unsigned_abs() as u64
    }

    /// Check if the coordinate addresses a cell, that is x and y have matching parity.
    pub const fn is_valid(&self) -> bool {
        self.abs_sum() % 2 == 0
    }

    /// The smallest grid radius for which a valid coordinate is in bounds.
    /// For invalid (odd parity) coordinates the result carries no meaning.
    pub const fn min_radius(&self) -> u64 {
        self.abs_sum() / 2
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<HexDirection> for HexCoord {
    type Output = HexCoord;

    fn add(self, direction: HexDirection) -> Self::Output {
        let (dx, dy) = direction.offset();
        HexCoord::new(self.x + dx, self.y + dy)
    }
}
