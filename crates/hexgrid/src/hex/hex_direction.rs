/// The six unit steps between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexDirection {
    UpRight,
    Right,
    DownRight,
    DownLeft,
    Left,
    UpLeft,
}

impl HexDirection {
    /// Directions in the order a ring is walked, starting from its left-most cell.
    pub const CLOCKWISE: [HexDirection; 6] = [
        HexDirection::UpRight,
        HexDirection::Right,
        HexDirection::DownRight,
        HexDirection::DownLeft,
        HexDirection::Left,
        HexDirection::UpLeft,
    ];

    /// The (dx, dy) offset of a single step.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            HexDirection::UpRight => (1, 1),
            HexDirection::Right => (2, 0),
            HexDirection::DownRight => (1, -1),
            HexDirection::DownLeft => (-1, -1),
            HexDirection::Left => (-2, 0),
            HexDirection::UpLeft => (-1, 1),
        }
    }
}
