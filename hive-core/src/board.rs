//! Hex board geometry with offset coordinates and stack elevation
//!
//! Columns are addressed by (x, y). Which diagonal neighbors a hex has
//! depends on the parity of x: even columns lean down, odd columns lean up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board coordinate: hex column (x, y) plus stack elevation z (ground = 0)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub z: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate::ground(0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate at elevation 0
    pub const fn ground(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    /// Same column, elevation 0
    pub fn to_ground(self) -> Self {
        Self::ground(self.x, self.y)
    }

    /// Same column, given elevation
    pub fn at_elevation(self, z: i32) -> Self {
        Self::new(self.x, self.y, z)
    }

    pub fn same_column(&self, other: &Coordinate) -> bool {
        self.x == other.x && self.y == other.y
    }

    fn is_even_column(&self) -> bool {
        self.x.rem_euclid(2) == 0
    }

    /// Neighbor in a direction, keeping this coordinate's elevation
    pub fn step(&self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.offset(self.is_even_column());
        Coordinate::new(self.x + dx, self.y + dy, self.z)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The six hex directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    UpLeft,
    DownLeft,
    UpRight,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::DownRight,
    ];

    /// (dx, dy) for a hex in an even or odd column
    fn offset(self, even_column: bool) -> (i32, i32) {
        match (self, even_column) {
            (Direction::Up, _) => (0, 1),
            (Direction::Down, _) => (0, -1),
            (Direction::UpLeft, true) => (-1, 0),
            (Direction::UpLeft, false) => (-1, 1),
            (Direction::DownLeft, true) => (-1, -1),
            (Direction::DownLeft, false) => (-1, 0),
            (Direction::UpRight, true) => (1, 0),
            (Direction::UpRight, false) => (1, 1),
            (Direction::DownRight, true) => (1, -1),
            (Direction::DownRight, false) => (1, 0),
        }
    }
}

/// The 6 hex-adjacent coordinates, projected to elevation 0
pub fn ground_neighbors(c: Coordinate) -> [Coordinate; 6] {
    let base = c.to_ground();
    Direction::ALL.map(|d| base.step(d))
}

/// The 6 hex-adjacent coordinates at the same elevation as `c`
pub fn level_neighbors(c: Coordinate) -> [Coordinate; 6] {
    Direction::ALL.map(|d| c.step(d))
}

/// True iff the two columns are hex-adjacent (elevation ignored)
pub fn are_neighbors(a: Coordinate, b: Coordinate) -> bool {
    ground_neighbors(a).iter().any(|n| n.same_column(&b))
}

/// Edge relation of the hive graph: vertically stacked or adjacent at equal elevation
pub fn are_connected_3d(a: Coordinate, b: Coordinate) -> bool {
    if a.same_column(&b) {
        (a.z - b.z).abs() == 1
    } else {
        a.z == b.z && are_neighbors(a, b)
    }
}

/// The two hexes adjacent to both `a` and `b` (at `a`'s elevation)
///
/// Empty when the hexes are not neighbors.
pub fn pinch_hexes(a: Coordinate, b: Coordinate) -> Vec<Coordinate> {
    if !are_neighbors(a, b) {
        return Vec::new();
    }
    level_neighbors(a)
        .into_iter()
        .filter(|n| are_neighbors(*n, b))
        .collect()
}
