pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// The four cardinal directions. Increasing y points south, so `South` is
/// `(0, 1)` in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Canonical neighbour visit order before any shuffling.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Unit vector of this direction as `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// A finished labyrinth: the carved grid plus the tunnel endpoint pairs and
/// the two distinguished coordinates the renderer overlays with markers.
pub struct Labyrinth {
    grid: Grid,
    tunnels: Vec<((u16, u16), (u16, u16))>,
    start: (u16, u16),
    dest: (u16, u16),
}

impl Labyrinth {
    pub(crate) fn new(
        grid: Grid,
        tunnels: Vec<((u16, u16), (u16, u16))>,
        start: (u16, u16),
        dest: (u16, u16),
    ) -> Self {
        Labyrinth {
            grid,
            tunnels,
            start,
            dest,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tunnel shortcuts as `(near, exit)` endpoint pairs. The near endpoint
    /// is the cell that triggered the tunnel; the exit is the far cell that
    /// was claimed for it.
    pub fn tunnels(&self) -> &[((u16, u16), (u16, u16))] {
        &self.tunnels
    }

    pub fn start(&self) -> (u16, u16) {
        self.start
    }

    pub fn dest(&self) -> (u16, u16) {
        self.dest
    }
}
