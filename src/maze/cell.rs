use crate::maze::Direction;

/// A single tile of the labyrinth.
///
/// The four side flags are monotonic: once a side is opened it stays open.
/// `empty` is true until the cell is settled by the growth engine, claimed
/// as a tunnel exit, or patched by the repair pass. `queued` is true only
/// while the cell sits in the pending work queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub empty: bool,
    pub queued: bool,
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
    pub tunnel: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            empty: true,
            queued: false,
            north: false,
            east: false,
            south: false,
            west: false,
            tunnel: false,
        }
    }
}

impl Cell {
    /// Opens the side facing `dir`, regardless of whether it is open already.
    pub fn open(&mut self, dir: Direction) {
        match dir {
            Direction::North => self.north = true,
            Direction::East => self.east = true,
            Direction::South => self.south = true,
            Direction::West => self.west = true,
        }
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Symbolic tile name handed to the renderer: an optional `T` for tunnel
    /// cells followed by the open sides in `NESW` order. A cell with no
    /// openings at all maps to `BLACK`.
    pub fn tile_name(&self) -> String {
        let mut name = String::new();
        if self.tunnel {
            name.push('T');
        }
        if self.north {
            name.push('N');
        }
        if self.east {
            name.push('E');
        }
        if self.south {
            name.push('S');
        }
        if self.west {
            name.push('W');
        }
        if name.is_empty() {
            name.push_str("BLACK");
        }
        name
    }
}
