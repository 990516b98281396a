use crate::maze::{Direction, cell::Cell};

/// Fixed-size arena of [`Cell`]s, row-major. Cells are never added or
/// removed after construction; only their flags mutate.
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        let data = vec![Cell::default(); width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// The neighbour of `from` one cell towards `dir`, or `None` at the
    /// grid boundary.
    pub fn step(&self, from: (u16, u16), dir: Direction) -> Option<(u16, u16)> {
        self.offset(from, dir, 1)
    }

    /// The cell `dist` steps from `from` towards `dir`, or `None` if that
    /// lands outside the grid.
    pub fn offset(&self, from: (u16, u16), dir: Direction, dist: u32) -> Option<(u16, u16)> {
        let (dx, dy) = dir.delta();
        let x = from.0 as i64 + dx as i64 * dist as i64;
        let y = from.1 as i64 + dy as i64 * dist as i64;
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some((x as u16, y as u16))
        }
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
