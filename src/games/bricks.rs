pub const BRICK_ROWS: usize = 5;
pub const BRICK_COLUMNS: usize = 10;
pub const BRICK_WIDTH: i32 = 60;
pub const BRICK_HEIGHT: i32 = 20;

/// Alive flags for the fixed brick wall, indexed `[row][column]`.
#[derive(Clone, Debug, PartialEq)]
pub struct BrickGrid {
    cells: [[bool; BRICK_COLUMNS]; BRICK_ROWS],
}

impl BrickGrid {
    pub fn new() -> Self {
        Self {
            cells: [[true; BRICK_COLUMNS]; BRICK_ROWS],
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Knock out a brick. Returns false if it was already gone.
    pub fn destroy(&mut self, row: usize, col: usize) -> bool {
        let cell = &mut self.cells[row][col];
        if !*cell {
            return false;
        }
        *cell = false;
        true
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().flatten().filter(|alive| **alive).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.cells.iter().flatten().all(|alive| !alive)
    }

    /// Pixel bounds `(left, top, right, bottom)` of a cell, edges inclusive.
    pub fn bounds(row: usize, col: usize) -> (i32, i32, i32, i32) {
        let left = col as i32 * BRICK_WIDTH;
        let top = row as i32 * BRICK_HEIGHT;
        (left, top, left + BRICK_WIDTH, top + BRICK_HEIGHT)
    }

    /// Alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(move |(col, _)| (row, col))
        })
    }
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}
