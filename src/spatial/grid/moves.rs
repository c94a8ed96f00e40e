//! Mutation primitives. These are the only writers the rules use.

use super::*;

impl Grid {
    /// Move the cell at `(x1, y1)` into `(x2, y2)`.
    ///
    /// Only succeeds into Space. Marks the destination, not the source, so the
    /// vacated cell can still be entered later in the same pass.
    pub fn move_cell(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        if !self.in_bounds(x1, y1) || !self.in_bounds(x2, y2) {
            return false;
        }
        let src = self.get(x1, y1);
        if src.is_empty() {
            return false;
        }
        let dst = self.get(x2, y2);
        if !dst.is_empty() {
            log::trace!("move ({x1},{y1}) -> ({x2},{y2}) blocked by {dst}");
            return false;
        }

        self.set(x1, y1, Cell::EMPTY);
        self.set(x2, y2, src);
        self.set_updated(x2, y2, true);
        self.ops.moves += 1;
        true
    }

    /// Exchange two cells and mark both. Refuses when either side is off-grid.
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        if !self.in_bounds(x1, y1) || !self.in_bounds(x2, y2) {
            return false;
        }
        let a = self.index(x1, y1);
        let b = self.index(x2, y2);
        self.cells.swap(a, b);
        fast!(self.updated, [a] = 1);
        fast!(self.updated, [b] = 1);
        self.ops.swaps += 1;
        true
    }

    /// Overwrite `(x, y)` with `cell` and mark it.
    ///
    /// No-op off-grid, or when the cell already holds that material with at
    /// least those flags. Occupied cells are overwritten too.
    pub fn spawn(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if self.get(x, y).contains(cell) {
            return false;
        }
        self.set(x, y, cell);
        self.set_updated(x, y, true);
        self.ops.spawns += 1;
        true
    }

    /// Empty `(x, y)`. Returns false when it already was.
    pub fn destroy(&mut self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) || self.get(x, y).is_empty() {
            return false;
        }
        self.set(x, y, Cell::EMPTY);
        self.ops.destroys += 1;
        true
    }
}
