use super::super::*;

impl Grid {
    // === Cell reads ===
    /// Cell at `(x, y)`; past the edge reads as `Cell::SOLID`.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if !self.in_bounds(x, y) {
            return Cell::SOLID;
        }
        *fast!(self.cells, [self.index(x, y)])
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> Cell {
        *fast!(self.cells, [idx])
    }

    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of non-empty cells.
    #[inline]
    pub fn population(&self) -> u32 {
        self.population
    }

    // === Raw write ===
    /// Write without touching the marker. Keeps the population exact.
    #[inline]
    pub(crate) fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        let prev = *fast!(self.cells, [idx]);
        match (prev.is_empty(), cell.is_empty()) {
            (true, false) => self.population += 1,
            (false, true) => self.population -= 1,
            _ => {}
        }
        fast!(self.cells, [idx] = cell);
    }

    // === Op counters ===
    pub fn op_counts(&self) -> OpCounts {
        self.ops
    }

    pub fn take_op_counts(&mut self) -> OpCounts {
        std::mem::take(&mut self.ops)
    }
}
