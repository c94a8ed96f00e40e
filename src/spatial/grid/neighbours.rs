//! 8-neighbourhood queries and contagion.

use super::*;

impl Grid {
    /// Apply `strain` to every neighbour of `(x, y)` picked out by `reach`.
    /// Returns how many neighbours changed.
    ///
    /// `Become` goes through `spawn` and marks; flag and material edits are
    /// in-place and leave the marker alone.
    pub fn infect(&mut self, x: i32, y: i32, reach: Reach, strain: Strain) -> u32 {
        let mut changed = 0;
        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            if !self.in_bounds(nx, ny) {
                continue;
            }
            let n = self.get(nx, ny);
            let reached = match reach {
                Reach::Occupied => !n.is_empty(),
                Reach::Empty => n.is_empty(),
                Reach::Matching(sel) => !n.is_empty() && sel.matches(n),
            };
            if !reached {
                continue;
            }

            let hit = match strain {
                Strain::Become(cell) => self.spawn(nx, ny, cell),
                Strain::AddFlags(f) => self.rewrite(nx, ny, n, n.add_flags(f)),
                Strain::RemoveFlags(f) => self.rewrite(nx, ny, n, n.remove_flags(f)),
                Strain::Transmute(m) => self.rewrite(nx, ny, n, Cell::with_flags(m, n.flags)),
            };
            if hit {
                changed += 1;
            }
        }
        changed
    }

    #[inline]
    fn rewrite(&mut self, x: i32, y: i32, prev: Cell, next: Cell) -> bool {
        if prev == next {
            return false;
        }
        self.set(x, y, next);
        true
    }

    /// Count in-bounds neighbours that are non-empty, or with `exclusive`,
    /// identical to the centre cell.
    pub fn count_neighbours(&self, x: i32, y: i32, exclusive: bool) -> u32 {
        let centre = self.get(x, y);
        let mut count = 0;
        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            if !self.in_bounds(nx, ny) {
                continue;
            }
            let n = self.get(nx, ny);
            let hit = if exclusive { n == centre } else { !n.is_empty() };
            count += hit as u32;
        }
        count
    }

    /// True when all 8 neighbours exist and equal the centre cell.
    pub fn surrounded(&self, x: i32, y: i32) -> bool {
        let centre = self.get(x, y);
        NEIGHBOURS.iter().all(|&(dx, dy)| {
            let (nx, ny) = (x + dx, y + dy);
            self.in_bounds(nx, ny) && self.get(nx, ny) == centre
        })
    }
}
