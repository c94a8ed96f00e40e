//! Explosions: growing fire discs spawned by detonating C4.

use crate::domain::cell::{Cell, Material};
use crate::spatial::geometry::circle_points;
use crate::spatial::grid::Grid;

#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    /// Radius gained per update; zero once the limit is reached.
    pub force: i32,
    pub radius: i32,
    pub limit: i32,
    /// Already grown this tick.
    pub updated: bool,
}

impl Explosion {
    pub fn new(x: i32, y: i32, force: i32, limit: i32) -> Self {
        Self {
            x,
            y,
            force: force.max(0),
            radius: 0,
            limit: limit.max(0),
            updated: false,
        }
    }

    /// Grow by `force`, clamped to `limit`. Reaching the limit spends the force.
    pub fn update(&mut self) {
        self.radius = (self.radius + self.force).min(self.limit);
        self.updated = true;
        if self.radius >= self.limit {
            self.force = 0;
        }
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.force == 0
    }
}

/// Active explosion list owned by the simulation.
#[derive(Clone, Debug, Default)]
pub struct Explosions {
    active: Vec<Explosion>,
}

impl Explosions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, x: i32, y: i32, force: i32, limit: i32) {
        log::debug!("explosion at ({x},{y}) force={force} limit={limit}");
        self.active.push(Explosion::new(x, y, force, limit));
    }

    /// Grow every explosion not yet grown this tick and paint its disc as
    /// fire, then drop spent ones. Returns the number of cells painted.
    pub fn propagate(&mut self, grid: &mut Grid) -> u32 {
        if self.active.is_empty() {
            return 0;
        }
        let fire = Cell::new(Material::Fire);
        let (w, h) = (grid.width() as i32, grid.height() as i32);
        let mut painted = 0;

        for exp in self.active.iter_mut().filter(|e| !e.updated) {
            exp.update();
            for (px, py) in circle_points(exp.x, exp.y, exp.radius, true, w, h) {
                painted += grid.spawn(px, py, fire) as u32;
            }
        }

        let before = self.active.len();
        self.active.retain(|e| !e.is_spent());
        if self.active.len() != before {
            log::debug!("pruned {} spent explosion(s)", before - self.active.len());
        }
        painted
    }

    /// Frame end: allow every explosion to grow again next tick.
    pub fn end_frame(&mut self) {
        for exp in &mut self.active {
            exp.updated = false;
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn as_slice(&self) -> &[Explosion] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_grows_by_force_then_clamps() {
        let mut e = Explosion::new(0, 0, 40, 100);
        e.update();
        assert_eq!((e.radius, e.force), (40, 40));
        e.update();
        assert_eq!((e.radius, e.force), (80, 40));
        e.update();
        assert_eq!((e.radius, e.force), (100, 0));
        assert!(e.is_spent());
    }

    #[test]
    fn propagate_paints_fire_and_prunes() {
        let mut grid = Grid::new(50, 50);
        let mut list = Explosions::new();
        list.trigger(25, 25, 5, 8);

        let painted = list.propagate(&mut grid);
        assert!(painted > 0);
        assert_eq!(grid.get(25, 25), Cell::new(Material::Fire));
        assert_eq!(list.as_slice()[0].radius, 5);

        // Already grown this tick: no second growth until end_frame.
        list.propagate(&mut grid);
        assert_eq!(list.as_slice()[0].radius, 5);

        list.end_frame();
        list.propagate(&mut grid);
        assert!(list.is_empty());
    }
}
