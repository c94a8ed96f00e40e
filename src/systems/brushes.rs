//! Brush injector: re-applies every active brush once per tick.
//!
//! Brushes are keyed by pointer id so several can paint at once. Inactive
//! brushes stay registered (the host still draws their outline).

use std::collections::BTreeMap;

use crate::domain::cell::{Cell, Flags, Material};
use crate::domain::materials::material_by_name;
use crate::spatial::geometry::circle_points;
use crate::spatial::grid::Grid;

/// Radius used when the host sends a zero size.
pub const DEFAULT_BRUSH_SIZE: i32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brush {
    pub x: i32,
    pub y: i32,
    /// Material name as sent by the palette (`"sand"`, `"oil well"`, `"eraser"`...).
    pub kind: String,
    pub size: i32,
    pub infect: bool,
    pub active: bool,
}

/// What a brush does to each cell it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    Paint(Cell),
    Erase,
}

impl Brush {
    pub fn new(x: i32, y: i32, kind: impl Into<String>, size: i32) -> Self {
        Self {
            x,
            y,
            kind: kind.into(),
            size,
            infect: false,
            active: true,
        }
    }

    pub fn radius(&self) -> i32 {
        if self.size <= 0 {
            DEFAULT_BRUSH_SIZE
        } else {
            self.size
        }
    }

    /// `None` for an unknown material name.
    pub fn stroke(&self) -> Option<Stroke> {
        match material_by_name(&self.kind)? {
            Material::Space => Some(Stroke::Erase),
            m => {
                let flags = if self.infect { Flags::INFECTANT } else { Flags::NONE };
                Some(Stroke::Paint(Cell::with_flags(m, flags)))
            }
        }
    }
}

/// Paint (or erase) one brush's disc. Returns the number of cells changed.
///
/// Painting is skipped while `population >= max_grains`; erasing never is.
pub fn apply_brush(grid: &mut Grid, brush: &Brush, max_grains: Option<u32>) -> u32 {
    let Some(stroke) = brush.stroke() else {
        log::warn!("brush: unknown material {:?}", brush.kind);
        return 0;
    };
    if let (Stroke::Paint(_), Some(cap)) = (stroke, max_grains) {
        if grid.population() >= cap {
            return 0;
        }
    }

    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let mut changed = 0;
    for (px, py) in circle_points(brush.x, brush.y, brush.radius(), true, w, h) {
        let hit = match stroke {
            Stroke::Paint(cell) => grid.spawn(px, py, cell),
            Stroke::Erase => grid.destroy(px, py),
        };
        changed += hit as u32;
    }
    changed
}

/// Registered brushes by pointer id.
#[derive(Clone, Debug, Default)]
pub struct Brushes {
    by_id: BTreeMap<u32, Brush>,
}

impl Brushes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the brush for `id`.
    pub fn add(&mut self, id: u32, brush: Brush) {
        self.by_id.insert(id, brush);
    }

    pub fn remove(&mut self, id: u32) -> Option<Brush> {
        self.by_id.remove(&id)
    }

    pub fn get(&self, id: u32) -> Option<&Brush> {
        self.by_id.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Brush)> {
        self.by_id.iter().map(|(id, b)| (*id, b))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
    }

    /// Apply every active brush in id order.
    pub fn apply_all(&self, grid: &mut Grid, max_grains: Option<u32>) -> u32 {
        self.by_id
            .values()
            .filter(|b| b.active)
            .map(|b| apply_brush(grid, b, max_grains))
            .sum()
    }
}
