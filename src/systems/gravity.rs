//! Gravity vector and the grid steps derived from it.

/// Current "down" plus the derived unit steps. Recomputed only on change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity {
    x: f32,
    y: f32,
    down: (i32, i32),
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            down: (0, 1),
        }
    }
}

impl Gravity {
    /// `None` for a zero or non-finite vector.
    pub fn new(x: f32, y: f32) -> Option<Self> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let len = (x * x + y * y).sqrt();
        if len < f32::EPSILON {
            return None;
        }
        let (nx, ny) = (x / len, y / len);
        // |component| >= 1/sqrt(2) on the major axis, so this never rounds to (0, 0).
        let down = (nx.round() as i32, ny.round() as i32);
        Some(Self { x, y, down })
    }

    /// 0 degrees points at +Y; positive angles rotate toward -X.
    pub fn from_angle(degrees: f32) -> Option<Self> {
        let rad = degrees.to_radians();
        Self::new(-rad.sin(), rad.cos())
    }

    #[inline]
    pub fn vector(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn down(&self) -> (i32, i32) {
        self.down
    }

    #[inline]
    pub fn up(&self) -> (i32, i32) {
        (-self.down.0, -self.down.1)
    }

    /// The two perpendiculars of `down`, as `(left, right)`.
    #[inline]
    pub fn sides(&self) -> ((i32, i32), (i32, i32)) {
        perp_dirs(self.down.0, self.down.1)
    }

    #[inline]
    pub fn left(&self) -> (i32, i32) {
        self.sides().0
    }

    #[inline]
    pub fn right(&self) -> (i32, i32) {
        self.sides().1
    }
}

/// `dir + lateral` clamped to a neighbouring cell. Under diagonal gravity
/// the raw sum is two cells away; clamping picks the orthogonal neighbour
/// that shares an edge with both.
#[inline]
pub fn slant(dir: (i32, i32), lateral: (i32, i32)) -> (i32, i32) {
    ((dir.0 + lateral.0).clamp(-1, 1), (dir.1 + lateral.1).clamp(-1, 1))
}

/// 90 degree rotations of `(dx, dy)`: `(-dy, dx)` and `(dy, -dx)`.
#[inline]
pub fn perp_dirs(dx: i32, dy: i32) -> ((i32, i32), (i32, i32)) {
    ((-dy, dx), (dy, -dx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_down() {
        let g = Gravity::default();
        assert_eq!(g.down(), (0, 1));
        assert_eq!(g.up(), (0, -1));
        assert_eq!(g.sides(), ((-1, 0), (1, 0)));
    }

    #[test]
    fn rejects_degenerate_vectors() {
        assert!(Gravity::new(0.0, 0.0).is_none());
        assert!(Gravity::new(f32::NAN, 1.0).is_none());
        assert!(Gravity::new(f32::INFINITY, 0.0).is_none());
    }

    #[test]
    fn angles_map_to_grid_steps() {
        assert_eq!(Gravity::from_angle(0.0).map(|g| g.down()), Some((0, 1)));
        assert_eq!(Gravity::from_angle(90.0).map(|g| g.down()), Some((-1, 0)));
        assert_eq!(Gravity::from_angle(180.0).map(|g| g.down()), Some((0, -1)));
        assert_eq!(Gravity::from_angle(45.0).map(|g| g.down()), Some((-1, 1)));
    }

    #[test]
    fn slant_stays_adjacent() {
        assert_eq!(slant((0, 1), (-1, 0)), (-1, 1));
        assert_eq!(slant((0, 1), (1, 0)), (1, 1));
        let g = Gravity::new(1.0, 1.0).unwrap();
        let (l, r) = g.sides();
        assert_eq!(slant(g.down(), l), (0, 1));
        assert_eq!(slant(g.down(), r), (1, 0));
        assert_eq!(slant(g.up(), l), (-1, 0));
    }

    #[test]
    fn small_vectors_still_normalise() {
        let g = Gravity::new(0.0, 0.001).map(|g| g.down());
        assert_eq!(g, Some((0, 1)));
    }
}
