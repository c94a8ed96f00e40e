//! Line interpolation between two grid points.
//!
//! The major axis advances one cell per step and the minor axis by
//! `floor(i * slope)` with `slope = (min + 1) / (max + 1)`. This lands exactly
//! on the end point in every octant without a per-octant branch.

/// Walk from just after `(x1, y1)` to `(x2, y2)` inclusive.
///
/// Identical endpoints yield an empty walk.
#[inline]
pub fn interpolate(x1: i32, y1: i32, x2: i32, y2: i32) -> Line {
    Line::new(x1, y1, x2, y2)
}

#[derive(Clone, Debug)]
pub struct Line {
    x1: i32,
    y1: i32,
    x_step: i32,
    y_step: i32,
    x_major: bool,
    slope: f64,
    len: i32,
    i: i32,
}

impl Line {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let (adx, ady) = (dx.abs(), dy.abs());
        let major = adx.max(ady);
        let minor = adx.min(ady);
        let slope = if minor == 0 || major == 0 {
            0.0
        } else {
            (minor + 1) as f64 / (major + 1) as f64
        };

        Self {
            x1,
            y1,
            x_step: if dx < 0 { -1 } else { 1 },
            y_step: if dy < 0 { -1 } else { 1 },
            x_major: adx > ady,
            slope,
            len: major,
            i: 0,
        }
    }
}

impl Iterator for Line {
    type Item = (i32, i32);

    #[inline]
    fn next(&mut self) -> Option<(i32, i32)> {
        if self.i >= self.len {
            return None;
        }
        self.i += 1;
        let along = self.i;
        let across = (along as f64 * self.slope).floor() as i32;
        let (ix, iy) = if self.x_major {
            (along, across)
        } else {
            (across, along)
        };
        Some((self.x1 + ix * self.x_step, self.y1 + iy * self.y_step))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.len - self.i) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Line {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_run_excludes_start_includes_end() {
        let pts: Vec<_> = interpolate(0, 0, 5, 0).collect();
        assert_eq!(pts, vec![(1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn diagonal_has_no_skipped_steps() {
        let pts: Vec<_> = interpolate(0, 0, 3, 3).collect();
        assert_eq!(pts, vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn identical_points_are_empty() {
        assert_eq!(interpolate(4, 9, 4, 9).count(), 0);
    }

    #[test]
    fn every_octant_ends_on_target() {
        let targets = [
            (7, 2),
            (2, 7),
            (-7, 2),
            (-2, 7),
            (7, -2),
            (2, -7),
            (-7, -2),
            (-2, -7),
            (0, -4),
            (-4, 0),
        ];
        for (tx, ty) in targets {
            let pts: Vec<_> = interpolate(10, 10, 10 + tx, 10 + ty).collect();
            assert_eq!(pts.len() as i32, tx.abs().max(ty.abs()));
            assert_eq!(*pts.last().unwrap(), (10 + tx, 10 + ty));
            // Each step moves at most one cell on each axis.
            let mut prev = (10, 10);
            for p in pts {
                assert!((p.0 - prev.0).abs() <= 1 && (p.1 - prev.1).abs() <= 1);
                prev = p;
            }
        }
    }
}
