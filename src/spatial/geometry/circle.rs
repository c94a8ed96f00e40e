//! Circle rasterizer for brushes and explosion discs.
//!
//! `radius` counts rings: ring `r` for `r in 0..radius` is sampled by angle,
//! so the outermost ring sits at distance `radius - 1` from the centre and a
//! radius of 1 (or 0) is just the centre cell.

use std::f64::consts::TAU;

/// Angular samples per ring (step of roughly 0.006 rad).
const SEGMENTS: usize = 1000;

/// Points of the disc (`fill`) or its outermost ring, clipped to
/// `[0, width) x [0, height)`. The result has no duplicates.
pub fn circle_points(cx: i32, cy: i32, radius: i32, fill: bool, width: i32, height: i32) -> Vec<(i32, i32)> {
    let in_bounds = |x: i32, y: i32| x >= 0 && y >= 0 && x < width && y < height;

    if radius <= 1 || width <= 0 || height <= 0 {
        return if in_bounds(cx, cy) { vec![(cx, cy)] } else { Vec::new() };
    }

    // Only rings between the nearest and farthest grid cell can land on it.
    let (near, far) = ring_span(cx, cy, width, height);
    if near > radius as i64 {
        return Vec::new();
    }
    let radius = radius.min(far.min(i32::MAX as i64) as i32);
    let first_ring = if fill { 0 } else { radius - 1 };
    let first_ring = first_ring.max((near - 2).clamp(0, i32::MAX as i64) as i32);
    let step = TAU / SEGMENTS as f64;
    let area = (width as usize).saturating_mul(height as usize);
    let disc = (radius as usize).saturating_mul(radius as usize).saturating_mul(4);
    let mut points = Vec::with_capacity(disc.min(area));

    for r in first_ring..radius {
        if r == 0 {
            if in_bounds(cx, cy) {
                points.push((cx, cy));
            }
            continue;
        }
        let rf = r as f64;
        for s in 0..SEGMENTS {
            let a = s as f64 * step;
            let x = cx as i64 + (rf * a.sin()).floor() as i64;
            let y = cy as i64 + (rf * a.cos()).floor() as i64;
            if x >= 0 && y >= 0 && x < width as i64 && y < height as i64 {
                points.push((x as i32, y as i32));
            }
        }
    }

    points.sort_unstable();
    points.dedup();
    points
}

/// Distance range (rounded outward) from the centre to the grid rectangle.
fn ring_span(cx: i32, cy: i32, width: i32, height: i32) -> (i64, i64) {
    let axis = |c: i32, len: i32| {
        let (c, hi) = (c as i64, len as i64 - 1);
        let near = if c < 0 { -c } else if c > hi { c - hi } else { 0 };
        let far = c.abs().max((c - hi).abs());
        (near, far)
    };
    let (nx, fx) = axis(cx, width);
    let (ny, fy) = axis(cy, height);
    let dist = |a: i64, b: i64| ((a * a + b * b) as f64).sqrt();
    (dist(nx, ny).floor() as i64, dist(fx, fy).ceil() as i64 + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_one_is_the_centre() {
        assert_eq!(circle_points(5, 5, 1, true, 10, 10), vec![(5, 5)]);
        assert_eq!(circle_points(5, 5, 0, false, 10, 10), vec![(5, 5)]);
        assert!(circle_points(-1, 5, 1, true, 10, 10).is_empty());
    }

    #[test]
    fn filled_disc_has_no_holes_near_centre() {
        let pts = circle_points(50, 50, 6, true, 100, 100);
        for dx in -3..=3 {
            for dy in -3..=3 {
                if dx * dx + dy * dy <= 9 {
                    assert!(pts.contains(&(50 + dx, 50 + dy)), "missing ({dx},{dy})");
                }
            }
        }
        assert!(pts.iter().all(|&(x, y)| (x - 50).abs() <= 6 && (y - 50).abs() <= 6));
    }

    #[test]
    fn outline_excludes_centre() {
        let pts = circle_points(50, 50, 10, false, 100, 100);
        assert!(!pts.contains(&(50, 50)));
        assert!(pts.len() > 20);
    }

    #[test]
    fn huge_radius_is_clamped_to_the_grid() {
        let ring = circle_points(5, 5, 50_000, false, 10, 10);
        assert!(ring.is_empty(), "outline lies far outside a 10x10 grid");

        let disc = circle_points(5, 5, i32::MAX, true, 10, 10);
        for corner in [(0, 0), (9, 0), (0, 9), (9, 9)] {
            assert!(disc.contains(&corner), "missing {corner:?}");
        }

        assert!(circle_points(-40_000, 5, 100, true, 10, 10).is_empty());
    }

    #[test]
    fn clipped_to_bounds() {
        let pts = circle_points(0, 0, 8, true, 20, 20);
        assert!(pts.iter().all(|&(x, y)| (0..20).contains(&x) && (0..20).contains(&y)));
        assert!(pts.contains(&(0, 0)));
    }
}
