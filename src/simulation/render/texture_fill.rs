//! RGBA8 texture fill for the host canvas.
//!
//! Row-major, 4 bytes per cell. Empty cells are transparent black; burning
//! cells flicker between their two burn colours (90% first, 10% second).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::cell::Cell;
use crate::domain::materials::props;
use crate::spatial::grid::Grid;

/// Share of flickering pixels drawn in the secondary burn colour.
const FLICKER_SECONDARY: u32 = u32::MAX / 10;

/// Fill `out` (resized to `width * height * 4`) from the grid. `seed` varies
/// the flicker between frames; the grid is not touched.
pub fn fill_color_buffer(grid: &Grid, out: &mut Vec<u8>, seed: u32) {
    let width = grid.width() as usize;
    out.resize(grid.size() * 4, 0);
    if width == 0 {
        return;
    }
    let cells = grid.cells();

    #[cfg(feature = "parallel")]
    {
        out.par_chunks_mut(width * 4)
            .enumerate()
            .for_each(|(y, row)| fill_row(&cells[y * width..(y + 1) * width], row, y * width, seed));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in out.chunks_mut(width * 4).enumerate() {
            fill_row(&cells[y * width..(y + 1) * width], row, y * width, seed);
        }
    }
}

fn fill_row(cells: &[Cell], row: &mut [u8], base: usize, seed: u32) {
    for (i, (cell, px)) in cells.iter().zip(row.chunks_exact_mut(4)).enumerate() {
        px.copy_from_slice(&pixel(*cell, (base + i) as u32, seed));
    }
}

#[inline]
fn pixel(cell: Cell, idx: u32, seed: u32) -> [u8; 4] {
    if cell.is_empty() {
        return [0, 0, 0, 0];
    }
    let p = props(cell.material);
    let [r, g, b] = match p.burn_colors {
        Some((main, flicker)) if cell.burning() => {
            if xorshift32(idx ^ seed) < FLICKER_SECONDARY {
                flicker
            } else {
                main
            }
        }
        _ => p.color,
    };
    [r, g, b, 255]
}

/// Per-pixel hash: one xorshift32 round over a scrambled index.
#[inline]
fn xorshift32(v: u32) -> u32 {
    let mut x = v.wrapping_mul(0x9E37_79B9) | 1;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::{Flags, Material};

    #[test]
    fn empty_is_transparent_and_solid_is_opaque() {
        let mut grid = Grid::new(3, 2);
        grid.spawn(1, 1, Cell::new(Material::Sand));
        let mut buf = Vec::new();
        fill_color_buffer(&grid, &mut buf, 7);

        assert_eq!(buf.len(), 3 * 2 * 4);
        assert_eq!(&buf[0..4], &[0, 0, 0, 0]);
        let i = (1 * 3 + 1) * 4;
        let [r, g, b] = props(Material::Sand).color;
        assert_eq!(&buf[i..i + 4], &[r, g, b, 255]);
    }

    #[test]
    fn burning_cells_mostly_use_primary_burn_colour() {
        let mut grid = Grid::new(100, 100);
        let burning = Cell::with_flags(Material::Oil, Flags::BURNING);
        for x in 0..100 {
            for y in 0..100 {
                grid.spawn(x, y, burning);
            }
        }
        let mut buf = Vec::new();
        fill_color_buffer(&grid, &mut buf, 99);

        let (main, flicker) = props(Material::Oil).burn_colors.unwrap();
        let px: Vec<&[u8]> = buf.chunks_exact(4).collect();
        let mains = px.iter().filter(|p| p[..3] == main).count();
        let flickers = px.iter().filter(|p| p[..3] == flicker).count();

        assert_eq!(mains + flickers, 10_000);
        assert!((8_500..9_500).contains(&mains), "mains = {mains}");
    }

    #[test]
    fn fill_leaves_grid_untouched() {
        let mut grid = Grid::new(4, 4);
        grid.spawn(0, 0, Cell::new(Material::Water));
        let before = grid.cells().to_vec();
        let mut buf = Vec::new();
        fill_color_buffer(&grid, &mut buf, 1);
        assert_eq!(grid.cells(), &before[..]);
    }
}
