//! Grid - authoritative cell storage.
//!
//! Two parallel arrays: `cells` (one `Cell` per position) and `updated`
//! (1 when the cell was acted on this pass). Reaction rules never write
//! `cells` directly; they go through the primitives in `moves.rs` and
//! `neighbours.rs`, which keep the marker array and the population counter
//! consistent.

use crate::domain::cell::{Cell, Flags, Material};

mod indexing;
mod accessors;
mod moves;
mod neighbours;

/// 8-neighbourhood offsets, clockwise from north.
pub const NEIGHBOURS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Which neighbours an `infect` call reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reach {
    /// Every non-empty neighbour.
    Occupied,
    /// Only empty neighbours.
    Empty,
    /// Non-empty neighbours picked out by the selector.
    Matching(Selector),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    Material(Material),
    Flag(Flags),
}

impl Selector {
    #[inline]
    pub fn matches(self, cell: Cell) -> bool {
        match self {
            Selector::Material(m) => cell.material == m,
            Selector::Flag(f) => cell.flags.intersects(f),
        }
    }
}

/// What a reached neighbour turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strain {
    /// Overwrite through `spawn` (marks the neighbour).
    Become(Cell),
    AddFlags(Flags),
    RemoveFlags(Flags),
    /// Swap the material, keep the flags.
    Transmute(Material),
}

/// Primitive operation counts since the last `take_op_counts`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub moves: u32,
    pub swaps: u32,
    pub spawns: u32,
    pub destroys: u32,
}

/// SoA grid: cells plus the per-pass marker array.
#[derive(Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) cells: Vec<Cell>,
    pub(crate) updated: Vec<u8>,

    population: u32,
    ops: OpCounts,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Cell::EMPTY; size],
            updated: vec![0; size],
            population: 0,
            ops: OpCounts::default(),
        }
    }

    /// Empty every cell and clear the markers.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.reset_updated();
        self.population = 0;
    }

    /// Copy cells from a grid of the same size without reallocating.
    /// Used for the life snapshot; markers and counters are not copied.
    pub fn copy_cells_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.size, other.size);
        self.cells.copy_from_slice(&other.cells);
        self.population = other.population;
    }

    /// Recount population from scratch (after bulk loads).
    pub(crate) fn recount_population(&mut self) {
        self.population = self.cells.iter().filter(|c| !c.is_empty()).count() as u32;
    }
}
