mod cells;
mod updated;
