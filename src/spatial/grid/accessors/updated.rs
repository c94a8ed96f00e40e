use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    // === Updated marker ===
    /// Out-of-bounds positions count as updated so nothing tries to act on them.
    #[inline]
    pub fn is_updated(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return true;
        }
        *fast!(self.updated, [self.index(x, y)]) == 1
    }

    #[inline]
    pub fn is_updated_idx(&self, idx: usize) -> bool {
        *fast!(self.updated, [idx]) == 1
    }

    #[inline]
    pub fn set_updated(&mut self, x: i32, y: i32, u: bool) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        fast!(self.updated, [idx] = u as u8);
    }

    /// Clear the marker array. Runs once per pass.
    #[inline]
    pub fn reset_updated(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.updated.par_iter_mut().for_each(|v| *v = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.updated.fill(0);
        }
    }
}
