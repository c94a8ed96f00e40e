//! Coprime step generator.
//!
//! Walking `(i * stride + offset) % range` for `i in 0..range` visits every
//! value in `[0, range)` exactly once when `gcd(stride, range) == 1`. The
//! stride is drawn uniformly (reservoir sampling) from the coprimes in the
//! upper half of the range so consecutive visits land far apart.

use rand::Rng;

/// Upper bound on coprime candidates considered per draw.
pub const RESERVOIR_CAP: u32 = 100_000;

/// Pick `(stride, offset)` for a full-period walk over `[0, range)`.
///
/// `range` 0 and 1 are degenerate and return `(1, 0)`.
pub fn step_params<R: Rng + ?Sized>(range: u32, rng: &mut R) -> (u32, u32) {
    if range <= 1 {
        return (1, 0);
    }
    let stride = select_coprime(range / 2, range, rng);
    let offset = rng.random_range(0..range);
    (stride, offset)
}

/// Convenience: roll fresh params and return the iterator directly.
pub fn permutation<R: Rng + ?Sized>(range: u32, rng: &mut R) -> Permutation {
    let (stride, offset) = step_params(range, rng);
    Permutation::new(range, stride, offset)
}

fn select_coprime<R: Rng + ?Sized>(min: u32, target: u32, rng: &mut R) -> u32 {
    let mut count = 0u32;
    let mut selected = 1u32;

    for val in min..target {
        if gcd(val, target) != 1 {
            continue;
        }
        count += 1;
        if count == 1 || rng.random_range(0..count) == 0 {
            selected = val;
        }
        // Cap reached: `val` is itself coprime, so the walk stays a bijection.
        if count == RESERVOIR_CAP {
            return val;
        }
    }
    selected
}

/// Binary (Stein) gcd.
pub fn gcd(mut u: u32, mut v: u32) -> u32 {
    if u == 0 {
        return v;
    }
    if v == 0 {
        return u;
    }
    let shift = (u | v).trailing_zeros();
    u >>= u.trailing_zeros();
    loop {
        v >>= v.trailing_zeros();
        if u > v {
            std::mem::swap(&mut u, &mut v);
        }
        v -= u;
        if v == 0 {
            break;
        }
    }
    u << shift
}

/// Iterator over one full-period walk.
#[derive(Clone, Debug)]
pub struct Permutation {
    range: u32,
    stride: u32,
    offset: u32,
    i: u32,
}

impl Permutation {
    pub fn new(range: u32, stride: u32, offset: u32) -> Self {
        Self {
            range,
            stride,
            offset,
            i: 0,
        }
    }

    /// Identity order, used when a caller wants a deterministic sweep.
    pub fn sequential(range: u32) -> Self {
        Self::new(range, 1, 0)
    }
}

impl Iterator for Permutation {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.i >= self.range {
            return None;
        }
        let v = (self.i as u64 * self.stride as u64 + self.offset as u64) % self.range as u64;
        self.i += 1;
        Some(v as u32)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.range - self.i) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Permutation {}
