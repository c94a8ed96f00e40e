//! Zero-cost indexing for the cell arrays.
//!
//! The grid touches its `cells` and `updated` arrays several hundred thousand
//! times per tick. Callers always validate coordinates first (`in_bounds`), so
//! release builds skip the second bounds check while debug builds keep it.
//!
//! ```rust
//! use dust_engine::fast;
//!
//! let markers = vec![0u8, 1, 0, 1];
//! assert_eq!(*fast!(markers, [1]), 1);
//!
//! let mut cells = vec![0u32; 4];
//! fast!(cells, [3] = 2048);
//! assert_eq!(cells[3], 2048);
//! ```

/// Slice access that is bounds-checked in debug and unchecked in release.
///
/// - Read: `fast!(slice, [index])` yields a reference.
/// - Write: `fast!(slice, [index] = value)`.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let markers = vec![0u8, 0, 1, 0];
        assert_eq!(*fast!(markers, [2]), 1);
    }

    #[test]
    fn test_fast_write() {
        let mut markers = vec![0u8; 4];
        fast!(markers, [0] = 1);
        assert_eq!(markers, vec![1, 0, 0, 0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let markers = vec![0u8; 3];
        let _ = *fast!(markers, [10]);
    }
}
