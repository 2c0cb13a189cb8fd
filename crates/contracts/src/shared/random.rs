//! Injectable source of uniform random draws.
//!
//! Catalog generation never reaches for a global generator: callers pass a
//! `RandomSource`, so the browser can use `Math.random` while tests replay a
//! seeded or scripted sequence.

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_unit() * len as f64).floor() as usize;
        scaled.min(len - 1)
    }

    /// Uniform integer in the closed range `[min, max]`.
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        let span = u64::from(max - min) + 1;
        let offset = ((self.next_unit() * span as f64).floor() as u64).min(span - 1);
        min + offset as u32
    }
}
