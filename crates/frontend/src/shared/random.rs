use contracts::shared::random::RandomSource;

/// `Math.random` as a [`RandomSource`].
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
