/// Seeded linear congruential generator used for decorative choices.
///
/// Parameters are the Numerical Recipes constants (`a = 1664525`, `c = 1013904223`,
/// `m = 2^32`). The first draw is taken after one step, never from the raw seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0; // 2^32

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns it.
    pub fn next_u32(&mut self) -> u32 {
        // `u32` wrapping arithmetic is exactly `mod 2^32`.
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / MODULUS
    }
}
