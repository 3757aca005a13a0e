/// Seeded 32-bit PRNG (mulberry32) producing floats in `[0, 1)`.
///
/// The stream is a pure function of the seed and the number of draws taken so far; there is no
/// platform entropy anywhere in it. Any implementation of the same mixing steps reproduces the
/// same stream bit for bit, which is what makes a seed shareable.
#[derive(Clone, Copy, Debug)]
pub struct Mulberry32(u32);

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// Start a stream at `seed`.
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(Self::INCREMENT);
        let mut t = self.0;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/rng.rs"]
mod tests;
