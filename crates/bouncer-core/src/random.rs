use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source of uniform randomness for initial placement and recoloring.
///
/// The browser client uses an OS-seeded [`StdRng`]; tests substitute a
/// scripted sequence so bounce colors and start positions are predictable.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize {
        let i = (self.next_unit() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }

    /// Fair coin: `true` when the sample lands above one half.
    fn coin_flip(&mut self) -> bool {
        self.next_unit() > 0.5
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Deterministic generator for reproducible runs.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
