/// Deterministic RNG for simulation decisions.
///
/// Intentionally small and dependency-free; **not** cryptographic. An agent
/// seeds one generator at construction, so a fixed seed replays the same
/// decision stream tick for tick.
pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    /// Uniform float in (0, 1), built from 24 bits of mantissa.
    fn next_f32_unit(&mut self) -> f32 {
        let x = (self.next_u64() >> 40) as u32;
        (x as f32) / ((1u32 << 24) as f32)
    }

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// SplitMix64: a small, fast generator with good statistical quality for
/// its size. Plenty for 50/50 behavior choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}
