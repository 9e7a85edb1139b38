use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Independent stream for one round, reproducible from the game seed alone.
    pub fn for_round(seed: u64, round: u32) -> Self {
        let mixed = seed ^ u64::from(round).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self::from_seed(mixed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform index in `0..len`; `len` must be non-zero.
    pub fn pick(&mut self, len: usize) -> usize {
        (self.rng.next_u64() % len as u64) as usize
    }

    pub fn coin(&mut self) -> bool {
        self.rng.next_u64() & 1 == 1
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
