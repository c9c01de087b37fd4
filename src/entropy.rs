use rand::{Rng, RngCore};

/// Source of randomness injected into every sampling call.
///
/// Not shareable across threads by itself: give each caller its own source or
/// wrap a shared one in a `Mutex`.
pub trait EntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;
}

impl<R: RngCore> EntropySource for R {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RngCore::fill_bytes(self, dest);
    }

    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}
