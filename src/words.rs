use rand_core::RngCore;

use crate::prng::SplitMix64;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Deterministic generator of synthetic words for benchmarks and torture
/// tests.
///
/// Letters are drawn from a 32-letter window of [`ALPHABET`]; lengths follow
/// a sum-of-small-uniforms distribution so short and mid-size words dominate,
/// the way real dictionaries do.
#[derive(Clone, Debug)]
pub struct WordGen {
    rng: SplitMix64,
}

impl WordGen {
    pub const DEFAULT_SEED: u64 = 7_704_749_946_690_769_748;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
        }
    }

    /// A length in `0..=max_len`, biased toward `max_len / 2`.
    pub fn gen_len(&mut self, max_len: usize) -> usize {
        let q = max_len / 3;
        let r = max_len % 3;
        let mut len = 0;
        for _ in 0..q {
            len += (self.rng.next_u64() & 3) as usize;
        }
        len += self.rng.next_u64() as usize % (r + 1);
        debug_assert!(len <= max_len);
        len
    }

    /// A length within a few bytes of `max_len`.
    pub fn gen_len_almost_full(&mut self, max_len: usize) -> usize {
        if max_len <= 4 {
            let max_cut = max_len / 2;
            return max_len - self.rng.next_u64() as usize % (max_cut + 1);
        }
        max_len - (self.rng.next_u64() & 3) as usize
    }

    pub fn fill(&mut self, buf: &mut [u8]) {
        for b in buf {
            *b = ALPHABET[(self.rng.next_u64() & 31) as usize];
        }
    }

    pub fn word(&mut self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf);
        buf
    }
}
