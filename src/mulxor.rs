use std::ffi::CStr;

use arrayref::array_ref;

use crate::consts::{
    BLOCK_SIZE, PRIME_32, PRIME_64, PRIME_MODINV_32, PRIME_MODINV_64, SEED_32, SEED_64,
};
use crate::seq_hash::{RewindHash, SeqHash};

/// Pack 1-3 trailing bytes little-endian; missing high bytes are zero.
#[inline]
fn pack_partial(tail: &[u8]) -> u32 {
    debug_assert!(!tail.is_empty() && tail.len() < BLOCK_SIZE);
    let mut v = tail[0] as u32;
    if tail.len() > 1 {
        v |= (tail[1] as u32) << 8;
        if tail.len() > 2 {
            v |= (tail[2] as u32) << 16;
        }
    }
    v
}

macro_rules! mulxor_impl {
    (
        $(#[$doc:meta])*
        $name:ident, $word:ty, $prime:expr, $modinv:expr, $seed:expr
    ) => {
        $(#[$doc])*
        ///
        /// The accumulator is deliberately opaque: it is not the hash value
        /// (use [`SeqHash::finish`]) and does not implement `Eq` or `Hash`,
        /// so a mid-computation state cannot be mistaken for one.
        #[derive(Copy, Clone, Debug)]
        pub struct $name {
            accum: $word,
        }

        impl $name {
            #[inline]
            fn feed(&mut self, v: u32) {
                self.accum ^= v as $word;
                self.accum = self.accum.wrapping_mul($prime);
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { accum: $seed }
            }
        }

        impl SeqHash for $name {
            type Sum = $word;

            #[inline]
            fn finish(&self) -> $word {
                let mut a = self.accum;
                a ^= a >> 16;
                a ^= a >> 8;
                a
            }

            fn update(&mut self, buf: &[u8]) -> &mut Self {
                let chunks = buf.chunks_exact(BLOCK_SIZE);
                let tail = chunks.remainder();
                for chunk in chunks {
                    self.feed(u32::from_le_bytes(*array_ref![chunk, 0, BLOCK_SIZE]));
                }
                if !tail.is_empty() {
                    self.feed(pack_partial(tail));
                }
                self
            }

            fn update_z(&mut self, s: &CStr) -> &mut Self {
                // Four-byte lookahead with early stop at the first zero in
                // any lookahead position. The terminator bounds every index:
                // a position is only read after all earlier ones were
                // nonzero, so it is at most the terminator itself.
                let bytes = s.to_bytes_with_nul();
                let mut i = 0;
                loop {
                    let c0 = bytes[i] as u32;
                    if c0 == 0 {
                        break;
                    }
                    let c1 = bytes[i + 1] as u32;
                    if c1 == 0 {
                        self.feed(c0);
                        break;
                    }
                    let c2 = bytes[i + 2] as u32;
                    if c2 == 0 {
                        self.feed(c0 | (c1 << 8));
                        break;
                    }
                    let c3 = bytes[i + 3] as u32;
                    if c3 == 0 {
                        self.feed(c0 | (c1 << 8) | (c2 << 16));
                        break;
                    }
                    self.feed(c0 | (c1 << 8) | (c2 << 16) | (c3 << 24));
                    i += BLOCK_SIZE;
                }
                self
            }
        }

        impl RewindHash for $name {
            fn rewind(&mut self, tail: &[u8]) -> &mut Self {
                debug_assert!(tail.len() < BLOCK_SIZE);
                if !tail.is_empty() {
                    self.accum = self.accum.wrapping_mul($modinv);
                    self.accum ^= pack_partial(tail) as $word;
                }
                self
            }
        }
    };
}

mulxor_impl!(
    /// The 64-bit multiply-xor hash.
    MulXor64, u64, PRIME_64, PRIME_MODINV_64, SEED_64
);
mulxor_impl!(
    /// The 32-bit multiply-xor hash.
    MulXor32, u32, PRIME_32, PRIME_MODINV_32, SEED_32
);

/// Single-shot 64-bit hash with a caller-supplied multiplier.
///
/// Same seed, recurrence and finalize as [`MulXor64`]; used to sweep
/// candidate multiplier constants when rating hash quality.
pub fn sum_with_multiplier(multiplier: u64, buf: &[u8]) -> u64 {
    let mut a = SEED_64;
    let chunks = buf.chunks_exact(BLOCK_SIZE);
    let tail = chunks.remainder();
    for chunk in chunks {
        a = (a ^ u32::from_le_bytes(*array_ref![chunk, 0, BLOCK_SIZE]) as u64)
            .wrapping_mul(multiplier);
    }
    if !tail.is_empty() {
        a = (a ^ pack_partial(tail) as u64).wrapping_mul(multiplier);
    }
    a ^= a >> 16;
    a ^= a >> 8;
    a
}

macro_rules! mul_inverse_impl {
    ($(#[$doc:meta])* $name:ident, $word:ty) => {
        $(#[$doc])*
        ///
        /// `m` must be odd; the inverse exists in the power-of-two ring
        /// exactly for odd values.
        pub fn $name(m: $word) -> $word {
            debug_assert!(m & 1 == 1);
            // Newton iteration doubles the number of correct low bits each
            // round; m is already correct to 3 bits.
            let mut x = m;
            for _ in 0..5 {
                x = x.wrapping_mul((2 as $word).wrapping_sub(m.wrapping_mul(x)));
            }
            x
        }
    };
}

mul_inverse_impl!(
    /// Multiplicative inverse modulo 2^64.
    mul_inverse_64, u64
);
mul_inverse_impl!(
    /// Multiplicative inverse modulo 2^32.
    mul_inverse_32, u32
);
