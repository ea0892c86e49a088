use std::ffi::CStr;

use crate::consts::{FNV_OFFSET_BASIS, FNV_PRIME};
use crate::seq_hash::SeqHash;

/// 32-bit FNV-1a, the byte-at-a-time baseline the multiply-xor family is
/// rated against.
#[derive(Copy, Clone, Debug)]
pub struct Fnv32 {
    accum: u32,
}

impl Default for Fnv32 {
    fn default() -> Self {
        Self {
            accum: FNV_OFFSET_BASIS,
        }
    }
}

impl SeqHash for Fnv32 {
    type Sum = u32;

    #[inline]
    fn finish(&self) -> u32 {
        self.accum
    }

    fn update(&mut self, buf: &[u8]) -> &mut Self {
        for &b in buf {
            self.accum ^= b as u32;
            self.accum = self.accum.wrapping_mul(FNV_PRIME);
        }
        self
    }

    fn update_z(&mut self, s: &CStr) -> &mut Self {
        self.update(s.to_bytes())
    }
}
