use strum::{EnumIter, IntoEnumIterator};

use crate::fnv::Fnv32;
use crate::mulxor::{MulXor32, MulXor64};
use crate::seq_hash::SeqHash;

/// The hash families shipped by this crate, enumerable for benchmarks and
/// comparative sweeps.
#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter)]
pub enum HashFamily {
    Fnv,
    MulXor32,
    MulXor64,
}

impl HashFamily {
    pub fn name(&self) -> &'static str {
        match self {
            HashFamily::Fnv => "fnv",
            HashFamily::MulXor32 => "mulxor32",
            HashFamily::MulXor64 => "mulxor64",
        }
    }

    /// Width of the finalized sum in bytes.
    pub fn sum_len(&self) -> usize {
        match self {
            HashFamily::Fnv | HashFamily::MulXor32 => 4,
            HashFamily::MulXor64 => 8,
        }
    }

    /// Single-shot hash, widened to u64 for uniform handling.
    pub fn sum_of(&self, buf: &[u8]) -> u64 {
        match self {
            HashFamily::Fnv => u64::from(Fnv32::sum_of(buf)),
            HashFamily::MulXor32 => u64::from(MulXor32::sum_of(buf)),
            HashFamily::MulXor64 => MulXor64::sum_of(buf),
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
