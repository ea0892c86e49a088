//! A family of non-cryptographic multiply-xor hashes with two extras plain
//! hash functions lack: incremental computation (carry an opaque state
//! between chunks) and algebraic rewind (undo the last partial-block
//! absorption so hashing can resume across a replaced tail without
//! re-reading the unchanged prefix).
//!
//! The [`SeqHash`] and [`RewindHash`] traits are the seam; [`MulXor64`] and
//! [`MulXor32`] are the shipped instantiations, with [`Fnv32`] as the
//! baseline they are rated against. The quality side ([`Corpus`],
//! [`QualityEval`]) scores how evenly a multiplier constant spreads a word
//! corpus over `2^k` buckets, which is how the shipped constant was picked.
//!
//! ```
//! use mulxor::{MulXor64, RewindHash, SeqHash};
//!
//! let full = MulXor64::sum_of(b"Hello, world");
//!
//! // Hash a prefix, then append a suffix without re-reading the prefix.
//! let mut state = MulXor64::default();
//! state.update(b"Hello,"); // 6 bytes, so 2 spill past the block boundary
//! state.resume(b"o,", b" world"); // rewind the spilled "o,", then append
//! assert_eq!(state.finish(), full);
//! ```

mod consts;
mod corpus;
mod fnv;
mod mulxor;
mod prng;
mod quality;
mod seq_hash;
mod types;
mod words;

pub use consts::{
    BLOCK_SIZE, PRIME_32, PRIME_64, PRIME_MODINV_32, PRIME_MODINV_64, SEED_32, SEED_64,
};
pub use corpus::{Corpus, Words};
pub use fnv::Fnv32;
pub use mulxor::{mul_inverse_32, mul_inverse_64, sum_with_multiplier, MulXor32, MulXor64};
pub use prng::{SplitMix64, EVAL_SEED};
pub use quality::{chi2_rating, EvalConfig, QualityEval};
pub use seq_hash::{RewindHash, SeqHash};
pub use types::HashFamily;
pub use words::WordGen;
