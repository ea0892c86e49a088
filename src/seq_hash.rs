use std::ffi::CStr;

use crate::consts::BLOCK_SIZE;

/// An incremental byte-sequence hash.
///
/// Implementors absorb input in 4-byte blocks. A state whose absorbed length
/// is a multiple of [`BLOCK_SIZE`] may keep absorbing with [`update`] and the
/// result is bit-identical to hashing the concatenation in one pass. States
/// left at a non-aligned boundary must go through [`RewindHash::resume`]
/// before more input is appended.
///
/// [`update`]: SeqHash::update
pub trait SeqHash: Default + Clone {
    type Sum: Copy + Eq + std::fmt::Debug;

    /// Finalize the accumulator into the reported hash value.
    ///
    /// Non-destructive: the state is untouched and may keep absorbing input.
    fn finish(&self) -> Self::Sum;

    /// Absorb explicit-length input.
    fn update(&mut self, buf: &[u8]) -> &mut Self;

    /// Absorb a null-terminated string, scanning and absorbing in one pass
    /// (no up-front length computation).
    fn update_z(&mut self, s: &CStr) -> &mut Self;

    fn sum_of(buf: &[u8]) -> Self::Sum {
        let mut state = Self::default();
        state.update(buf);
        state.finish()
    }

    fn sum_of_z(s: &CStr) -> Self::Sum {
        let mut state = Self::default();
        state.update_z(s);
        state.finish()
    }
}

/// A hash whose last partial-block absorption can be algebraically undone.
pub trait RewindHash: SeqHash {
    /// Undo the absorption of the final partial block.
    ///
    /// `tail` must be the literal trailing `absorbed_len % 4` bytes of the
    /// input absorbed so far (0 to 3 of them). The state is rewound to the
    /// preceding 4-byte block boundary; an empty tail leaves it unchanged.
    ///
    /// Contract, unchecked at runtime: a `tail` that is not the exact
    /// original remainder yields a silently wrong state.
    fn rewind(&mut self, tail: &[u8]) -> &mut Self;

    /// Resume hashing past a prefix boundary that need not be block-aligned.
    ///
    /// Given the state of some prefix, its trailing `prefix_len % 4` bytes
    /// (`tail`), and the suffix to append (`rest`), produces the state of
    /// `prefix ++ rest`: the tail is rewound and re-absorbed together with
    /// the suffix so block boundaries line up as if the input had been
    /// hashed in one pass.
    fn resume(&mut self, tail: &[u8], rest: &[u8]) -> &mut Self {
        self.rewind(tail);
        if tail.is_empty() {
            return self.update(rest);
        }
        let take = rest.len().min(BLOCK_SIZE - tail.len());
        let mut block = [0u8; BLOCK_SIZE];
        block[..tail.len()].copy_from_slice(tail);
        block[tail.len()..tail.len() + take].copy_from_slice(&rest[..take]);
        if tail.len() + take == BLOCK_SIZE {
            self.update(&block);
            self.update(&rest[take..])
        } else {
            self.update(&block[..tail.len() + take])
        }
    }

    /// [`resume`] for a null-terminated remainder.
    ///
    /// [`resume`]: RewindHash::resume
    fn resume_z(&mut self, tail: &[u8], rest: &CStr) -> &mut Self {
        self.resume(tail, rest.to_bytes())
    }
}
