/// Input is consumed in 4-byte little-endian blocks regardless of the
/// accumulator's own word width.
pub const BLOCK_SIZE: usize = 4;

/// Multiplier for the 64-bit instantiation.
pub const PRIME_64: u64 = 2_752_750_471;
/// Multiplicative inverse of [`PRIME_64`] modulo 2^64.
pub const PRIME_MODINV_64: u64 = 5_082_482_002_835_059_255;
/// Accumulator seed for the 64-bit instantiation.
pub const SEED_64: u64 = 1 << 32;

/// Multiplier for the 32-bit instantiation.
pub const PRIME_32: u32 = 2_752_750_471;
/// Multiplicative inverse of [`PRIME_32`] modulo 2^32.
pub const PRIME_MODINV_32: u32 = 340_570_679;
/// Accumulator seed for the 32-bit instantiation.
pub const SEED_32: u32 = 1 << 16;

/// FNV-1a 32-bit offset basis (baseline reference hash).
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;
