//! String hashing for the table.
//!
//! The table only ever needs a `u32` per key, computed from the key's
//! contents. Equal strings must hash equally across calls and instances,
//! which rules out per-instance random seeds for the default hasher.

use std::hash::{BuildHasher, RandomState};

use rustc_hash::FxBuildHasher;

/// Seed of the djb2 rolling hash.
pub const DJB2_SEED: u32 = 5381;

/// djb2 over the UTF-16 code units of `key`: `hash = hash * 33 + unit`,
/// wrapping at 32 bits.
pub fn djb2(key: &str) -> u32 {
    key.encode_utf16().fold(DJB2_SEED, |hash, unit| {
        (hash << 5).wrapping_add(hash).wrapping_add(unit as u32)
    })
}

/// Hashes a string key to a 32 bit value used to pick a start slot.
pub trait StrHasher {
    fn hash_str(&self, key: &str) -> u32;
}

/// The default hasher, see [`djb2`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Djb2;

impl StrHasher for Djb2 {
    #[inline]
    fn hash_str(&self, key: &str) -> u32 {
        djb2(key)
    }
}

impl StrHasher for FxBuildHasher {
    #[inline]
    fn hash_str(&self, key: &str) -> u32 {
        self.hash_one(key) as u32
    }
}

// Only stable for the lifetime of one `RandomState`, which is all a table needs.
impl StrHasher for RandomState {
    #[inline]
    fn hash_str(&self, key: &str) -> u32 {
        self.hash_one(key) as u32
    }
}
