//! Deterministic hashing for option hash codes.
//!
//! `std`'s `DefaultHasher` is randomly keyed per process, which makes
//! [`option_hash`](crate::equality::option_hash) values unusable as stable
//! identifiers. [`DetHasher`] uses a fixed seed so the same option produces
//! the same code in every run.

use std::hash::{BuildHasher, Hash, Hasher};

/// Deterministic, non-cryptographic hasher.
#[derive(Debug, Clone)]
pub struct DetHasher {
    state: u64,
}

impl DetHasher {
    const SEED: u64 = 0x16f1_1fe8_9b0d_677c;
    const MULTIPLIER: u64 = 0x517c_c1b7_2722_0a95;

    #[inline]
    fn mix_byte(&mut self, byte: u8) {
        self.state = self.state.wrapping_mul(Self::MULTIPLIER);
        self.state ^= u64::from(byte);
    }

    /// Hashes a single value from a fresh hasher.
    #[must_use]
    pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
        DetBuildHasher.hash_one(value)
    }
}

impl Default for DetHasher {
    fn default() -> Self {
        Self { state: Self::SEED }
    }
}

impl Hasher for DetHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.mix_byte(byte);
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.mix_byte(i);
    }

    fn write_u64(&mut self, i: u64) {
        for byte in i.to_le_bytes() {
            self.mix_byte(byte);
        }
    }

    fn write_usize(&mut self, i: usize) {
        // Width-independent: always hash as u64.
        self.write_u64(i as u64);
    }

    fn finish(&self) -> u64 {
        let mut h = self.state;
        h ^= h >> 33;
        h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
        h ^= h >> 33;
        h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        h ^= h >> 33;
        h
    }
}

/// Builder for deterministic hashers. Backs
/// [`option_hash`](crate::equality::option_hash) and serves as the hasher
/// for `HashMap`/`HashSet` keyed by fixed options.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetBuildHasher;

impl BuildHasher for DetBuildHasher {
    type Hasher = DetHasher;

    fn build_hasher(&self) -> Self::Hasher {
        DetHasher::default()
    }
}
