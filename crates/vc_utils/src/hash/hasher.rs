//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` wraps `foldhash` with a fixed seed, so iteration order of
//! the containers built on it is stable between runs.
//!
//! `NoOpHasher` passes a single `u64` straight through, which is all a
//! [`TypeId`](core::any::TypeId) key needs.

use core::fmt::Debug;
use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09E667F3BCC908);

/// A type alias for [`foldhash::fast::FoldHasher`] built from a fixed seed.
pub type FixedHasher = FoldHasher<'static>;

/// Hash state producing [`FixedHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use vc_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("actors");
/// let b = FixedHashState.hash_one("actors");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that keeps the last written `u64` as the hash value.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // `write_u32(10)` and `write_u64(10)` must agree.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Hash state producing [`NoOpHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use vc_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(3_u64), 3);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}
