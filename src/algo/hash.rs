//! Deterministic hashing for identity fingerprints
//!
//! `std::hash::Hash` output is not stable across processes (RandomState) and
//! not meant to be persisted. Record keys that arrive as text or bytes are
//! folded through blake3 instead, so the same key always yields the same
//! `StableId`.

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// ```
/// use rowdiff::StableHasher;
///
/// let a = StableHasher::new().update_str("list").update_u64(7).finish();
/// let b = StableHasher::new().update_str("list").update_u64(7).finish();
/// assert_eq!(a, b);
/// ```
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a string
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update(s.as_bytes())
    }

    /// Update with a u64 value (little-endian)
    #[inline]
    pub fn update_u64(self, v: u64) -> Self {
        self.update(&v.to_le_bytes())
    }

    /// Update with a usize value, widened to u64 so 32-bit targets agree
    #[inline]
    pub fn update_usize(self, v: usize) -> Self {
        self.update_u64(v as u64)
    }

    /// Finish and return the first 8 bytes of the digest as little-endian u64
    #[inline]
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}
