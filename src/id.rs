//! Element identity for diffing
//!
//! Every element takes part in two comparisons:
//! - **Content**: `Eq + Hash` over all observable fields. "Is this the same value?"
//! - **Identity**: [`HasIdentity::identity`]. "Is this the same entity?"
//!
//! A value whose content changed but whose identity persisted is what the
//! diff reports as a `Move` (or a `Reload` when it stayed in its row).
//!
//! # Contract
//!
//! - Values equal under `Eq` MUST return equal identities.
//! - Values with equal identities MAY differ under `Eq`.
//! - Identities should be unique within one side of a diff. Duplicates are
//!   resolved by first occurrence, which is deterministic but arbitrary.
//!
//! Identity is a dedicated key, not a content hash. Callers that only hold
//! a textual record key can fold it into a [`StableId`], accepting the
//! (small) risk that two unrelated keys collide and get read as a move.

use std::fmt;
use std::hash::Hash;

use crate::algo::StableHasher;

// =============================================================================
// HasIdentity
// =============================================================================

/// Persistent identity of a list element.
pub trait HasIdentity: Eq + Hash {
    /// Identity key. Cloned once per changed element during a diff.
    type Id: Eq + Hash + Clone;

    /// Identity of this element, stable across content changes.
    fn identity(&self) -> Self::Id;
}

impl<T: HasIdentity + ?Sized> HasIdentity for &T {
    type Id = T::Id;

    #[inline]
    fn identity(&self) -> Self::Id {
        (**self).identity()
    }
}

/// Implement `HasIdentity` where the value is its own identity.
///
/// Such elements never produce moves or reloads: a changed value is a
/// different entity.
macro_rules! identity_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasIdentity for $ty {
                type Id = $ty;

                #[inline]
                fn identity(&self) -> Self::Id {
                    self.clone()
                }
            }
        )*
    };
}

identity_by_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, String,
);

impl HasIdentity for str {
    type Id = String;

    #[inline]
    fn identity(&self) -> Self::Id {
        self.to_owned()
    }
}

// =============================================================================
// StableId
// =============================================================================

/// 64-bit identity fingerprint derived from a record key.
///
/// # Memory Layout
///
/// - 8 bytes (u64)
/// - Copy, no heap allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[must_use]
pub struct StableId(u64);

impl StableId {
    /// Create a StableId from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Fingerprint a textual record key (database id, URL, UUID string).
    ///
    /// ```
    /// use rowdiff::StableId;
    ///
    /// assert_eq!(StableId::from_key("list-1"), StableId::from_key("list-1"));
    /// assert_ne!(StableId::from_key("list-1"), StableId::from_key("list-2"));
    /// ```
    pub fn from_key(key: &str) -> Self {
        Self::from_bytes(key.as_bytes())
    }

    /// Fingerprint an opaque byte key.
    pub fn from_bytes(key: &[u8]) -> Self {
        Self(StableHasher::new().update_str("__row__").update(key).finish())
    }
}

impl fmt::Debug for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StableId({:016x})", self.0)
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl HasIdentity for StableId {
    type Id = StableId;

    #[inline]
    fn identity(&self) -> Self::Id {
        *self
    }
}

// =============================================================================
// Keyed
// =============================================================================

/// A payload paired with an explicit identity key.
///
/// Equality and hashing cover both key and value; identity is the key alone.
///
/// ```
/// use rowdiff::{HasIdentity, Keyed};
///
/// let before = Keyed::new(7, "draft");
/// let after = Keyed::new(7, "published");
/// assert_ne!(before, after);
/// assert_eq!(before.identity(), after.identity());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyed<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Keyed<K, V> {
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> HasIdentity for Keyed<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash,
{
    type Id = K;

    #[inline]
    fn identity(&self) -> Self::Id {
        self.key.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================
