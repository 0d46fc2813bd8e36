//! Coordinates into a sectioned list.

use std::fmt;

use smallvec::SmallVec;

// =============================================================================
// Position
// =============================================================================

/// Row coordinate inside a sectioned list.
///
/// Ordered by section, then row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub section: usize,
    pub row: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, section: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} in section {}", self.row, self.section)
    }
}

/// Positions carried by a single row edit. Kept in ascending order.
pub type Positions = SmallVec<[Position; 4]>;

// =============================================================================
// SectionSet
// =============================================================================

/// Sorted set of section indices.
///
/// Most lists have a handful of sections, so the set lives inline and uses
/// binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SectionSet(SmallVec<[usize; 4]>);

impl SectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section index. Returns false if it was already present.
    pub fn insert(&mut self, section: usize) -> bool {
        match self.0.binary_search(&section) {
            Ok(_) => false,
            Err(at) => {
                self.0.insert(at, section);
                true
            }
        }
    }

    /// Remove a section index. Returns false if it was absent.
    pub fn remove(&mut self, section: usize) -> bool {
        match self.0.binary_search(&section) {
            Ok(at) => {
                self.0.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn contains(&self, section: usize) -> bool {
        self.0.binary_search(&section).is_ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for SectionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for SectionSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for section in iter {
            self.insert(section);
        }
    }
}

impl<const N: usize> From<[usize; N]> for SectionSet {
    fn from(sections: [usize; N]) -> Self {
        sections.into_iter().collect()
    }
}
