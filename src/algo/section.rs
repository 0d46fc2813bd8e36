//! Section promotion/demotion policy.
//!
//! A section that goes from no rows to some rows is inserted as a whole, and
//! one that drops to no rows is deleted, unless the caller keeps that section
//! on screen while empty (for example a header with an empty-state row).

use crate::edit::Edit;
use crate::position::SectionSet;

/// Section-level outcome of one diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionChange {
    Unchanged,
    Insert(usize),
    Delete(usize),
}

impl SectionChange {
    pub fn into_edit(self) -> Option<Edit> {
        match self {
            Self::Unchanged => None,
            Self::Insert(section) => Some(Edit::InsertSection(section)),
            Self::Delete(section) => Some(Edit::DeleteSection(section)),
        }
    }
}

/// Decide whether `section` appears or disappears between two snapshots.
pub fn section_transition(
    old_is_empty: bool,
    new_is_empty: bool,
    section: usize,
    allowed_empty_sections: &SectionSet,
) -> SectionChange {
    if allowed_empty_sections.contains(section) {
        return SectionChange::Unchanged;
    }

    match (old_is_empty, new_is_empty) {
        (true, false) => SectionChange::Insert(section),
        (false, true) => SectionChange::Delete(section),
        _ => SectionChange::Unchanged,
    }
}
