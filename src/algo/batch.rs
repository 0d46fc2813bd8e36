//! Diff many independent sections in one call.
//!
//! Each section is diffed on its own, exactly as if `generate_updates` were
//! called once per section. Results are never merged or reindexed: inserting
//! or deleting a whole section shifts the indices of later sections, and that
//! coordination stays with the caller.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::edit::Edit;
use crate::id::HasIdentity;
use crate::position::SectionSet;

use super::diff::{generate_updates_with_config, DiffConfig};

/// Old and new snapshot of one section.
#[derive(Debug)]
pub struct SectionUpdate<'a, T> {
    pub section: usize,
    pub old: &'a [T],
    pub new: &'a [T],
}

impl<T> Clone for SectionUpdate<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SectionUpdate<'_, T> {}

impl<'a, T> SectionUpdate<'a, T> {
    pub fn new(section: usize, old: &'a [T], new: &'a [T]) -> Self {
        Self { section, old, new }
    }
}

/// Diff every section, returning one edit list per input in input order.
///
/// With the `parallel` feature the sections are diffed on the rayon pool.
pub fn generate_section_updates<T>(
    sections: &[SectionUpdate<'_, T>],
    allowed_empty_sections: &SectionSet,
) -> Vec<Vec<Edit>>
where
    T: HasIdentity + Sync,
{
    let diff_one = |update: &SectionUpdate<'_, T>| {
        let config = DiffConfig {
            section: update.section,
            allowed_empty_sections: allowed_empty_sections.clone(),
        };
        generate_updates_with_config(update.new, update.old, &config).into_edits()
    };

    #[cfg(feature = "parallel")]
    {
        sections.par_iter().map(diff_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        sections.iter().map(diff_one).collect()
    }
}
