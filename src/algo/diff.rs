//! Row Diff Algorithm
//!
//! Computes the row and section edits that take a displayed list section
//! from one snapshot to the next.
//! This is a **pure algorithm module** with **no widget dependencies**.
//!
//! # Architecture: Diff/Replay Separation
//!
//! ```text
//! generate_updates(new, old, section) -> Vec<Edit>   // Pure data
//!       |
//!       v
//! apply_table_updates(widget, &edits, handler)        // Widget mutation
//! ```
//!
//! # Algorithm
//!
//! 1. Split both snapshots into content sets
//! 2. Content only in `old` is a deletion candidate, content only in `new`
//!    an insertion candidate; everything else produces no edit
//! 3. Candidates on both sides sharing an identity are one entity whose
//!    content changed: emit a `Move` (or `Reload` if it kept its row)
//! 4. Remaining candidates become `DeleteRows` / `InsertRows`
//! 5. Add a section insert/delete when the section is born or dies
//!
//! # Output Order
//!
//! Moves and reloads first (ascending by old position), then one
//! `DeleteRows`, one `InsertRows`, then the section edit. Row positions inside
//! each edit are ascending.
//!
//! # Limitations
//!
//! Only elements whose content changed are considered, so reordering
//! elements without touching their content produces no edit.
//!
//! # Complexity
//!
//! - Time: O(n + m + k * (n + m)) where k is the number of moved identities
//! - Space: O(n + m) for the content sets

use rustc_hash::FxHashSet;

use crate::edit::{Edit, Move};
use crate::id::HasIdentity;
use crate::position::{Position, Positions, SectionSet};

use super::section::{section_transition, SectionChange};

// =============================================================================
// Public Types
// =============================================================================

/// Configuration for one section diff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffConfig {
    /// Section stamped on every produced position
    pub section: usize,
    /// Sections that stay on screen while empty, so they are never inserted
    /// or deleted as a whole
    pub allowed_empty_sections: SectionSet,
}

impl DiffConfig {
    /// Config for `section` with no allowed-empty sections.
    pub fn new(section: usize) -> Self {
        Self {
            section,
            allowed_empty_sections: SectionSet::new(),
        }
    }

    /// Keep `section` on screen while it has no rows.
    pub fn allow_empty(mut self, section: usize) -> Self {
        self.allowed_empty_sections.insert(section);
        self
    }

    /// Replace the allowed-empty set.
    pub fn with_allowed_empty_sections(mut self, sections: impl Into<SectionSet>) -> Self {
        self.allowed_empty_sections = sections.into();
        self
    }
}

/// Statistics from diff operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct DiffStats {
    /// Rows in the old snapshot
    pub old_len: usize,
    /// Rows in the new snapshot
    pub new_len: usize,
    /// Rows moved to a different position
    pub moved: usize,
    /// Rows refreshed in place
    pub reloaded: usize,
    /// Rows deleted
    pub deleted: usize,
    /// Rows inserted
    pub inserted: usize,
    /// Sections inserted (0 or 1)
    pub sections_inserted: usize,
    /// Sections deleted (0 or 1)
    pub sections_deleted: usize,
}

impl DiffStats {
    /// Total number of row edits
    pub fn row_edits(&self) -> usize {
        self.moved + self.reloaded + self.deleted + self.inserted
    }
}

/// Result of a section diff
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct DiffResult {
    /// Edits in replay order
    pub edits: Vec<Edit>,
    /// Statistics about the diff
    pub stats: DiffStats,
}

impl DiffResult {
    /// Check if any changes were detected
    pub fn has_changes(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Diff two snapshots of one section.
///
/// # Example
///
/// ```
/// use rowdiff::{generate_updates, Edit, Position};
///
/// let old = vec![1u32, 2, 3];
/// let new = vec![1u32, 2, 3, 4];
///
/// let edits = generate_updates(&new, &old, 0);
/// assert_eq!(edits, vec![Edit::insert_row(Position::new(3, 0))]);
/// ```
pub fn generate_updates<T: HasIdentity>(new: &[T], old: &[T], section: usize) -> Vec<Edit> {
    generate_updates_with_config(new, old, &DiffConfig::new(section)).into_edits()
}

/// Diff two snapshots of one section with custom configuration.
///
/// # Example
///
/// ```
/// use rowdiff::{generate_updates_with_config, DiffConfig, Edit};
///
/// let old: Vec<u32> = vec![];
/// let new = vec![1u32];
///
/// // Section 0 keeps its header while empty, so no section insert
/// let config = DiffConfig::new(0).allow_empty(0);
/// let result = generate_updates_with_config(&new, &old, &config);
/// assert!(!result.edits.contains(&Edit::InsertSection(0)));
/// ```
pub fn generate_updates_with_config<T: HasIdentity>(
    new: &[T],
    old: &[T],
    config: &DiffConfig,
) -> DiffResult {
    let section = config.section;
    let mut stats = DiffStats {
        old_len: old.len(),
        new_len: new.len(),
        ..Default::default()
    };

    let old_set: FxHashSet<&T> = old.iter().collect();
    let new_set: FxHashSet<&T> = new.iter().collect();

    // Content that disappeared / appeared, at first occurrence
    let deletions = first_occurrences(old, &new_set, section);
    let insertions = first_occurrences(new, &old_set, section);

    // An identity on both sides is one entity whose content changed
    let delete_ids: FxHashSet<T::Id> = deletions.iter().map(|(item, _)| item.identity()).collect();
    let move_ids: FxHashSet<T::Id> = insertions
        .iter()
        .map(|(item, _)| item.identity())
        .filter(|id| delete_ids.contains(id))
        .collect();

    let mut moves: Vec<Move> = move_ids
        .iter()
        .filter_map(|id| {
            let old_row = old.iter().position(|item| item.identity() == *id)?;
            let new_row = new.iter().position(|item| item.identity() == *id)?;
            Some(Move::new(
                Position::new(old_row, section),
                Position::new(new_row, section),
            ))
        })
        .collect();
    moves.sort_unstable();

    let deletion_positions = without_moves(&deletions, &move_ids);
    let insertion_positions = without_moves(&insertions, &move_ids);

    let section_change = section_transition(
        old.is_empty(),
        new.is_empty(),
        section,
        &config.allowed_empty_sections,
    );

    let mut edits = Vec::with_capacity(moves.len() + 3);

    for m in moves {
        if m.is_reload() {
            stats.reloaded += 1;
        } else {
            stats.moved += 1;
        }
        edits.push(m.into_edit());
    }

    if !deletion_positions.is_empty() {
        stats.deleted = deletion_positions.len();
        edits.push(Edit::DeleteRows(deletion_positions));
    }

    if !insertion_positions.is_empty() {
        stats.inserted = insertion_positions.len();
        edits.push(Edit::InsertRows(insertion_positions));
    }

    match section_change {
        SectionChange::Insert(_) => stats.sections_inserted = 1,
        SectionChange::Delete(_) => stats.sections_deleted = 1,
        SectionChange::Unchanged => {}
    }
    edits.extend(section_change.into_edit());

    log::debug!(
        "section {}: {} -> {} rows, {} moved, {} reloaded, {} deleted, {} inserted",
        section,
        stats.old_len,
        stats.new_len,
        stats.moved,
        stats.reloaded,
        stats.deleted,
        stats.inserted,
    );

    DiffResult { edits, stats }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Elements of `items` whose content is absent from `other`, each distinct
/// value paired with the position of its first occurrence.
fn first_occurrences<'a, T: HasIdentity>(
    items: &'a [T],
    other: &FxHashSet<&T>,
    section: usize,
) -> Vec<(&'a T, Position)> {
    let mut seen: FxHashSet<&T> = FxHashSet::default();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !other.contains(item) && seen.insert(*item))
        .map(|(row, item)| (item, Position::new(row, section)))
        .collect()
}

fn without_moves<T: HasIdentity>(
    candidates: &[(&T, Position)],
    move_ids: &FxHashSet<T::Id>,
) -> Positions {
    candidates
        .iter()
        .filter(|(item, _)| !move_ids.contains(&item.identity()))
        .map(|(_, position)| *position)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Shared list with a persistent id and editable content
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct SharedList {
        id: u32,
        title: String,
        members: Vec<String>,
    }

    impl HasIdentity for SharedList {
        type Id = u32;

        fn identity(&self) -> u32 {
            self.id
        }
    }

    fn lists(titles: &[&str]) -> Vec<SharedList> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| SharedList {
                id: i as u32 + 1,
                title: title.to_string(),
                members: Vec::new(),
            })
            .collect()
    }

    fn four() -> Vec<SharedList> {
        lists(&["list1", "list2", "list3", "list4"])
    }

    fn rows(section: usize, rows: &[usize]) -> Positions {
        rows.iter().map(|&row| Position::new(row, section)).collect()
    }

    #[test]
    fn test_no_changes() {
        let old = four();
        assert!(generate_updates(&old, &old, 0).is_empty());
        assert!(generate_updates::<SharedList>(&[], &[], 0).is_empty());
    }

    #[test]
    fn test_deletes() {
        let old = four();
        let mut new = old.clone();
        new.pop();

        let edits = generate_updates(&new, &old, 0);
        assert_eq!(edits, vec![Edit::DeleteRows(rows(0, &[3]))]);
    }

    #[test]
    fn test_inserts() {
        let old = four();
        let mut new = old.clone();
        new.push(SharedList {
            id: 5,
            title: "list5".to_string(),
            members: Vec::new(),
        });

        let edits = generate_updates(&new, &old, 0);
        assert_eq!(edits, vec![Edit::InsertRows(rows(0, &[4]))]);
    }

    #[test]
    fn test_moves() {
        let old = four();
        let mut new = old.clone();
        let mut first = new.remove(0);
        first.members.push("joe@test.com".to_string());
        new.push(first);

        let edits = generate_updates(&new, &old, 0);
        assert_eq!(
            edits,
            vec![Edit::Move {
                from: Position::new(0, 0),
                to: Position::new(3, 0),
            }]
        );
    }

    #[test]
    fn test_reload() {
        let old = four();
        let mut new = old.clone();
        new[0].title = "ListModified".to_string();

        let edits = generate_updates(&new, &old, 0);
        assert_eq!(edits, vec![Edit::Reload(Position::new(0, 0))]);
    }

    #[test]
    fn test_insert_section() {
        let new = four();
        let result = generate_updates_with_config(&new, &[], &DiffConfig::new(0));

        assert_eq!(
            result.edits,
            vec![Edit::InsertRows(rows(0, &[0, 1, 2, 3])), Edit::InsertSection(0)]
        );
        assert_eq!(result.stats.inserted, 4);
        assert_eq!(result.stats.sections_inserted, 1);
    }

    #[test]
    fn test_delete_section() {
        let old = four();
        let result = generate_updates_with_config(&[], &old, &DiffConfig::new(0));

        assert_eq!(
            result.edits,
            vec![Edit::DeleteRows(rows(0, &[0, 1, 2, 3])), Edit::DeleteSection(0)]
        );
        assert_eq!(result.stats.deleted, 4);
        assert_eq!(result.stats.sections_deleted, 1);
    }

    #[test]
    fn test_allowed_empty_section_suppresses_section_edits() {
        let items = four();
        let config = DiffConfig::new(2).allow_empty(2);

        let born = generate_updates_with_config(&items, &[], &config);
        assert_eq!(born.edits, vec![Edit::InsertRows(rows(2, &[0, 1, 2, 3]))]);

        let died = generate_updates_with_config(&[], &items, &config);
        assert_eq!(died.edits, vec![Edit::DeleteRows(rows(2, &[0, 1, 2, 3]))]);
    }

    #[test]
    fn test_section_stamped_on_positions() {
        let old = four();
        let mut new = old.clone();
        new[1].title = "changed".to_string();
        new.remove(3);

        let edits = generate_updates(&new, &old, 7);
        assert_eq!(
            edits,
            vec![
                Edit::Reload(Position::new(1, 7)),
                Edit::DeleteRows(rows(7, &[3])),
            ]
        );
    }

    #[test]
    fn test_edit_order_moves_deletes_inserts() {
        // old: 1 2 3 4 ; new: 2 5 4 1' (1 changed and moved, 3 deleted, 5 inserted)
        let old = four();
        let mut one = old[0].clone();
        one.title = "renamed".to_string();
        let five = SharedList {
            id: 5,
            title: "list5".to_string(),
            members: Vec::new(),
        };
        let new = vec![old[1].clone(), five, old[3].clone(), one];

        let result = generate_updates_with_config(&new, &old, &DiffConfig::new(0));
        assert_eq!(
            result.edits,
            vec![
                Edit::Move {
                    from: Position::new(0, 0),
                    to: Position::new(3, 0),
                },
                Edit::DeleteRows(rows(0, &[2])),
                Edit::InsertRows(rows(0, &[1])),
            ]
        );
        assert_eq!(result.stats.row_edits(), 3);
    }

    #[test]
    fn test_moves_sorted_by_old_position() {
        let old = four();
        let mut new = old.clone();
        for item in new.iter_mut() {
            item.members.push("ann@test.com".to_string());
        }
        new.reverse();

        let edits = generate_updates(&new, &old, 0);
        let froms: Vec<usize> = edits
            .iter()
            .map(|edit| match edit {
                Edit::Move { from, .. } => from.row,
                other => panic!("expected move, got {:?}", other),
            })
            .collect();
        assert_eq!(froms, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_value_identity_never_moves() {
        let old = vec!["a".to_string(), "b".to_string()];
        let new = vec!["a".to_string(), "c".to_string()];

        let edits = generate_updates(&new, &old, 0);
        assert_eq!(
            edits,
            vec![Edit::DeleteRows(rows(0, &[1])), Edit::InsertRows(rows(0, &[1]))]
        );
    }

    #[test]
    fn test_pure_reorder_is_invisible() {
        let old = four();
        let mut new = old.clone();
        new.swap(0, 1);

        assert!(generate_updates(&new, &old, 0).is_empty());
    }

    #[test]
    fn test_duplicate_content_uses_first_occurrence() {
        let old = vec![1u32, 9, 9];
        let new = vec![1u32];

        let edits = generate_updates(&new, &old, 0);
        assert_eq!(edits, vec![Edit::DeleteRows(rows(0, &[1]))]);
    }

    #[test]
    fn test_never_emits_reload_all_or_noop() {
        let old = four();
        let mut new = lists(&["x", "list2"]);
        new.push(old[3].clone());

        let edits = generate_updates(&new, &old, 0);
        assert!(!edits.contains(&Edit::ReloadAll));
        assert!(!edits.contains(&Edit::NoOp));
    }

    #[test]
    fn test_config_builder() {
        let config = DiffConfig::new(1).with_allowed_empty_sections([0usize, 3]);
        assert_eq!(config.section, 1);
        assert!(config.allowed_empty_sections.contains(3));
        assert!(!config.allowed_empty_sections.contains(1));
    }
}
