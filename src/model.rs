//! In-memory list widget.
//!
//! `ListModel` keeps rows grouped by section and applies batches with the
//! same bookkeeping a list view performs: after a batch, every section's
//! row count must match the data source, otherwise the batch is rejected and
//! the model keeps its previous rows.
//!
//! Inserted rows and reloaded rows pull their content from the data source
//! (`set_source`). Moved and untouched rows keep the content they had, so a
//! moved row whose content changed still needs a refresh.
//!
//! ```
//! use rowdiff::{apply_collection_updates, generate_updates, Keyed, ListModel};
//!
//! let old = vec![Keyed::new(1, "milk"), Keyed::new(2, "eggs")];
//! let new = vec![Keyed::new(2, "eggs"), Keyed::new(1, "oat milk"), Keyed::new(3, "rye")];
//!
//! let mut model = ListModel::with_rows(old.clone());
//! model.set_source(vec![new.clone()]);
//!
//! let edits = generate_updates(&new, &old, 0);
//! apply_collection_updates(&mut model, &edits).unwrap();
//! assert_eq!(model.sections(), &[new]);
//! ```

use rustc_hash::{FxHashMap, FxHashSet};

use crate::edit::Move;
use crate::error::{ReplayError, ReplayResult};
use crate::position::{Position, SectionSet};
use crate::replay::ListWidget;

/// Edits collected between `begin_updates` and `end_updates`.
#[derive(Debug, Clone, Default)]
struct Batch {
    /// Pre-batch positions
    deleted_rows: FxHashSet<Position>,
    /// Post-batch positions
    inserted_rows: FxHashSet<Position>,
    moves: Vec<Move>,
    /// Pre-batch sections
    deleted_sections: SectionSet,
    /// Post-batch sections
    inserted_sections: SectionSet,
}

/// Sectioned rows plus the data source they are checked against.
#[derive(Debug, Clone)]
pub struct ListModel<T> {
    sections: Vec<Vec<T>>,
    source: Vec<Vec<T>>,
    batch: Option<Batch>,
}

impl<T> Default for ListModel<T> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            source: Vec::new(),
            batch: None,
        }
    }
}

impl<T: Clone> ListModel<T> {
    /// Model showing `sections`, with a data source equal to them.
    pub fn new(sections: Vec<Vec<T>>) -> Self {
        Self {
            source: sections.clone(),
            sections,
            batch: None,
        }
    }

    /// Single-section model.
    pub fn with_rows(rows: Vec<T>) -> Self {
        Self::new(vec![rows])
    }

    /// Replace the data source. Call before replaying the edits that lead to it.
    pub fn set_source(&mut self, sections: Vec<Vec<T>>) {
        self.source = sections;
    }

    /// Rows currently displayed, by section.
    pub fn sections(&self) -> &[Vec<T>] {
        &self.sections
    }

    pub fn rows(&self, section: usize) -> Option<&[T]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    pub fn get(&self, at: Position) -> Option<&T> {
        self.sections.get(at.section)?.get(at.row)
    }

    /// Whether a batch is open.
    pub fn is_updating(&self) -> bool {
        self.batch.is_some()
    }

    fn batch_mut(&mut self) -> ReplayResult<&mut Batch> {
        self.batch.as_mut().ok_or(ReplayError::NoOpenBatch)
    }

    /// Build the post-batch sections without touching the current ones.
    fn commit(&self, batch: &Batch) -> ReplayResult<Vec<Vec<T>>> {
        let old = &self.sections;
        let source = &self.source;

        if let Some(section) = batch.deleted_sections.iter().find(|&s| s >= old.len()) {
            return Err(ReplayError::SectionOutOfRange { section });
        }
        if let Some(section) = batch.inserted_sections.iter().find(|&s| s >= source.len()) {
            return Err(ReplayError::SectionOutOfRange { section });
        }

        let section_count = old.len() - batch.deleted_sections.len() + batch.inserted_sections.len();
        if section_count != source.len() {
            return Err(ReplayError::SectionCountMismatch {
                expected: source.len(),
                found: section_count,
            });
        }

        // Pre-batch addresses must exist and be claimed once
        let mut moved_from: FxHashSet<Position> = FxHashSet::default();
        let mut moved_to: FxHashMap<Position, &T> = FxHashMap::default();
        for m in &batch.moves {
            let item = row_at(old, m.from)?;
            if !moved_from.insert(m.from) {
                return Err(ReplayError::DuplicatePosition { position: m.from });
            }
            if batch.inserted_rows.contains(&m.to) || moved_to.insert(m.to, item).is_some() {
                return Err(ReplayError::DuplicatePosition { position: m.to });
            }
        }
        for &position in &batch.deleted_rows {
            row_at(old, position)?;
            if moved_from.contains(&position) {
                return Err(ReplayError::DuplicatePosition { position });
            }
        }

        // Post-batch addresses must exist unless their section is inserted whole
        let targets = batch.inserted_rows.iter().chain(moved_to.keys());
        for &position in targets {
            if batch.inserted_sections.contains(position.section) {
                continue;
            }
            row_at(source, position)?;
        }

        let mut surviving_sections = (0..old.len()).filter(|&s| !batch.deleted_sections.contains(s));
        let mut sections = Vec::with_capacity(source.len());

        for (section, source_rows) in source.iter().enumerate() {
            if batch.inserted_sections.contains(section) {
                sections.push(source_rows.clone());
                continue;
            }

            let Some(old_section) = surviving_sections.next() else {
                return Err(ReplayError::SectionCountMismatch {
                    expected: source.len(),
                    found: section_count,
                });
            };

            let survives = |row: usize| {
                let position = Position::new(row, old_section);
                !batch.deleted_rows.contains(&position) && !moved_from.contains(&position)
            };
            let survivor_count = (0..old[old_section].len()).filter(|&row| survives(row)).count();
            let inserted = batch.inserted_rows.iter().filter(|p| p.section == section).count();
            let moved_in = moved_to.keys().filter(|p| p.section == section).count();

            let found = survivor_count + inserted + moved_in;
            if found != source_rows.len() {
                return Err(ReplayError::RowCountMismatch {
                    section,
                    expected: source_rows.len(),
                    found,
                });
            }

            let mut survivors = old[old_section]
                .iter()
                .enumerate()
                .filter(|(row, _)| survives(*row))
                .map(|(_, item)| item);

            let mut rows = Vec::with_capacity(found);
            for (row, source_item) in source_rows.iter().enumerate() {
                let position = Position::new(row, section);
                let item = if batch.inserted_rows.contains(&position) {
                    source_item
                } else if let Some(item) = moved_to.get(&position) {
                    *item
                } else {
                    survivors
                        .next()
                        .ok_or(ReplayError::RowOutOfRange { position })?
                };
                rows.push(item.clone());
            }
            sections.push(rows);
        }

        Ok(sections)
    }
}

fn row_at<T>(sections: &[Vec<T>], at: Position) -> ReplayResult<&T> {
    sections
        .get(at.section)
        .and_then(|rows| rows.get(at.row))
        .ok_or(ReplayError::RowOutOfRange { position: at })
}

impl<T: Clone> ListWidget for ListModel<T> {
    type Cell = T;

    fn begin_updates(&mut self) -> ReplayResult<()> {
        if self.batch.is_some() {
            return Err(ReplayError::NestedBatch);
        }
        self.batch = Some(Batch::default());
        Ok(())
    }

    fn end_updates(&mut self) -> ReplayResult<()> {
        let batch = self.batch.take().ok_or(ReplayError::NoOpenBatch)?;
        self.sections = self.commit(&batch)?;
        Ok(())
    }

    fn cancel_updates(&mut self) {
        self.batch = None;
    }

    fn insert_rows(&mut self, rows: &[Position]) -> ReplayResult<()> {
        self.batch_mut()?.inserted_rows.extend(rows.iter().copied());
        Ok(())
    }

    fn delete_rows(&mut self, rows: &[Position]) -> ReplayResult<()> {
        self.batch_mut()?.deleted_rows.extend(rows.iter().copied());
        Ok(())
    }

    fn insert_section(&mut self, section: usize) -> ReplayResult<()> {
        self.batch_mut()?.inserted_sections.insert(section);
        Ok(())
    }

    fn delete_section(&mut self, section: usize) -> ReplayResult<()> {
        self.batch_mut()?.deleted_sections.insert(section);
        Ok(())
    }

    fn move_row(&mut self, from: Position, to: Position) -> ReplayResult<()> {
        self.batch_mut()?.moves.push(Move::new(from, to));
        Ok(())
    }

    fn reload_rows(&mut self, rows: &[Position]) -> ReplayResult<()> {
        for &at in rows {
            let fresh = row_at(&self.source, at)?.clone();
            let slot = self
                .sections
                .get_mut(at.section)
                .and_then(|rows| rows.get_mut(at.row))
                .ok_or(ReplayError::RowOutOfRange { position: at })?;
            *slot = fresh;
        }
        Ok(())
    }

    fn reload_data(&mut self) {
        self.sections = self.source.clone();
    }

    fn cell_mut(&mut self, at: Position) -> Option<&mut T> {
        self.sections.get_mut(at.section)?.get_mut(at.row)
    }
}
