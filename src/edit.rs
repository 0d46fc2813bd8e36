//! Edit operations produced by the diff.
//!
//! Edits are pure data addressed by [`Position`]. They carry no element
//! content: the widget pulls content for inserted and reloaded rows from its
//! own data source, exactly as it would for a full reload.
//!
//! # Index conventions
//!
//! Within one batch, list views resolve indices against two states:
//!
//! | Edit | Addresses |
//! |------|-----------|
//! | `DeleteRows`, `DeleteSection`, `Move::from` | state before the batch |
//! | `InsertRows`, `InsertSection`, `Move::to` | state after the batch |
//! | `Reload` | current state (applied outside the batch) |

use smallvec::smallvec;

use crate::position::{Position, Positions};

/// A single structural or content edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Insert rows at the given post-batch positions
    InsertRows(Positions),

    /// Delete rows at the given pre-batch positions
    DeleteRows(Positions),

    /// Insert a whole section
    InsertSection(usize),

    /// Delete a whole section
    DeleteSection(usize),

    /// Move a row whose content changed but whose identity persisted
    Move { from: Position, to: Position },

    /// Refresh a row in place
    Reload(Position),

    /// Refresh everything. Never produced by the diff; available to callers
    /// that want to bail out to a full reload.
    ReloadAll,

    /// Skip
    NoOp,
}

impl Edit {
    /// Single-row insert.
    pub fn insert_row(at: Position) -> Self {
        Self::InsertRows(smallvec![at])
    }

    /// Single-row delete.
    pub fn delete_row(at: Position) -> Self {
        Self::DeleteRows(smallvec![at])
    }

    /// Refreshes already-visible content without shifting any index.
    #[inline]
    pub fn is_in_place(&self) -> bool {
        matches!(self, Self::Reload(_) | Self::ReloadAll)
    }

    /// Shifts row or section indices and must run inside a batch.
    #[inline]
    pub fn is_batched(&self) -> bool {
        matches!(
            self,
            Self::InsertRows(_)
                | Self::DeleteRows(_)
                | Self::InsertSection(_)
                | Self::DeleteSection(_)
                | Self::Move { .. }
        )
    }

    /// Row positions referenced by this edit.
    ///
    /// A move yields its source then its destination.
    pub fn positions(&self) -> Positions {
        match self {
            Self::InsertRows(rows) | Self::DeleteRows(rows) => rows.clone(),
            Self::Move { from, to } => smallvec![*from, *to],
            Self::Reload(at) => smallvec![*at],
            Self::InsertSection(_) | Self::DeleteSection(_) | Self::ReloadAll | Self::NoOp => {
                Positions::new()
            }
        }
    }
}

/// Old and new position of one identity whose content changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Same slot means the row only needs its content refreshed.
    #[inline]
    pub fn is_reload(&self) -> bool {
        self.from == self.to
    }

    pub fn into_edit(self) -> Edit {
        if self.is_reload() {
            Edit::Reload(self.from)
        } else {
            Edit::Move {
                from: self.from,
                to: self.to,
            }
        }
    }
}

impl From<Move> for Edit {
    fn from(m: Move) -> Self {
        m.into_edit()
    }
}
