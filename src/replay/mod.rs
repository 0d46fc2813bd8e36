//! Replaying edits against a list widget.
//!
//! The diff emits immutable [`Edit`]s; everything that mutates a widget lives
//! here. Two adapters cover the two common widget families:
//!
//! - [`apply_table_updates`]: table-style widgets that refresh visible cells
//!   through a caller-supplied handler
//! - [`apply_collection_updates`]: collection-style widgets that reload
//!   cells natively from their data source
//!
//! Both follow the same protocol:
//!
//! 1. In-place edits (`Reload`, `ReloadAll`) run first, outside the batch
//! 2. Index-shifting edits run inside one `begin_updates`/`end_updates`
//!    batch, which the widget commits atomically or rejects whole
//! 3. Moved rows are refreshed at their destination
//!
//! `NoOp` is skipped. Replays against one widget must not interleave: each
//! edit sequence is only valid against the snapshot it was computed from.

mod collection;
mod table;

pub use collection::apply_collection_updates;
pub use table::apply_table_updates;

use crate::edit::Edit;
use crate::error::ReplayResult;
use crate::position::Position;

/// Refreshes a visible cell once its row holds new content.
pub type CellUpdateHandler<'a, C> = dyn FnMut(&mut C, Position) + 'a;

// =============================================================================
// ListWidget
// =============================================================================

/// Batch-update surface of a list widget.
///
/// Index conventions inside a batch follow list-view practice: deletions and
/// move sources address the state before the batch, insertions and move
/// destinations the state after it.
pub trait ListWidget {
    /// Visible cell type handed to [`CellUpdateHandler`]
    type Cell;

    /// Open a batch.
    fn begin_updates(&mut self) -> ReplayResult<()>;

    /// Validate and commit the open batch.
    fn end_updates(&mut self) -> ReplayResult<()>;

    /// Discard the open batch without applying it.
    fn cancel_updates(&mut self) {}

    fn insert_rows(&mut self, rows: &[Position]) -> ReplayResult<()>;

    fn delete_rows(&mut self, rows: &[Position]) -> ReplayResult<()>;

    fn insert_section(&mut self, section: usize) -> ReplayResult<()>;

    fn delete_section(&mut self, section: usize) -> ReplayResult<()>;

    fn move_row(&mut self, from: Position, to: Position) -> ReplayResult<()>;

    /// Reload rows from the data source. Only valid outside a batch.
    fn reload_rows(&mut self, rows: &[Position]) -> ReplayResult<()>;

    /// Reload everything from the data source.
    fn reload_data(&mut self);

    /// Visible cell at `at`, if any.
    fn cell_mut(&mut self, at: Position) -> Option<&mut Self::Cell>;
}

// =============================================================================
// Shared replay steps
// =============================================================================

/// Run the index-shifting edits of `edits` as one batch.
pub(crate) fn apply_batch<W>(widget: &mut W, edits: &[Edit]) -> ReplayResult<()>
where
    W: ListWidget + ?Sized,
{
    if !edits.iter().any(Edit::is_batched) {
        return Ok(());
    }

    widget.begin_updates()?;

    if let Err(err) = edits.iter().try_for_each(|edit| apply_batched(widget, edit)) {
        log::warn!("batch aborted: {}", err);
        widget.cancel_updates();
        return Err(err);
    }

    widget.end_updates().inspect_err(|err| {
        log::warn!("batch rejected: {}", err);
    })
}

fn apply_batched<W>(widget: &mut W, edit: &Edit) -> ReplayResult<()>
where
    W: ListWidget + ?Sized,
{
    log::trace!("replay {:?}", edit);

    match edit {
        Edit::DeleteRows(rows) => widget.delete_rows(rows),
        Edit::InsertRows(rows) => widget.insert_rows(rows),
        Edit::Move { from, to } => widget.move_row(*from, *to),
        Edit::InsertSection(section) => widget.insert_section(*section),
        Edit::DeleteSection(section) => widget.delete_section(*section),
        Edit::Reload(_) | Edit::ReloadAll | Edit::NoOp => Ok(()),
    }
}

/// Destinations of every move in `edits`.
pub(crate) fn move_destinations(edits: &[Edit]) -> Vec<Position> {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Edit::Move { to, .. } => Some(*to),
            _ => None,
        })
        .collect()
}
