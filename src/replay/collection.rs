//! Collection-style replay.
//!
//! Collection widgets have no per-cell refresh hook here: rows whose content
//! changed are reloaded natively from the widget's data source.

use crate::edit::Edit;
use crate::error::ReplayResult;
use crate::position::Position;

use super::{apply_batch, move_destinations, ListWidget};

/// Replay `edits` against a collection-style widget.
///
/// `Reload` rows are reloaded before the batch, moved rows after it, both
/// through [`ListWidget::reload_rows`].
pub fn apply_collection_updates<W>(widget: &mut W, edits: &[Edit]) -> ReplayResult<()>
where
    W: ListWidget + ?Sized,
{
    log::debug!("collection replay: {} edits", edits.len());

    let mut reloads: Vec<Position> = Vec::new();
    for edit in edits {
        match edit {
            Edit::Reload(at) => reloads.push(*at),
            Edit::ReloadAll => widget.reload_data(),
            _ => {}
        }
    }
    if !reloads.is_empty() {
        widget.reload_rows(&reloads)?;
    }

    apply_batch(widget, edits)?;

    let moved = move_destinations(edits);
    if !moved.is_empty() {
        widget.reload_rows(&moved)?;
    }

    Ok(())
}
