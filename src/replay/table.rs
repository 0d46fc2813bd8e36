//! Table-style replay.
//!
//! Visible cells are refreshed by the caller's handler rather than by a
//! native reload, so a reloaded row keeps its cell and a moved row keeps
//! its cell across the move.

use crate::edit::Edit;
use crate::error::ReplayResult;
use crate::position::Position;

use super::{apply_batch, move_destinations, CellUpdateHandler, ListWidget};

/// Replay `edits` against a table-style widget.
///
/// `Reload` and `Move` invoke `handler` on the affected cell (for a move,
/// at its destination once the batch is committed). Without a handler those
/// rows keep their previous content on screen.
pub fn apply_table_updates<W>(
    widget: &mut W,
    edits: &[Edit],
    mut handler: Option<&mut CellUpdateHandler<'_, W::Cell>>,
) -> ReplayResult<()>
where
    W: ListWidget + ?Sized,
{
    log::debug!("table replay: {} edits", edits.len());

    for edit in edits {
        match edit {
            Edit::Reload(at) => refresh_cell(widget, *at, handler.as_deref_mut()),
            Edit::ReloadAll => widget.reload_data(),
            _ => {}
        }
    }

    apply_batch(widget, edits)?;

    for to in move_destinations(edits) {
        refresh_cell(widget, to, handler.as_deref_mut());
    }

    Ok(())
}

fn refresh_cell<W>(widget: &mut W, at: Position, handler: Option<&mut CellUpdateHandler<'_, W::Cell>>)
where
    W: ListWidget + ?Sized,
{
    let Some(handler) = handler else {
        return;
    };

    match widget.cell_mut(at) {
        Some(cell) => handler(cell, at),
        None => log::trace!("no visible cell at {:?}", at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListModel;

    #[test]
    fn test_reload_without_handler_keeps_content() {
        let mut model = ListModel::with_rows(vec!["a", "b"]);
        model.set_source(vec![vec!["A", "b"]]);

        apply_table_updates(&mut model, &[Edit::Reload(Position::new(0, 0))], None).unwrap();
        assert_eq!(model.sections(), &[vec!["a", "b"]]);
    }

    #[test]
    fn test_handler_sees_reload_and_move_destination() {
        let mut model = ListModel::with_rows(vec![1, 2, 3]);
        model.set_source(vec![vec![1, 2, 3]]);

        let edits = vec![
            Edit::Reload(Position::new(1, 0)),
            Edit::Move {
                from: Position::new(0, 0),
                to: Position::new(2, 0),
            },
        ];

        let mut seen = Vec::new();
        let mut record = |cell: &mut i32, at: Position| {
            seen.push((*cell, at.row));
            *cell *= 10;
        };
        let handler: &mut CellUpdateHandler<'_, i32> = &mut record;
        apply_table_updates(&mut model, &edits, Some(handler)).unwrap();

        // Reload runs before the batch, the move refresh after it
        assert_eq!(seen, vec![(2, 1), (1, 2)]);
        assert_eq!(model.sections(), &[vec![20, 3, 10]]);
    }

    #[test]
    fn test_reload_all() {
        let mut model = ListModel::with_rows(vec!['a']);
        model.set_source(vec![vec!['x', 'y']]);

        apply_table_updates(&mut model, &[Edit::ReloadAll], None).unwrap();
        assert_eq!(model.sections(), &[vec!['x', 'y']]);
    }
}
