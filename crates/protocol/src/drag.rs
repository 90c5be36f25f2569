//! Drag-end resolution.
//!
//! A finished drag gesture carries an `active` id (what was dragged) and an
//! optional `over` id (what it was dropped on). Neither id says whether it
//! names a card or a column; both are resolved by lookup against the board.
//!
//! Resolution is split in two steps: [`plan`] decides what the drop means,
//! and [`DragPlan::apply`] produces the next board. [`resolve`] runs both.
//! Every case the plan cannot make sense of leaves the board untouched.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CardLocation};

/// Why a drop left the board unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unchanged {
    /// The item was dropped on itself.
    DroppedOnSelf,
    /// The gesture ended without a drop target.
    NoDropTarget,
    /// A column was dropped on something that is not a column.
    ColumnOverNonColumn,
    /// The dragged id names neither a column nor a card.
    UnknownActive,
    /// The drop target names neither a card nor a column.
    UnknownTarget,
    /// The card was dropped within the column it already lives in.
    SameColumn,
}

/// The outcome of a drop, decided before the board is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPlan {
    /// Leave the board as it is.
    Unchanged(Unchanged),
    /// Move the column at `from` to position `to`.
    ReorderColumns {
        /// Current index of the dragged column.
        from: usize,
        /// Index currently held by the drop-target column.
        to: usize,
    },
    /// Move a card to the end of another column.
    MoveCard {
        /// Where the dragged card currently lives.
        from: CardLocation,
        /// Index of the destination column.
        to: usize,
    },
}

impl DragPlan {
    /// Returns `true` if applying this plan changes nothing.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged(_))
    }

    /// Applies the plan, returning the next board snapshot.
    ///
    /// The plan must have been computed against `board`.
    #[must_use]
    pub fn apply(&self, board: &Board) -> Board {
        match *self {
            Self::Unchanged(_) => board.clone(),
            Self::ReorderColumns { from, to } => board.with_column_moved(from, to),
            Self::MoveCard { from, to } => board.with_card_moved(from, to),
        }
    }
}

/// Decides what dropping `active` onto `over` means on `board`.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::drag::{plan, DragPlan, Unchanged};
/// use cardwall_protocol::sample::sample_board;
///
/// let board = sample_board();
/// assert_eq!(
///     plan(&board, "card-1", Some("card-2")),
///     DragPlan::Unchanged(Unchanged::SameColumn)
/// );
/// assert_eq!(
///     plan(&board, "col-1", Some("col-3")),
///     DragPlan::ReorderColumns { from: 0, to: 2 }
/// );
/// ```
#[must_use]
pub fn plan(board: &Board, active: &str, over: Option<&str>) -> DragPlan {
    if over == Some(active) {
        return DragPlan::Unchanged(Unchanged::DroppedOnSelf);
    }

    if let Some(from) = board.column_index(active) {
        return match over.and_then(|over| board.column_index(over)) {
            Some(to) => DragPlan::ReorderColumns { from, to },
            None if over.is_none() => DragPlan::Unchanged(Unchanged::NoDropTarget),
            None => DragPlan::Unchanged(Unchanged::ColumnOverNonColumn),
        };
    }

    let Some(from) = board.locate_card(active) else {
        return DragPlan::Unchanged(Unchanged::UnknownActive);
    };

    let Some(over) = over else {
        return DragPlan::Unchanged(Unchanged::NoDropTarget);
    };

    let target = match board.locate_card(over) {
        Some(loc) => Some(loc.column),
        None => board.column_index(over),
    };
    let Some(to) = target else {
        return DragPlan::Unchanged(Unchanged::UnknownTarget);
    };

    if to == from.column {
        return DragPlan::Unchanged(Unchanged::SameColumn);
    }

    DragPlan::MoveCard { from, to }
}

/// Resolves a finished drag into the next board snapshot.
///
/// Deterministic and side-effect free. Unresolvable drops return a board
/// equal to (and sharing every column with) the input.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::drag::resolve;
/// use cardwall_protocol::sample::sample_board;
///
/// let board = sample_board();
/// let next = resolve(&board, "card-1", Some("card-3"));
///
/// let in_progress = next.column("col-2").unwrap();
/// assert_eq!(in_progress.last_card().unwrap().id.as_str(), "card-1");
/// assert_eq!(next.column("col-1").unwrap().len(), 1);
/// ```
#[must_use]
pub fn resolve(board: &Board, active: &str, over: Option<&str>) -> Board {
    plan(board, active, over).apply(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Column;
    use crate::card::Card;
    use crate::sample::sample_board;
    use proptest::prelude::*;

    fn column_ids(board: &Board) -> Vec<&str> {
        board.columns().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn dropping_on_self_is_noop() {
        let board = sample_board();
        assert_eq!(resolve(&board, "card-1", Some("card-1")), board);
        assert_eq!(resolve(&board, "col-2", Some("col-2")), board);
    }

    #[test]
    fn column_moves_forward_by_index() {
        let board = sample_board();
        let next = resolve(&board, "col-1", Some("col-3"));
        assert_eq!(
            column_ids(&next),
            vec!["col-2", "col-3", "col-1", "col-4", "col-5"]
        );
    }

    #[test]
    fn column_moves_backward_by_index() {
        let board = sample_board();
        let next = resolve(&board, "col-5", Some("col-2"));
        assert_eq!(
            column_ids(&next),
            vec!["col-1", "col-5", "col-2", "col-3", "col-4"]
        );
    }

    #[test]
    fn column_reorder_leaves_contents_shared() {
        let board = sample_board();
        let next = resolve(&board, "col-1", Some("col-2"));
        for column in board.columns() {
            let moved = next.column(column.id.as_str()).expect("column survives");
            assert_eq!(moved, column.as_ref());
        }
        // Untouched tail keeps its allocations.
        assert!(next.shares_column(&board, 4));
    }

    #[test]
    fn column_dropped_on_card_is_noop() {
        let board = sample_board();
        assert_eq!(
            plan(&board, "col-1", Some("card-5")),
            DragPlan::Unchanged(Unchanged::ColumnOverNonColumn)
        );
        assert_eq!(resolve(&board, "col-1", Some("card-5")), board);
    }

    #[test]
    fn card_dropped_on_card_in_other_column_is_appended() {
        let board = sample_board();
        let next = resolve(&board, "card-1", Some("card-3"));

        let todo = next.column("col-1").expect("todo");
        assert_eq!(todo.len(), 1);
        assert!(!todo.contains_card("card-1"));

        let in_progress = next.column("col-2").expect("in progress");
        assert_eq!(in_progress.len(), 3);
        assert_eq!(in_progress.last_card(), board.card("card-1"));
    }

    #[test]
    fn card_dropped_on_column_is_appended() {
        let board = sample_board();
        let next = resolve(&board, "card-2", Some("col-3"));
        let review = next.column("col-3").expect("review");
        assert_eq!(review.last_card().map(|c| c.id.as_str()), Some("card-2"));
    }

    #[test]
    fn card_move_shares_unaffected_columns() {
        let board = sample_board();
        let next = resolve(&board, "card-1", Some("col-2"));
        assert!(!next.shares_column(&board, 0));
        assert!(!next.shares_column(&board, 1));
        assert!(next.shares_column(&board, 2));
        assert!(next.shares_column(&board, 3));
        assert!(next.shares_column(&board, 4));
    }

    #[test]
    fn same_column_drop_is_noop() {
        let board = sample_board();
        assert_eq!(resolve(&board, "card-1", Some("card-2")), board);
        assert_eq!(resolve(&board, "card-1", Some("col-1")), board);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let board = sample_board();
        assert_eq!(
            plan(&board, "ghost", Some("col-1")),
            DragPlan::Unchanged(Unchanged::UnknownActive)
        );
        assert_eq!(
            plan(&board, "card-1", Some("ghost")),
            DragPlan::Unchanged(Unchanged::UnknownTarget)
        );
        assert_eq!(resolve(&board, "card-1", Some("ghost")), board);
    }

    #[test]
    fn aborted_drag_is_noop() {
        let board = sample_board();
        assert_eq!(
            plan(&board, "card-1", None),
            DragPlan::Unchanged(Unchanged::NoDropTarget)
        );
        assert_eq!(
            plan(&board, "col-1", None),
            DragPlan::Unchanged(Unchanged::NoDropTarget)
        );
        assert_eq!(resolve(&board, "card-1", None), board);
    }

    #[test]
    fn moved_card_fields_are_unchanged() {
        let board = Board::try_from_columns([
            Column::new("a", "A").with_card(Card::new("x", "Title", "Line 1\nLine 2")),
            Column::new("b", "B"),
        ])
        .expect("valid board");
        let next = resolve(&board, "x", Some("b"));
        assert_eq!(
            next.column("b").and_then(Column::last_card),
            Some(&Card::new("x", "Title", "Line 1\nLine 2"))
        );
        assert!(next.column("a").is_some_and(Column::is_empty));
    }

    /// Boards with `col-<i>` columns and globally numbered `card-<n>` cards.
    fn arb_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(0usize..5, 1..6).prop_map(|counts| {
            let mut next = 0;
            let columns = counts.into_iter().enumerate().map(|(i, count)| {
                (0..count).fold(Column::new(format!("col-{i}"), format!("Column {i}")), |col, _| {
                    next += 1;
                    col.with_card(Card::new(format!("card-{next}"), format!("Card {next}"), ""))
                })
            });
            Board::try_from_columns(columns.collect::<Vec<_>>()).expect("generated ids are unique")
        })
    }

    /// Every id on the board plus one that names nothing.
    fn ids_of(board: &Board) -> Vec<String> {
        board
            .columns()
            .iter()
            .map(|c| c.id.to_string())
            .chain(board.card_ids().map(ToString::to_string))
            .chain(std::iter::once("missing".to_string()))
            .collect()
    }

    fn arb_drop() -> impl Strategy<Value = (Board, String, Option<String>)> {
        arb_board().prop_flat_map(|board| {
            let ids = ids_of(&board);
            (
                Just(board),
                prop::sample::select(ids.clone()),
                prop::option::of(prop::sample::select(ids)),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_drop_on_self_is_identity((board, id, _) in arb_drop()) {
            prop_assert_eq!(resolve(&board, &id, Some(&id)), board);
        }

        #[test]
        fn prop_total_card_count_is_invariant((board, active, over) in arb_drop()) {
            let next = resolve(&board, &active, over.as_deref());
            prop_assert_eq!(next.total_cards(), board.total_cards());
            prop_assert_eq!(next.len(), board.len());
        }

        #[test]
        fn prop_column_reorder_preserves_columns((board, active, over) in arb_drop()) {
            if let DragPlan::ReorderColumns { .. } = plan(&board, &active, over.as_deref()) {
                let next = resolve(&board, &active, over.as_deref());
                let mut before: Vec<_> = board.columns().iter().map(|c| c.as_ref().clone()).collect();
                let mut after: Vec<_> = next.columns().iter().map(|c| c.as_ref().clone()).collect();
                before.sort_by(|a, b| a.id.cmp(&b.id));
                after.sort_by(|a, b| a.id.cmp(&b.id));
                prop_assert_eq!(before, after);
                prop_assert_eq!(next.column_index(&active), over.as_deref().and_then(|o| board.column_index(o)));
            }
        }

        #[test]
        fn prop_card_move_appends_to_target((board, active, over) in arb_drop()) {
            if let DragPlan::MoveCard { from, to } = plan(&board, &active, over.as_deref()) {
                let next = resolve(&board, &active, over.as_deref());
                let source = &board.columns()[from.column];
                let target = &board.columns()[to];
                prop_assert_eq!(next.columns()[from.column].len(), source.len() - 1);
                prop_assert_eq!(next.columns()[to].len(), target.len() + 1);
                prop_assert_eq!(next.columns()[to].last_card(), board.card(&active));
                prop_assert_eq!(next.locate_card(&active).map(|l| l.column), Some(to));
            }
        }

        #[test]
        fn prop_same_column_drop_is_noop((board, active, over) in arb_drop()) {
            let source = board.owning_column(&active).cloned();
            let target = over.as_deref().and_then(|o| {
                board.owning_column(o).cloned().or_else(|| board.column(o).map(|c| c.id.clone()))
            });
            if source.is_some() && source == target {
                prop_assert_eq!(resolve(&board, &active, over.as_deref()), board);
            }
        }

        #[test]
        fn prop_noop_plans_share_every_column((board, active, over) in arb_drop()) {
            if plan(&board, &active, over.as_deref()).is_unchanged() {
                let next = resolve(&board, &active, over.as_deref());
                for index in 0..board.len() {
                    prop_assert!(next.shares_column(&board, index));
                }
            }
        }
    }
}
