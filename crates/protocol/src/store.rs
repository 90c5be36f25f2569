//! The board state store.
//!
//! [`BoardStore`] owns the current [`Board`] snapshot and is the only writer
//! of board state. Every operation is total: ids that do not resolve make
//! the operation a no-op and the previous snapshot stays current.
//!
//! Each change is also recorded as a [`BoardEvent`] so consumers can find
//! out exactly what changed without diffing snapshots.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{Board, ColumnId};
use crate::card::{Card, CardField, CardId, CardPatch};
use crate::drag::{self, DragPlan};
use crate::ids::{IdAllocator, TimestampIds};

/// A change notification emitted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// A card was appended to a column.
    CardAdded {
        /// The owning column.
        column: ColumnId,
        /// The new card.
        card: CardId,
    },
    /// A card was removed from a column.
    CardDeleted {
        /// The column it was removed from.
        column: ColumnId,
        /// The removed card.
        card: CardId,
    },
    /// One field of a card was written.
    CardUpdated {
        /// The owning column.
        column: ColumnId,
        /// The updated card.
        card: CardId,
        /// The field that was written.
        field: CardField,
    },
    /// A column title was replaced.
    ColumnRenamed {
        /// The renamed column.
        column: ColumnId,
    },
    /// A column changed position.
    ColumnsReordered {
        /// The column that moved.
        column: ColumnId,
        /// Its previous index.
        from: usize,
        /// Its new index.
        to: usize,
    },
    /// A card moved to the end of another column.
    CardMoved {
        /// The moved card.
        card: CardId,
        /// The column it left.
        from: ColumnId,
        /// The column it was appended to.
        to: ColumnId,
    },
}

/// Owner of the current board snapshot.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{BoardStore, CardPatch, SequentialIds};
/// use cardwall_protocol::sample::sample_board;
///
/// let mut store = BoardStore::with_allocator(sample_board(), Box::new(SequentialIds::new()));
///
/// let id = store.add_card("col-1").unwrap();
/// assert_eq!(store.pending_auto_edit(), Some(&id));
///
/// store.update_card("col-1", id.as_str(), &CardPatch::title("X"));
/// assert_eq!(store.pending_auto_edit(), None);
/// assert_eq!(store.board().card(id.as_str()).unwrap().title, "X");
/// ```
#[derive(Debug)]
pub struct BoardStore {
    board: Board,
    pending_auto_edit: Option<CardId>,
    ids: Box<dyn IdAllocator>,
    events: Vec<BoardEvent>,
}

impl BoardStore {
    /// Creates a store over `board`, allocating timestamp-based card ids.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_allocator(board, Box::new(TimestampIds::new()))
    }

    /// Creates a store over `board` with a specific id allocator.
    #[must_use]
    pub fn with_allocator(board: Board, ids: Box<dyn IdAllocator>) -> Self {
        Self {
            board,
            pending_auto_edit: None,
            ids,
            events: Vec::new(),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns an owned handle on the current board.
    ///
    /// Snapshots share their columns with the store, so this is cheap.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns the card that should open directly in editing, if any.
    #[must_use]
    pub fn pending_auto_edit(&self) -> Option<&CardId> {
        self.pending_auto_edit.as_ref()
    }

    /// Drains the change notifications recorded since the last call.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Appends an empty card to a column and makes it the pending
    /// auto-edit target.
    ///
    /// Returns the new card's id, or `None` if the column does not exist.
    pub fn add_card(&mut self, column_id: &str) -> Option<CardId> {
        let Some(index) = self.board.column_index(column_id) else {
            debug!(column = column_id, "add ignored: unknown column");
            return None;
        };

        let id = self.ids.allocate(&self.board);
        let card = Card::empty(id.clone());
        self.board = self.board.with_column(index, |col| col.cards.push(card));
        self.pending_auto_edit = Some(id.clone());

        trace!(column = column_id, card = %id, "card added");
        self.events.push(BoardEvent::CardAdded {
            column: ColumnId::new(column_id),
            card: id.clone(),
        });
        Some(id)
    }

    /// Removes a card from a column.
    ///
    /// The pending auto-edit flag is left alone, even when it names the
    /// deleted card. Returns `true` if the card was found in that column and
    /// removed.
    pub fn delete_card(&mut self, column_id: &str, card_id: &str) -> bool {
        let Some((index, position)) = self.find(column_id, card_id) else {
            debug!(column = column_id, card = card_id, "delete ignored: card not in column");
            return false;
        };

        self.board = self.board.with_column(index, |col| {
            col.cards.remove(position);
        });

        trace!(column = column_id, card = card_id, "card deleted");
        self.events.push(BoardEvent::CardDeleted {
            column: ColumnId::new(column_id),
            card: CardId::new(card_id),
        });
        true
    }

    /// Merges the fields present in `patch` into a card.
    ///
    /// Clears the pending auto-edit flag when it names this card. Emits one
    /// [`BoardEvent::CardUpdated`] per field present in the patch.
    ///
    /// Returns `true` if the card was found in that column.
    pub fn update_card(&mut self, column_id: &str, card_id: &str, patch: &CardPatch) -> bool {
        let Some((index, position)) = self.find(column_id, card_id) else {
            debug!(column = column_id, card = card_id, "update ignored: card not in column");
            return false;
        };

        if !patch.is_empty() {
            self.board = self
                .board
                .with_column(index, |col| col.cards[position].apply(patch));
        }
        if self.pending_auto_edit.as_ref().is_some_and(|id| id.as_str() == card_id) {
            self.pending_auto_edit = None;
        }

        for field in patch.fields() {
            trace!(column = column_id, card = card_id, ?field, "card updated");
            self.events.push(BoardEvent::CardUpdated {
                column: ColumnId::new(column_id),
                card: CardId::new(card_id),
                field,
            });
        }
        true
    }

    /// Replaces a column's title.
    ///
    /// No validation happens here: rejecting blank titles is up to the
    /// caller. Returns `true` if the column exists.
    pub fn rename_column(&mut self, column_id: &str, title: impl Into<String>) -> bool {
        let Some(index) = self.board.column_index(column_id) else {
            debug!(column = column_id, "rename ignored: unknown column");
            return false;
        };

        let title = title.into();
        self.board = self.board.with_column(index, |col| col.title = title);

        trace!(column = column_id, "column renamed");
        self.events.push(BoardEvent::ColumnRenamed {
            column: ColumnId::new(column_id),
        });
        true
    }

    /// Resolves a finished drag and installs the resulting snapshot.
    ///
    /// This is the only path that moves cards between columns or reorders
    /// columns. Returns the plan that was applied.
    pub fn apply_drag(&mut self, active: &str, over: Option<&str>) -> DragPlan {
        let plan = drag::plan(&self.board, active, over);
        let event = match plan {
            DragPlan::Unchanged(reason) => {
                debug!(active, ?over, ?reason, "drop left board unchanged");
                return plan;
            }
            DragPlan::ReorderColumns { from, to } => BoardEvent::ColumnsReordered {
                column: self.board.columns()[from].id.clone(),
                from,
                to,
            },
            DragPlan::MoveCard { from, to } => BoardEvent::CardMoved {
                card: CardId::new(active),
                from: self.board.columns()[from.column].id.clone(),
                to: self.board.columns()[to].id.clone(),
            },
        };

        self.board = plan.apply(&self.board);
        trace!(?event, "drop applied");
        self.events.push(event);
        plan
    }

    fn find(&self, column_id: &str, card_id: &str) -> Option<(usize, usize)> {
        let index = self.board.column_index(column_id)?;
        let position = self.board.columns()[index].card_index(card_id)?;
        Some((index, position))
    }
}
