//! Board types and structures.
//!
//! This module defines columns and the board that owns them. A [`Board`] is
//! an immutable snapshot: every change produces a new board that shares the
//! columns it did not touch with its predecessor.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::error::{ProtocolError, Result};

/// Unique identifier for a column.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::ColumnId;
///
/// let id = ColumnId::new("col-1");
/// assert_eq!(id.as_str(), "col-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a column identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ColumnId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single column on the board.
///
/// Holds an ordered sequence of cards; the order is the display order.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{Card, Column};
///
/// let column = Column::new("col-1", "Todo").with_card(Card::new("card-1", "Setup", ""));
/// assert_eq!(column.len(), 1);
/// assert!(column.contains_card("card-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier for this column.
    pub id: ColumnId,
    /// Display title.
    pub title: String,
    /// Cards currently in this column, ordered by position.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Creates a new empty column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Appends a card, builder style.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Returns the number of cards in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the column has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the position of a card within this column.
    #[must_use]
    pub fn card_index(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id.as_str() == id)
    }

    /// Returns a reference to a card by id, if it lives in this column.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id.as_str() == id)
    }

    /// Returns `true` if this column holds a card with the given id.
    #[must_use]
    pub fn contains_card(&self, id: &str) -> bool {
        self.card_index(id).is_some()
    }

    /// Returns the last card of the column, if any.
    #[must_use]
    pub fn last_card(&self) -> Option<&Card> {
        self.cards.last()
    }
}

/// Where a card currently lives on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocation {
    /// Index of the owning column in [`Board::columns`].
    pub column: usize,
    /// Index of the card within that column.
    pub card: usize,
}

/// The board: an ordered sequence of columns.
///
/// Columns are held behind [`Arc`] so that snapshots produced by the store
/// and the drag resolver share every column they did not modify. Readers
/// receive boards by value (cloning is cheap) and cannot mutate them.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{Board, Card, Column};
///
/// let board = Board::try_from_columns([
///     Column::new("col-1", "Todo").with_card(Card::new("card-1", "Setup", "")),
///     Column::new("col-2", "Done"),
/// ])
/// .unwrap();
///
/// assert!(board.is_column_id("col-2"));
/// assert!(board.is_card_id("card-1"));
/// assert_eq!(board.total_cards(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    columns: Vec<Arc<Column>>,
}

/// Unvalidated wire form of a board.
#[derive(Deserialize)]
struct RawBoard {
    columns: Vec<Column>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ProtocolError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Self::try_from_columns(raw.columns)
    }
}

impl Board {
    /// Creates an empty board with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from columns, checking the identity invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if a column id is empty, if two columns or two cards
    /// share an id, or if a card id equals a column id (which would make drag
    /// targets ambiguous).
    pub fn try_from_columns(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        let columns: Vec<Column> = columns.into_iter().collect();

        let mut column_ids = HashSet::new();
        for column in &columns {
            if column.id.as_str().is_empty() {
                return Err(ProtocolError::EmptyColumnId);
            }
            if !column_ids.insert(column.id.as_str()) {
                return Err(ProtocolError::DuplicateColumnId(column.id.clone()));
            }
        }

        let mut card_ids = HashSet::new();
        for card in columns.iter().flat_map(|c| &c.cards) {
            if column_ids.contains(card.id.as_str()) {
                return Err(ProtocolError::AmbiguousId(card.id.to_string()));
            }
            if !card_ids.insert(card.id.as_str()) {
                return Err(ProtocolError::DuplicateCardId(card.id.clone()));
            }
        }

        Ok(Self {
            columns: columns.into_iter().map(Arc::new).collect(),
        })
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the position of a column.
    #[must_use]
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id.as_str() == id)
    }

    /// Returns a column by id.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.id.as_str() == id)
            .map(AsRef::as_ref)
    }

    /// Returns `true` if `id` names a column on this board.
    #[must_use]
    pub fn is_column_id(&self, id: &str) -> bool {
        self.column_index(id).is_some()
    }

    /// Returns `true` if `id` names a card on this board.
    #[must_use]
    pub fn is_card_id(&self, id: &str) -> bool {
        self.locate_card(id).is_some()
    }

    /// Finds the column and position holding a card.
    ///
    /// Columns are scanned in display order; the first match wins.
    #[must_use]
    pub fn locate_card(&self, id: &str) -> Option<CardLocation> {
        self.columns.iter().enumerate().find_map(|(column, col)| {
            col.card_index(id).map(|card| CardLocation { column, card })
        })
    }

    /// Returns a card by id, searching every column.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.columns.iter().find_map(|col| col.card(id))
    }

    /// Returns the id of the column that owns a card.
    #[must_use]
    pub fn owning_column(&self, card_id: &str) -> Option<&ColumnId> {
        self.locate_card(card_id)
            .map(|loc| &self.columns[loc.column].id)
    }

    /// Returns the total number of cards across all columns.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(|c| c.len()).sum()
    }

    /// Iterates over every card id on the board, column by column.
    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.columns.iter().flat_map(|c| c.cards.iter().map(|card| &card.id))
    }

    /// Returns `true` if the two boards hold the very same column allocation
    /// at `index`.
    #[must_use]
    pub fn shares_column(&self, other: &Self, index: usize) -> bool {
        match (self.columns.get(index), other.columns.get(index)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns a new board with the column at `index` rewritten by `f`.
    ///
    /// Every other column is shared with `self`.
    pub(crate) fn with_column(&self, index: usize, f: impl FnOnce(&mut Column)) -> Self {
        let mut columns = self.columns.clone();
        f(Arc::make_mut(&mut columns[index]));
        Self { columns }
    }

    /// Returns a new board with the column at `from` relocated to `to`.
    ///
    /// Remove-then-insert: columns between the two positions shift by one.
    pub(crate) fn with_column_moved(&self, from: usize, to: usize) -> Self {
        let mut columns = self.columns.clone();
        let column = columns.remove(from);
        columns.insert(to, column);
        Self { columns }
    }

    /// Returns a new board with a card taken out of one column and appended
    /// to another. Only the two affected columns are replaced.
    pub(crate) fn with_card_moved(&self, from: CardLocation, target: usize) -> Self {
        let mut columns = self.columns.clone();
        let card = Arc::make_mut(&mut columns[from.column]).cards.remove(from.card);
        Arc::make_mut(&mut columns[target]).cards.push(card);
        Self { columns }
    }
}
