//! Card identifier allocation.
//!
//! New cards get their id from an [`IdAllocator`]. Every allocator checks
//! its candidates against the board it is allocating for, so an id is never
//! handed out while a card or column already uses it.

use std::fmt::Debug;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::card::CardId;

/// Prefix shared by all generated card ids.
pub const CARD_ID_PREFIX: &str = "card-";

/// Produces fresh card identifiers.
pub trait IdAllocator: Debug + Send {
    /// Returns an id not used by any card or column of `board`.
    fn allocate(&mut self, board: &Board) -> CardId;
}

fn is_taken(board: &Board, id: &str) -> bool {
    board.is_card_id(id) || board.is_column_id(id)
}

/// The id allocation scheme, as named in configuration.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{Board, IdStyle};
///
/// let mut ids = IdStyle::Sequential.allocator();
/// assert_eq!(ids.allocate(&Board::new()).as_str(), "card-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStyle {
    /// `card-<unix millis>`, bumped forward on collision.
    #[default]
    Timestamp,
    /// `card-1`, `card-2`, ...
    Sequential,
    /// `card-<uuid v4>`.
    Uuid,
}

impl IdStyle {
    /// Creates a fresh allocator for this style.
    #[must_use]
    pub fn allocator(self) -> Box<dyn IdAllocator> {
        match self {
            Self::Timestamp => Box::new(TimestampIds::new()),
            Self::Sequential => Box::new(SequentialIds::new()),
            Self::Uuid => Box::new(UuidIds),
        }
    }
}

/// Allocates `card-<millis>` ids from a wall clock.
///
/// Ids are strictly increasing for the lifetime of the allocator, even when
/// several cards are added within the same millisecond.
#[derive(Debug, Clone)]
pub struct TimestampIds {
    clock: fn() -> i64,
    last: Option<i64>,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampIds {
    /// Creates an allocator reading the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// Creates an allocator reading the given clock.
    #[must_use]
    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: None }
    }
}

impl IdAllocator for TimestampIds {
    fn allocate(&mut self, board: &Board) -> CardId {
        let mut stamp = (self.clock)();
        if let Some(last) = self.last {
            stamp = stamp.max(last + 1);
        }
        while is_taken(board, &format!("{CARD_ID_PREFIX}{stamp}")) {
            stamp += 1;
        }
        self.last = Some(stamp);
        CardId::new(format!("{CARD_ID_PREFIX}{stamp}"))
    }
}

/// Allocates `card-<n>` ids from a counter, skipping ids already in use.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    /// Creates an allocator starting at `card-1`.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator for SequentialIds {
    fn allocate(&mut self, board: &Board) -> CardId {
        loop {
            let candidate = format!("{CARD_ID_PREFIX}{}", self.next);
            self.next += 1;
            if !is_taken(board, &candidate) {
                return CardId::new(candidate);
            }
        }
    }
}

/// Allocates `card-<uuid>` ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdAllocator for UuidIds {
    fn allocate(&mut self, board: &Board) -> CardId {
        loop {
            let candidate = format!("{CARD_ID_PREFIX}{}", uuid::Uuid::new_v4());
            if !is_taken(board, &candidate) {
                return CardId::new(candidate);
            }
        }
    }
}
