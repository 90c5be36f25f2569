//! Shared protocol types for the cardwall application.
//!
//! This crate defines the board model and everything that changes it:
//! cards and columns, the id allocators, the drag resolver and the store
//! that owns the current board snapshot.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`card`]: Card identifiers, the `Card` struct and partial patches
//! - [`board`]: Columns and the `Board` snapshot
//! - [`ids`]: Allocation of fresh card ids
//! - [`drag`]: Drag-end resolution
//! - [`store`]: The `BoardStore` and its change notifications
//! - [`message`]: Interaction messages reported by a front end
//! - [`sample`]: The sample board
//! - [`error`]: Error types for decoding and validation
//!
//! # Examples
//!
//! Adding a card and dragging it to another column:
//!
//! ```
//! use cardwall_protocol::{BoardStore, CardPatch, SequentialIds};
//! use cardwall_protocol::sample::sample_board;
//!
//! let mut store = BoardStore::with_allocator(sample_board(), Box::new(SequentialIds::new()));
//!
//! // New cards are appended and become the pending auto-edit target
//! let id = store.add_card("col-1").unwrap();
//! store.update_card("col-1", id.as_str(), &CardPatch::title("Write docs"));
//!
//! // Dropping on a column appends the card to it
//! store.apply_drag(id.as_str(), Some("col-4"));
//! assert_eq!(store.board().owning_column(id.as_str()).unwrap().as_str(), "col-4");
//! ```

pub mod board;
pub mod card;
pub mod drag;
pub mod error;
pub mod ids;
pub mod message;
pub mod sample;
pub mod store;

// Re-export primary types at crate root for convenience
pub use board::{Board, CardLocation, Column, ColumnId};
pub use card::{Card, CardField, CardId, CardPatch};
pub use drag::{DragPlan, Unchanged, resolve};
pub use error::{ProtocolError, Result};
pub use ids::{IdAllocator, IdStyle, SequentialIds, TimestampIds, UuidIds};
pub use message::{Key, KeyPress, Message, Region};
pub use store::{BoardEvent, BoardStore};
