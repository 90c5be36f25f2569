//! Interaction layer for the cardwall application.
//!
//! This crate turns front-end interactions into board changes. It owns the
//! inline edit sessions of cards and columns, the drag in progress, and the
//! key bindings used while editing.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`state`]: Application state and message dispatch
//! - [`edit`]: Card and column edit state machines
//! - [`event`]: Key bindings used while editing
//!
//! # Example
//!
//! ```
//! use cardwall_protocol::{BoardStore, CardId, Message, Region};
//! use cardwall_protocol::sample::sample_board;
//! use cardwall_session::AppState;
//!
//! let mut state = AppState::new(BoardStore::new(sample_board()));
//! let card = CardId::new("card-1");
//!
//! state.update(Message::Click { region: Region::CardTitle { card: card.clone() } });
//! state.update(Message::Input {
//!     region: Region::CardTitle { card: card.clone() },
//!     text: "Set up the project".into(),
//! });
//! state.update(Message::Save { card });
//!
//! assert_eq!(state.board().card("card-1").unwrap().title, "Set up the project");
//! ```

pub mod edit;
pub mod event;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use edit::{CardDraft, CardEditor, ColumnEditor, TextBuffer};
pub use event::{EditAction, card_edit_action, column_edit_action};
pub use state::AppState;
