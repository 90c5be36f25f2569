//! Test utilities for the session crate.
//!
//! Helpers shared by the test modules for building a state over the sample
//! board and driving edit sessions.

use cardwall_protocol::sample::sample_board;
use cardwall_protocol::{BoardStore, Message, Region, SequentialIds};

use crate::AppState;

/// Builds a state over the sample board with predictable card ids.
#[must_use]
pub(crate) fn sample_state() -> AppState {
    let store = BoardStore::with_allocator(sample_board(), Box::new(SequentialIds::new()));
    AppState::new(store)
}

/// Replaces the text of an open input.
pub(crate) fn type_text(state: &mut AppState, region: Region, text: &str) {
    state.update(Message::Input {
        region,
        text: text.to_string(),
    });
}

/// Returns the committed title of a card, or an empty string if it is gone.
#[must_use]
pub(crate) fn card_title(state: &AppState, id: &str) -> String {
    state
        .board()
        .card(id)
        .map(|card| card.title.clone())
        .unwrap_or_default()
}
