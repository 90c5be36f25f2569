//! Key bindings for inline editing.
//!
//! This module decides what a [`KeyPress`] means for the field being edited.

use cardwall_protocol::{CardField, Key, KeyPress};

/// What a key press does to an open edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Write the scratch buffer to the board.
    Commit,
    /// Discard the scratch buffer.
    Cancel,
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
}

/// Maps a key press in a card field to an edit action.
///
/// # Key Bindings
///
/// | Key | Title | Details |
/// |-----|-------|---------|
/// | `Enter` | Commit | Insert line break |
/// | `Ctrl+Enter` | Commit | Commit |
/// | `Esc` | Cancel | Cancel |
/// | `Backspace` | Delete back | Delete back |
/// | Any char | Insert | Insert |
#[must_use]
pub fn card_edit_action(field: CardField, press: KeyPress) -> Option<EditAction> {
    match (press.key, field) {
        (Key::Escape, _) => Some(EditAction::Cancel),
        (Key::Enter, CardField::Title) => Some(EditAction::Commit),
        (Key::Enter, CardField::Details) if press.ctrl => Some(EditAction::Commit),
        (Key::Enter, CardField::Details) => Some(EditAction::Insert('\n')),
        (key, _) => text_action(key, press.ctrl),
    }
}

/// Maps a key press in a column title to an edit action.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` | Commit |
/// | `Esc` | Cancel |
/// | `Backspace` | Delete back |
/// | Any char | Insert |
#[must_use]
pub fn column_edit_action(press: KeyPress) -> Option<EditAction> {
    match press.key {
        Key::Enter => Some(EditAction::Commit),
        Key::Escape => Some(EditAction::Cancel),
        key => text_action(key, press.ctrl),
    }
}

fn text_action(key: Key, ctrl: bool) -> Option<EditAction> {
    match key {
        Key::Backspace => Some(EditAction::Backspace),
        // Control chords are shortcuts, not text.
        Key::Char(ch) if !ctrl => Some(EditAction::Insert(ch)),
        _ => None,
    }
}
