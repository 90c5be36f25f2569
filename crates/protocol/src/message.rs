//! Interaction messages.
//!
//! This module defines the events a front end reports to the application:
//! drag gestures and pointer/keyboard interactions aimed at one region of
//! one card or column. Messages are plain data so they can be scripted and
//! replayed.

use serde::{Deserialize, Serialize};

use crate::board::ColumnId;
use crate::card::{CardField, CardId};
use crate::error::{ProtocolError, Result};

/// The part of the board an interaction is aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Region {
    /// The title line of a card.
    CardTitle {
        /// Target card.
        card: CardId,
    },
    /// The details area of a card.
    CardDetails {
        /// Target card.
        card: CardId,
    },
    /// The header title of a column.
    ColumnTitle {
        /// Target column.
        column: ColumnId,
    },
    /// The add-card control in a column header.
    AddCard {
        /// Target column.
        column: ColumnId,
    },
}

impl Region {
    /// Returns the card and field this region belongs to, if it is a card
    /// text region.
    #[must_use]
    pub fn card_field(&self) -> Option<(&CardId, CardField)> {
        match self {
            Self::CardTitle { card } => Some((card, CardField::Title)),
            Self::CardDetails { card } => Some((card, CardField::Details)),
            Self::ColumnTitle { .. } | Self::AddCard { .. } => None,
        }
    }
}

/// A key, as far as inline editing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Return / Enter.
    Enter,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// A printable character.
    Char(char),
}

/// A key press with the modifier that matters for editing.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::message::{Key, KeyPress};
///
/// assert!(KeyPress::ctrl(Key::Enter).ctrl);
/// assert!(!KeyPress::plain(Key::Escape).ctrl);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPress {
    /// The key.
    pub key: Key,
    /// Whether Control was held.
    #[serde(default)]
    pub ctrl: bool,
}

impl KeyPress {
    /// A key pressed without modifiers.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    /// A key pressed with Control held.
    #[must_use]
    pub const fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// Messages that represent user actions on the board.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::Message;
///
/// let msg = Message::from_json(r#"{"type":"drag_end","active":"card-1","over":"col-2"}"#).unwrap();
/// assert!(msg.is_drag());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// A drag gesture started on `active`.
    DragStart {
        /// The dragged card or column id.
        active: String,
    },
    /// A drag gesture ended; `over` is absent when nothing was under the
    /// pointer or the gesture was aborted.
    DragEnd {
        /// The dragged card or column id.
        active: String,
        /// The drop target id.
        #[serde(default)]
        over: Option<String>,
    },
    /// A single click.
    Click {
        /// Where.
        region: Region,
    },
    /// A double click.
    DoubleClick {
        /// Where.
        region: Region,
    },
    /// The whole text of an input was replaced (typing, paste).
    Input {
        /// Which input.
        region: Region,
        /// The new text.
        text: String,
    },
    /// A key press in an input.
    Key {
        /// Which input.
        region: Region,
        /// The key.
        key: KeyPress,
    },
    /// An input lost focus.
    Blur {
        /// Which input.
        region: Region,
    },
    /// The save button of a card editor.
    Save {
        /// The edited card.
        card: CardId,
    },
    /// The cancel button of a card editor.
    Cancel {
        /// The edited card.
        card: CardId,
    },
    /// The close button of a card editor.
    Close {
        /// The edited card.
        card: CardId,
    },
    /// The delete button of a card.
    DeleteCard {
        /// The column showing the card.
        column: ColumnId,
        /// The card to delete.
        card: CardId,
    },
}

impl Message {
    /// Decodes a message from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DeserializationFailed`] if the text is not a
    /// valid message.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(ProtocolError::DeserializationFailed)
    }

    /// Encodes this message as single-line JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::SerializationFailed`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Returns `true` if this message is part of a drag gesture.
    #[must_use]
    pub const fn is_drag(&self) -> bool {
        matches!(self, Self::DragStart { .. } | Self::DragEnd { .. })
    }
}
