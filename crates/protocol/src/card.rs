//! Card-related types for the board.
//!
//! This module defines card identifiers, the card structure itself and the
//! partial patch applied when a card is edited.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Identifiers are opaque strings. Whether an identifier names a card or a
/// column is decided by looking it up on the board, never by its shape.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::CardId;
///
/// let id = CardId::new("card-1");
/// assert_eq!(id.as_str(), "card-1");
/// assert_eq!(id.to_string(), "card-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates a card identifier from any string-like value.
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

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The editable text fields of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    /// The single-line title.
    Title,
    /// The multi-line free-text details.
    Details,
}

/// A card on the board.
///
/// A card is owned by exactly one column at any time.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::Card;
///
/// let card = Card::new("card-1", "Setup project", "Initialize repo");
/// assert_eq!(card.title, "Setup project");
///
/// let blank = Card::empty("card-2");
/// assert!(blank.title.is_empty());
/// assert!(blank.details.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,
    /// Short summary of the card.
    #[serde(default)]
    pub title: String,
    /// Free-text details.
    #[serde(default)]
    pub details: String,
}

impl Card {
    /// Creates a card with the given id, title and details.
    #[must_use]
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            details: details.into(),
        }
    }

    /// Creates a card with empty title and details, as produced by an add.
    #[must_use]
    pub fn empty(id: impl Into<CardId>) -> Self {
        Self::new(id, String::new(), String::new())
    }

    /// Returns the value of the given field.
    #[must_use]
    pub fn field(&self, field: CardField) -> &str {
        match field {
            CardField::Title => &self.title,
            CardField::Details => &self.details,
        }
    }

    /// Merges the fields present in `patch` into this card.
    ///
    /// Fields absent from the patch are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardwall_protocol::{Card, CardPatch};
    ///
    /// let mut card = Card::new("card-1", "Old", "Keep me");
    /// card.apply(&CardPatch::title("New"));
    /// assert_eq!(card.title, "New");
    /// assert_eq!(card.details, "Keep me");
    /// ```
    pub fn apply(&mut self, patch: &CardPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(details) = &patch.details {
            self.details.clone_from(details);
        }
    }
}

/// A partial update to a card.
///
/// Only the fields set to `Some` are written by
/// [`BoardStore::update_card`](crate::BoardStore::update_card).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPatch {
    /// New title, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New details, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CardPatch {
    /// A patch touching only the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            details: None,
        }
    }

    /// A patch touching only the details.
    #[must_use]
    pub fn details(details: impl Into<String>) -> Self {
        Self {
            title: None,
            details: Some(details.into()),
        }
    }

    /// A patch touching a single field.
    #[must_use]
    pub fn field(field: CardField, value: impl Into<String>) -> Self {
        match field {
            CardField::Title => Self::title(value),
            CardField::Details => Self::details(value),
        }
    }

    /// Returns `true` if the patch touches no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.details.is_none()
    }

    /// Returns the fields this patch touches, title first.
    pub fn fields(&self) -> impl Iterator<Item = CardField> + '_ {
        [
            self.title.as_ref().map(|_| CardField::Title),
            self.details.as_ref().map(|_| CardField::Details),
        ]
        .into_iter()
        .flatten()
    }
}
