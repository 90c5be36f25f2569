//! Error types for the cardwall-protocol crate.
//!
//! Board operations themselves never fail: unknown ids are ignored. The
//! errors here cover decoding external data and validating a board built
//! from it.

use thiserror::Error;

use crate::board::ColumnId;
use crate::card::CardId;

/// Errors that can occur when loading protocol types from outside data.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// Two columns share an id.
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(ColumnId),

    /// Two cards share an id.
    #[error("duplicate card id: {0}")]
    DuplicateCardId(CardId),

    /// A card id is also used as a column id.
    #[error("id is used by both a card and a column: {0}")]
    AmbiguousId(String),

    /// A column has an empty id.
    #[error("invalid column: id cannot be empty")]
    EmptyColumnId,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
