//! Scripted message replay.
//!
//! A script is newline-delimited JSON, one [`Message`] per line. Blank lines
//! and lines starting with `#` are skipped. The board change events each
//! message produces are drained and logged as they happen.

use anyhow::Context;
use cardwall_protocol::{Board, CardId, Message};
use cardwall_session::AppState;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// What a replay prints: the final board and the pending auto-edit card.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// The board after the last message.
    pub board: &'a Board,
    /// The card that opens directly in editing, if any.
    pub pending_auto_edit: Option<&'a CardId>,
}

impl<'a> Snapshot<'a> {
    /// Captures the current state.
    #[must_use]
    pub fn of(state: &'a AppState) -> Self {
        Self {
            board: state.board(),
            pending_auto_edit: state.pending_auto_edit(),
        }
    }
}

/// Applies every message of a script to `state`.
///
/// Returns the number of messages applied.
///
/// # Errors
///
/// Fails on the first line that cannot be read or decoded; the error names
/// the line number. Messages before it stay applied.
pub async fn replay<R>(state: &mut AppState, reader: R) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut applied = 0;
    let mut line_no = 0;

    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("failed to read line {}", line_no + 1))?
    {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let msg = Message::from_json(line).with_context(|| format!("invalid message on line {line_no}"))?;
        debug!(line = line_no, ?msg, "replaying");
        state.update(msg);
        for event in state.take_events() {
            debug!(line = line_no, ?event, "board changed");
        }
        applied += 1;
    }

    info!(applied, "replay finished");
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardwall_protocol::sample::sample_board;
    use cardwall_protocol::{BoardStore, SequentialIds};

    fn state() -> AppState {
        AppState::new(BoardStore::with_allocator(
            sample_board(),
            Box::new(SequentialIds::new()),
        ))
    }

    #[tokio::test]
    async fn skips_blank_and_comment_lines() {
        let script = b"# move the first card\n\n{\"type\":\"drag_end\",\"active\":\"card-1\",\"over\":\"col-4\"}\n";
        let mut state = state();

        let applied = replay(&mut state, &script[..]).await.unwrap();
        assert_eq!(applied, 1);
        assert_eq!(
            state.board().owning_column("card-1").map(|c| c.as_str()),
            Some("col-4")
        );
    }

    #[tokio::test]
    async fn drains_board_events_as_it_goes() {
        let script = "{\"type\":\"drag_end\",\"active\":\"col-1\",\"over\":\"col-2\"}\n".repeat(500);
        let mut state = state();

        let applied = replay(&mut state, script.as_bytes()).await.unwrap();
        assert_eq!(applied, 500);
        assert!(state.take_events().is_empty());
    }

    #[tokio::test]
    async fn bad_line_reports_its_number() {
        let script = b"{\"type\":\"drag_start\",\"active\":\"card-1\"}\nnot json\n";
        let mut state = state();

        let err = replay(&mut state, &script[..]).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid message on line 2");
    }

    #[test]
    fn snapshot_json_shape() {
        let state = state();
        let json = serde_json::to_value(Snapshot::of(&state)).unwrap();
        assert!(json["pending_auto_edit"].is_null());
        assert_eq!(json["board"]["columns"][0]["id"], "col-1");
        assert_eq!(json["board"]["columns"][0]["cards"][1]["id"], "card-2");
    }
}
