//! Integration tests for loading a board from configuration.

use std::fs;

use cardwall_config::{Config, ConfigError};
use cardwall_protocol::{Column, IdStyle, ProtocolError};
use cardwall_session::AppState;
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("cardwall.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Team board
            columns: [
                {
                    id: "todo",
                    title: "Todo",
                    cards: [
                        { id: "t-1", title: "Write release notes", details: "Cover the new drag rules" },
                        { id: "t-2", title: "Tag release" },
                    ],
                },
                { id: "done", title: "Done" },
            ],
            id_style: "sequential",
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let board = config.initial_board().unwrap();

    assert_eq!(board.len(), 2);
    assert_eq!(board.total_cards(), 2);
    assert_eq!(
        board.card("t-1").map(|c| c.details.as_str()),
        Some("Cover the new drag rules")
    );
    assert_eq!(board.card("t-2").map(|c| c.details.as_str()), Some(""));
    assert_eq!(config.id_style, IdStyle::Sequential);
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        columns: vec![Column::new("a", "Alpha"), Column::new("b", "Beta")],
        id_style: IdStyle::Uuid,
        log_filter: Some("cardwall_protocol=trace".to_string()),
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(original, loaded);
}

#[tokio::test]
async fn config_load_nonexistent_fails() {
    let result = Config::load_from("/nonexistent/path/cardwall.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn ambiguous_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("cardwall.json");
    fs::write(
        &config_path,
        r#"{"columns": [
            {"id": "todo", "title": "Todo", "cards": [{"id": "done", "title": "Confusing"}]},
            {"id": "done", "title": "Done"}
        ]}"#,
    )
    .unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidBoard(ProtocolError::AmbiguousId(ref id)) if id == "done"
    ));
}

#[test]
fn configured_store_allocates_configured_ids() {
    let config = Config {
        columns: vec![Column::new("todo", "Todo")],
        id_style: IdStyle::Sequential,
        log_filter: None,
    };
    let mut state = AppState::new(config.store().unwrap());

    state.update(cardwall_protocol::Message::Click {
        region: cardwall_protocol::Region::AddCard {
            column: "todo".into(),
        },
    });

    assert_eq!(
        state.pending_auto_edit().map(|id| id.as_str()),
        Some("card-1")
    );
    assert!(state.is_editing_card("card-1"));
}
