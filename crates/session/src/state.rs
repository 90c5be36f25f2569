//! Application state management.
//!
//! [`AppState`] ties the board store to the interaction layer: it tracks
//! the drag in progress and the edit session of every card and column, and
//! applies incoming [`Message`]s to them.

use std::collections::HashMap;

use cardwall_protocol::{
    Board, BoardEvent, BoardStore, CardField, CardId, ColumnId, KeyPress, Message, Region,
};
use tracing::{debug, instrument};

use crate::edit::{CardDraft, CardEditor, ColumnEditor, TextBuffer};
use crate::event::{EditAction, card_edit_action, column_edit_action};

/// The application state.
///
/// Edit sessions live here, keyed by entity id, independent of how (or
/// whether) the board is being displayed.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{BoardStore, CardId, ColumnId, Message, Region};
/// use cardwall_protocol::sample::sample_board;
/// use cardwall_session::AppState;
///
/// let mut state = AppState::new(BoardStore::new(sample_board()));
/// state.update(Message::DoubleClick {
///     region: Region::ColumnTitle { column: ColumnId::new("col-1") },
/// });
/// assert!(state.is_editing_column("col-1"));
/// ```
#[derive(Debug)]
pub struct AppState {
    store: BoardStore,
    cards: HashMap<CardId, CardEditor>,
    columns: HashMap<ColumnId, ColumnEditor>,
    dragging: Option<String>,
}

impl AppState {
    /// Creates a new application state over a store.
    ///
    /// If the store already names a pending auto-edit card, that card
    /// opens in editing.
    #[must_use]
    pub fn new(store: BoardStore) -> Self {
        let mut state = Self {
            store,
            cards: HashMap::new(),
            columns: HashMap::new(),
            dragging: None,
        };
        state.open_pending_card();
        state
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.store.board()
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Returns the card that opens directly in editing, if any.
    #[must_use]
    pub fn pending_auto_edit(&self) -> Option<&CardId> {
        self.store.pending_auto_edit()
    }

    /// Drains the board change notifications recorded so far.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        self.store.take_events()
    }

    /// Returns the id recorded by the drag in progress, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Returns `true` if the card is being edited.
    #[must_use]
    pub fn is_editing_card(&self, id: &str) -> bool {
        self.cards.get(id).is_some_and(CardEditor::is_editing)
    }

    /// Returns the scratch copy of a card being edited.
    #[must_use]
    pub fn card_draft(&self, id: &str) -> Option<&CardDraft> {
        self.cards.get(id).and_then(CardEditor::draft)
    }

    /// Returns `true` if the column title is being edited.
    #[must_use]
    pub fn is_editing_column(&self, id: &str) -> bool {
        self.columns.get(id).is_some_and(ColumnEditor::is_editing)
    }

    /// Returns the scratch title of a column being edited.
    #[must_use]
    pub fn column_draft(&self, id: &str) -> Option<&TextBuffer> {
        self.columns.get(id).and_then(ColumnEditor::buffer)
    }

    /// Updates the state based on a message.
    ///
    /// Messages aimed at ids that do not exist, or at entities not in the
    /// state the message expects, are ignored.
    #[instrument(level = "debug", skip(self))]
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::DragStart { active } => self.drag_start(active),
            Message::DragEnd { active, over } => self.drag_end(&active, over.as_deref()),
            Message::Click { region } => match region {
                Region::AddCard { column } => self.add_card(&column),
                Region::CardTitle { .. } | Region::CardDetails { .. } => self.begin_card(&region),
                Region::ColumnTitle { .. } => {}
            },
            Message::DoubleClick { region } => match region {
                Region::CardTitle { .. } | Region::CardDetails { .. } => self.begin_card(&region),
                Region::ColumnTitle { column } => self.begin_column(&column),
                Region::AddCard { .. } => {}
            },
            Message::Input { region, text } => self.input(&region, text),
            Message::Key { region, key } => self.key(&region, key),
            Message::Blur { region } => {
                if let Region::ColumnTitle { column } = region {
                    self.commit_column(&column);
                }
            }
            Message::Save { card } => self.commit_card(&card),
            Message::Cancel { card } | Message::Close { card } => self.cancel_card(&card),
            Message::DeleteCard { column, card } => {
                if self.store.delete_card(column.as_str(), card.as_str()) {
                    self.cards.remove(&card);
                }
            }
        }
    }

    fn drag_start(&mut self, active: String) {
        if self.is_editing_card(&active) {
            debug!(%active, "drag ignored: card is being edited");
            return;
        }
        self.dragging = Some(active);
    }

    fn drag_end(&mut self, active: &str, over: Option<&str>) {
        self.dragging = None;
        if self.is_editing_card(active) {
            debug!(active, "drop ignored: card is being edited");
            return;
        }
        self.store.apply_drag(active, over);
    }

    fn add_card(&mut self, column: &ColumnId) {
        if self.store.add_card(column.as_str()).is_some() {
            self.open_pending_card();
        }
    }

    /// Opens the pending auto-edit card in editing.
    fn open_pending_card(&mut self) {
        let Some(id) = self.store.pending_auto_edit().cloned() else {
            return;
        };
        if let Some(card) = self.store.board().card(id.as_str()) {
            self.cards.entry(id).or_default().begin(card);
        }
    }

    fn begin_card(&mut self, region: &Region) {
        let Some((id, _)) = region.card_field() else {
            return;
        };
        let Some(card) = self.store.board().card(id.as_str()) else {
            debug!(card = %id, "edit ignored: unknown card");
            return;
        };
        self.cards.entry(id.clone()).or_default().begin(card);
    }

    fn begin_column(&mut self, column: &ColumnId) {
        let Some(col) = self.store.board().column(column.as_str()) else {
            debug!(%column, "rename ignored: unknown column");
            return;
        };
        self.columns.entry(column.clone()).or_default().begin(&col.title);
    }

    fn input(&mut self, region: &Region, text: String) {
        if let Some(buf) = self.buffer_mut(region) {
            buf.set(text);
        }
    }

    fn key(&mut self, region: &Region, press: KeyPress) {
        let action = match region {
            Region::CardTitle { .. } => card_edit_action(CardField::Title, press),
            Region::CardDetails { .. } => card_edit_action(CardField::Details, press),
            Region::ColumnTitle { .. } => column_edit_action(press),
            Region::AddCard { .. } => None,
        };
        let Some(action) = action else {
            return;
        };

        match (action, region) {
            (EditAction::Commit, Region::ColumnTitle { column }) => self.commit_column(column),
            (EditAction::Cancel, Region::ColumnTitle { column }) => {
                if let Some(editor) = self.columns.get_mut(column) {
                    editor.cancel();
                }
            }
            (EditAction::Commit, _) => {
                if let Some((card, _)) = region.card_field() {
                    self.commit_card(card);
                }
            }
            (EditAction::Cancel, _) => {
                if let Some((card, _)) = region.card_field() {
                    self.cancel_card(card);
                }
            }
            (EditAction::Insert(ch), _) => {
                if let Some(buf) = self.buffer_mut(region) {
                    buf.insert_char(ch);
                }
            }
            (EditAction::Backspace, _) => {
                if let Some(buf) = self.buffer_mut(region) {
                    buf.backspace();
                }
            }
        }
    }

    /// Returns the scratch buffer behind an input region, if it is open.
    fn buffer_mut(&mut self, region: &Region) -> Option<&mut TextBuffer> {
        match region {
            Region::CardTitle { card } => self
                .cards
                .get_mut(card)?
                .draft_mut()
                .map(|d| d.field_mut(CardField::Title)),
            Region::CardDetails { card } => self
                .cards
                .get_mut(card)?
                .draft_mut()
                .map(|d| d.field_mut(CardField::Details)),
            Region::ColumnTitle { column } => self.columns.get_mut(column)?.buffer_mut(),
            Region::AddCard { .. } => None,
        }
    }

    fn commit_card(&mut self, id: &CardId) {
        let Some(editor) = self.cards.get_mut(id) else {
            return;
        };
        let board = self.store.board();
        let (Some(column), Some(card)) = (board.owning_column(id.as_str()), board.card(id.as_str()))
        else {
            editor.cancel();
            return;
        };

        if let Some(patch) = editor.commit(card) {
            let column = column.clone();
            self.store.update_card(column.as_str(), id.as_str(), &patch);
        }
    }

    fn cancel_card(&mut self, id: &CardId) {
        if let Some(editor) = self.cards.get_mut(id) {
            editor.cancel();
        }
    }

    fn commit_column(&mut self, id: &ColumnId) {
        let Some(editor) = self.columns.get_mut(id) else {
            return;
        };
        let Some(column) = self.store.board().column(id.as_str()) else {
            editor.cancel();
            return;
        };

        match editor.commit(&column.title) {
            Some(title) => {
                self.store.rename_column(id.as_str(), title);
            }
            None => debug!(column = %id, "rename discarded"),
        }
    }
}
