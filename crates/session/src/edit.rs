//! Inline edit sessions.
//!
//! Cards and columns are either being viewed or being edited. While editing,
//! a private scratch buffer holds the candidate text; the board is untouched
//! until the edit is committed, and cancelling simply drops the buffer.

use cardwall_protocol::{Card, CardField, CardPatch};

/// An editable line of text with a cursor.
///
/// The cursor is a byte offset that always sits on a character boundary.
///
/// # Examples
///
/// ```
/// use cardwall_session::edit::TextBuffer;
///
/// let mut buf = TextBuffer::new("ab");
/// buf.insert_char('c');
/// assert_eq!(buf.as_str(), "abc");
/// buf.backspace();
/// assert_eq!(buf.as_str(), "ab");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    cursor: usize,
}

impl TextBuffer {
    /// Creates a buffer holding `value` with the cursor at the end.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Returns the current text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the whole text and moves the cursor to the end.
    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((prev, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }
}

/// Scratch copy of a card being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    /// Candidate title.
    pub title: TextBuffer,
    /// Candidate details.
    pub details: TextBuffer,
}

impl CardDraft {
    /// Seeds a draft from the committed card.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            title: TextBuffer::new(card.title.as_str()),
            details: TextBuffer::new(card.details.as_str()),
        }
    }

    /// Returns the buffer backing a field.
    #[must_use]
    pub fn field(&self, field: CardField) -> &TextBuffer {
        match field {
            CardField::Title => &self.title,
            CardField::Details => &self.details,
        }
    }

    /// Returns the buffer backing a field, mutably.
    pub fn field_mut(&mut self, field: CardField) -> &mut TextBuffer {
        match field {
            CardField::Title => &mut self.title,
            CardField::Details => &mut self.details,
        }
    }

    /// Builds the patch holding only the fields that differ from `card`.
    #[must_use]
    pub fn changes(&self, card: &Card) -> CardPatch {
        let changed = |buf: &TextBuffer, committed: &str| {
            (buf.as_str() != committed).then(|| buf.as_str().to_owned())
        };
        CardPatch {
            title: changed(&self.title, &card.title),
            details: changed(&self.details, &card.details),
        }
    }
}

/// Edit state of one card.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{Card, CardField};
/// use cardwall_session::edit::CardEditor;
///
/// let card = Card::new("card-1", "Old", "Details");
/// let mut editor = CardEditor::default();
///
/// editor.begin(&card);
/// editor.draft_mut().unwrap().title.set("New");
///
/// let patch = editor.commit(&card).unwrap();
/// assert_eq!(patch.title.as_deref(), Some("New"));
/// assert_eq!(patch.details, None);
/// assert!(!editor.is_editing());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardEditor {
    /// Showing the committed values.
    #[default]
    Viewing,
    /// Editing a scratch copy.
    Editing(CardDraft),
}

impl CardEditor {
    /// Returns `true` while editing.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Returns the draft, if editing.
    #[must_use]
    pub fn draft(&self) -> Option<&CardDraft> {
        match self {
            Self::Viewing => None,
            Self::Editing(draft) => Some(draft),
        }
    }

    /// Returns the draft mutably, if editing.
    pub fn draft_mut(&mut self) -> Option<&mut CardDraft> {
        match self {
            Self::Viewing => None,
            Self::Editing(draft) => Some(draft),
        }
    }

    /// Enters editing with a draft seeded from `card`.
    ///
    /// Does nothing if already editing, so an in-progress draft survives a
    /// second click. Returns `true` if the state changed.
    pub fn begin(&mut self, card: &Card) -> bool {
        if self.is_editing() {
            return false;
        }
        *self = Self::Editing(CardDraft::from_card(card));
        true
    }

    /// Leaves editing and returns the changes to write, if any.
    ///
    /// `card` is the last committed version of the card. Fields equal to it
    /// are left out of the patch; `None` means nothing needs writing.
    pub fn commit(&mut self, card: &Card) -> Option<CardPatch> {
        let Self::Editing(draft) = std::mem::take(self) else {
            return None;
        };
        let patch = draft.changes(card);
        (!patch.is_empty()).then_some(patch)
    }

    /// Leaves editing and discards the draft.
    pub fn cancel(&mut self) {
        *self = Self::Viewing;
    }
}

/// Edit state of one column title.
///
/// # Examples
///
/// ```
/// use cardwall_session::edit::ColumnEditor;
///
/// let mut editor = ColumnEditor::default();
/// editor.begin("Todo");
/// editor.buffer_mut().unwrap().set("   ");
///
/// // Blank titles are discarded
/// assert_eq!(editor.commit("Todo"), None);
/// assert!(!editor.is_editing());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnEditor {
    /// Showing the committed title.
    #[default]
    Viewing,
    /// Editing a scratch title.
    Editing(TextBuffer),
}

impl ColumnEditor {
    /// Returns `true` while editing.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Returns the scratch title, if editing.
    #[must_use]
    pub fn buffer(&self) -> Option<&TextBuffer> {
        match self {
            Self::Viewing => None,
            Self::Editing(buf) => Some(buf),
        }
    }

    /// Returns the scratch title mutably, if editing.
    pub fn buffer_mut(&mut self) -> Option<&mut TextBuffer> {
        match self {
            Self::Viewing => None,
            Self::Editing(buf) => Some(buf),
        }
    }

    /// Enters editing seeded with the committed title.
    ///
    /// Returns `true` if the state changed.
    pub fn begin(&mut self, title: &str) -> bool {
        if self.is_editing() {
            return false;
        }
        *self = Self::Editing(TextBuffer::new(title));
        true
    }

    /// Leaves editing and returns the title to write, if any.
    ///
    /// A title that is empty after trimming, or equal to `committed`, yields
    /// `None`. The returned title is not trimmed.
    pub fn commit(&mut self, committed: &str) -> Option<String> {
        let Self::Editing(buf) = std::mem::take(self) else {
            return None;
        };
        let title = buf.as_str();
        if title.trim().is_empty() || title == committed {
            return None;
        }
        Some(title.to_owned())
    }

    /// Leaves editing and discards the scratch title.
    pub fn cancel(&mut self) {
        *self = Self::Viewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_buffer_handles_multibyte_characters() {
        let mut buf = TextBuffer::new("");
        buf.insert_char('é');
        buf.insert_char('x');
        assert_eq!(buf.as_str(), "éx");
        assert_eq!(buf.cursor(), 3);

        buf.backspace();
        buf.backspace();
        assert_eq!(buf.as_str(), "");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut buf = TextBuffer::default();
        buf.backspace();
        assert_eq!(buf, TextBuffer::default());
    }

    #[test]
    fn set_moves_cursor_to_end() {
        let mut buf = TextBuffer::new("a");
        buf.set("hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn card_editor_starts_viewing() {
        let editor = CardEditor::default();
        assert!(!editor.is_editing());
        assert!(editor.draft().is_none());
    }

    #[test]
    fn begin_seeds_draft_from_committed_values() {
        let card = Card::new("card-1", "Title", "Details");
        let mut editor = CardEditor::default();
        assert!(editor.begin(&card));

        let draft = editor.draft().expect("editing");
        assert_eq!(draft.title.as_str(), "Title");
        assert_eq!(draft.details.as_str(), "Details");
    }

    #[test]
    fn begin_while_editing_keeps_draft() {
        let card = Card::new("card-1", "Title", "");
        let mut editor = CardEditor::default();
        editor.begin(&card);
        editor.draft_mut().expect("editing").title.set("Typed");

        assert!(!editor.begin(&card));
        assert_eq!(editor.draft().map(|d| d.title.as_str()), Some("Typed"));
    }

    #[test]
    fn commit_without_changes_yields_nothing() {
        let card = Card::new("card-1", "Title", "Details");
        let mut editor = CardEditor::default();
        editor.begin(&card);
        assert_eq!(editor.commit(&card), None);
        assert!(!editor.is_editing());
    }

    #[test]
    fn commit_reports_details_only_change() {
        let card = Card::new("card-1", "Title", "");
        let mut editor = CardEditor::default();
        editor.begin(&card);
        editor.draft_mut().expect("editing").details.set("line 1\nline 2");

        assert_eq!(editor.commit(&card), Some(CardPatch::details("line 1\nline 2")));
    }

    #[test]
    fn commit_while_viewing_yields_nothing() {
        let mut editor = CardEditor::default();
        assert_eq!(editor.commit(&Card::empty("card-1")), None);
    }

    #[test]
    fn cancel_discards_draft() {
        let card = Card::new("card-1", "Title", "");
        let mut editor = CardEditor::default();
        editor.begin(&card);
        editor.draft_mut().expect("editing").title.set("Changed");
        editor.cancel();

        assert_eq!(editor, CardEditor::Viewing);
        editor.begin(&card);
        assert_eq!(editor.draft().map(|d| d.title.as_str()), Some("Title"));
    }

    #[test]
    fn column_commit_returns_changed_title_untrimmed() {
        let mut editor = ColumnEditor::default();
        editor.begin("Todo");
        editor.buffer_mut().expect("editing").set(" Next ");
        assert_eq!(editor.commit("Todo"), Some(" Next ".to_string()));
    }

    #[test]
    fn column_commit_of_unchanged_title_yields_nothing() {
        let mut editor = ColumnEditor::default();
        editor.begin("Todo");
        assert_eq!(editor.commit("Todo"), None);
        assert!(!editor.is_editing());
    }

    #[test]
    fn column_commit_rejects_blank_titles() {
        for blank in ["", " ", "\t\n"] {
            let mut editor = ColumnEditor::default();
            editor.begin("Todo");
            editor.buffer_mut().expect("editing").set(blank);
            assert_eq!(editor.commit("Todo"), None);
        }
    }

    #[test]
    fn column_cancel_discards_buffer() {
        let mut editor = ColumnEditor::default();
        editor.begin("Todo");
        editor.buffer_mut().expect("editing").insert_char('!');
        editor.cancel();
        assert!(editor.buffer().is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Insert(char),
            Backspace,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                3 => any::<char>().prop_map(Op::Insert),
                1 => Just(Op::Backspace),
            ]
        }

        proptest! {
            #[test]
            fn cursor_stays_on_char_boundary(start in ".{0,8}", ops in prop::collection::vec(op(), 0..32)) {
                let mut buf = TextBuffer::new(start);
                for op in ops {
                    match op {
                        Op::Insert(ch) => buf.insert_char(ch),
                        Op::Backspace => buf.backspace(),
                    }
                    prop_assert!(buf.as_str().is_char_boundary(buf.cursor()));
                    prop_assert!(buf.cursor() <= buf.as_str().len());
                }
            }

            #[test]
            fn untouched_draft_commits_nothing(title in ".{0,16}", details in ".{0,16}") {
                let card = Card::new("card-1", title, details);
                let mut editor = CardEditor::default();
                editor.begin(&card);
                prop_assert_eq!(editor.commit(&card), None);
            }
        }
    }
}
