//! Sample board for first runs, demos and tests.
//!
//! # Examples
//!
//! ```
//! use cardwall_protocol::sample::sample_board;
//!
//! let board = sample_board();
//! assert_eq!(board.len(), 5);
//! assert_eq!(board.total_cards(), 9);
//! ```

use crate::board::{Board, Column};
use crate::card::Card;

/// Returns the columns of the sample board.
///
/// - **Todo**: 2 cards
/// - **In Progress**: 2 cards
/// - **Review**: 1 card
/// - **Done**: 2 cards
/// - **Backlog**: 2 cards
#[must_use]
pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("col-1", "Todo")
            .with_card(Card::new(
                "card-1",
                "Setup project",
                "Initialize repo and dependencies",
            ))
            .with_card(Card::new(
                "card-2",
                "Design mockups",
                "Create wireframes and UI mockups",
            )),
        Column::new("col-2", "In Progress")
            .with_card(Card::new(
                "card-3",
                "Build components",
                "Implement Card and Column components",
            ))
            .with_card(Card::new("card-4", "Add drag and drop", "")),
        Column::new("col-3", "Review").with_card(Card::new(
            "card-5",
            "Code review",
            "Review pull request",
        )),
        Column::new("col-4", "Done")
            .with_card(Card::new(
                "card-6",
                "Setup styling",
                "Define color scheme and global styles",
            ))
            .with_card(Card::new("card-7", "Write tests", "")),
        Column::new("col-5", "Backlog")
            .with_card(Card::new(
                "card-8",
                "Add search feature",
                "Search cards by title",
            ))
            .with_card(Card::new(
                "card-9",
                "Add filters",
                "Filter by priority or assignee",
            )),
    ]
}

/// Returns the sample board.
#[must_use]
pub fn sample_board() -> Board {
    // The sample ids are distinct by construction.
    Board::try_from_columns(sample_columns()).unwrap_or_default()
}
