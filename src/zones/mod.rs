//! Card locations: deck, hand and board.
//!
//! Each zone owns its cards by value. Moving a card means removing it from
//! one zone and handing the value to another, so a card can never be in two
//! zones at once.
//!
//! - `Deck`: ordered, front is the next draw
//! - `Hand`: bounded by the hand limit
//! - `Board`: ordered row of monsters, bounded by the board limit

pub mod board;
pub mod deck;
pub mod hand;

pub use board::Board;
pub use deck::{Deck, DeckPosition};
pub use hand::Hand;
