//! Human-readable listings of cards, for logs.

use std::fmt::Display;

/// Render a sequence of cards as `[a, b, c]`.
///
/// ```
/// use ccg_duel::cards::{render_cards, MonsterCard};
/// use ccg_duel::core::{EntityId, PlayerId};
///
/// let a = MonsterCard::new(EntityId(0), PlayerId::new(0), "Raptor", 2, 3, 2);
/// assert_eq!(render_cards([&a]), "[Raptor (2) 3/2]");
/// assert_eq!(render_cards(Vec::<&MonsterCard>::new()), "[]");
/// ```
pub fn render_cards<'a, T, I>(cards: I) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let parts: Vec<String> = cards.into_iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}
