//! Formatting utilities for terminal output

use crate::core::TileState;
use crate::game::KeyboardStates;
use colored::{ColoredString, Colorize};

/// QWERTY rows used for the keyboard summary
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format a feedback row as emoji string
///
/// # Examples
/// ```
/// use wordle_daily::core::TileState::{Absent, Correct, Present};
/// use wordle_daily::output::formatters::tiles_to_emoji;
///
/// assert_eq!(tiles_to_emoji(&[Correct, Present, Absent]), "🟩🟨⬛");
/// ```
#[must_use]
pub fn tiles_to_emoji(row: &[TileState]) -> String {
    row.iter().map(|tile| tile.emoji()).collect()
}

/// A letter on a colored background matching its tile state
///
/// `None` renders the letter unstyled (unguessed key, empty cell).
#[must_use]
pub fn colored_tile(letter: char, state: Option<TileState>) -> ColoredString {
    let cell = format!(" {letter} ");
    match state {
        Some(TileState::Correct) => cell.black().on_green().bold(),
        Some(TileState::Present) => cell.black().on_yellow().bold(),
        Some(TileState::Absent) => cell.white().on_bright_black(),
        None => cell.normal(),
    }
}

/// One played row: colored letters followed by the emoji tiles
#[must_use]
pub fn render_row(guess: &str, row: &[TileState]) -> String {
    let tiles: String = guess
        .chars()
        .zip(row)
        .map(|(letter, &state)| colored_tile(letter, Some(state)).to_string())
        .collect();
    format!("{tiles}  {}", tiles_to_emoji(row))
}

/// An empty row placeholder of `length` cells
#[must_use]
pub fn render_empty_row(length: usize) -> String {
    " · ".repeat(length).bright_black().to_string()
}

/// QWERTY keyboard lines, each key colored by its best-known state
#[must_use]
pub fn render_keyboard(keyboard: &KeyboardStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| colored_tile(key, keyboard.get(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState::{Absent, Correct, Present};
    use crate::game::evaluate;

    #[test]
    fn emoji_row() {
        assert_eq!(
            tiles_to_emoji(&evaluate("HELLO", "HELPS")),
            "🟩🟩🟩⬛⬛"
        );
        assert_eq!(tiles_to_emoji(&[]), "");
    }

    #[test]
    fn tile_keeps_letter() {
        for state in [Some(Correct), Some(Present), Some(Absent), None] {
            assert!(colored_tile('Q', state).to_string().contains(" Q "));
        }
    }

    #[test]
    fn row_contains_letters_and_emoji() {
        let row = render_row("HELPS", &evaluate("HELLO", "HELPS"));
        for letter in "HELPS".chars() {
            assert!(row.contains(letter));
        }
        assert!(row.ends_with("🟩🟩🟩⬛⬛"));
    }

    #[test]
    fn keyboard_has_every_letter_once() {
        let keys = KeyboardStates::new().accumulate(&[Correct], "q");
        let lines = render_keyboard(&keys);
        assert_eq!(lines.len(), 3);

        let letters: usize = KEYBOARD_ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(letters, 26);
        assert!(lines[0].contains(" Q "));
        assert!(lines[2].contains(" M "));
    }
}
