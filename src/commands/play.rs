//! Interactive play loop
//!
//! Line-oriented game loop: one guess per line, plus a few slash commands.

use crate::context::{AppError, GameContext};
use crate::core::GameError;
use crate::game::{Evaluator, GameSession};
use crate::output::display::{print_board, print_outcome, print_play_help};
use crate::store::{CompletionStore, SessionStore};
use crate::wordlists::WordListProvider;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Guess(String),
    Hint,
    Share,
    Help,
    Quit,
}

impl PlayInput {
    /// Parse a trimmed line; anything not starting with `/` is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "/hint" | "/h" => Self::Hint,
            "/share" | "/s" => Self::Share,
            "/help" | "/?" => Self::Help,
            "/quit" | "/q" | "/exit" => Self::Quit,
            _ => Self::Guess(line.trim().to_string()),
        }
    }
}

/// Play `session` until it ends, the player quits, or input runs out
///
/// Every accepted move is saved through the context, so quitting keeps the
/// game resumable. Returns the latest session.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or writing the prompt, or if
/// the context fails to persist the game. Rejected guesses and unavailable
/// hints are reported to the player and do not end the loop.
pub fn run_play<W, S, C, E, R>(
    ctx: &mut GameContext<W, S, C, E>,
    session: GameSession<E>,
    input: &mut R,
) -> anyhow::Result<GameSession<E>>
where
    W: WordListProvider,
    S: SessionStore,
    C: CompletionStore,
    E: Evaluator + Clone,
    R: BufRead,
{
    let mut session = session;
    print_play_help();

    loop {
        print_board(&session);

        if session.is_game_over() {
            print_outcome(&session);
            return Ok(session);
        }

        let Some(line) = read_line(
            input,
            &format!("Guess ({} left)", session.remaining_guesses()),
        )?
        else {
            debug!("Input closed");
            println!();
            return Ok(session);
        };

        match PlayInput::parse(&line) {
            PlayInput::Quit => {
                println!("\n👋 Progress saved. Resume any time.\n");
                return Ok(session);
            }
            PlayInput::Help => print_play_help(),
            PlayInput::Share => println!("\n{}\n", session.to_share_string()),
            PlayInput::Hint => match ctx.use_hint(&session) {
                Ok(next) => {
                    if let (Some(cell), Some(letter)) = (next.hinted_cell(), next.hinted_letter()) {
                        println!(
                            "\n💡 Position {} is {}\n",
                            cell.col + 1,
                            letter.to_string().bright_yellow().bold()
                        );
                    }
                    session = next;
                }
                Err(AppError::Game(
                    e @ (GameError::HintAlreadyUsed | GameError::HintUnavailable),
                )) => println!("\n{}\n", e.to_string().yellow()),
                Err(e) => return Err(e.into()),
            },
            PlayInput::Guess(word) if word.is_empty() => {}
            PlayInput::Guess(word) => match ctx.submit_guess(&session, &word) {
                Ok(next) => session = next,
                Err(AppError::InvalidGuess(reason)) => {
                    println!("\n❌ {reason}\n");
                }
                Err(e) => return Err(e.into()),
            },
        }
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::store::MemoryStore;
    use crate::wordlists::WordLists;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn context() -> GameContext<WordLists, MemoryStore, MemoryStore> {
        let mut lists = WordLists::new();
        lists.insert(
            5,
            vec!["hello".to_string()],
            vec!["helps".to_string(), "world".to_string()],
        );
        GameContext::new(lists, MemoryStore::new(), MemoryStore::new())
    }

    fn start(ctx: &mut GameContext<WordLists, MemoryStore, MemoryStore>) -> GameSession {
        ctx.start_daily(5, 6, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap()
    }

    #[test]
    fn parse_commands_and_guesses() {
        assert_eq!(PlayInput::parse("/HINT"), PlayInput::Hint);
        assert_eq!(PlayInput::parse(" /q "), PlayInput::Quit);
        assert_eq!(PlayInput::parse("/share"), PlayInput::Share);
        assert_eq!(PlayInput::parse("/?"), PlayInput::Help);
        assert_eq!(PlayInput::parse(" crane "), PlayInput::Guess("crane".into()));
        assert_eq!(PlayInput::parse("quit"), PlayInput::Guess("quit".into()));
    }

    #[test]
    fn plays_to_a_win() {
        let mut ctx = context();
        let session = start(&mut ctx);
        let mut input = Cursor::new("helps\nhello\n");

        let done = run_play(&mut ctx, session, &mut input).unwrap();
        assert_eq!(done.status(), GameStatus::Won);
        assert_eq!(done.current_row(), 2);
    }

    #[test]
    fn rejected_guesses_do_not_use_rows() {
        let mut ctx = context();
        let session = start(&mut ctx);
        let mut input = Cursor::new("zzzzz\nhi\n\nworld\n/quit\n");

        let done = run_play(&mut ctx, session, &mut input).unwrap();
        assert_eq!(done.status(), GameStatus::Playing);
        assert_eq!(done.guesses(), ["WORLD".to_string()]);
    }

    #[test]
    fn hint_then_repeat_hint() {
        let mut ctx = context();
        let session = start(&mut ctx);
        let mut input = Cursor::new("/hint\n/hint\n");

        let done = run_play(&mut ctx, session, &mut input).unwrap();
        assert!(done.hint_used());
        assert_eq!(done.hinted_letter(), Some('H'));
    }

    #[test]
    fn end_of_input_keeps_progress() {
        let mut ctx = context();
        let session = start(&mut ctx);
        let mut input = Cursor::new("helps\n");

        let done = run_play(&mut ctx, session, &mut input).unwrap();
        assert_eq!(ctx.resume().unwrap(), Some(done));
    }
}
