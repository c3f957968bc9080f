//! Display functions for game state and command results

use super::formatters::{render_empty_row, render_keyboard, render_row, tiles_to_emoji};
use crate::commands::{CheckResult, ScheduleReport};
use crate::core::GameMode;
use crate::game::{GameSession, GameStatus};
use colored::Colorize;

/// Title line for a session, e.g. `Daily 2024-01-01 · 5 letters · 6 rows`
#[must_use]
pub fn session_title<E>(session: &GameSession<E>) -> String {
    let config = session.config();
    let mode = match (config.mode(), config.date_iso()) {
        (GameMode::Daily, Some(date)) => format!("Daily {date}"),
        _ => "Free play".to_string(),
    };
    format!(
        "{mode} · {} letters · {} rows",
        config.length(),
        config.max_rows()
    )
}

/// Print the commands accepted by the play loop
pub fn print_play_help() {
    println!("\nType a word to guess. Commands:");
    println!("  /hint   reveal one letter (once per game)");
    println!("  /share  show the shareable result");
    println!("  /help   show this help");
    println!("  /quit   save and exit\n");
}

/// Print the board, any hint, and the keyboard
pub fn print_board<E>(session: &GameSession<E>) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", session_title(session).bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    for (guess, row) in session.guesses().iter().zip(session.feedback()) {
        println!("  {}", render_row(guess, row));
    }
    for _ in 0..session.remaining_guesses() {
        println!("  {}", render_empty_row(session.config().length()));
    }

    if let (Some(cell), Some(letter)) = (session.hinted_cell(), session.hinted_letter()) {
        println!(
            "\n  Hint: position {} is {}",
            cell.col + 1,
            letter.to_string().bright_yellow().bold()
        );
    }

    println!();
    for line in render_keyboard(session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the win/loss banner and the share text
pub fn print_outcome<E>(session: &GameSession<E>) {
    match session.status() {
        GameStatus::Won => {
            let rows = session.current_row();
            println!(
                "{}",
                format!(
                    "✅ Solved in {rows} {}!",
                    if rows == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} The word was {}",
                "❌ Out of guesses.".red().bold(),
                session.answer().bright_yellow().bold()
            );
        }
        GameStatus::Playing => return,
    }

    println!("\n{}\n", session.to_share_string());
}

/// Print a one-shot evaluation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", render_row(&result.guess, &result.tiles));
    println!(
        "\n{} against {}: {}",
        result.guess.bright_white().bold(),
        result.answer.bright_yellow().bold(),
        tiles_to_emoji(&result.tiles)
    );
    if result.is_solved() {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print a schedule; answers are masked unless `reveal` is set
pub fn print_schedule_report(report: &ScheduleReport, reveal: bool) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {} letters · {} rows",
        "DAILY SCHEDULE:".bright_cyan().bold(),
        report.length,
        report.max_rows
    );
    println!("{}", "═".repeat(40).cyan());

    for entry in &report.entries {
        let answer = if reveal {
            entry.answer.to_uppercase().bright_yellow().bold().to_string()
        } else {
            "•".repeat(report.length).bright_black().to_string()
        };
        println!("  {}  {answer}", entry.date);
    }

    println!("\n  Days:     {}", report.entries.len());
    println!("  Distinct: {}", report.distinct);
    println!("  Repeated: {}", report.repeats.len());

    if reveal && !report.repeats.is_empty() {
        println!("\n  Most repeated:");
        for (word, count) in report.repeats.iter().take(5) {
            println!("    {} × {count}", word.to_uppercase());
        }
    }
    println!();
}

/// Print completed daily dates for one word length
pub fn print_history(length: usize, dates: &[String]) {
    if dates.is_empty() {
        println!("No completed {length}-letter dailies yet.");
        return;
    }

    println!(
        "{} ({length} letters): {}",
        "Completed dailies".bright_cyan().bold(),
        dates.len()
    );
    for date in dates {
        println!("  ✓ {date}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::game::StandardEvaluator;
    use chrono::NaiveDate;

    #[test]
    fn daily_title() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let session = GameSession::create(
            GameConfig::daily(5, 6, date).unwrap(),
            "hello",
            StandardEvaluator,
        ).unwrap();
        assert_eq!(session_title(&session), "Daily 2024-01-01 · 5 letters · 6 rows");
    }

    #[test]
    fn free_title() {
        let session = GameSession::create(
            GameConfig::free(4, 8).unwrap(),
            "tree",
            StandardEvaluator,
        ).unwrap();
        assert_eq!(session_title(&session), "Free play · 4 letters · 8 rows");
    }
}
