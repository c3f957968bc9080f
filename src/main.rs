//! Wordle Daily - CLI
//!
//! Daily and free-play Wordle in the terminal, with resumable sessions.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordle_daily::{
    commands::{build_schedule, check_guess, run_play},
    context::{AppError, GameContext},
    core::{DATE_FORMAT, DEFAULT_LENGTH, DEFAULT_MAX_ROWS},
    game::GameSession,
    output::{print_check_result, print_history, print_schedule_report},
    store::FileStore,
    wordlists::{WordListProvider, WordLists},
};

type FileContext = GameContext<WordLists, FileStore, FileStore>;

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily and free-play Wordle with hints and resumable games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length (4-7)
    #[arg(short, long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Number of guess rows
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROWS)]
    rows: usize,

    /// Directory for the saved session and completed dailies
    #[arg(long, global = true, default_value = ".wordle")]
    data_dir: PathBuf,

    /// Custom answers file for the selected length (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the daily puzzle (default)
    Daily {
        /// Date to play, YYYY-MM-DD (default: today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Play a game with a random answer
    Free,

    /// Continue the saved game
    Resume,

    /// Score a guess against an answer
    Check {
        /// The answer word
        answer: String,

        /// The guessed word
        guess: String,
    },

    /// List daily answers for a range of dates
    Schedule {
        /// First date, YYYY-MM-DD (default: today)
        #[arg(short, long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        /// Number of days
        #[arg(short = 'n', long, default_value = "30")]
        days: usize,

        /// Show the answers instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Show completed daily dates
    History,

    /// Discard the saved game
    Reset,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load word lists, applying the -w flag to the selected length
fn load_wordlists(length: usize, wordlist: Option<&PathBuf>) -> Result<WordLists> {
    let lists = WordLists::embedded();
    match wordlist {
        Some(path) => lists
            .with_answers_file(length, path)
            .with_context(|| format!("Failed to read word list {}", path.display())),
        None => Ok(lists),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (length, rows) = (cli.length, cli.rows);

    // Default to today's daily if no command given
    let command = cli.command.unwrap_or(Commands::Daily { date: None });

    match command {
        Commands::Daily { date } => {
            let mut ctx = file_context(&cli.data_dir, length, cli.wordlist.as_ref())?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            match ctx.start_daily(length, rows, date) {
                Ok(session) => play(&mut ctx, session),
                Err(AppError::AlreadyPlayed(key)) => {
                    println!(
                        "You already finished the {} daily. Try `free` or another --date.",
                        key.date_iso
                    );
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Free => {
            let mut ctx = file_context(&cli.data_dir, length, cli.wordlist.as_ref())?;
            let session = ctx.start_free(length, rows)?;
            play(&mut ctx, session)
        }
        Commands::Resume => {
            let mut ctx = file_context(&cli.data_dir, length, cli.wordlist.as_ref())?;
            let Some(session) = ctx.resume()? else {
                bail!("No saved game to resume");
            };
            play(&mut ctx, session)
        }
        Commands::Check { answer, guess } => {
            let result = check_guess(&answer, &guess)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Schedule { from, days, reveal } => {
            let words = load_wordlists(length, cli.wordlist.as_ref())?;
            let from = from.unwrap_or_else(|| Local::now().date_naive());
            let report = build_schedule(words.answers(length), length, rows, from, days, true)?;
            print_schedule_report(&report, reveal);
            Ok(())
        }
        Commands::History => {
            let ctx = file_context(&cli.data_dir, length, cli.wordlist.as_ref())?;
            print_history(length, &ctx.completed_dates(length)?);
            Ok(())
        }
        Commands::Reset => {
            let mut ctx = file_context(&cli.data_dir, length, cli.wordlist.as_ref())?;
            ctx.abandon()?;
            println!("Saved game discarded.");
            Ok(())
        }
    }
}

/// Context over JSON files in `data_dir`
fn file_context(data_dir: &Path, length: usize, wordlist: Option<&PathBuf>) -> Result<FileContext> {
    let words = load_wordlists(length, wordlist)?;
    let store = FileStore::new(data_dir);
    Ok(GameContext::new(words, store.clone(), store))
}

fn play(ctx: &mut FileContext, session: GameSession) -> Result<()> {
    let mut input = io::stdin().lock();
    run_play(ctx, session, &mut input)?;
    Ok(())
}
