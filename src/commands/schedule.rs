//! Daily answer calendar
//!
//! Computes the daily answer for a range of dates and reports how often
//! answers repeat within it.

use crate::core::{DATE_FORMAT, GameConfig};
use crate::daily::WordSelector;
use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

/// The answer for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub answer: String,
}

/// Answers over a date range
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    pub length: usize,
    pub max_rows: usize,
    pub entries: Vec<ScheduleEntry>,
    pub distinct: usize,
    /// Answers drawn more than once, most frequent first
    pub repeats: Vec<(String, usize)>,
}

/// Compute daily answers for `days` consecutive dates starting at `from`
///
/// Dates are computed in parallel; entries come back in date order.
///
/// # Errors
///
/// Returns an error if the length or row count is not a valid game
/// configuration, the answer list is empty, or a date overflows the calendar.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::commands::build_schedule;
///
/// let answers = vec!["crane".to_string(), "slate".to_string()];
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let report = build_schedule(&answers, 5, 6, from, 7, false).unwrap();
/// assert_eq!(report.entries.len(), 7);
/// ```
#[instrument(skip(answers, show_progress), fields(answers = answers.len()))]
pub fn build_schedule(
    answers: &[String],
    length: usize,
    max_rows: usize,
    from: NaiveDate,
    days: usize,
    show_progress: bool,
) -> Result<ScheduleReport> {
    // Same validation as a played daily
    GameConfig::daily(length, max_rows, from)?;

    let pb = if show_progress {
        let pb = ProgressBar::new(days as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let selector = WordSelector::new();
    let entries = (0..days)
        .into_par_iter()
        .map(|offset| -> Result<ScheduleEntry> {
            let date = from
                .checked_add_days(Days::new(offset as u64))
                .with_context(|| format!("Date {offset} days after {from} is out of range"))?;
            let date_iso = date.format(DATE_FORMAT).to_string();
            let answer = selector.select_daily(length, max_rows, &date_iso, answers)?;
            pb.inc(1);
            Ok(ScheduleEntry {
                date,
                answer: answer.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for entry in &entries {
        *counts.entry(entry.answer.as_str()).or_insert(0) += 1;
    }

    let mut repeats: Vec<(String, usize)> = counts
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(&word, &count)| (word.to_string(), count))
        .collect();
    repeats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let distinct = counts.len();
    debug!(distinct, repeats = repeats.len(), "Schedule computed");

    Ok(ScheduleReport {
        length,
        max_rows,
        entries,
        distinct,
        repeats,
    })
}
