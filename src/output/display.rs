//! Display functions for command results

use super::formatters::{create_progress_bar, format_remaining, key, tile};
use crate::commands::{AuditReport, CheckResult, SyncReport, TodayInfo};
use crate::core::{GameLocale, LetterMode, WORD_LENGTH};
use crate::game::{MAX_ROWS, TurnState};
use crate::stats::StatsSnapshot;
use colored::Colorize;

/// Print the board, one line per row, with a cursor on the next free tile
pub fn print_board(turn: &TurnState) {
    println!();
    let active = turn.active_index();
    for (row_ix, row) in turn.rows().iter().enumerate() {
        let cursor = if active == Some(row_ix) {
            row.focus_index()
        } else {
            None
        };
        let mut line = String::from("  ");
        for ix in 0..WORD_LENGTH {
            let cell = match row.word().get(ix) {
                Some(unit) => tile(&unit.primary().to_string(), row.mark(ix)).to_string(),
                None if cursor == Some(ix) => " _ ".bold().to_string(),
                None => " · ".bright_black().to_string(),
            };
            line.push_str(&cell);
            line.push(' ');
        }
        println!("{line}");
    }
    println!();
}

/// Print the locale alphabet colored by what the rows revealed
///
/// In simplified mode only base letters get a key.
pub fn print_keyboard(turn: &TurnState, locale: GameLocale) {
    let hints = turn.keyboard_hints().collapse(locale);
    let keys: Vec<String> = locale
        .alphabet()
        .chars()
        .filter(|&c| locale.letter_mode() == LetterMode::Strict || locale.fold(c) == c)
        .map(|c| key(c, hints.get(&c).copied()).to_string())
        .collect();

    for chunk in keys.chunks(13) {
        println!("  {}", chunk.join(""));
    }
    println!();
}

/// Print a single scored guess
pub fn print_check(result: &CheckResult) {
    let tiles: Vec<String> = result
        .guess
        .units()
        .iter()
        .zip(result.feedback.marks())
        .map(|(unit, &mark)| tile(&unit.primary().to_string(), Some(mark)).to_string())
        .collect();
    println!("\n  {}   {}\n", tiles.join(" "), result.feedback.to_emoji());
}

/// Print statistics with the guess distribution
pub fn print_stats(stats: &StatsSnapshot) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.played);
    println!(
        "   Win %:           {}",
        stats.win_percentage().to_string().bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    let best = stats.max_row();
    for (ix, &count) in stats.guess_distribution.iter().take(MAX_ROWS).enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 40);
        let bar = if ix == best && count > 0 {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {}: {bar} {count:4}", ix + 1);
    }
    println!();
}

pub fn print_share(snippet: &str) {
    println!("\n{snippet}");
}

pub fn print_today(info: &TodayInfo) {
    println!(
        "Turn {}, next word in {}",
        info.turn_index.to_string().bright_yellow().bold(),
        format_remaining(info.remaining)
    );
}

/// Print the result of a word list audit
pub fn print_audit(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n   Checked {} answers and {} guesses",
        report.answers_checked, report.guesses_checked
    );

    let sections = [
        ("Wrong length", &report.wrong_length),
        ("Foreign letters", &report.foreign_letters),
        ("Duplicates", &report.duplicates),
        ("Answers not guessable", &report.missing_answers),
    ];
    for (title, words) in sections {
        if words.is_empty() {
            continue;
        }
        println!("\n   {} ({})", title.yellow().bold(), words.len());
        for word in words.iter().take(20) {
            println!("     • {word}");
        }
        if words.len() > 20 {
            println!("     … and {} more", words.len() - 20);
        }
    }

    if report.is_clean() {
        println!("\n{}", "✅ No problems found".green().bold());
    } else {
        println!(
            "\n{}",
            format!("❌ {} problems found", report.problem_count()).red().bold()
        );
    }
}

pub fn print_sync(report: &SyncReport) {
    if report.stats_updated {
        println!("Statistics updated");
    }
    for locale in &report.turns_updated {
        println!("Turn updated for {locale} {}", locale.flag());
    }
    if !report.stats_updated && report.turns_updated.is_empty() {
        println!("Already up to date");
    }
}
