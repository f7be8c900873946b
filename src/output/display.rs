//! Display functions for command results

use super::formatters::{colored_guess, colored_keyboard, score_label, share_text};
use crate::commands::{CheckResult, Schedule};
use crate::game::{GameSession, GameStatus, MAX_GUESSES};
use chrono::NaiveDate;
use colored::Colorize;

/// Print the board so far plus the keyboard
pub fn print_board(session: &GameSession<'_>) {
    println!();
    for row in session.rows() {
        println!("   {}", colored_guess(row.word.text(), &row.feedback));
    }
    for _ in session.guess_count()..MAX_GUESSES {
        println!("   {}", " _ ".repeat(5).bright_black());
    }
    println!();
    for line in colored_keyboard(session.letter_states()) {
        println!("   {line}");
    }
    println!();
}

/// Print the end-of-game plate
pub fn print_game_over(session: &GameSession<'_>, date: NaiveDate, shareable: bool) {
    println!("{}", "═".repeat(40).bright_cyan());
    match session.status() {
        GameStatus::Won => println!("  {}", "Congratulations".bright_green().bold()),
        GameStatus::Lost => println!("  {}", "Unlucky".bright_red().bold()),
        GameStatus::InProgress => return,
    }
    println!(
        "  The word was {} ({})",
        session.target().text().bright_yellow().bold(),
        score_label(session)
    );
    println!("{}", "═".repeat(40).bright_cyan());

    if shareable {
        println!("\n{}\n", share_text(date, session));
    } else {
        println!("\n  {}\n", "Play today's game to share a result".bright_black());
    }
}

/// Print the classification of a single guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("  {}", colored_guess(result.guess.text(), &result.feedback));
    println!("  {}", result.feedback.to_emoji());
    println!("  codes: {:?}", result.feedback.codes());
}

/// Print the target for a date
pub fn print_target(date: NaiveDate, method: &str, word: &str) {
    println!(
        "{} {} ({method})",
        date.to_string().bright_cyan(),
        word.bright_yellow().bold()
    );
}

/// Print a computed schedule and its repeat statistics
pub fn print_schedule(schedule: &Schedule) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} days from {} ({})",
        "SCHEDULE:".bright_cyan().bold(),
        schedule.entries.len(),
        schedule.start,
        schedule.method.name()
    );
    println!("{}", "═".repeat(60).cyan());

    for (date, word) in &schedule.entries {
        println!("   {date}  {word}");
    }

    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Days:            {}", schedule.entries.len());
    println!(
        "   Distinct words:  {}",
        schedule.distinct.to_string().bright_yellow()
    );
    if schedule.repeats.is_empty() {
        println!("   Repeats:         {}", "none".green());
    } else {
        println!("   Repeats:");
        for (word, count) in schedule.repeats.iter().take(10) {
            println!("     {word} ×{count}");
        }
    }
}
