//! Simple interactive CLI mode
//!
//! Line-based play of the day's game without the TUI

use super::daily::DailyGame;
use crate::game::{GameSession, GameStatus, MAX_GUESSES, RestoreOutcome};
use crate::output::{print_board, print_game_over};
use colored::Colorize;
use std::io::{self, Write};

/// Play the day's game by reading one guess per line
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut DailyGame<'_>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Nickle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_GUESSES} tries.");
    println!("  - {} right letter, right place", "green".green().bold());
    println!("  - {} in the word, wrong place", "yellow".yellow().bold());
    println!("  - {} not in the word\n", "grey".bright_black());
    println!("Commands: 'quit' to exit, 'share' to print the share text\n");

    match &game.restore {
        RestoreOutcome::Resumed { guesses } => {
            println!("Resuming today's game after {guesses} guesses.");
        }
        RestoreOutcome::Discarded(_) => {
            println!("{}", "Saved game could not be restored, starting over.".yellow());
        }
        RestoreOutcome::Fresh => {}
    }

    print_board(&game.session);

    while game.session.status() == GameStatus::InProgress {
        let turn = game.session.guess_count() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Progress saved, see you later!\n");
                return Ok(());
            }
            "share" => {
                println!("\n{}\n", game.share_text());
                continue;
            }
            "" => continue,
            _ => {}
        }

        if let Some(letter) = ruled_out_letter(&game.session, &input) {
            println!("❌ {} is not in the word\n", letter.to_ascii_uppercase());
            continue;
        }

        match game.submit(&input) {
            Ok(_) => print_board(&game.session),
            Err(e) => println!("❌ {e}\n"),
        }
    }

    print_game_over(&game.session, game.config().date, game.is_shareable());
    Ok(())
}

/// First letter of `input` already proven absent, if any
///
/// Mirrors the TUI, where such letters cannot be typed at all.
fn ruled_out_letter(session: &GameSession<'_>, input: &str) -> Option<char> {
    input
        .chars()
        .find(|&c| c.is_ascii_alphabetic() && !session.can_type_letter(c))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;

    #[test]
    fn absent_letters_are_caught_before_submitting() {
        let words = WordList::parse("cluck\nlaugh\nblurb\ncrane\n");
        let mut session = GameSession::new(Word::new("cluck").unwrap(), &words);
        assert_eq!(ruled_out_letter(&session, "crane"), None);

        session.submit_guess("laugh").unwrap();
        // A, G and H are absent from CLUCK
        assert_eq!(ruled_out_letter(&session, "crane"), Some('a'));
        assert_eq!(ruled_out_letter(&session, "BLURB"), None);
        assert_eq!(ruled_out_letter(&session, "bl1rb"), None);
    }
}
