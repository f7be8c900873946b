//! Guess checking command
//!
//! Classifies one guess against an arbitrary target without a session.

use crate::core::{Feedback, Word};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Classify `guess` against `target`
///
/// Neither word has to be in a word list.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let feedback = Feedback::classify(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HintKind::{Absent, Correct, Present};

    #[test]
    fn check_reports_feedback() {
        let result = check_guess("sours", "sprig").unwrap();

        assert_eq!(result.guess.text(), "SOURS");
        assert_eq!(result.target.text(), "SPRIG");
        assert_eq!(
            result.feedback.hints(),
            &[Correct, Absent, Absent, Present, Absent]
        );
    }

    #[test]
    fn check_accepts_words_outside_lists() {
        let result = check_guess("zzzzz", "abcde").unwrap();
        assert_eq!(result.feedback.count(Absent), 5);
    }

    #[test]
    fn check_invalid_words_return_error() {
        assert!(check_guess("four", "sprig").is_err());
        assert!(check_guess("sprig", "sprigs").is_err());
        assert!(check_guess("spr1g", "sprig").is_err());
    }

    #[test]
    fn check_perfect_match() {
        let result = check_guess("Cluck", "CLUCK").unwrap();
        assert!(result.feedback.is_perfect());
    }
}
