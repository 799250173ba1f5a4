//! Score one guess against a secret

use crate::core::{Feedback, GameLocale, Word, WordError};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`, both typed under `locale`
///
/// No dictionary lookup happens; any five letters of the alphabet work.
///
/// # Errors
/// Returns `WordError` if either word has the wrong length or a letter
/// outside the locale alphabet.
///
/// # Examples
/// ```
/// use wordle_daily::commands::check_guess;
/// use wordle_daily::core::GameLocale;
///
/// let result = check_guess("clues", "fuels", GameLocale::EnUs).unwrap();
/// assert_eq!(result.feedback.to_emoji(), "⬛🟨🟨🟨🟩");
/// ```
pub fn check_guess(
    guess: &str,
    secret: &str,
    locale: GameLocale,
) -> Result<CheckResult, WordError> {
    let guess = Word::parse(guess, locale)?;
    let secret = Word::parse(secret, locale)?;
    let feedback = Feedback::evaluate(&guess, &secret);
    Ok(CheckResult {
        guess,
        secret,
        feedback,
    })
}
