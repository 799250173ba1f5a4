//! Submission gate
//!
//! Decides whether a typed word may be submitted and which concrete
//! spelling gets recorded.

use super::answers::AnswerPool;
use super::embedded::{ANSWERS, GUESSES};
use super::loader;
use super::tree::WordTree;
use crate::core::{GameLocale, Word};
use crate::game::{Constraints, GuessRow, Rejection};
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Loaded word lists for one locale
#[derive(Debug, Clone)]
pub struct WordBank {
    answers: AnswerPool,
    guesses: WordTree,
}

impl WordBank {
    #[must_use]
    pub fn new(answers: AnswerPool, guesses: WordTree) -> Self {
        Self { answers, guesses }
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerPool {
        &self.answers
    }

    #[must_use]
    pub fn guesses(&self) -> &WordTree {
        &self.guesses
    }
}

/// Word validator for one locale
///
/// Starts out loading. Until [`Validator::initialize`] runs, only the secret
/// itself can be submitted.
#[derive(Debug, Clone)]
pub struct Validator {
    locale: GameLocale,
    bank: Option<WordBank>,
}

impl Validator {
    /// A validator whose word lists are not available yet
    #[must_use]
    pub fn loading(locale: GameLocale) -> Self {
        Self { locale, bank: None }
    }

    /// A ready validator over the given lists
    #[must_use]
    pub fn ready(locale: GameLocale, bank: WordBank) -> Self {
        Self {
            locale,
            bank: Some(bank),
        }
    }

    /// Validator over the lists compiled into the binary
    ///
    /// Only English lists are bundled; other locales stay loading until
    /// lists are supplied.
    #[must_use]
    pub fn bundled(locale: GameLocale, seed: u64) -> Self {
        match locale {
            GameLocale::EnUs | GameLocale::EnGb => Self::ready(
                locale,
                WordBank::new(
                    AnswerPool::shuffled(ANSWERS.iter().copied(), seed),
                    WordTree::from_words(GUESSES.iter().copied()),
                ),
            ),
            _ => Self::loading(locale),
        }
    }

    /// Validator over lists read from disk
    ///
    /// # Errors
    /// Returns the I/O error of the first list that cannot be read.
    pub fn from_files(
        locale: GameLocale,
        answers: impl AsRef<Path>,
        guesses: impl AsRef<Path>,
        seed: u64,
    ) -> io::Result<Self> {
        let answers = loader::load_from_file(answers)?;
        let guesses = loader::load_from_file(guesses)?;
        Ok(Self::ready(
            locale,
            WordBank::new(
                AnswerPool::shuffled(&answers, seed),
                WordTree::from_words(guesses.iter().map(String::as_str)),
            ),
        ))
    }

    /// Finish loading
    pub fn initialize(&mut self, bank: WordBank) {
        debug!(
            locale = %self.locale,
            answers = bank.answers.len(),
            guesses = bank.guesses.len(),
            "word lists loaded"
        );
        self.bank = Some(bank);
    }

    #[must_use]
    pub fn locale(&self) -> GameLocale {
        self.locale
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.bank.is_some()
    }

    #[must_use]
    pub fn bank(&self) -> Option<&WordBank> {
        self.bank.as_ref()
    }

    /// Secret for a turn, `None` while loading or if the pool is unusable
    #[must_use]
    pub fn answer(&self, turn_index: i64) -> Option<Word> {
        self.bank.as_ref()?.answers.answer(turn_index).ok()
    }

    /// Check a typed word and return the spelling to record
    ///
    /// In order:
    /// 1. a word matching the secret is accepted as the secret
    /// 2. nothing else is accepted while loading
    /// 3. the word must have 5 letters
    /// 4. some spelling must be in the list and, in hard mode, reuse every
    ///    hint revealed by `prior_rows`
    ///
    /// # Errors
    /// The [`Rejection`] for the first failed step.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{GameLocale, Word};
    /// use wordle_daily::game::Rejection;
    /// use wordle_daily::wordlists::Validator;
    ///
    /// let validator = Validator::bundled(GameLocale::EnUs, 1);
    /// let secret = Word::new("crane").unwrap();
    ///
    /// let typed = Word::new("slate").unwrap();
    /// assert!(validator.can_submit(&typed, &secret, &[], false).is_ok());
    ///
    /// let typed = Word::new("xxxxx").unwrap();
    /// assert_eq!(
    ///     validator.can_submit(&typed, &secret, &[], false),
    ///     Err(Rejection::NotInWordList)
    /// );
    /// ```
    #[instrument(level = "debug", skip(self, expected, prior_rows), fields(word = %word))]
    pub fn can_submit(
        &self,
        word: &Word,
        expected: &Word,
        prior_rows: &[GuessRow],
        hard_mode: bool,
    ) -> Result<Word, Rejection> {
        if word.matches(expected) {
            return Ok(expected.clone());
        }

        let bank = self.bank.as_ref().ok_or(Rejection::NotReady)?;

        if !word.is_complete() {
            return Err(Rejection::NotEnoughLetters { len: word.len() });
        }

        let constraints = hard_mode.then(|| Constraints::from_rows(prior_rows));
        bank.guesses.resolve(word, constraints.as_ref())
    }
}
